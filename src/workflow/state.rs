//! ワークフロー状態

use crate::ingest::EncodedImage;
use leaf_doctor_common::AnalysisResult;
use std::fmt;

/// 状態遷移: Idle → ImageSelected → Analyzing → Resulted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    ImageSelected,
    Analyzing,
    Resulted,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::ImageSelected => "image-selected",
            Phase::Analyzing => "analyzing",
            Phase::Resulted => "resulted",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// 表示層が参照する状態（コントローラが唯一の所有者）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowState {
    pub phase: Phase,
    /// ImageSelected / Analyzing / Resulted でのみ存在
    pub selected_image: Option<EncodedImage>,
    /// 1回の解析内で 0 → 100 に単調増加
    pub progress_percent: f64,
    /// Analyzing 中のみ存在
    pub current_step_label: Option<String>,
    /// Resulted でのみ存在
    pub result: Option<AnalysisResult>,
}

impl WorkflowState {
    /// 表示用の進捗（整数%）
    pub fn progress_display(&self) -> u32 {
        self.progress_percent.round().clamp(0.0, 100.0) as u32
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = WorkflowState::default();
        assert!(state.is_idle());
        assert!(state.selected_image.is_none());
        assert!(state.result.is_none());
        assert!(state.current_step_label.is_none());
        assert_eq!(state.progress_display(), 0);
    }

    #[test]
    fn test_progress_display_rounds() {
        let state = WorkflowState {
            progress_percent: 100.0 / 6.0,
            ..Default::default()
        };
        assert_eq!(state.progress_display(), 17);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::ImageSelected.to_string(), "image-selected");
        assert_eq!(Phase::default(), Phase::Idle);
    }
}
