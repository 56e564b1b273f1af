//! 解析フェーズ定義
//!
//! 疑似解析は固定6フェーズを順に待機する。合計6000ms。

use std::time::Duration;

/// 解析フェーズ（ラベルと所要時間）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisPhase {
    pub label: &'static str,
    pub duration_ms: u64,
}

impl AnalysisPhase {
    pub const fn new(label: &'static str, duration_ms: u64) -> Self {
        Self { label, duration_ms }
    }

    /// 実待機時間（time_scaleで伸縮）
    pub fn scaled(&self, time_scale: f64) -> Duration {
        let scale = if time_scale.is_finite() && time_scale > 0.0 {
            time_scale
        } else {
            0.0
        };
        Duration::from_micros((self.duration_ms as f64 * scale * 1000.0).round() as u64)
    }
}

/// 固定フェーズ列
pub const PHASES: [AnalysisPhase; 6] = [
    AnalysisPhase::new("Preprocessing image...", 800),
    AnalysisPhase::new("Detecting plant features...", 1200),
    AnalysisPhase::new("Analyzing leaf patterns...", 1000),
    AnalysisPhase::new("Comparing with disease database...", 1500),
    AnalysisPhase::new("Calculating confidence scores...", 700),
    AnalysisPhase::new("Generating treatment recommendations...", 800),
];

/// フェーズ所要時間の合計
pub fn total_duration_ms(phases: &[AnalysisPhase]) -> u64 {
    phases.iter().map(|p| p.duration_ms).sum()
}

/// completed フェーズ完了時点の進捗率（0-100）
pub fn progress_after(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (completed.min(total) as f64 / total as f64) * 100.0
}
