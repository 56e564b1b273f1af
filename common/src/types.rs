//! 診断データの型定義
//!
//! CLIと対話セッションで共有される型:
//! - DiseaseRecord: カタログの病害レコード（不変）
//! - Severity / SeverityGroup: 重症度と分類用グループ
//! - AnalysisResult: 1回の解析で得られる判定結果

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 重症度（None < Low < Medium < High < Critical）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::None,
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "None",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// 所属する分類グループ
    pub fn group(&self) -> SeverityGroup {
        match self {
            Severity::None => SeverityGroup::Healthy,
            Severity::Low | Severity::Medium => SeverityGroup::Common,
            Severity::High | Severity::Critical => SeverityGroup::High,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "healthy" => Ok(Severity::None),
            "low" => Ok(Severity::Low),
            "medium" | "med" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            _ => Err(format!(
                "Unknown severity: {}. Use none, low, medium, high, or critical",
                s
            )),
        }
    }
}

/// 分類グループ（重み付き抽選のバケット）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityGroup {
    /// Severity::None
    Healthy,
    /// Severity::High / Critical
    High,
    /// Severity::Medium / Low
    Common,
}

impl SeverityGroup {
    pub const ALL: [SeverityGroup; 3] = [
        SeverityGroup::Healthy,
        SeverityGroup::High,
        SeverityGroup::Common,
    ];

    pub fn contains(&self, severity: Severity) -> bool {
        severity.group() == *self
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityGroup::Healthy => "healthy",
            SeverityGroup::High => "high",
            SeverityGroup::Common => "common",
        }
    }
}

impl fmt::Display for SeverityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// 病害レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub key: String,
    pub name: String,
    pub plant: String,
    pub severity: Severity,
    pub symptoms: String,
    pub remedies: Vec<String>,
    pub prevention: String,
}

impl DiseaseRecord {
    /// 健康判定のレコードか
    pub fn is_healthy(&self) -> bool {
        self.severity == Severity::None
    }
}

/// 解析結果（1回の解析ごとに新規作成）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub disease_key: String,

    /// 確信度（0-100の整数）
    pub confidence: u8,

    /// フェーズ所要時間の合計（計測値ではなく定数）
    pub analysis_time_ms: u64,

    /// 検出特徴数（表示用）
    pub features_detected: u32,
}

impl AnalysisResult {
    /// 表示用の所要秒数（小数1桁）
    pub fn analysis_seconds(&self) -> String {
        format!("{:.1}", self.analysis_time_ms as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::None < Severity::Low);
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_severity_group() {
        assert_eq!(Severity::None.group(), SeverityGroup::Healthy);
        assert_eq!(Severity::Low.group(), SeverityGroup::Common);
        assert_eq!(Severity::Medium.group(), SeverityGroup::Common);
        assert_eq!(Severity::High.group(), SeverityGroup::High);
        assert_eq!(Severity::Critical.group(), SeverityGroup::High);
        assert!(SeverityGroup::High.contains(Severity::Critical));
        assert!(!SeverityGroup::Common.contains(Severity::High));
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("HIGH".parse::<Severity>().unwrap(), Severity::High);
        assert_eq!("healthy".parse::<Severity>().unwrap(), Severity::None);
        assert!("severe".parse::<Severity>().is_err());
    }

    #[test]
    fn test_severity_serde_uses_variant_names() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"Critical\"");
        let parsed: Severity = serde_json::from_str("\"None\"").unwrap();
        assert_eq!(parsed, Severity::None);
    }

    #[test]
    fn test_analysis_result_camel_case() {
        let result = AnalysisResult {
            disease_key: "healthy".to_string(),
            confidence: 91,
            analysis_time_ms: 6000,
            features_detected: 12,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["diseaseKey"], "healthy");
        assert_eq!(json["analysisTimeMs"], 6000);
        assert_eq!(json["featuresDetected"], 12);
        assert_eq!(result.analysis_seconds(), "6.0");
    }
}
