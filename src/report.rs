//! 診断結果の表示・保存

use crate::error::Result;
use crate::ingest::EncodedImage;
use leaf_doctor_common::{AnalysisResult, DiseaseCatalog, DiseaseRecord, Severity};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

/// 重症度バッジ（None は表示しない）
pub fn severity_badge(severity: Severity) -> Option<String> {
    let mark = match severity {
        Severity::None => return None,
        Severity::Low => "🟢",
        Severity::Medium => "🟡",
        Severity::High => "🔴",
        Severity::Critical => "🟥",
    };
    Some(format!("{} {}", mark, severity))
}

/// 対処法の見出し（健康なら日常管理、それ以外は治療手順）
pub fn remedies_heading(record: &DiseaseRecord) -> &'static str {
    if record.is_healthy() {
        "日常管理のポイント"
    } else {
        "治療プロトコル"
    }
}

/// 解析結果を表示用テキストに整形
pub fn render_result(result: &AnalysisResult, record: &DiseaseRecord) -> String {
    let mut out = String::new();

    let verdict = if record.is_healthy() {
        "✅ 健康な植物です"
    } else {
        "⚠️  病害を検出しました"
    };
    let _ = writeln!(out, "{}", verdict);
    let _ = writeln!(
        out,
        "  確信度: {}%  /  検出特徴数: {}",
        result.confidence, result.features_detected
    );
    let _ = writeln!(out, "  植物: {}", record.plant);
    let _ = writeln!(out, "  症状名: {}", record.name);
    if let Some(badge) = severity_badge(record.severity) {
        let _ = writeln!(out, "  重症度: {}", badge);
    }
    let _ = writeln!(out, "  解析時間: {}秒", result.analysis_seconds());

    let _ = writeln!(out, "\n[症状]");
    let _ = writeln!(out, "  {}", record.symptoms);

    let _ = writeln!(out, "\n[{}]", remedies_heading(record));
    for (i, remedy) in record.remedies.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, remedy);
    }

    let _ = writeln!(out, "\n[予防策]");
    let _ = writeln!(out, "  {}", record.prevention);

    out
}

/// 1件のレコードを詳細表示
pub fn render_record(record: &DiseaseRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({}) [{}]", record.name, record.plant, record.key);
    if let Some(badge) = severity_badge(record.severity) {
        let _ = writeln!(out, "  重症度: {}", badge);
    }
    let _ = writeln!(out, "  症状: {}", record.symptoms);
    let _ = writeln!(out, "  {}:", remedies_heading(record));
    for (i, remedy) in record.remedies.iter().enumerate() {
        let _ = writeln!(out, "    {}. {}", i + 1, remedy);
    }
    let _ = writeln!(out, "  予防策: {}", record.prevention);
    out
}

/// カタログ一覧（重症度で絞り込み可）
pub fn render_catalog(catalog: &DiseaseCatalog, severity: Option<Severity>) -> String {
    let records: Vec<&DiseaseRecord> = catalog
        .records()
        .iter()
        .filter(|r| severity.map_or(true, |s| r.severity == s))
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "病害データベース ({}件)", catalog.len());
    if let Some(s) = severity {
        let _ = writeln!(out, "  絞り込み: {} → {}件", s, records.len());
    }
    let _ = writeln!(out, "---");

    for r in records {
        let badge = severity_badge(r.severity).unwrap_or_default();
        let _ = writeln!(out, "{:<12} {:<24} {}", r.plant, r.name, badge);
    }
    out
}

/// JSON出力用の解析レポート
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// RFC3339
    pub analyzed_at: String,
    pub file_name: String,
    pub image_mime: String,
    pub image_sha256: String,
    pub image_bytes: usize,
    pub result: AnalysisResult,
    pub disease: DiseaseRecord,
}

impl AnalysisReport {
    pub fn new(
        file_name: &str,
        image: &EncodedImage,
        result: &AnalysisResult,
        disease: &DiseaseRecord,
    ) -> Self {
        Self {
            analyzed_at: chrono::Local::now().to_rfc3339(),
            file_name: file_name.to_string(),
            image_mime: image.mime.clone(),
            image_sha256: image.digest.clone(),
            image_bytes: image.byte_len,
            result: result.clone(),
            disease: disease.clone(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(key: &str) -> AnalysisResult {
        AnalysisResult {
            disease_key: key.to_string(),
            confidence: 87,
            analysis_time_ms: 6000,
            features_detected: 14,
        }
    }

    #[test]
    fn test_severity_badge() {
        assert!(severity_badge(Severity::None).is_none());
        assert_eq!(severity_badge(Severity::High).unwrap(), "🔴 High");
        assert!(severity_badge(Severity::Critical).unwrap().contains("Critical"));
    }

    #[test]
    fn test_render_healthy_result() {
        let record = DiseaseCatalog::builtin().lookup("healthy").unwrap();
        let text = render_result(&result("healthy"), record);

        assert!(text.contains("健康な植物です"));
        assert!(text.contains("日常管理のポイント"));
        assert!(!text.contains("重症度"));
        assert!(text.contains("解析時間: 6.0秒"));
        assert!(text.contains("1. Continue excellent care"));
    }

    #[test]
    fn test_render_disease_result() {
        let record = DiseaseCatalog::builtin().lookup("citrus_greening").unwrap();
        let text = render_result(&result("citrus_greening"), record);

        assert!(text.contains("病害を検出しました"));
        assert!(text.contains("治療プロトコル"));
        assert!(text.contains("重症度: 🟥 Critical"));
        assert!(text.contains("確信度: 87%"));
        assert!(text.contains("検出特徴数: 14"));
        assert!(text.contains("5. No cure available - prevention only"));
    }

    #[test]
    fn test_render_catalog_header() {
        let catalog = DiseaseCatalog::builtin();
        let text = render_catalog(catalog, None);
        assert!(text.starts_with("病害データベース (33件)"));
        assert!(text.contains("Citrus"));

        let filtered = render_catalog(catalog, Some(Severity::Critical));
        assert!(filtered.contains("Critical → 1件"));
        assert!(!filtered.contains("Tomato"));
    }

    #[test]
    fn test_render_record() {
        let record = DiseaseCatalog::builtin().lookup("apple_scab").unwrap();
        let text = render_record(record);
        assert!(text.starts_with("Apple Scab (Apple) [apple_scab]"));
        assert!(text.contains("🟡 Medium"));
    }
}
