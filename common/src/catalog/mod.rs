//! 病害カタログモジュール
//!
//! 病害キーからレコードへの不変マッピング。
//! 組み込みカタログは起動時に一度構築され、プロセス終了まで変更されない。

mod seed;

use crate::error::{Error, Result};
use crate::types::{DiseaseRecord, Severity, SeverityGroup};
use std::collections::HashMap;
use std::path::Path;

lazy_static::lazy_static! {
    static ref BUILTIN: DiseaseCatalog = DiseaseCatalog::indexed(seed::builtin_records());
}

/// 病害カタログ
#[derive(Debug, Clone)]
pub struct DiseaseCatalog {
    /// 表示順のレコード
    records: Vec<DiseaseRecord>,
    /// キー → records のインデックス
    index: HashMap<String, usize>,
}

impl DiseaseCatalog {
    /// 組み込みカタログ
    pub fn builtin() -> &'static DiseaseCatalog {
        &BUILTIN
    }

    /// レコード列から構築して検証
    pub fn from_records(records: Vec<DiseaseRecord>) -> Result<Self> {
        let catalog = Self::indexed(records);
        catalog.validate()?;
        Ok(catalog)
    }

    /// JSON文字列（レコード配列）から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<DiseaseRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn indexed(records: Vec<DiseaseRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            // 重複時は先勝ち（validateで検出）
            index.entry(record.key.clone()).or_insert(i);
        }
        Self { records, index }
    }

    /// 起動時の整合性チェック
    ///
    /// - カタログが空でない
    /// - キーが一意
    /// - 全レコードに対処法がある
    /// - healthy / high / common の各グループが空でない
    pub fn validate(&self) -> Result<()> {
        if self.records.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        if self.index.len() != self.records.len() {
            let dup = self
                .records
                .iter()
                .enumerate()
                .find(|(i, r)| self.index.get(&r.key) != Some(i))
                .map(|(_, r)| r.key.clone())
                .unwrap_or_default();
            return Err(Error::DuplicateKey(dup));
        }

        if let Some(record) = self.records.iter().find(|r| r.remedies.is_empty()) {
            return Err(Error::EmptyRemedies(record.key.clone()));
        }

        for group in SeverityGroup::ALL {
            self.keys_by_severity_group(group)?;
        }

        Ok(())
    }

    /// キーでレコードを取得
    pub fn lookup(&self, key: &str) -> Result<&DiseaseRecord> {
        self.index
            .get(key)
            .map(|&i| &self.records[i])
            .ok_or_else(|| Error::NotFound(key.to_string()))
    }

    /// 全キー（表示順）
    pub fn all_keys(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.key.as_str()).collect()
    }

    /// 分類グループに属するキー（表示順）
    pub fn keys_by_severity_group(&self, group: SeverityGroup) -> Result<Vec<&str>> {
        let keys: Vec<&str> = self
            .records
            .iter()
            .filter(|r| group.contains(r.severity))
            .map(|r| r.key.as_str())
            .collect();

        if keys.is_empty() {
            return Err(Error::EmptyGroup(group.to_string()));
        }
        Ok(keys)
    }

    /// 指定重症度のレコード
    pub fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &DiseaseRecord> {
        self.records.iter().filter(move |r| r.severity == severity)
    }

    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(key: &str, severity: Severity) -> DiseaseRecord {
        DiseaseRecord {
            key: key.to_string(),
            name: format!("{} name", key),
            plant: "Tomato".to_string(),
            severity,
            symptoms: "spots".to_string(),
            remedies: vec!["Remove infected leaves".to_string()],
            prevention: "rotation".to_string(),
        }
    }

    fn minimal_records() -> Vec<DiseaseRecord> {
        vec![
            sample("healthy", Severity::None),
            sample("blight", Severity::High),
            sample("spot", Severity::Low),
        ]
    }

    #[test]
    fn test_builtin_is_valid() {
        let catalog = DiseaseCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.len(), 33);
    }

    #[test]
    fn test_builtin_lookup_every_key() {
        let catalog = DiseaseCatalog::builtin();
        for key in catalog.all_keys() {
            let record = catalog.lookup(key).unwrap();
            assert_eq!(record.key, key);
            assert!(!record.remedies.is_empty());
        }
    }

    #[test]
    fn test_builtin_group_sizes() {
        let catalog = DiseaseCatalog::builtin();
        assert_eq!(
            catalog.keys_by_severity_group(SeverityGroup::Healthy).unwrap(),
            vec!["healthy"]
        );
        assert_eq!(catalog.keys_by_severity_group(SeverityGroup::High).unwrap().len(), 15);
        assert_eq!(catalog.keys_by_severity_group(SeverityGroup::Common).unwrap().len(), 17);
    }

    #[test]
    fn test_builtin_preserves_display_order() {
        let keys = DiseaseCatalog::builtin().all_keys();
        assert_eq!(keys.first(), Some(&"tomato_late_blight"));
        assert_eq!(keys.last(), Some(&"healthy"));
    }

    #[test]
    fn test_critical_is_in_high_group() {
        let catalog = DiseaseCatalog::builtin();
        let high = catalog.keys_by_severity_group(SeverityGroup::High).unwrap();
        assert!(high.contains(&"citrus_greening"));
        assert_eq!(catalog.lookup("citrus_greening").unwrap().severity, Severity::Critical);
    }

    #[test]
    fn test_lookup_not_found() {
        let err = DiseaseCatalog::builtin().lookup("banana_wilt").unwrap_err();
        assert!(matches!(err, Error::NotFound(ref k) if k == "banana_wilt"));
    }

    #[test]
    fn test_from_records_rejects_empty() {
        let err = DiseaseCatalog::from_records(vec![]).unwrap_err();
        assert!(matches!(err, Error::EmptyCatalog));
    }

    #[test]
    fn test_from_records_rejects_missing_group() {
        let records = vec![sample("healthy", Severity::None), sample("spot", Severity::Medium)];
        let err = DiseaseCatalog::from_records(records).unwrap_err();
        assert!(matches!(err, Error::EmptyGroup(ref g) if g == "high"));
    }

    #[test]
    fn test_from_records_rejects_duplicate_key() {
        let mut records = minimal_records();
        records.push(sample("spot", Severity::Medium));
        let err = DiseaseCatalog::from_records(records).unwrap_err();
        assert!(matches!(err, Error::DuplicateKey(ref k) if k == "spot"));
    }

    #[test]
    fn test_from_records_rejects_empty_remedies() {
        let mut records = minimal_records();
        records[1].remedies.clear();
        let err = DiseaseCatalog::from_records(records).unwrap_err();
        assert!(matches!(err, Error::EmptyRemedies(ref k) if k == "blight"));
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::to_string(&minimal_records()).unwrap();
        let catalog = DiseaseCatalog::from_json(&json).unwrap();
        assert_eq!(catalog.all_keys(), vec!["healthy", "blight", "spot"]);
        assert_eq!(catalog.by_severity(Severity::Low).count(), 1);
    }
}
