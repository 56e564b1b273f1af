use crate::error::{LeafDoctorError, Result};
use leaf_doctor_common::DiseaseCatalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 乱数シードを上書きする環境変数
pub const SEED_ENV: &str = "LEAF_DOCTOR_SEED";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// フェーズ待機時間の倍率（報告される解析時間は変わらない）
    pub time_scale: f64,
    /// 乱数シード（未指定ならOS乱数）
    pub seed: Option<u64>,
    /// カスタムカタログJSON（未指定なら組み込み）
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            seed: None,
            catalog_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.check()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LeafDoctorError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("leaf-doctor").join("config.json"))
    }

    fn check(&self) -> Result<()> {
        if !self.time_scale.is_finite() || self.time_scale < 0.0 {
            return Err(LeafDoctorError::Config(format!(
                "time_scale は0以上の数値を指定してください: {}",
                self.time_scale
            )));
        }
        Ok(())
    }

    pub fn set_time_scale(&mut self, scale: f64) -> Result<()> {
        self.time_scale = scale;
        self.check()
    }

    /// 実効シード（環境変数を優先）
    pub fn effective_seed(&self) -> Result<Option<u64>> {
        match std::env::var(SEED_ENV) {
            Ok(value) => value
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|_| LeafDoctorError::Config(format!("{} が不正です: {}", SEED_ENV, value))),
            Err(_) => Ok(self.seed),
        }
    }

    /// カタログを読み込んで検証
    pub fn load_catalog(&self) -> Result<DiseaseCatalog> {
        let catalog = match &self.catalog_path {
            Some(path) => {
                if !path.exists() {
                    return Err(LeafDoctorError::FileNotFound(path.display().to_string()));
                }
                DiseaseCatalog::from_file(path)?
            }
            None => DiseaseCatalog::builtin().clone(),
        };
        catalog.validate()?;
        Ok(catalog)
    }
}
