//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    /// カタログに存在しないキー（分類ポリシーの整合性バグ）
    #[error("Disease not found: {0}")]
    NotFound(String),

    /// 重症度グループに該当するキーがない（カタログ設定ミス）
    #[error("Severity group is empty: {0}")]
    EmptyGroup(String),

    #[error("Duplicate disease key: {0}")]
    DuplicateKey(String),

    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Disease has no remedies: {0}")]
    EmptyRemedies(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_not_found() {
        let error = Error::NotFound("tomato_leaf_curl".to_string());
        assert_eq!(format!("{}", error), "Disease not found: tomato_leaf_curl");
    }

    #[test]
    fn test_error_display_empty_group() {
        let error = Error::EmptyGroup("healthy".to_string());
        assert_eq!(format!("{}", error), "Severity group is empty: healthy");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
