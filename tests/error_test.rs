//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use leaf_doctor::config::Config;
use leaf_doctor::error::LeafDoctorError;
use leaf_doctor::ingest;
use leaf_doctor::workflow::Phase;
use leaf_doctor_common::Error as CommonError;
use std::path::Path;
use tempfile::tempdir;

fn record_json(key: &str, severity: &str) -> String {
    format!(
        r#"{{"key":"{key}","name":"{key}","plant":"Test","severity":"{severity}","symptoms":"s","remedies":["r"],"prevention":"p"}}"#
    )
}

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_read_nonexistent_file() {
    let result = ingest::read_file(Path::new("/nonexistent/path/leaf.jpg"));
    assert!(matches!(result, Err(LeafDoctorError::FileNotFound(_))));
}

/// ディレクトリを指定した場合
#[test]
fn test_read_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = ingest::read_file(dir.path());
    assert!(matches!(result, Err(LeafDoctorError::FileNotFound(_))));
}

/// LeafDoctorErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        LeafDoctorError::Config("テスト設定エラー".to_string()),
        LeafDoctorError::FileNotFound("leaf.jpg".to_string()),
        LeafDoctorError::ImageLoad("壊れた画像".to_string()),
        LeafDoctorError::AnalysisInProgress,
        LeafDoctorError::NoImageSelected(Phase::Idle),
        LeafDoctorError::RunSuperseded,
        LeafDoctorError::Prompt("中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 状態名がメッセージに含まれる
#[test]
fn test_no_image_selected_message() {
    let err = LeafDoctorError::NoImageSelected(Phase::Resulted);
    assert!(err.to_string().contains("resulted"));
}

/// 共通クレートのエラーはそのまま表示される
#[test]
fn test_common_error_conversion() {
    let err: LeafDoctorError = CommonError::NotFound("unknown_blight".to_string()).into();
    assert!(matches!(err, LeafDoctorError::Common(CommonError::NotFound(_))));
    assert_eq!(err.to_string(), "Disease not found: unknown_blight");
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: LeafDoctorError = io_err.into();

    assert!(matches!(err, LeafDoctorError::Io(_)));
    assert!(err.to_string().contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: LeafDoctorError = json_err.into();

    assert!(matches!(err, LeafDoctorError::JsonParse(_)));
    assert!(err.to_string().contains("JSON"));
}

/// 設定ファイルが壊れている場合
#[test]
fn test_invalid_config_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(LeafDoctorError::JsonParse(_))));
}

/// 負の待機倍率は拒否される
#[test]
fn test_negative_time_scale() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"time_scale": -1.0}"#).unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(LeafDoctorError::Config(_))));
}

/// カスタムカタログが存在しない場合
#[test]
fn test_missing_custom_catalog() {
    let config = Config {
        catalog_path: Some("/nonexistent/catalog.json".into()),
        ..Config::default()
    };
    assert!(matches!(
        config.load_catalog(),
        Err(LeafDoctorError::FileNotFound(_))
    ));
}

/// 分類グループが空のカタログは読み込み時に拒否される
#[test]
fn test_custom_catalog_with_empty_group() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let json = format!(
        "[{},{}]",
        record_json("healthy", "None"),
        record_json("leaf_spot", "Medium")
    );
    std::fs::write(&path, json).unwrap();

    let config = Config {
        catalog_path: Some(path),
        ..Config::default()
    };
    let err = config.load_catalog().unwrap_err();
    assert!(matches!(err, LeafDoctorError::Common(CommonError::EmptyGroup(_))));
    assert!(err.to_string().contains("high"));
}

/// 各グループが揃ったカスタムカタログは読み込める
#[test]
fn test_custom_catalog_loads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let json = format!(
        "[{},{},{}]",
        record_json("healthy", "None"),
        record_json("root_rot", "Critical"),
        record_json("leaf_spot", "Low")
    );
    std::fs::write(&path, json).unwrap();

    let config = Config {
        catalog_path: Some(path),
        ..Config::default()
    };
    let catalog = config.load_catalog().unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.all_keys(), vec!["healthy", "root_rot", "leaf_spot"]);
}

/// 重複キーのカタログは拒否される
#[test]
fn test_custom_catalog_duplicate_key() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let json = format!(
        "[{},{},{},{}]",
        record_json("healthy", "None"),
        record_json("root_rot", "High"),
        record_json("leaf_spot", "Low"),
        record_json("leaf_spot", "Medium")
    );
    std::fs::write(&path, json).unwrap();

    let config = Config {
        catalog_path: Some(path),
        ..Config::default()
    };
    assert!(matches!(
        config.load_catalog(),
        Err(LeafDoctorError::Common(CommonError::DuplicateKey(_)))
    ));
}
