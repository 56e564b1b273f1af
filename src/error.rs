use thiserror::Error;

use crate::workflow::Phase;

#[derive(Error, Debug)]
pub enum LeafDoctorError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    /// 解析中に再度解析が要求された
    #[error("解析はすでに実行中です")]
    AnalysisInProgress,

    /// 画像選択済み以外の状態で解析が要求された
    #[error("解析できる画像が選択されていません（現在: {0}）")]
    NoImageSelected(Phase),

    /// 解析中にリセットされ、実行中の解析が破棄された
    #[error("解析はリセットにより中断されました")]
    RunSuperseded,

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] leaf_doctor_common::Error),
}

pub type Result<T> = std::result::Result<T, LeafDoctorError>;
