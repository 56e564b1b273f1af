//! 対話セッション
//!
//! 画像選択 → 解析 → 結果表示 → リセット を端末上で繰り返す。
//! セッション中は背景アニメーションをマウントしておく。

use crate::backdrop::{Backdrop, DEFAULT_FRAME_INTERVAL};
use crate::error::{LeafDoctorError, Result};
use crate::ingest;
use crate::progress::analyze_with_progress;
use crate::report;
use crate::workflow::{IgnoreReason, Phase, SelectOutcome, WorkflowController};
use dialoguer::{Input, Select};
use std::path::Path;
use tracing::debug;

/// メニュー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// 画像を選ぶ
    ChooseImage,
    /// 解析開始
    Analyze,
    /// 最初に戻る
    Reset,
    /// カタログを表示
    Catalog,
    /// 終了
    Quit,
}

impl SessionAction {
    pub fn label(&self) -> &'static str {
        match self {
            SessionAction::ChooseImage => "画像を選択",
            SessionAction::Analyze => "解析開始",
            SessionAction::Reset => "リセット",
            SessionAction::Catalog => "病害データベースを表示",
            SessionAction::Quit => "終了",
        }
    }
}

/// 状態ごとに選べる操作
pub fn available_actions(phase: Phase) -> Vec<SessionAction> {
    match phase {
        Phase::Idle => vec![
            SessionAction::ChooseImage,
            SessionAction::Catalog,
            SessionAction::Quit,
        ],
        Phase::ImageSelected => vec![
            SessionAction::Analyze,
            SessionAction::ChooseImage,
            SessionAction::Reset,
            SessionAction::Quit,
        ],
        // 解析中は操作を受け付けない
        Phase::Analyzing => vec![],
        Phase::Resulted => vec![
            SessionAction::ChooseImage,
            SessionAction::Reset,
            SessionAction::Quit,
        ],
    }
}

/// 選択結果の案内文（無視された場合のみ）
pub fn ignored_hint(outcome: SelectOutcome) -> Option<&'static str> {
    match outcome {
        SelectOutcome::Selected => None,
        SelectOutcome::Ignored(IgnoreReason::NotAnImage) => {
            Some("画像ファイルではないため無視しました（JPEG/PNG/WebP など）")
        }
        SelectOutcome::Ignored(IgnoreReason::Analyzing) => Some("解析中は画像を変更できません"),
        SelectOutcome::Ignored(IgnoreReason::NoFile) => Some("ファイルが指定されていません"),
    }
}

fn prompt_action(phase: Phase) -> Result<SessionAction> {
    let actions = available_actions(phase);
    let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();

    let index = Select::new()
        .with_prompt("操作を選択")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| LeafDoctorError::Prompt(e.to_string()))?;

    Ok(actions[index])
}

fn prompt_image(controller: &WorkflowController) -> Result<()> {
    let input: String = Input::new()
        .with_prompt("画像ファイルのパス")
        .interact_text()
        .map_err(|e| LeafDoctorError::Prompt(e.to_string()))?;

    let path = Path::new(input.trim());
    let file = match ingest::read_file(path) {
        Ok(file) => file,
        Err(e) => {
            println!("  {}", e);
            return Ok(());
        }
    };

    let outcome = controller.select_image(&file.bytes, &file.content_type);
    match ignored_hint(outcome) {
        Some(hint) => println!("  {}", hint),
        None => println!("✔ {} を読み込みました ({} bytes)", file.file_name, file.bytes.len()),
    }
    Ok(())
}

/// 対話セッションを実行
pub async fn run_session(controller: &WorkflowController, backdrop_seed: Option<u64>) -> Result<()> {
    let backdrop = Backdrop::mount(backdrop_seed, DEFAULT_FRAME_INTERVAL);

    println!("🌿 leaf-doctor - 対話モード\n");

    let outcome = session_loop(controller).await;

    let frames = backdrop.unmount().await;
    debug!(frames, "セッション終了");
    outcome
}

async fn session_loop(controller: &WorkflowController) -> Result<()> {
    loop {
        let phase = controller.phase();
        match prompt_action(phase)? {
            SessionAction::ChooseImage => prompt_image(controller)?,
            SessionAction::Analyze => {
                let result = analyze_with_progress(controller).await?;
                let record = controller.lookup(&result.disease_key)?;
                println!("\n{}", report::render_result(&result, record));
            }
            SessionAction::Reset => {
                controller.reset();
                println!("✔ リセットしました\n");
            }
            SessionAction::Catalog => {
                println!("{}", report::render_catalog(controller.catalog(), None));
            }
            SessionAction::Quit => return Ok(()),
        }
    }
}
