//! 解析進捗のプログレスバー表示
//!
//! コントローラの配信状態を購読してバーを更新する。

use crate::error::Result;
use crate::workflow::WorkflowController;
use indicatif::{ProgressBar, ProgressStyle};
use leaf_doctor_common::AnalysisResult;

fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} [{bar:40.green/white}] {pos:>3}% {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓░")
}

/// プログレスバーを表示しながら解析を実行
pub async fn analyze_with_progress(controller: &WorkflowController) -> Result<AnalysisResult> {
    let bar = ProgressBar::new(100);
    bar.set_style(progress_style());

    let mut rx = controller.subscribe();
    let analysis = controller.start_analysis();
    tokio::pin!(analysis);

    let outcome = loop {
        tokio::select! {
            outcome = &mut analysis => break outcome,
            changed = rx.changed() => {
                if changed.is_err() {
                    break analysis.await;
                }
                let state = rx.borrow_and_update();
                bar.set_position(state.progress_display() as u64);
                if let Some(label) = &state.current_step_label {
                    bar.set_message(label.clone());
                }
            }
        }
    };

    match &outcome {
        Ok(_) => bar.finish_with_message("解析完了"),
        Err(_) => bar.abandon(),
    }
    outcome
}
