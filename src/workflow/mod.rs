//! 解析ワークフロー制御
//!
//! 画像選択 → 疑似解析（固定6フェーズ）→ 結果表示 の状態機械。
//!
//! - 状態は `watch` チャネルで配信し、表示層は `subscribe()` で購読する
//! - 解析中の再実行要求は拒否する（キューしない）
//! - 解析中のリセットは実行中の解析を無効化する（次のフェーズ境界で終了）

mod state;

pub use state::{Phase, WorkflowState};

use crate::error::{LeafDoctorError, Result};
use crate::ingest;
use leaf_doctor_common::{
    classify, progress_after, total_duration_ms, AnalysisPhase, AnalysisResult, DiseaseCatalog,
    DiseaseRecord, RandomSource, RngSource, PHASES,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// 画像選択の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected,
    Ignored(IgnoreReason),
}

/// 画像選択が無視された理由（状態は変化しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// コンテンツタイプが image/* ではない
    NotAnImage,
    /// 解析中
    Analyzing,
    /// ファイルが1つもない
    NoFile,
}

/// コントローラ設定
#[derive(Debug, Clone)]
pub struct WorkflowOptions {
    /// フェーズ待機時間の倍率（0で待機なし）
    pub time_scale: f64,
    pub phases: Vec<AnalysisPhase>,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            phases: PHASES.to_vec(),
        }
    }
}

impl WorkflowOptions {
    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale;
        self
    }
}

/// ワークフローコントローラ
pub struct WorkflowController {
    catalog: Arc<DiseaseCatalog>,
    state: watch::Sender<WorkflowState>,
    rng: Mutex<Box<dyn RandomSource + Send>>,
    phases: Vec<AnalysisPhase>,
    time_scale: f64,
    /// 解析実行の世代番号（リセットで進む）
    run_id: AtomicU64,
}

impl WorkflowController {
    /// カタログを検証してコントローラを生成（状態は Idle）
    pub fn new(
        catalog: Arc<DiseaseCatalog>,
        rng: impl RandomSource + Send + 'static,
        options: WorkflowOptions,
    ) -> Result<Self> {
        catalog.validate()?;
        let (state, _) = watch::channel(WorkflowState::default());

        Ok(Self {
            catalog,
            state,
            rng: Mutex::new(Box::new(rng)),
            phases: options.phases,
            time_scale: options.time_scale,
            run_id: AtomicU64::new(0),
        })
    }

    /// シード指定の StdRng で生成（None ならOS乱数）
    pub fn seeded(
        catalog: Arc<DiseaseCatalog>,
        seed: Option<u64>,
        options: WorkflowOptions,
    ) -> Result<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(catalog, RngSource(rng), options)
    }

    /// 現在の状態
    pub fn snapshot(&self) -> WorkflowState {
        self.state.borrow().clone()
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    /// 状態変更を購読
    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.state.subscribe()
    }

    pub fn catalog(&self) -> &DiseaseCatalog {
        &self.catalog
    }

    pub fn lookup(&self, key: &str) -> Result<&DiseaseRecord> {
        Ok(self.catalog.lookup(key)?)
    }

    pub fn all_keys(&self) -> Vec<&str> {
        self.catalog.all_keys()
    }

    /// フェーズ所要時間の合計
    pub fn analysis_time_ms(&self) -> u64 {
        total_duration_ms(&self.phases)
    }

    /// 画像を選択
    ///
    /// 画像でなければ何もしない。Idle / ImageSelected / Resulted からは
    /// ImageSelected へ遷移し、以前の結果を破棄する。
    pub fn select_image(&self, payload: &[u8], content_type: &str) -> SelectOutcome {
        let Some(image) = ingest::encode(payload, content_type) else {
            warn!(content_type, "画像以外のファイルを無視");
            return SelectOutcome::Ignored(IgnoreReason::NotAnImage);
        };

        let image_id = image.short_id().to_string();
        let mut outcome = SelectOutcome::Selected;
        self.state.send_if_modified(|s| {
            if s.phase == Phase::Analyzing {
                outcome = SelectOutcome::Ignored(IgnoreReason::Analyzing);
                return false;
            }
            s.phase = Phase::ImageSelected;
            s.selected_image = Some(image);
            s.result = None;
            s.progress_percent = 0.0;
            s.current_step_label = None;
            true
        });

        match outcome {
            SelectOutcome::Selected => info!(image = %image_id, "画像を選択"),
            SelectOutcome::Ignored(_) => warn!(image = %image_id, "解析中のため画像選択を無視"),
        }
        outcome
    }

    /// 複数ファイルのうち先頭のみを選択（ドラッグ&ドロップ相当）
    pub fn select_first_image<'a, I>(&self, files: I) -> SelectOutcome
    where
        I: IntoIterator<Item = (&'a [u8], &'a str)>,
    {
        match files.into_iter().next() {
            Some((payload, content_type)) => self.select_image(payload, content_type),
            None => SelectOutcome::Ignored(IgnoreReason::NoFile),
        }
    }

    /// 解析を実行
    ///
    /// ImageSelected からのみ開始できる。各フェーズの開始時にラベルを、
    /// 待機後に進捗を配信し、最後に分類結果を配信して Resulted へ遷移する。
    pub async fn start_analysis(&self) -> Result<AnalysisResult> {
        let run = self.begin_run()?;
        let mut guard = RunGuard {
            controller: self,
            run,
            finished: false,
        };

        let total = self.phases.len();
        for (i, phase) in self.phases.iter().enumerate() {
            self.publish(run, |s| s.current_step_label = Some(phase.label.to_string()))?;
            debug!(run, step = i + 1, total, label = phase.label, "フェーズ開始");

            tokio::time::sleep(phase.scaled(self.time_scale)).await;

            self.publish(run, |s| s.progress_percent = progress_after(i + 1, total))?;
        }

        let result = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            classify(&self.catalog, &mut **rng, self.analysis_time_ms())?.result
        };

        self.publish(run, |s| {
            s.phase = Phase::Resulted;
            s.current_step_label = None;
            s.result = Some(result.clone());
        })?;
        guard.finished = true;

        info!(
            run,
            disease = %result.disease_key,
            confidence = result.confidence,
            "解析完了"
        );
        Ok(result)
    }

    /// Idle へ戻す（画像・結果・進捗をクリア）
    pub fn reset(&self) {
        let mut from = Phase::Idle;
        self.state.send_if_modified(|s| {
            from = s.phase;
            if s.phase == Phase::Idle {
                return false;
            }
            self.run_id.fetch_add(1, Ordering::SeqCst);
            *s = WorkflowState::default();
            true
        });

        if from != Phase::Idle {
            info!(from = %from, "リセット");
        }
    }

    /// ImageSelected → Analyzing（ビジーガード）
    fn begin_run(&self) -> Result<u64> {
        let mut outcome = Err(LeafDoctorError::AnalysisInProgress);
        self.state.send_if_modified(|s| match s.phase {
            Phase::ImageSelected => {
                let run = self.run_id.fetch_add(1, Ordering::SeqCst) + 1;
                s.phase = Phase::Analyzing;
                s.progress_percent = 0.0;
                s.current_step_label = None;
                s.result = None;
                outcome = Ok(run);
                true
            }
            Phase::Analyzing => false,
            other => {
                outcome = Err(LeafDoctorError::NoImageSelected(other));
                false
            }
        });

        match &outcome {
            Ok(run) => info!(run = *run, "解析開始"),
            Err(e) => warn!(error = %e, "解析要求を拒否"),
        }
        outcome
    }

    /// 実行中の解析が有効な場合のみ状態を更新
    fn publish(&self, run: u64, update: impl FnOnce(&mut WorkflowState)) -> Result<()> {
        let mut current = true;
        self.state.send_if_modified(|s| {
            if self.run_id.load(Ordering::SeqCst) != run || s.phase != Phase::Analyzing {
                current = false;
                return false;
            }
            update(s);
            true
        });

        if current {
            Ok(())
        } else {
            debug!(run, "解析はリセット済み");
            Err(LeafDoctorError::RunSuperseded)
        }
    }

    /// 途中で放棄された解析を ImageSelected に戻す
    fn abandon(&self, run: u64) {
        let reverted = self.state.send_if_modified(|s| {
            if self.run_id.load(Ordering::SeqCst) != run || s.phase != Phase::Analyzing {
                return false;
            }
            s.phase = Phase::ImageSelected;
            s.progress_percent = 0.0;
            s.current_step_label = None;
            true
        });

        if reverted {
            warn!(run, "解析が中断されたため画像選択状態に戻しました");
        }
    }
}

/// 解析futureが完了前にdropされた場合の後始末
struct RunGuard<'a> {
    controller: &'a WorkflowController,
    run: u64,
    finished: bool,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.controller.abandon(self.run);
        }
    }
}
