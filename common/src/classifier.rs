//! 重み付きランダム分類
//!
//! 画像内容は参照しない。乱数 r で3段階のグループを選ぶ:
//! - r < 0.15 → healthy
//! - r < 0.30 → high（High / Critical）
//! - それ以外 → common（Medium / Low）
//!
//! 乱数源は `RandomSource` で差し替え可能（テストでは固定値を注入）。

use crate::catalog::DiseaseCatalog;
use crate::error::Result;
use crate::types::{AnalysisResult, SeverityGroup};
use rand::{Rng, RngCore};
use std::collections::VecDeque;

const HEALTHY_THRESHOLD: f64 = 0.15;
const HIGH_THRESHOLD: f64 = 0.30;

/// 画質補正係数の範囲 [0.9, 1.0)
const JITTER_MIN: f64 = 0.9;
const JITTER_SPAN: f64 = 0.1;

/// 検出特徴数の範囲 [8, 22]
const FEATURES_MIN: u32 = 8;
const FEATURES_SPAN: u32 = 15;

/// [0, 1) の一様乱数源
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// rand の乱数生成器をラップ
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// 決められた値を順に返す乱数源（尽きたら fallback を返す）
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            fallback: 0.0,
        }
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        self.values.pop_front().unwrap_or(self.fallback)
    }
}

/// 抽選結果の内訳
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub group: SeverityGroup,
    /// 補正前の確信度
    pub raw_confidence: f64,
    pub result: AnalysisResult,
}

/// r からグループを決定
pub fn select_group(r: f64) -> SeverityGroup {
    if r < HEALTHY_THRESHOLD {
        SeverityGroup::Healthy
    } else if r < HIGH_THRESHOLD {
        SeverityGroup::High
    } else {
        SeverityGroup::Common
    }
}

/// グループごとの確信度範囲 [min, max)
pub fn confidence_range(group: SeverityGroup) -> (f64, f64) {
    match group {
        SeverityGroup::Healthy => (88.0, 98.0),
        SeverityGroup::High => (82.0, 97.0),
        SeverityGroup::Common => (78.0, 96.0),
    }
}

/// [0,1) の値を長さ len のインデックスに変換
fn pick_index(u: f64, len: usize) -> usize {
    ((u * len as f64).floor() as usize).min(len.saturating_sub(1))
}

/// 分類を1回実行
///
/// 乱数の消費順: グループ, 確信度, キー, 画質補正, 特徴数
pub fn classify<S: RandomSource + ?Sized>(
    catalog: &DiseaseCatalog,
    rng: &mut S,
    analysis_time_ms: u64,
) -> Result<Classification> {
    let group = select_group(rng.next_unit());

    let (min, max) = confidence_range(group);
    let raw_confidence = min + rng.next_unit() * (max - min);

    let keys = catalog.keys_by_severity_group(group)?;
    let disease_key = keys[pick_index(rng.next_unit(), keys.len())].to_string();

    let jitter = JITTER_MIN + rng.next_unit() * JITTER_SPAN;
    let confidence = (raw_confidence * jitter).round().clamp(0.0, 100.0) as u8;

    let features_detected =
        FEATURES_MIN + pick_index(rng.next_unit(), FEATURES_SPAN as usize) as u32;

    Ok(Classification {
        group,
        raw_confidence,
        result: AnalysisResult {
            disease_key,
            confidence,
            analysis_time_ms,
            features_detected,
        },
    })
}
