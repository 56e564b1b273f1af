//! 分類ポリシーの分布サンプリング
//!
//! 分類をN回実行してグループごとの比率を集計する。
//! チャンク単位に独立したシードで並列実行するため、同じシードなら結果は再現する。

use leaf_doctor_common::{classify, DiseaseCatalog, Result, RngSource, SeverityGroup};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

const CHUNK_SIZE: usize = 1000;

/// 集計結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleSummary {
    pub runs: usize,
    pub healthy: usize,
    pub high: usize,
    pub common: usize,
    pub min_confidence: Option<u8>,
    pub max_confidence: Option<u8>,
}

impl SampleSummary {
    fn record(&mut self, group: SeverityGroup, confidence: u8) {
        self.runs += 1;
        match group {
            SeverityGroup::Healthy => self.healthy += 1,
            SeverityGroup::High => self.high += 1,
            SeverityGroup::Common => self.common += 1,
        }
        self.min_confidence = Some(self.min_confidence.map_or(confidence, |m| m.min(confidence)));
        self.max_confidence = Some(self.max_confidence.map_or(confidence, |m| m.max(confidence)));
    }

    fn merge(mut self, other: Self) -> Self {
        self.runs += other.runs;
        self.healthy += other.healthy;
        self.high += other.high;
        self.common += other.common;
        self.min_confidence = match (self.min_confidence, other.min_confidence) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max_confidence = match (self.max_confidence, other.max_confidence) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        self
    }

    /// グループの比率（0.0-1.0）
    pub fn share(&self, group: SeverityGroup) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        let count = match group {
            SeverityGroup::Healthy => self.healthy,
            SeverityGroup::High => self.high,
            SeverityGroup::Common => self.common,
        };
        count as f64 / self.runs as f64
    }
}

/// 分類を runs 回実行して集計
pub fn sample(catalog: &DiseaseCatalog, runs: usize, seed: u64) -> Result<SampleSummary> {
    let chunks = runs.div_ceil(CHUNK_SIZE);

    (0..chunks)
        .into_par_iter()
        .map(|chunk| -> Result<SampleSummary> {
            let size = CHUNK_SIZE.min(runs - chunk * CHUNK_SIZE);
            let mut rng = RngSource(StdRng::seed_from_u64(seed.wrapping_add(chunk as u64)));
            let mut summary = SampleSummary::default();
            for _ in 0..size {
                let c = classify(catalog, &mut rng, 0)?;
                summary.record(c.group, c.result.confidence);
            }
            Ok(summary)
        })
        .try_reduce(SampleSummary::default, |a, b| Ok(a.merge(b)))
}
