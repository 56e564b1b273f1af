//! Leaf Doctor Common Library
//!
//! CLIと対話セッションで共有される型・病害カタログ・分類ポリシー

pub mod types;
pub mod error;
pub mod catalog;
pub mod phases;
pub mod classifier;

pub use types::{AnalysisResult, DiseaseRecord, Severity, SeverityGroup};
pub use error::{Error, Result};
pub use catalog::DiseaseCatalog;
pub use phases::{AnalysisPhase, PHASES, progress_after, total_duration_ms};
pub use classifier::{Classification, RandomSource, RngSource, ScriptedSource, classify};
