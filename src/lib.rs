//! Leaf Doctor
//!
//! 葉の写真を受け取り、疑似AI解析（固定フェーズ＋重み付き抽選）で
//! 病害を判定するワークフロー

pub mod backdrop;
pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod progress;
pub mod report;
pub mod sampler;
pub mod session;
pub mod workflow;

pub use error::{LeafDoctorError, Result};
pub use workflow::{Phase, SelectOutcome, WorkflowController, WorkflowOptions, WorkflowState};
