use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Structured event emitted during a check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    PlanValidated {
        base: PathBuf,
        candidates: usize,
    },
    DirsEnsured {
        paths: Vec<PathBuf>,
    },
    CandidateAccepted {
        index: usize,
        resolved: PathBuf,
    },
    CandidateRejected {
        index: usize,
        reason: String,
    },
    ExtensionDenied {
        index: usize,
        filename: String,
    },
    CheckCompleted {
        accepted: usize,
        rejected: usize,
        denied: usize,
    },
}
