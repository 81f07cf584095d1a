use serde::{Deserialize, Serialize};

/// Ordered stages of the reconciliation pipeline.
///
/// Progression is monotonic within a session: no transition moves backward,
/// and a fresh upload does not reset an in-progress pipeline.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default,
)]
pub enum PipelineStage {
    #[default]
    Upload,
    Reconcile,
    Analyze,
    Resolve,
    Done,
}

impl PipelineStage {
    /// Zero-based position, matching the UI progress indicator.
    pub fn index(self) -> u8 {
        match self {
            PipelineStage::Upload => 0,
            PipelineStage::Reconcile => 1,
            PipelineStage::Analyze => 2,
            PipelineStage::Resolve => 3,
            PipelineStage::Done => 4,
        }
    }

    /// Moves to `next` only if it is further along; returns whether the
    /// stage changed.
    pub fn advance_to(&mut self, next: PipelineStage) -> bool {
        if next > *self {
            *self = next;
            true
        } else {
            false
        }
    }

    pub fn is_done(self) -> bool {
        matches!(self, PipelineStage::Done)
    }
}
