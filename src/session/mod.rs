//! Session domain models: transactions, analysis state, and pipeline stage.

pub mod analysis;
pub mod pipeline;
#[allow(clippy::module_inception)]
pub mod session;
pub mod transaction;

pub use analysis::{AmbiguousEntry, AnalysisResult, MatchedReimbursement};
pub use pipeline::PipelineStage;
pub use session::Session;
pub use transaction::{
    IngestBatch, Transaction, TransactionField, TransactionId, TransactionRecord,
};
