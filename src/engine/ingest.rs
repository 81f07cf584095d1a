//! Validated intake of uploaded transaction rows.

use crate::engine::EngineResult;
use crate::errors::EngineError;
use crate::session::{IngestBatch, Session, TransactionRecord};

/// Validated intake for upload payloads.
pub struct IngestService;

impl IngestService {
    /// Stores every categorized row in the session under fresh ids and
    /// returns how many were stored.
    ///
    /// The whole batch is validated before any row lands: a malformed row
    /// fails the call and leaves the session untouched.
    pub fn ingest(session: &mut Session, batch: IngestBatch) -> EngineResult<usize> {
        for (position, record) in batch.categorized.iter().enumerate() {
            Self::validate(position, record)?;
        }
        let rows_loaded = batch.rows_loaded;
        let count = batch.categorized.len();
        for record in batch.categorized {
            session.add_transaction(record);
        }
        tracing::info!(rows_loaded, ingested = count, "upload batch ingested");
        Ok(count)
    }

    fn validate(position: usize, record: &TransactionRecord) -> EngineResult<()> {
        if record.description.trim().is_empty() {
            return Err(EngineError::MalformedTransaction(format!(
                "row {position} has an empty description"
            )));
        }
        if !record.amount.is_finite() {
            return Err(EngineError::MalformedTransaction(format!(
                "row {position} has a non-finite amount"
            )));
        }
        if !(0.0..=1.0).contains(&record.confidence) {
            return Err(EngineError::MalformedTransaction(format!(
                "row {position} confidence {} is outside [0, 1]",
                record.confidence
            )));
        }
        Ok(())
    }
}
