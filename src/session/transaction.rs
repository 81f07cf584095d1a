use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Opaque stable key for a stored transaction.
///
/// Assigned once at ingestion from the session's counter and never reused,
/// so it stays valid across category edits and re-sorts.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "txn-{}", self.0)
    }
}

/// A transaction row as produced by the external categorization service.
///
/// Negative amounts are outflows. `category` and `confidence` are the
/// service's provisional labels; the user may override them later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub is_group: bool,
    #[serde(default)]
    pub is_reimbursement: bool,
}

impl TransactionRecord {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            category: category.into(),
            confidence: 1.0,
            is_group: false,
            is_reimbursement: false,
        }
    }

    pub fn with_group(mut self, is_group: bool) -> Self {
        self.is_group = is_group;
        self
    }

    pub fn with_reimbursement(mut self, is_reimbursement: bool) -> Self {
        self.is_reimbursement = is_reimbursement;
        self
    }
}

/// A stored transaction: an ingested record plus its session-assigned key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub confidence: f64,
    pub is_group: bool,
    pub is_reimbursement: bool,
}

impl Transaction {
    pub fn from_record(id: TransactionId, record: TransactionRecord) -> Self {
        Self {
            id,
            date: record.date,
            description: record.description,
            amount: record.amount,
            category: record.category,
            confidence: record.confidence,
            is_group: record.is_group,
            is_reimbursement: record.is_reimbursement,
        }
    }

    /// Replaces the single field carried by `field`.
    pub fn apply(&mut self, field: TransactionField) {
        match field {
            TransactionField::Date(date) => self.date = date,
            TransactionField::Description(description) => self.description = description,
            TransactionField::Amount(amount) => self.amount = amount,
            TransactionField::Category(category) => self.category = category,
            TransactionField::Confidence(confidence) => self.confidence = confidence,
            TransactionField::IsGroup(is_group) => self.is_group = is_group,
            TransactionField::IsReimbursement(is_reimbursement) => {
                self.is_reimbursement = is_reimbursement
            }
        }
    }
}

/// Single-field replacement payload for `Session::upsert_field`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TransactionField {
    Date(NaiveDate),
    Description(String),
    Amount(f64),
    Category(String),
    Confidence(f64),
    IsGroup(bool),
    IsReimbursement(bool),
}

/// Upload payload returned by the ingestion endpoint.
///
/// The engine consumes only `categorized`; `rows_loaded` is echoed back to
/// the caller for status display.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct IngestBatch {
    #[serde(default)]
    pub rows_loaded: usize,
    #[serde(default)]
    pub categorized: Vec<TransactionRecord>,
}

impl IngestBatch {
    pub fn from_json(payload: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> TransactionRecord {
        let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        TransactionRecord::new(date, "Groceries", -42.5, "Food")
    }

    #[test]
    fn apply_replaces_exactly_one_field() {
        let mut txn = Transaction::from_record(TransactionId(7), sample_record());
        txn.apply(TransactionField::Category("Dining".into()));
        assert_eq!(txn.category, "Dining");
        assert_eq!(txn.description, "Groceries");
        assert_eq!(txn.amount, -42.5);
        assert_eq!(txn.id, TransactionId(7));
    }

    #[test]
    fn ingest_batch_decodes_sparse_rows() {
        let payload = r#"{
            "rows_loaded": 1,
            "categorized": [
                {"date": "2024-05-02", "description": "Groceries", "amount": -42.5, "category": "Food"}
            ]
        }"#;
        let batch = IngestBatch::from_json(payload).unwrap();
        assert_eq!(batch.rows_loaded, 1);
        assert_eq!(batch.categorized.len(), 1);
        let row = &batch.categorized[0];
        assert_eq!(row.confidence, 0.0);
        assert!(!row.is_group);
        assert!(!row.is_reimbursement);
    }

    #[test]
    fn ingest_batch_rejects_malformed_json() {
        let err = IngestBatch::from_json("{not json").unwrap_err();
        assert!(matches!(err, crate::errors::EngineError::Decode(_)));
    }
}
