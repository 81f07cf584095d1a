use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::analysis::{AmbiguousEntry, AnalysisResult, MatchedReimbursement};
use super::pipeline::PipelineStage;
use super::transaction::{Transaction, TransactionField, TransactionId, TransactionRecord};

/// In-memory working set for one reconciliation session.
///
/// Exactly one logical writer mutates a session at a time; every operation
/// runs to completion before returning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub matched: Vec<MatchedReimbursement>,
    #[serde(default)]
    pub ambiguous: Vec<AmbiguousEntry>,
    #[serde(default)]
    pub stage: PipelineStage,
    #[serde(default)]
    next_transaction_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            transactions: Vec::new(),
            matched: Vec::new(),
            ambiguous: Vec::new(),
            stage: PipelineStage::Upload,
            next_transaction_id: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Stores a record under a fresh identifier and returns it.
    ///
    /// The first stored transaction moves the pipeline out of `Upload`.
    pub fn add_transaction(&mut self, record: TransactionRecord) -> TransactionId {
        let id = self.next_id();
        self.transactions.push(Transaction::from_record(id, record));
        self.stage.advance_to(PipelineStage::Reconcile);
        self.touch();
        id
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_mut(&mut self, id: TransactionId) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|txn| txn.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Replaces a single field on the transaction with matching id.
    ///
    /// An unknown id is a silent no-op, never an error. Transactions are
    /// never deleted within a session.
    pub fn upsert_field(&mut self, id: TransactionId, field: TransactionField) {
        match self.transaction_mut(id) {
            Some(txn) => {
                txn.apply(field);
                self.touch();
            }
            None => tracing::debug!(%id, "upsert_field ignored unknown transaction"),
        }
    }

    /// Marks the externally-driven start of an analysis pass.
    pub fn begin_analysis(&mut self) {
        self.stage.advance_to(PipelineStage::Analyze);
        self.touch();
    }

    /// Installs a fresh analysis result, replacing the working set.
    ///
    /// Categorized rows are re-identified under fresh keys; previously
    /// issued ids are never reused. The stage moves straight to `Done`
    /// when nothing is left ambiguous, otherwise to `Resolve`.
    pub fn apply_analysis(&mut self, result: AnalysisResult) {
        let AnalysisResult {
            categorized,
            matched,
            ambiguous,
        } = result;
        let mut transactions = Vec::with_capacity(categorized.len());
        for record in categorized {
            let id = self.next_id();
            transactions.push(Transaction::from_record(id, record));
        }
        self.transactions = transactions;
        self.matched = matched;
        self.ambiguous = ambiguous;
        let next = if self.ambiguous.is_empty() {
            PipelineStage::Done
        } else {
            PipelineStage::Resolve
        };
        self.stage.advance_to(next);
        self.touch();
        tracing::info!(
            transactions = self.transactions.len(),
            matched = self.matched.len(),
            ambiguous = self.ambiguous.len(),
            "analysis result applied"
        );
    }

    pub fn pending_ambiguous(&self) -> usize {
        self.ambiguous.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn next_id(&mut self) -> TransactionId {
        let id = TransactionId(self.next_transaction_id);
        self.next_transaction_id += 1;
        id
    }
}
