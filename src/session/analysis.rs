use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

use super::transaction::TransactionRecord;

/// A reimbursement credited against a specific group expense.
///
/// Created either by the external matcher (auto-matched) or by the resolver
/// once the user picks a target. Matched entries accumulate for the rest of
/// the session; they are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchedReimbursement {
    #[serde(flatten)]
    pub transaction: TransactionRecord,
    pub applied_amt: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_desc: Option<String>,
}

impl MatchedReimbursement {
    /// Credits the full reimbursement amount against the selected group
    /// expense. Partial allocation is not supported.
    pub fn from_resolution(
        transaction: TransactionRecord,
        selected_group: impl Into<String>,
    ) -> Self {
        let applied_amt = transaction.amount;
        Self {
            transaction,
            applied_amt,
            expense_date: None,
            expense_desc: Some(selected_group.into()),
        }
    }
}

/// A reimbursement the matcher could not attribute to a single group
/// expense. Removed from the pending set exactly when resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AmbiguousEntry {
    pub transaction: TransactionRecord,
    #[serde(rename = "possibleGroups")]
    pub possible_groups: Vec<String>,
    #[serde(
        rename = "selectedGroup",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_group: Option<String>,
}

impl AmbiguousEntry {
    pub fn new(transaction: TransactionRecord, possible_groups: Vec<String>) -> Self {
        Self {
            transaction,
            possible_groups,
            selected_group: None,
        }
    }
}

/// Output of one external analysis pass, replaced wholesale per run.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AnalysisResult {
    #[serde(default)]
    pub categorized: Vec<TransactionRecord>,
    #[serde(default)]
    pub matched: Vec<MatchedReimbursement>,
    #[serde(default)]
    pub ambiguous: Vec<AmbiguousEntry>,
}

impl AnalysisResult {
    pub fn from_json(payload: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn is_fully_matched(&self) -> bool {
        self.ambiguous.is_empty()
    }
}
