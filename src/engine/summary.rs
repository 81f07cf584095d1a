//! Category-level spend/income aggregation with reimbursement offsetting.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::session::{MatchedReimbursement, Session, Transaction};

/// Category label applied when a transaction carries none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Categories counted as income when positive.
const INCOME_CATEGORIES: [&str; 2] = ["reimbursement", "salary"];

/// Derived per-category totals; recomputed on demand, never a source of
/// truth.
///
/// `net_income` is income minus the un-floored spend, so it can sit below
/// `-total_spend` when reimbursement offsets overshoot raw spending.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    pub by_category: BTreeMap<String, f64>,
    pub total_income: f64,
    pub total_spend: f64,
    pub net_income: f64,
}

impl CategorySummary {
    pub fn category_count(&self) -> usize {
        self.by_category.len()
    }

    /// Category/amount pairs ordered by descending amount, for display.
    pub fn sorted_entries(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .by_category
            .iter()
            .map(|(category, amount)| (category.as_str(), *amount))
            .collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        entries
    }
}

/// Computes spend/income summaries from the session working set.
pub struct SummaryService;

impl SummaryService {
    /// Summarizes a session's current transactions and matched
    /// reimbursements.
    pub fn compute_for(session: &Session) -> CategorySummary {
        Self::compute(&session.transactions, &session.matched)
    }

    /// Pure aggregation in three ordered phases: accumulate reimbursement
    /// offsets, accumulate raw transactions, then apply the offsets.
    ///
    /// A description credited through a matched reimbursement is never also
    /// counted as raw income in the same pass.
    pub fn compute(
        transactions: &[Transaction],
        matched: &[MatchedReimbursement],
    ) -> CategorySummary {
        let mut by_category: BTreeMap<String, f64> = BTreeMap::new();
        let mut income = 0.0;
        let mut spend = 0.0;

        let mut credited: HashSet<&str> = HashSet::new();
        let mut offsets: BTreeMap<String, f64> = BTreeMap::new();
        for entry in matched {
            let category = entry
                .expense_desc
                .as_deref()
                .and_then(|desc| transactions.iter().find(|txn| txn.description == desc))
                .map(|txn| category_label(&txn.category))
                .unwrap_or(UNCATEGORIZED);
            *offsets.entry(category.to_string()).or_insert(0.0) += entry.applied_amt;
            credited.insert(entry.transaction.description.as_str());
        }

        for txn in transactions {
            let category = category_label(&txn.category);
            let income_type = INCOME_CATEGORIES.contains(&category.to_lowercase().as_str());
            let already_credited = credited.contains(txn.description.as_str());

            if income_type && txn.amount > 0.0 && !already_credited {
                income += txn.amount;
                *by_category.entry(category.to_string()).or_insert(0.0) += txn.amount;
            }
            if !income_type && txn.amount < 0.0 {
                spend += txn.amount.abs();
                *by_category.entry(category.to_string()).or_insert(0.0) += txn.amount.abs();
            }
        }

        // The per-category subtraction only touches categories that already
        // accumulated a total; the global spend is reduced unconditionally.
        for (category, offset) in &offsets {
            if let Some(total) = by_category.get_mut(category) {
                *total -= offset;
            }
            spend -= offset;
        }

        CategorySummary {
            by_category,
            total_income: income,
            total_spend: spend.max(0.0),
            net_income: income - spend,
        }
    }
}

fn category_label(raw: &str) -> &str {
    if raw.is_empty() {
        UNCATEGORIZED
    } else {
        raw
    }
}
