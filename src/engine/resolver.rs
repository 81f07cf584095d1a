//! Resolution of ambiguous reimbursements into matched ones.

use crate::engine::EngineResult;
use crate::errors::EngineError;
use crate::session::{MatchedReimbursement, PipelineStage, Session};

/// Converts pending ambiguous entries into matched reimbursements.
pub struct ResolverService;

impl ResolverService {
    /// Resolves the ambiguous entry at `index` against `selected_group`.
    ///
    /// Removes exactly one entry from the pending set (remaining order
    /// preserved) and appends exactly one matched reimbursement crediting
    /// the transaction's full amount. Both arguments are checked before any
    /// mutation; a failed call leaves the session unchanged. Emptying the
    /// pending set advances the pipeline to `Done`.
    pub fn resolve(
        session: &mut Session,
        index: usize,
        selected_group: &str,
    ) -> EngineResult<()> {
        let pending = session.ambiguous.len();
        let entry = session
            .ambiguous
            .get(index)
            .ok_or(EngineError::InvalidIndex { index, pending })?;
        if !entry
            .possible_groups
            .iter()
            .any(|group| group == selected_group)
        {
            return Err(EngineError::UnknownGroup(selected_group.to_string()));
        }

        let entry = session.ambiguous.remove(index);
        session
            .matched
            .push(MatchedReimbursement::from_resolution(
                entry.transaction,
                selected_group,
            ));
        if session.ambiguous.is_empty() {
            session.stage.advance_to(PipelineStage::Done);
        }
        session.touch();
        tracing::info!(
            index,
            group = selected_group,
            remaining = session.pending_ambiguous(),
            "ambiguous reimbursement resolved"
        );
        Ok(())
    }
}
