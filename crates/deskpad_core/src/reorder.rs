//! Drag-reorder planning.
//!
//! # Responsibility
//! - Track the active drag between gesture start and drop.
//! - Translate a drop onto a target item into a full id sequence for
//!   [`crate::store::todo_store::TodoStore::reorder`].
//!
//! # Invariants
//! - A drop without a recorded active drag plans nothing.
//! - Planning never produces a sequence that gains or loses ids.

use crate::model::todo::TodoId;
use log::debug;

/// Translates drag gestures into new total orderings.
///
/// One engine instance is owned per session; the UI reports gesture
/// boundaries through [`ReorderEngine::begin_drag`] / [`ReorderEngine::end_drag`].
#[derive(Debug, Default)]
pub struct ReorderEngine {
    active: Option<TodoId>,
}

impl ReorderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the item picked up by the current drag gesture.
    pub fn begin_drag(&mut self, id: TodoId) {
        self.active = Some(id);
    }

    /// Clears the active drag; fired when the gesture ends, dropped or not.
    pub fn end_drag(&mut self) {
        self.active = None;
    }

    /// Returns the item currently being dragged, if any.
    pub fn active_drag(&self) -> Option<TodoId> {
        self.active
    }

    /// Plans the id sequence resulting from dropping `dragged_id` onto
    /// `target_id`, given the current canonical order.
    ///
    /// Returns `None` (silent abort) when no drag is active, when the
    /// recorded drag does not match `dragged_id`, when dragged and target are
    /// the same item, or when either id is not present in `ordered_ids`.
    ///
    /// The dragged id is removed and reinserted at the target's pre-removal
    /// index, which lands immediately after the target when moving
    /// forward/downward and immediately before it when moving backward/upward.
    pub fn plan_drop(
        &self,
        ordered_ids: &[TodoId],
        dragged_id: TodoId,
        target_id: TodoId,
    ) -> Option<Vec<TodoId>> {
        let Some(active) = self.active else {
            debug!("event=reorder_plan module=reorder status=skip reason=no_active_drag");
            return None;
        };
        if active != dragged_id {
            debug!(
                "event=reorder_plan module=reorder status=skip reason=drag_mismatch active={active} dragged={dragged_id}"
            );
            return None;
        }
        if dragged_id == target_id {
            return None;
        }

        let dragged_index = ordered_ids.iter().position(|id| *id == dragged_id)?;
        let target_index = ordered_ids.iter().position(|id| *id == target_id)?;

        let mut sequence = ordered_ids.to_vec();
        sequence.remove(dragged_index);
        sequence.insert(target_index, dragged_id);
        Some(sequence)
    }
}
