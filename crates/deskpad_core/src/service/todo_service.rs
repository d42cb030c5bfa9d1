//! Todo use-case service: semantic UI events in, rendered view out.
//!
//! # Responsibility
//! - Own the item store, the reorder engine and the active filter for one
//!   session.
//! - Apply one semantic event at a time and hand back the filtered, ordered
//!   sequence to render.
//!
//! # Invariants
//! - Boundary rejections (empty titles, unknown ids, invalid drags) are
//!   silent no-ops; the returned view always reflects current store state.

use crate::filter::{self, FilterMode};
use crate::model::todo::{TodoId, TodoItem};
use crate::reorder::ReorderEngine;
use crate::store::blob::BlobStore;
use crate::store::todo_store::{StoreResult, TodoStore};
use chrono::NaiveDate;
use log::debug;

/// Semantic UI event consumed by the todo core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoEvent {
    SubmitNewItem {
        title: String,
        due_date: Option<NaiveDate>,
    },
    ToggleComplete {
        id: TodoId,
        checked: bool,
    },
    EditTitle {
        id: TodoId,
        new_title: String,
    },
    DeleteItem {
        id: TodoId,
    },
    DragStart {
        id: TodoId,
    },
    DragEnd,
    DragDrop {
        dragged_id: TodoId,
        target_id: TodoId,
    },
    SetFilter(FilterMode),
}

/// Session-scoped todo component: store + reorder engine + active filter.
pub struct TodoService<B: BlobStore> {
    store: TodoStore<B>,
    reorder: ReorderEngine,
    filter: FilterMode,
}

impl<B: BlobStore> TodoService<B> {
    /// Creates the service and loads persisted state once.
    ///
    /// # Errors
    /// Only blob transport failures propagate; malformed persisted data is
    /// recovered as an empty collection inside the store.
    pub fn new(blob: B) -> StoreResult<Self> {
        let mut store = TodoStore::new(blob);
        store.load()?;
        Ok(Self {
            store,
            reorder: ReorderEngine::new(),
            filter: FilterMode::default(),
        })
    }

    /// Applies one semantic event and returns the view to render.
    pub fn handle(&mut self, event: TodoEvent) -> StoreResult<Vec<TodoItem>> {
        match event {
            TodoEvent::SubmitNewItem { title, due_date } => {
                let title = title.trim();
                if title.is_empty() {
                    debug!("event=todo_submit module=service status=skip reason=empty_title");
                } else {
                    self.store.add(TodoItem::new(title, due_date))?;
                }
            }
            TodoEvent::ToggleComplete { id, checked } => {
                if let Some(mut item) = self.store.get_by_id(id) {
                    item.completed = checked;
                    self.store.update(item)?;
                }
            }
            TodoEvent::EditTitle { id, new_title } => {
                self.edit_title(id, &new_title)?;
            }
            TodoEvent::DeleteItem { id } => {
                self.store.remove(id)?;
            }
            TodoEvent::DragStart { id } => {
                self.reorder.begin_drag(id);
            }
            TodoEvent::DragEnd => {
                self.reorder.end_drag();
            }
            TodoEvent::DragDrop {
                dragged_id,
                target_id,
            } => {
                // Reorder always plans against the full canonical order, not
                // the filtered projection.
                let ordered_ids: Vec<TodoId> =
                    self.store.get_all().iter().map(|item| item.id).collect();
                if let Some(sequence) = self.reorder.plan_drop(&ordered_ids, dragged_id, target_id)
                {
                    self.store.reorder(&sequence)?;
                }
            }
            TodoEvent::SetFilter(mode) => {
                self.filter = mode;
            }
        }
        Ok(self.view())
    }

    /// Returns the filtered, ordered sequence for the active filter.
    pub fn view(&self) -> Vec<TodoItem> {
        filter::apply(&self.store.get_all(), self.filter)
    }

    /// Active filter mode.
    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &TodoStore<B> {
        &self.store
    }

    /// An edit that trims to empty, or targets an unknown id, reverts to the
    /// stored title; an unchanged title skips the write.
    fn edit_title(&mut self, id: TodoId, new_title: &str) -> StoreResult<()> {
        let new_title = new_title.trim();
        if new_title.is_empty() {
            debug!("event=todo_edit module=service status=skip reason=empty_title id={id}");
            return Ok(());
        }
        let Some(mut item) = self.store.get_by_id(id) else {
            return Ok(());
        };
        if item.title == new_title {
            return Ok(());
        }
        item.title = new_title.to_string();
        self.store.update(item)
    }
}
