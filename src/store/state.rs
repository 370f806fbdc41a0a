//! # Store State
//!
//! The observable state of a [`ResourceStore`](super::ResourceStore) and the transitions
//! that change it. Every method here is one transition; the store applies each inside a
//! single `send_modify`, so observers never see a half-applied one.
//!
//! Two views coexist:
//! - the shared flags (`is_loading`, `is_success`, `is_error`, `message`), written by every
//!   operation, last writer wins;
//! - [`Operations`], one [`OperationStatus`] per kind, written only by the newest request
//!   of that kind.

use super::transport::StoreItem;

/// Lifecycle of one kind of request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus<P> {
    Idle,
    Pending,
    Fulfilled(P),
    /// Carries the rejection message; never empty.
    Rejected(String),
}

impl<P> Default for OperationStatus<P> {
    fn default() -> Self {
        OperationStatus::Idle
    }
}

impl<P> OperationStatus<P> {
    pub fn is_pending(&self) -> bool {
        matches!(self, OperationStatus::Pending)
    }

    pub fn fulfilled(&self) -> Option<&P> {
        match self {
            OperationStatus::Fulfilled(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn rejected(&self) -> Option<&str> {
        match self {
            OperationStatus::Rejected(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Create,
    List,
    Delete,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OperationKind::Create => "create",
            OperationKind::List => "list",
            OperationKind::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Per-kind status. Payloads: the created item, the number of listed items, the deleted id.
#[derive(Debug, Clone, PartialEq)]
pub struct Operations<T: StoreItem> {
    pub create: OperationStatus<T>,
    pub list: OperationStatus<usize>,
    pub delete: OperationStatus<T::Id>,
}

impl<T: StoreItem> Default for Operations<T> {
    fn default() -> Self {
        Self {
            create: OperationStatus::Idle,
            list: OperationStatus::Idle,
            delete: OperationStatus::Idle,
        }
    }
}

/// Request id of the newest dispatch per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Latest {
    create: u64,
    list: u64,
    delete: u64,
}

impl Latest {
    fn slot(&mut self, kind: OperationKind) -> &mut u64 {
        match kind {
            OperationKind::Create => &mut self.create,
            OperationKind::List => &mut self.list,
            OperationKind::Delete => &mut self.delete,
        }
    }

    fn is_current(&self, kind: OperationKind, request_id: u64) -> bool {
        let latest = match kind {
            OperationKind::Create => self.create,
            OperationKind::List => self.list,
            OperationKind::Delete => self.delete,
        };
        latest == request_id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreState<T: StoreItem> {
    pub items: Vec<T>,
    pub is_loading: bool,
    pub is_success: bool,
    pub is_error: bool,
    pub message: String,
    pub operations: Operations<T>,
    latest: Latest,
}

impl<T: StoreItem> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            is_success: false,
            is_error: false,
            message: String::new(),
            operations: Operations::default(),
            latest: Latest::default(),
        }
    }
}

impl<T: StoreItem> StoreState<T> {
    /// Idle -> Pending.
    pub(crate) fn begin(&mut self, kind: OperationKind, request_id: u64) {
        self.is_loading = true;
        *self.latest.slot(kind) = request_id;
        match kind {
            OperationKind::Create => self.operations.create = OperationStatus::Pending,
            OperationKind::List => self.operations.list = OperationStatus::Pending,
            OperationKind::Delete => self.operations.delete = OperationStatus::Pending,
        }
    }

    /// Pending -> Fulfilled for a create: the item is appended.
    pub(crate) fn create_fulfilled(&mut self, request_id: u64, item: T) {
        self.succeed();
        if self.latest.is_current(OperationKind::Create, request_id) {
            self.operations.create = OperationStatus::Fulfilled(item.clone());
        }
        self.items.push(item);
    }

    /// Pending -> Fulfilled for a list: the items are replaced wholesale.
    pub(crate) fn list_fulfilled(&mut self, request_id: u64, items: Vec<T>) {
        self.succeed();
        if self.latest.is_current(OperationKind::List, request_id) {
            self.operations.list = OperationStatus::Fulfilled(items.len());
        }
        self.items = items;
    }

    /// Pending -> Fulfilled for a delete: every item with the payload's id goes.
    pub(crate) fn delete_fulfilled(&mut self, request_id: u64, id: T::Id) {
        self.succeed();
        self.items.retain(|item| item.id() != &id);
        if self.latest.is_current(OperationKind::Delete, request_id) {
            self.operations.delete = OperationStatus::Fulfilled(id);
        }
    }

    /// Pending -> Rejected. Items are untouched.
    pub(crate) fn rejected(&mut self, kind: OperationKind, request_id: u64, message: String) {
        self.is_loading = false;
        self.is_success = false;
        self.is_error = true;
        self.message = message.clone();
        if self.latest.is_current(kind, request_id) {
            match kind {
                OperationKind::Create => {
                    self.operations.create = OperationStatus::Rejected(message)
                }
                OperationKind::List => self.operations.list = OperationStatus::Rejected(message),
                OperationKind::Delete => {
                    self.operations.delete = OperationStatus::Rejected(message)
                }
            }
        }
    }

    /// Clears flags and statuses. Items stay.
    pub(crate) fn reset(&mut self) {
        self.is_loading = false;
        self.is_success = false;
        self.is_error = false;
        self.message.clear();
        self.operations = Operations::default();
    }

    fn succeed(&mut self) {
        self.is_loading = false;
        self.is_success = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
    }

    impl StoreItem for Note {
        type Id = String;

        fn id(&self) -> &String {
            &self.id
        }
    }

    fn note(id: &str) -> Note {
        Note { id: id.to_string() }
    }

    #[test]
    fn test_transitions_follow_the_flag_table() {
        let mut state = StoreState::<Note>::default();

        state.begin(OperationKind::Create, 1);
        assert!(state.is_loading);
        assert!(state.operations.create.is_pending());
        assert!(state.items.is_empty());

        state.create_fulfilled(1, note("g1"));
        assert!(!state.is_loading);
        assert!(state.is_success);
        assert_eq!(state.items, vec![note("g1")]);
        assert_eq!(state.operations.create.fulfilled(), Some(&note("g1")));

        state.begin(OperationKind::Delete, 2);
        state.rejected(OperationKind::Delete, 2, "Goal not found".into());
        assert!(!state.is_loading);
        assert!(!state.is_success);
        assert!(state.is_error);
        assert_eq!(state.message, "Goal not found");
        assert_eq!(state.items, vec![note("g1")]);
        assert_eq!(state.operations.delete.rejected(), Some("Goal not found"));
    }

    #[test]
    fn test_each_kind_records_its_own_rejection() {
        let mut state = StoreState::<Note>::default();
        state.begin(OperationKind::Create, 1);
        state.begin(OperationKind::List, 2);
        state.begin(OperationKind::Delete, 3);

        state.rejected(OperationKind::Create, 1, "create failed".into());
        state.rejected(OperationKind::List, 2, "list failed".into());
        state.rejected(OperationKind::Delete, 3, "delete failed".into());

        assert_eq!(state.operations.create.rejected(), Some("create failed"));
        assert_eq!(state.operations.list.rejected(), Some("list failed"));
        assert_eq!(state.operations.delete.rejected(), Some("delete failed"));
        assert_eq!(state.message, "delete failed");
    }

    #[test]
    fn test_reset_keeps_items() {
        let mut state = StoreState::<Note>::default();
        state.begin(OperationKind::List, 1);
        state.list_fulfilled(1, vec![note("g1"), note("g2")]);
        state.begin(OperationKind::Create, 2);
        state.rejected(OperationKind::Create, 2, "boom".into());

        state.reset();
        assert!(!state.is_loading && !state.is_success && !state.is_error);
        assert_eq!(state.message, "");
        assert_eq!(state.operations, Operations::default());
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_stale_completion_leaves_newer_status_alone() {
        let mut state = StoreState::<Note>::default();
        state.begin(OperationKind::List, 1);
        state.begin(OperationKind::List, 2);

        state.list_fulfilled(2, vec![note("g2")]);
        state.rejected(OperationKind::List, 1, "timeout".into());

        assert_eq!(state.operations.list, OperationStatus::Fulfilled(1));
        assert!(state.is_error);
        assert_eq!(state.items, vec![note("g2")]);
    }

    #[test]
    fn test_delete_removes_only_payload_id() {
        let mut state = StoreState::<Note>::default();
        state.list_fulfilled(1, vec![note("g1"), note("g2"), note("g3")]);
        state.begin(OperationKind::Delete, 2);
        state.delete_fulfilled(2, "g2".to_string());
        assert_eq!(state.items, vec![note("g1"), note("g3")]);
    }
}
