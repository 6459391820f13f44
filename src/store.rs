//! In-memory entry store with synchronous change notification.
//!
//! The store owns the ordered entry list and an append-only list of
//! listeners. Every `add` appends one entry and then calls each listener,
//! in registration order, before returning. Each listener gets its own
//! copy of the snapshot.

use log::debug;
use std::fmt;

use crate::entry::{Entry, EntryStatus};
use crate::id::generate_entry_id;

/// Immutable copy of all entries at a point in time, in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    entries: Vec<Entry>,
}

impl Snapshot {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently added entry.
    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Entries with the given status, in original order.
    pub fn with_status(&self, status: EntryStatus) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(move |e| e.status() == status)
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

/// Events emitted by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// An entry was appended. `snapshot` already contains it.
    Added { entry: Entry, snapshot: Snapshot },
}

impl StoreEvent {
    pub fn snapshot(&self) -> &Snapshot {
        match self {
            StoreEvent::Added { snapshot, .. } => snapshot,
        }
    }
}

/// A registered store listener.
pub type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Ordered entry collection plus its listeners.
#[derive(Default)]
pub struct Store {
    entries: Vec<Entry>,
    listeners: Vec<Listener>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("entries", &self.entries)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every future change.
    ///
    /// Listeners are never de-duplicated or removed.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
        debug!("Store listener registered ({} total)", self.listeners.len());
    }

    /// Append a new active entry and notify every listener.
    ///
    /// No validation happens here; callers pass already-checked values.
    pub fn add(&mut self, title: impl Into<String>, description: impl Into<String>, count: i64) -> Entry {
        let id = generate_entry_id(self.entries.len() as u64);
        let entry = Entry::new(id, title, description, count, EntryStatus::Active);
        self.entries.push(entry.clone());
        debug!(
            "Entry {} added, notifying {} listener(s)",
            entry.id(),
            self.listeners.len()
        );

        for listener in self.listeners.iter_mut() {
            let event = StoreEvent::Added {
                entry: entry.clone(),
                snapshot: Snapshot::new(self.entries.clone()),
            };
            listener(&event);
        }

        entry
    }

    /// Copy of the current entries.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.entries.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}
