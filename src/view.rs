//! Filtered list views.
//!
//! A `ListView` shows the entries of one status. It is attached to a store
//! through an explicit closure and rebuilds its whole list on every store
//! event.

use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

use crate::entry::{Entry, EntryStatus};
use crate::store::{Snapshot, Store, StoreEvent};
use crate::template::{Host, InsertPosition, PROJECT_LIST, build_from_template};

/// Which entries a list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Active,
    Finished,
}

impl ListKind {
    pub fn status(self) -> EntryStatus {
        match self {
            ListKind::Active => EntryStatus::Active,
            ListKind::Finished => EntryStatus::Finished,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ListKind::Active => "active",
            ListKind::Finished => "finished",
        }
    }

    /// Id of the element this list is attached as.
    pub fn element_id(self) -> String {
        format!("{}-projects", self.name())
    }

    /// Id of the list slot.
    pub fn list_id(self) -> String {
        format!("{}-project-list", self.name())
    }

    /// Static heading text.
    pub fn heading(self) -> String {
        format!("{} PROJECTS", self.name().to_uppercase())
    }
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub entry_id: String,
    pub text: String,
}

/// A list of entries filtered by status.
#[derive(Debug)]
pub struct ListView {
    kind: ListKind,
    element_id: String,
    assigned: Vec<Entry>,
    rendered: Vec<ListItem>,
    render_count: usize,
}

impl ListView {
    /// Create the view and attach its element to the end of `host`.
    pub fn new(kind: ListKind, host: &mut Host) -> Self {
        let element_id = kind.element_id();
        build_from_template(&PROJECT_LIST, host, InsertPosition::BeforeEnd, Some(&element_id));
        if let Some(element) = host.element_mut(&element_id) {
            element.list_id = Some(kind.list_id());
            element.heading = Some(kind.heading());
        }

        Self {
            kind,
            element_id,
            assigned: Vec::new(),
            rendered: Vec::new(),
            render_count: 0,
        }
    }

    /// Subscribe `view` to `store`.
    pub fn attach(view: &Rc<RefCell<ListView>>, store: &mut Store) {
        let view = Rc::clone(view);
        store.subscribe(move |event: &StoreEvent| view.borrow_mut().handle(event));
    }

    /// React to a store event.
    pub fn handle(&mut self, event: &StoreEvent) {
        match event {
            StoreEvent::Added { snapshot, .. } => self.apply(snapshot),
        }
    }

    /// Replace the assigned entries with the matching part of `snapshot`.
    pub fn apply(&mut self, snapshot: &Snapshot) {
        self.assigned = snapshot.with_status(self.kind.status()).cloned().collect();
        self.render();
    }

    fn render(&mut self) {
        self.rendered.clear();
        for entry in &self.assigned {
            self.rendered.push(ListItem {
                entry_id: entry.id().to_string(),
                text: entry.title().to_string(),
            });
        }
        self.render_count += 1;
        debug!(
            "Rendered {} ({} item(s), render #{})",
            self.element_id,
            self.rendered.len(),
            self.render_count
        );
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn heading(&self) -> String {
        self.kind.heading()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.assigned
    }

    pub fn items(&self) -> &[ListItem] {
        &self.rendered
    }

    /// Number of full rebuilds so far.
    pub fn render_count(&self) -> usize {
        self.render_count
    }
}
