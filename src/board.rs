//! The board: store, form and both list views wired together.
//!
//! `Board` is the single context object for a session. It is constructed
//! explicitly and passed to whatever drives it (the TUI or the headless
//! `submit` command).

use log::info;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::config::FormConfig;
use crate::entry::Entry;
use crate::error::Result;
use crate::form::InputForm;
use crate::store::Store;
use crate::template::Host;
use crate::view::{ListKind, ListView};

pub struct Board {
    store: Store,
    host: Host,
    form: InputForm,
    active: Rc<RefCell<ListView>>,
    finished: Rc<RefCell<ListView>>,
}

impl Board {
    /// Build the form, then the active and finished lists, and subscribe
    /// the lists to a fresh store.
    pub fn new(rules: FormConfig) -> Self {
        let mut store = Store::new();
        let mut host = Host::default();

        let form = InputForm::new(&mut host, rules);
        let active = Rc::new(RefCell::new(ListView::new(ListKind::Active, &mut host)));
        let finished = Rc::new(RefCell::new(ListView::new(ListKind::Finished, &mut host)));
        ListView::attach(&active, &mut store);
        ListView::attach(&finished, &mut store);

        info!("Board ready with {} element(s)", host.elements().len());
        Self {
            store,
            host,
            form,
            active,
            finished,
        }
    }

    /// Submit the form against this board's store.
    pub fn submit(&mut self) -> Result<Entry> {
        self.form.submit(&mut self.store)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut InputForm {
        &mut self.form
    }

    pub fn view(&self, kind: ListKind) -> Ref<'_, ListView> {
        match kind {
            ListKind::Active => self.active.borrow(),
            ListKind::Finished => self.finished.borrow(),
        }
    }

    /// Look up a list view by its element id.
    pub fn view_by_element(&self, element_id: &str) -> Option<Ref<'_, ListView>> {
        [ListKind::Active, ListKind::Finished]
            .into_iter()
            .find(|kind| kind.element_id() == element_id)
            .map(|kind| self.view(kind))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}
