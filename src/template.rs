//! Screen templates and the host they are attached to.
//!
//! A `Template` is a fixed structural shape. `build_from_template` clones that
//! shape into an `Element`, gives it an optional id and attaches it to the
//! `Host` at the start or the end. Components then fill the element's
//! slots (heading, list id). The TUI lays the host's elements out in order.

use log::debug;

/// Structural shape a template produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A form with labeled input fields.
    Form { fields: &'static [&'static str] },
    /// A heading above a list.
    List,
}

/// A named, static template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub shape: Shape,
}

/// Form template with the three project fields.
pub const PROJECT_INPUT: Template = Template {
    id: "project-input",
    shape: Shape::Form {
        fields: &["title", "description", "people"],
    },
};

/// List template: heading slot plus list slot.
pub const PROJECT_LIST: Template = Template {
    id: "project-list",
    shape: Shape::List,
};

/// Where a new element goes in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    AfterBegin,
    BeforeEnd,
}

/// One attached instance of a template.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: Option<String>,
    pub template: &'static str,
    pub shape: Shape,
    /// Heading slot (list shape only).
    pub heading: Option<String>,
    /// List slot id (list shape only).
    pub list_id: Option<String>,
}

/// The screen: an ordered set of attached elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Host {
    id: String,
    elements: Vec<Element>,
}

impl Host {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            elements: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Attached elements, top to bottom.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id.as_deref() == Some(id))
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id.as_deref() == Some(id))
    }

    fn insert(&mut self, element: Element, position: InsertPosition) {
        match position {
            InsertPosition::AfterBegin => self.elements.insert(0, element),
            InsertPosition::BeforeEnd => self.elements.push(element),
        }
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new("app")
    }
}

/// Clone `template` into a new element and attach it to `host`.
///
/// Returns a copy of the attached element.
pub fn build_from_template(
    template: &Template,
    host: &mut Host,
    position: InsertPosition,
    element_id: Option<&str>,
) -> Element {
    let element = Element {
        id: element_id.map(str::to_string),
        template: template.id,
        shape: template.shape,
        heading: None,
        list_id: None,
    };
    debug!(
        "Attaching '{}' as {:?} to host '{}' ({:?})",
        template.id, element.id, host.id, position
    );
    host.insert(element.clone(), position);
    element
}
