//! Project input form.
//!
//! Holds the three raw field values, validates them on submit and hands
//! accepted values to the store.

mod field;

pub use field::TextInput;

use std::ops::Range;

use log::{info, warn};

use crate::config::FormConfig;
use crate::entry::Entry;
use crate::error::{BoardError, Field, Result};
use crate::store::Store;
use crate::template::{Host, InsertPosition, PROJECT_INPUT, build_from_template};
use crate::validator::{Validatable, coerce_number, validate};

/// Element id of the attached form.
pub const FORM_ELEMENT_ID: &str = "user-input";

/// Counts that convert to `i64` without clamping; `i64::MAX as f64` is 2^63, hence exclusive.
const COUNT_RANGE: Range<f64> = (i64::MIN as f64)..(i64::MAX as f64);

/// Values accepted by the form.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub title: String,
    pub description: String,
    pub count: i64,
}

/// The project input form.
#[derive(Debug)]
pub struct InputForm {
    rules: FormConfig,
    fields: [TextInput; 3],
    focus: Field,
}

fn index(field: Field) -> usize {
    match field {
        Field::Title => 0,
        Field::Description => 1,
        Field::Count => 2,
    }
}

impl InputForm {
    /// Create the form and attach it at the start of `host`.
    pub fn new(host: &mut Host, rules: FormConfig) -> Self {
        build_from_template(&PROJECT_INPUT, host, InsertPosition::AfterBegin, Some(FORM_ELEMENT_ID));
        Self {
            rules,
            fields: Default::default(),
            focus: Field::Title,
        }
    }

    pub fn rules(&self) -> &FormConfig {
        &self.rules
    }

    pub fn field(&self, field: Field) -> &TextInput {
        &self.fields[index(field)]
    }

    pub fn field_mut(&mut self, field: Field) -> &mut TextInput {
        &mut self.fields[index(field)]
    }

    /// Replace a field's raw value.
    pub fn set_field(&mut self, field: Field, value: &str) {
        self.field_mut(field).set(value);
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn focused_mut(&mut self) -> &mut TextInput {
        let focus = self.focus;
        self.field_mut(focus)
    }

    pub fn set_focus(&mut self, field: Field) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = Field::ALL[(index(self.focus) + 1) % Field::ALL.len()];
    }

    pub fn focus_prev(&mut self) {
        let len = Field::ALL.len();
        self.focus = Field::ALL[(index(self.focus) + len - 1) % len];
    }

    /// Read and validate the three fields.
    pub fn gather(&self) -> Result<Submission> {
        let title = self.field(Field::Title).content();
        let description = self.field(Field::Description).content();
        let raw_count = self.field(Field::Count).content();
        let count = coerce_number(raw_count);

        let checks = [
            (Field::Title, self.text_rule(title, self.rules.title_min_length, self.rules.title_max_length)),
            (
                Field::Description,
                self.text_rule(description, self.rules.description_min_length, self.rules.description_max_length),
            ),
            (Field::Count, self.count_rule(count)),
        ];
        if let Some((field, _)) = checks.iter().find(|(_, check)| !validate(check)) {
            return Err(BoardError::ValidationFailure { field: *field });
        }

        // Entry counts are i64: NaN, fractions and anything the cast would clamp are rejected
        if !COUNT_RANGE.contains(&count) || count.fract() != 0.0 {
            return Err(BoardError::ValidationFailure { field: Field::Count });
        }

        Ok(Submission {
            title: title.to_string(),
            description: description.to_string(),
            count: count as i64,
        })
    }

    fn text_rule(&self, value: &str, min_length: usize, max_length: Option<usize>) -> Validatable {
        let mut rule = Validatable::new(value).required().min_length(min_length);
        rule.max_length = max_length;
        rule
    }

    fn count_rule(&self, count: f64) -> Validatable {
        let mut rule = Validatable::new(count).required();
        rule.min = self.rules.count_min;
        rule.max = self.rules.count_max;
        rule
    }

    /// Validate, add to `store` and clear.
    ///
    /// On failure the store and the fields are left untouched.
    pub fn submit(&mut self, store: &mut Store) -> Result<Entry> {
        let submission = match self.gather() {
            Ok(submission) => submission,
            Err(e) => {
                warn!("Submission rejected: {:?}", e.field());
                return Err(e);
            }
        };

        let entry = store.add(submission.title, submission.description, submission.count);
        info!("Project {} added: {}", entry.id(), entry.title());
        self.clear();
        Ok(entry)
    }

    /// Empty every field and return focus to the title.
    pub fn clear(&mut self) {
        for field in self.fields.iter_mut() {
            field.clear();
        }
        self.focus = Field::Title;
    }
}
