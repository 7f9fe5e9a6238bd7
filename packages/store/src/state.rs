//! # Application state: the record list and the create/edit form
//!
//! [`AppState`] is the single value the UI renders from. It is owned by a
//! [`crate::RecordManager`] and only changes through the manager's methods.
//!
//! The form is a two-mode buffer:
//!
//! ```text
//!            begin_edit(record)
//!   Create ─────────────────────▶ Edit { target_id }
//!      ▲                              │
//!      └──────────────────────────────┘
//!        cancel_edit() / successful submit()
//! ```

use crate::models::{NewRecord, Record};

/// Default text shown when a submit is rejected because a field is blank.
///
/// Overridden by `[messages] missing_fields` in `records.toml`.
pub const MISSING_FIELDS_ALERT: &str = "Barcha maydonlarni to‘ldiring!";

/// Whether the form creates a new row or updates an existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        /// Id of the record being edited, captured when editing began.
        target_id: i64,
    },
}

/// One of the four editable fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Age,
    Email,
    Logo,
}

impl FormField {
    pub const ALL: [FormField; 4] = [Self::Name, Self::Age, Self::Email, Self::Logo];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Age => "Age",
            Self::Email => "Email",
            Self::Logo => "Logo",
        }
    }
}

/// Transient create/edit buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub age: String,
    pub email: String,
    pub logo_path: String,
    pub mode: FormMode,
    /// True while a remote operation is in flight.
    pub busy: bool,
}

impl FormState {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Age => &self.age,
            FormField::Email => &self.email,
            FormField::Logo => &self.logo_path,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Age => self.age = value,
            FormField::Email => self.email = value,
            FormField::Logo => self.logo_path = value,
        }
    }

    /// Fields that are still empty. Whitespace counts as content.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .collect()
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// Load a record into the form and switch to edit mode.
    pub fn begin_edit(&mut self, record: &Record) {
        self.name = record.name.clone();
        self.age = record.age.clone();
        self.email = record.email.clone();
        self.logo_path = record.logo_path.clone();
        self.mode = FormMode::Edit {
            target_id: record.id,
        };
    }

    /// Back to create mode with empty fields. The busy flag is left alone.
    pub fn reset(&mut self) {
        *self = Self {
            busy: self.busy,
            ..Self::default()
        };
    }

    pub fn to_new_record(&self) -> NewRecord {
        NewRecord {
            name: self.name.clone(),
            age: self.age.clone(),
            email: self.email.clone(),
            logo_path: self.logo_path.clone(),
        }
    }
}

/// Everything the page renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    /// Last successfully loaded copy of the remote table.
    pub records: Vec<Record>,
    pub form: FormState,
    /// Pending user-facing alert, cleared once the UI shows it.
    pub alert: Option<String>,
}
