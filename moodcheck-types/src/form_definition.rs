use crate::Field;

/// The top-level structure containing all fields and metadata for a form.
///
/// A form is an ordered list of field descriptors; a backend decides how the
/// controls are rendered and driven.
#[derive(Debug, Clone)]
pub struct FormDefinition {
    /// Title shown above the form.
    pub title: String,

    /// Optional introductory line shown under the title.
    pub intro: Option<String>,

    /// All fields, in display order.
    pub fields: Vec<Field>,
}

impl FormDefinition {
    /// Create a new form definition with the given title and fields.
    pub fn new(title: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            title: title.into(),
            intro: None,
            fields,
        }
    }

    /// Set the introductory line.
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = Some(intro.into());
        self
    }

    /// Get the fields.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the form has any fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
