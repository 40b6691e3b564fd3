use std::collections::HashMap;

use crate::AnswerValue;

/// Error type for answer access operations.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for field: {0}")]
    MissingField(String),

    #[error("Type mismatch for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Collected answers for one form run.
///
/// The form is flat, so answers are keyed by plain field name. The map is
/// mutated one entry at a time as the user interacts with the form; nothing
/// is validated here.
#[derive(Debug, Clone, Default)]
pub struct Answers {
    values: HashMap<String, AnswerValue>,
}

impl Answers {
    /// Create a new empty answer map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer for the given field, replacing any previous one.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<AnswerValue>) {
        self.values.insert(field.into(), value.into());
    }

    /// Get the answer for the given field.
    pub fn get(&self, field: &str) -> Option<&AnswerValue> {
        self.values.get(field)
    }

    /// Check if an answer exists for the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Get an iterator over all field-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.values.iter()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Convenience accessors ===

    /// Get a text value for the given field.
    pub fn get_text(&self, field: &str) -> Result<&str, AnswerError> {
        match self.get(field) {
            Some(AnswerValue::Text(s)) => Ok(s),
            Some(other) => Err(AnswerError::TypeMismatch {
                field: field.to_string(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::MissingField(field.to_string())),
        }
    }

    /// Get an integer value for the given field.
    pub fn get_int(&self, field: &str) -> Result<i64, AnswerError> {
        match self.get(field) {
            Some(AnswerValue::Int(i)) => Ok(*i),
            Some(other) => Err(AnswerError::TypeMismatch {
                field: field.to_string(),
                expected: "Int",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::MissingField(field.to_string())),
        }
    }
}

impl IntoIterator for Answers {
    type Item = (String, AnswerValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a String, &'a AnswerValue);
    type IntoIter = std::collections::hash_map::Iter<'a, String, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut answers = Answers::new();
        answers.insert("mood", "happy");
        answers.insert("mood_intensity", AnswerValue::Int(7));

        assert_eq!(answers.get_text("mood").unwrap(), "happy");
        assert_eq!(answers.get_int("mood_intensity").unwrap(), 7);
    }

    #[test]
    fn insert_replaces() {
        let mut answers = Answers::new();
        answers.insert("mood", "sad");
        answers.insert("mood", "happy");

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get_text("mood").unwrap(), "happy");
    }

    #[test]
    fn type_mismatch_error() {
        let mut answers = Answers::new();
        answers.insert("sleep_quality", AnswerValue::Int(5));

        let result = answers.get_text("sleep_quality");
        assert!(matches!(result, Err(AnswerError::TypeMismatch { .. })));
    }

    #[test]
    fn missing_field_error() {
        let answers = Answers::new();
        assert!(matches!(
            answers.get_int("weather"),
            Err(AnswerError::MissingField(_))
        ));
    }
}
