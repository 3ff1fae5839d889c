use std::fmt;

use serde::{Deserialize, Serialize};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ErrorField {
    /// Path into the request location (e.g. `"prop.slice[2].a"`).
    pub field: String,
    /// Why the field was rejected.
    pub msg: String,
    /// Request location: `body`, `query`, `header`, `path`, `formData`.
    #[serde(rename = "in")]
    pub location: String,
}

impl ErrorField {
    /// Creates an `ErrorField` from its location, path, and message.
    pub fn new(
        location: impl Into<String>,
        field: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            msg: msg.into(),
            location: location.into(),
        }
    }
}

impl fmt::Display for ErrorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {} - {}", self.field, self.location, self.msg)
    }
}

/// An ordered list of [`ErrorField`]s.
///
/// Rendering sorts by field path but never reorders the list itself; call
/// [`ErrorFields::sort`] to reorder in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorFields(pub Vec<ErrorField>);

impl ErrorFields {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field to the end of the list.
    pub fn push(&mut self, field: ErrorField) {
        self.0.push(field);
    }

    /// Sorts the list in place, ascending by field path.
    pub fn sort(&mut self) {
        self.0.sort_by(|a, b| a.field.cmp(&b.field));
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ErrorField> {
        self.0.iter()
    }
}

impl From<Vec<ErrorField>> for ErrorFields {
    fn from(fields: Vec<ErrorField>) -> Self {
        Self(fields)
    }
}

impl FromIterator<ErrorField> for ErrorFields {
    fn from_iter<I: IntoIterator<Item = ErrorField>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<ErrorField> for ErrorFields {
    fn extend<I: IntoIterator<Item = ErrorField>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ErrorFields {
    type Item = &'a ErrorField;
    type IntoIter = std::slice::Iter<'a, ErrorField>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ErrorFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }

        let mut sorted: Vec<&ErrorField> = self.0.iter().collect();
        sorted.sort_by(|a, b| a.field.cmp(&b.field));

        f.write_str("<")?;
        for (i, field) in sorted.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        f.write_str(">")
    }
}
