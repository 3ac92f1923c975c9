//! Audit message records (`errors`, `info`, `warning`).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A single `{code, description}` record carried in an audit list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Meta {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}

impl Meta {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

/// Wire wrapper `{"items": [...]}` around a list of [`Meta`] records.
///
/// Renders as `[code]: description` entries joined by `", "`, in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MetaList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Meta>,
}

impl MetaList {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn push(&mut self, meta: Meta) {
        self.items.push(meta);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Meta> {
        self.items.iter()
    }
}

impl From<Vec<Meta>> for MetaList {
    fn from(items: Vec<Meta>) -> Self {
        Self { items }
    }
}

impl fmt::Display for MetaList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, meta) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}]: {}", meta.code, meta.description)?;
        }
        Ok(())
    }
}

/// Decode an explicit JSON `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
