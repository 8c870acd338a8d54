use serde::{Deserialize, Serialize};

/// A named person. Equality is value equality over both fields,
/// case-sensitive and exact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn first_name_starts_with(&self, prefix: &str) -> bool {
        self.first_name.starts_with(prefix)
    }
}

/// Coalesce an optional person down to a first name, falling through to
/// `fallback` when the person is absent.
pub fn first_name_or<'a>(person: Option<&'a Person>, fallback: &'a str) -> &'a str {
    person.map(|p| p.first_name.as_str()).unwrap_or(fallback)
}
