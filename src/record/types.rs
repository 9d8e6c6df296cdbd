//! Record, person, and image types

use serde::{Deserialize, Serialize};

/// A catalog record (e.g. a museum object)
///
/// Every attribute is optional. Absent text renders as an empty string and
/// absent sequences render zero entries; see [`text`], [`Record::people`]
/// and [`Record::images`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub dated: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub creditline: Option<String>,
    #[serde(default)]
    pub culture: Option<String>,
    #[serde(default)]
    pub technique: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub people: Option<Vec<Person>>,
    #[serde(default)]
    pub images: Option<Vec<ImageRef>>,
    /// Single image URL, shared by every entry of `images`
    #[serde(default)]
    pub primaryimageurl: Option<String>,
}

/// A person credited on a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub displayname: Option<String>,
}

impl Person {
    /// Create a person with a display name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            displayname: Some(name.into()),
        }
    }
}

/// Opaque reference to one photo of a record
///
/// The view only counts these; their contents are never read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(serde_json::Value);

/// Text of an optional attribute, empty when absent
#[must_use]
pub fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or_default()
}

impl Record {
    /// Create an empty record with only a title
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Parse a single record from JSON
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the JSON is not an object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// People credited on this record; empty when absent
    #[must_use]
    pub fn people(&self) -> &[Person] {
        self.people.as_deref().unwrap_or_default()
    }

    /// Image references; empty when absent
    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        self.images.as_deref().unwrap_or_default()
    }

    /// Whether this record satisfies a `(term, value)` query
    ///
    /// When `term` names a searchable attribute (`culture`, `technique`,
    /// `medium`, `person`/`people`) only that attribute is compared. Any other
    /// term is treated as a display label and `value` is compared against
    /// every searchable attribute. Comparison ignores ASCII case.
    #[must_use]
    pub fn matches(&self, term: &str, value: &str) -> bool {
        let eq = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|v| v.eq_ignore_ascii_case(value))
        };
        let person = || self.people().iter().any(|p| eq(&p.displayname));

        match term.to_ascii_lowercase().as_str() {
            "culture" => eq(&self.culture),
            "technique" => eq(&self.technique),
            "medium" => eq(&self.medium),
            "person" | "people" => person(),
            _ => eq(&self.culture) || eq(&self.technique) || eq(&self.medium) || person(),
        }
    }
}
