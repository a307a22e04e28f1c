use serde::{Deserialize, Serialize};

pub type ColumnSlug = String;

/// Describes a column to be (re)computed by the transform engine.
///
/// `transform` holds a directive such as `"rollingAverage day entityName cases 7"`; definitions
/// without one describe source columns and are ignored by the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    pub slug: ColumnSlug,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

impl ColumnDef {
    pub fn new(slug: impl Into<ColumnSlug>) -> Self {
        Self {
            slug: slug.into(),
            ..Self::default()
        }
    }

    pub fn with_transform(slug: impl Into<ColumnSlug>, transform: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: None,
            transform: Some(transform.into()),
        }
    }

    /// The directive, if present and not blank.
    pub fn directive(&self) -> Option<&str> {
        self.transform
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
