use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A repository the user has starred, as consumed by the renderers.
/// Renderers only read these records; nothing here is mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct Star {
    pub full_name: Option<String>,
    #[serde(default)]
    pub stargazers: u32,
    pub language: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub starred_at: DateTime<Utc>,
}

/// A user-assigned label attached to a star. Display order follows
/// the order tags appear in the record.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub name: String,
}

impl Star {
    /// Name shown in the summary line; stars without a resolved
    /// full name render as an empty name segment rather than failing.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("")
    }
}
