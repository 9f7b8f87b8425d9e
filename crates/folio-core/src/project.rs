//! Portfolio project entries shown in the carousel.

use serde::Deserialize;

/// A single portfolio project, one carousel slide.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    /// Project title.
    pub title: String,
    /// Short description shown under the title.
    pub description: String,
    /// Link to the project, if it is public.
    #[serde(default)]
    pub url: Option<String>,
}
