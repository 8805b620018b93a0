use serde::{Deserialize, Serialize};

use super::ContentId;
use crate::utils::contains_ignore_case;

/// Type sentinel meaning "no filter".
pub const ALL_TYPES: &str = "all";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct ResourcesDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Resource {
    #[serde(default)]
    pub id: ContentId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Resources whose name, description or a tag contains `query`
/// (case-insensitive) and whose type equals `kind` (`"all"` for any).
pub fn filter_resources<'a>(resources: &'a [Resource], query: &str, kind: &str) -> Vec<&'a Resource> {
    let query_lower = query.to_lowercase();
    resources
        .iter()
        .filter(|r| {
            let matches_search = contains_ignore_case(&r.name, &query_lower)
                || contains_ignore_case(&r.description, &query_lower)
                || r.tags.iter().any(|tag| contains_ignore_case(tag, &query_lower));
            let matches_type = kind == ALL_TYPES || r.kind == kind;
            matches_search && matches_type
        })
        .collect()
}

/// Distinct resource types in first-seen order.
pub fn resource_types(resources: &[Resource]) -> Vec<&str> {
    let mut types: Vec<&str> = Vec::new();
    for r in resources {
        if !types.contains(&r.kind.as_str()) {
            types.push(&r.kind);
        }
    }
    types
}
