use serde::{Deserialize, Serialize};

use super::ContentId;
use crate::utils::contains_ignore_case;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct ProjectsDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub categories: Vec<ProjectCategory>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct ProjectCategory {
    pub name: String,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Project {
    #[serde(default)]
    pub id: ContentId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// beginner / intermediate / advanced
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(rename = "githubLink", default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(rename = "demoLink", default, skip_serializing_if = "Option::is_none")]
    pub demo_link: Option<String>,
}

/// Projects matching the search text (name, description, technologies, tags),
/// difficulty (`"all"` for any) and category (`"All"` for any).
pub fn filter_projects<'a>(
    projects: &'a [Project],
    query: &str,
    difficulty: &str,
    category: &str,
) -> Vec<&'a Project> {
    let query_lower = query.to_lowercase();
    projects
        .iter()
        .filter(|p| {
            let matches_search = contains_ignore_case(&p.name, &query_lower)
                || contains_ignore_case(&p.description, &query_lower)
                || p.technologies.iter().any(|t| contains_ignore_case(t, &query_lower))
                || p.tags.iter().any(|t| contains_ignore_case(t, &query_lower));
            let matches_difficulty = difficulty == "all" || p.difficulty == difficulty;
            let matches_category = category == "All" || p.category == category;
            matches_search && matches_difficulty && matches_category
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_projects() {
        let projects: Vec<Project> = serde_json::from_str(
            r#"[
                {"id": 1, "name": "Todo App", "technologies": ["React"], "difficulty": "beginner", "category": "Web"},
                {"id": 2, "name": "Chat Server", "technologies": ["Rust", "Tokio"], "difficulty": "advanced", "category": "Backend",
                 "githubLink": "https://github.com/x/chat"},
                {"id": 3, "name": "Portfolio", "tags": ["react"], "difficulty": "beginner", "category": "Web"}
            ]"#,
        )
        .unwrap();

        assert_eq!(filter_projects(&projects, "react", "all", "All").len(), 2);
        assert_eq!(filter_projects(&projects, "", "advanced", "All")[0].name, "Chat Server");
        assert_eq!(filter_projects(&projects, "", "beginner", "Backend").len(), 0);
        assert_eq!(
            projects[1].github_link.as_deref(),
            Some("https://github.com/x/chat")
        );
    }
}
