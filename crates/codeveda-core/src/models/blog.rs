use serde::{Deserialize, Serialize};

use super::ContentId;
use crate::utils::contains_ignore_case;

/// Category sentinel meaning "no filter".
pub const ALL_CATEGORIES: &str = "All";

/// Badge color used when a post's category is not listed.
const DEFAULT_CATEGORY_COLOR: &str = "primary";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct BlogsDocument {
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub categories: Vec<BlogCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct BlogPost {
    #[serde(default)]
    pub id: ContentId,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "readTime", default)]
    pub read_time: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct BlogCategory {
    pub name: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub color: Option<String>,
}

impl BlogPost {
    fn matches_query(&self, query_lower: &str) -> bool {
        contains_ignore_case(&self.title, query_lower)
            || contains_ignore_case(&self.excerpt, query_lower)
            || contains_ignore_case(&self.content, query_lower)
            || contains_ignore_case(&self.category, query_lower)
            || self.tags.iter().any(|tag| contains_ignore_case(tag, query_lower))
    }

    /// Content split into paragraphs on blank lines, the way the reader lays it out.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// Posts whose title, excerpt, content, category or any tag contains `query`
/// (case-insensitive). A blank query returns every post. Input order is kept.
pub fn search_blogs(posts: &[BlogPost], query: &str) -> Vec<BlogPost> {
    if query.trim().is_empty() {
        return posts.to_vec();
    }
    let query_lower = query.to_lowercase();
    posts
        .iter()
        .filter(|post| post.matches_query(&query_lower))
        .cloned()
        .collect()
}

/// Posts whose category is exactly `category`. `"All"` (or empty) returns every post.
pub fn filter_blogs_by_category(posts: &[BlogPost], category: &str) -> Vec<BlogPost> {
    if category.is_empty() || category == ALL_CATEGORIES {
        return posts.to_vec();
    }
    posts
        .iter()
        .filter(|post| post.category == category)
        .cloned()
        .collect()
}

impl BlogsDocument {
    /// Category filter, then search, as the blog listing applies them.
    pub fn visible_posts(&self, query: &str, category: &str) -> Vec<BlogPost> {
        search_blogs(&filter_blogs_by_category(&self.posts, category), query)
    }

    pub fn featured_posts(&self) -> Vec<&BlogPost> {
        self.posts.iter().filter(|post| post.featured).collect()
    }

    pub fn find_post(&self, id: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.id.matches(id))
    }

    pub fn category_color(&self, category: &str) -> &str {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .and_then(|c| c.color.as_deref())
            .unwrap_or(DEFAULT_CATEGORY_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, category: &str, tags: &[&str]) -> BlogPost {
        BlogPost {
            title: title.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_search_case_insensitive_substring_in_order() {
        let posts = vec![
            post("Intro to Go", "Backend", &[]),
            post("Graphs 101", "DSA", &["algorithms"]),
            post("CSS Grid", "Web", &[]),
        ];
        let found = search_blogs(&posts, "go");
        let titles: Vec<_> = found.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Intro to Go", "Graphs 101"]);
    }

    #[test]
    fn test_search_blank_query_returns_input() {
        let posts = vec![post("B", "Web", &[]), post("A", "Web", &[])];
        assert_eq!(search_blogs(&posts, ""), posts);
        assert_eq!(search_blogs(&posts, "   "), posts);
    }

    #[test]
    fn test_search_checks_excerpt_content_and_category() {
        let mut with_excerpt = post("One", "Web", &[]);
        with_excerpt.excerpt = "Learn RUST fast".to_string();
        let mut with_content = post("Two", "Web", &[]);
        with_content.content = "all about rust".to_string();
        let by_category = post("Three", "Rustaceans", &[]);
        let miss = post("Four", "Web", &[]);

        let found = search_blogs(&[with_excerpt, with_content, by_category, miss], "Rust");
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_filter_by_category_exact() {
        let posts = vec![
            post("A", "Web", &[]),
            post("B", "web", &[]),
            post("C", "DSA", &[]),
        ];
        assert_eq!(filter_blogs_by_category(&posts, "All"), posts);
        let web = filter_blogs_by_category(&posts, "Web");
        assert_eq!(web.len(), 1);
        assert_eq!(web[0].title, "A");
    }

    #[test]
    fn test_document_helpers() {
        let doc: BlogsDocument = serde_json::from_str(
            r#"{
                "posts": [
                    {"id": 1, "title": "Hello", "category": "Web", "tags": ["intro"], "featured": true,
                     "readTime": "5 min", "content": "First.\n\nSecond."},
                    {"id": 2, "title": "Trees", "category": "DSA", "tags": []}
                ],
                "categories": [{"name": "Web", "count": 1, "color": "accent"}]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.featured_posts().len(), 1);
        assert_eq!(doc.find_post("2").unwrap().title, "Trees");
        assert_eq!(doc.category_color("Web"), "accent");
        assert_eq!(doc.category_color("DSA"), "primary");
        assert_eq!(doc.visible_posts("intro", "Web").len(), 1);
        assert_eq!(doc.visible_posts("intro", "DSA").len(), 0);
        let first = &doc.posts[0];
        assert_eq!(first.read_time, "5 min");
        assert_eq!(first.paragraphs().collect::<Vec<_>>(), vec!["First.", "Second."]);
    }
}
