//! Typed schemas for the site's content documents.
//!
//! The cache itself is shape-agnostic; each page decodes its document into
//! one of these types at the point of use:
//!
//! - `HomeDocument`: hero, highlights, social links
//! - `DsaSheet`: steps → lectures → questions for the DSA tracker
//! - `BlogsDocument`: posts and categories, with search/category filters
//! - `ResourcesDocument`, `ProjectsDocument`: catalogs with filters
//! - `RoadmapsDocument`: career roadmaps and beginner guides
//! - `ContactDocument`, `ContactForm`: contact page content and the form

pub mod blog;
pub mod contact;
pub mod dsa;
pub mod home;
pub mod project;
pub mod resource;
pub mod roadmap;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use blog::{
    filter_blogs_by_category, search_blogs, BlogCategory, BlogPost, BlogsDocument, ALL_CATEGORIES,
};
pub use contact::{
    BusinessOpportunities, CommunityStats, ContactDocument, ContactError, ContactForm, ContactInfo,
    Opportunity, SubmissionReceipt,
};
pub use dsa::{
    Difficulty, DifficultyTotals, DsaSheet, Lecture, ProgressSummary, Question, Step,
    ALL_DIFFICULTIES,
};
pub use home::{Hero, Highlight, HomeDocument, SocialLink};
pub use project::{filter_projects, Project, ProjectCategory, ProjectsDocument};
pub use resource::{filter_resources, resource_types, Resource, ResourcesDocument, ALL_TYPES};
pub use roadmap::{
    BeginnerGuide, CareerRoadmap, DetailedPath, GuideContent, GuideSection, PathResource,
    RoadmapPhase, RoadmapResource, RoadmapsDocument, GUIDE_PREVIEW_STEPS,
};

/// Names of the documents served under `/data/<key>.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKey {
    Home,
    Dsa,
    Blogs,
    Resources,
    Projects,
    Roadmaps,
    Contact,
}

impl ContentKey {
    pub const ALL: [ContentKey; 7] = [
        ContentKey::Home,
        ContentKey::Dsa,
        ContentKey::Blogs,
        ContentKey::Resources,
        ContentKey::Projects,
        ContentKey::Roadmaps,
        ContentKey::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKey::Home => "home",
            ContentKey::Dsa => "dsa",
            ContentKey::Blogs => "blogs",
            ContentKey::Resources => "resources",
            ContentKey::Projects => "projects",
            ContentKey::Roadmaps => "roadmaps",
            ContentKey::Contact => "contact",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == s)
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Content ids are numbers in some documents and slugs in others.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(untagged)]
pub enum ContentId {
    Number(u64),
    Text(String),
}

impl Default for ContentId {
    fn default() -> Self {
        ContentId::Text(String::new())
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentId::Number(n) => write!(f, "{}", n),
            ContentId::Text(s) => f.write_str(s),
        }
    }
}

impl ContentId {
    /// Match against user input, e.g. a route parameter.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ContentId::Number(n) => raw.trim().parse::<u64>().map(|r| r == *n).unwrap_or(false),
            ContentId::Text(s) => s == raw,
        }
    }
}
