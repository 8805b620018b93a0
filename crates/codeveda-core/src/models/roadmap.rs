use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct RoadmapsDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "careerRoadmaps", default)]
    pub career_roadmaps: Vec<CareerRoadmap>,
    #[serde(rename = "beginnerGuides", default)]
    pub beginner_guides: Vec<BeginnerGuide>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct CareerRoadmap {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub resources: Vec<RoadmapResource>,
    #[serde(rename = "detailedPath", default, skip_serializing_if = "Option::is_none")]
    pub detailed_path: Option<DetailedPath>,
}

/// Resources grouped by learning phase, e.g. "Foundations": ["HTML", "CSS"].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct RoadmapResource {
    pub phase: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct DetailedPath {
    #[serde(default)]
    pub phases: Vec<RoadmapPhase>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct RoadmapPhase {
    pub title: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub resources: Vec<PathResource>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct PathResource {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct BeginnerGuide {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "authorTitle", default)]
    pub author_title: String,
    #[serde(rename = "readTime", default)]
    pub read_time: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(rename = "detailedContent", default, skip_serializing_if = "Option::is_none")]
    pub detailed_content: Option<GuideContent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct GuideContent {
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    pub sections: Vec<GuideSection>,
    #[serde(default)]
    pub conclusion: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct GuideSection {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Number of guide steps shown on a roadmap card before "+N more steps".
pub const GUIDE_PREVIEW_STEPS: usize = 4;

impl RoadmapsDocument {
    pub fn find_guide(&self, id: &str) -> Option<&BeginnerGuide> {
        self.beginner_guides.iter().find(|g| g.id == id)
    }

    pub fn find_roadmap(&self, id: &str) -> Option<&CareerRoadmap> {
        self.career_roadmaps.iter().find(|r| r.id == id)
    }
}

impl BeginnerGuide {
    /// The first few steps plus how many were left out.
    pub fn step_preview(&self) -> (&[String], usize) {
        let shown = self.steps.len().min(GUIDE_PREVIEW_STEPS);
        (&self.steps[..shown], self.steps.len() - shown)
    }
}
