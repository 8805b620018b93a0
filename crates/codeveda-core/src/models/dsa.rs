//! DSA problem sheet: steps contain lectures, lectures contain questions.

use serde::{Deserialize, Serialize};

/// Difficulty sentinel meaning "no filter".
pub const ALL_DIFFICULTIES: &str = "All";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct DsaSheet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub note: String,
    #[serde(rename = "totalQuestions", default)]
    pub total_questions: u32,
    #[serde(rename = "progressSummary", default)]
    pub progress_summary: ProgressSummary,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Per-tier totals as published in the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct ProgressSummary {
    #[serde(default)]
    pub easy: DifficultyTotals,
    #[serde(default)]
    pub medium: DifficultyTotals,
    #[serde(default)]
    pub hard: DifficultyTotals,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct DifficultyTotals {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub completed: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Step {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub lectures: Vec<Lecture>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Lecture {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Question {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(rename = "solveLink", default)]
    pub solve_link: String,
    #[serde(rename = "resourcePaid", default)]
    pub resource_paid: String,
    #[serde(rename = "resourceFree", default)]
    pub resource_free: String,
    #[serde(rename = "practiceLink", default)]
    pub practice_link: String,
    #[serde(rename = "notesLink", default)]
    pub notes_link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty label, ignoring case. Unknown labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl Question {
    pub fn difficulty_tier(&self) -> Option<Difficulty> {
        Difficulty::parse(&self.difficulty)
    }
}

impl DsaSheet {
    /// All questions in sheet order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.steps
            .iter()
            .flat_map(|step| step.lectures.iter())
            .flat_map(|lecture| lecture.questions.iter())
    }

    pub fn find_question(&self, id: u64) -> Option<&Question> {
        self.questions().find(|q| q.id == id)
    }

    /// Copy of the sheet keeping only questions whose name contains `query`
    /// (case-insensitive) and whose difficulty equals `difficulty` (or any,
    /// for `"All"`). Lectures and steps left empty are dropped.
    pub fn filter(&self, query: &str, difficulty: &str) -> DsaSheet {
        let query_lower = query.to_lowercase();
        let any_difficulty = difficulty.is_empty() || difficulty == ALL_DIFFICULTIES;

        let steps = self
            .steps
            .iter()
            .filter_map(|step| {
                let lectures: Vec<Lecture> = step
                    .lectures
                    .iter()
                    .filter_map(|lecture| {
                        let questions: Vec<Question> = lecture
                            .questions
                            .iter()
                            .filter(|q| {
                                q.name.to_lowercase().contains(&query_lower)
                                    && (any_difficulty || q.difficulty == difficulty)
                            })
                            .cloned()
                            .collect();
                        (!questions.is_empty()).then(|| Lecture {
                            questions,
                            ..lecture.clone()
                        })
                    })
                    .collect();
                (!lectures.is_empty()).then(|| Step {
                    lectures,
                    ..step.clone()
                })
            })
            .collect();

        DsaSheet {
            steps,
            ..self.clone()
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn question(id: u64, name: &str, difficulty: &str) -> Question {
        Question {
            id,
            name: name.to_string(),
            difficulty: difficulty.to_string(),
            ..Default::default()
        }
    }

    /// Two steps; step 1 has two lectures.
    pub fn sheet() -> DsaSheet {
        DsaSheet {
            title: "DSA Sheet".to_string(),
            total_questions: 6,
            steps: vec![
                Step {
                    id: 1,
                    title: "Basics".to_string(),
                    lectures: vec![
                        Lecture {
                            id: 1,
                            title: "Arrays".to_string(),
                            questions: vec![
                                question(1, "Two Sum", "Easy"),
                                question(2, "Largest Element", "Easy"),
                                question(3, "Trapping Rain Water", "Hard"),
                            ],
                        },
                        Lecture {
                            id: 2,
                            title: "Strings".to_string(),
                            questions: vec![question(4, "Reverse String", "Easy")],
                        },
                    ],
                },
                Step {
                    id: 2,
                    title: "Graphs".to_string(),
                    lectures: vec![Lecture {
                        id: 3,
                        title: "BFS".to_string(),
                        questions: vec![
                            question(5, "Number of Islands", "Medium"),
                            question(6, "Word Ladder", "hard"),
                        ],
                    }],
                },
            ],
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sheet;
    use super::*;

    #[test]
    fn test_parse_document() {
        let sheet: DsaSheet = serde_json::from_str(
            r#"{
                "title": "A2Z",
                "totalQuestions": 1,
                "progressSummary": {"easy": {"total": 1, "completed": 0}},
                "steps": [{"id": 1, "title": "Learn", "lectures": [
                    {"id": 1, "title": "Basics", "questions": [
                        {"id": 10, "name": "Print", "difficulty": "Easy", "solveLink": "https://x"}
                    ]}
                ]}]
            }"#,
        )
        .unwrap();
        assert_eq!(sheet.progress_summary.easy.total, 1);
        assert_eq!(sheet.find_question(10).unwrap().solve_link, "https://x");
    }

    #[test]
    fn test_difficulty_parse_ignores_case() {
        assert_eq!(Difficulty::parse("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse(" easy "), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse("Expert"), None);
    }

    #[test]
    fn test_filter_by_name_prunes_empty_groups() {
        let filtered = sheet().filter("string", "All");
        assert_eq!(filtered.steps.len(), 1);
        assert_eq!(filtered.steps[0].lectures.len(), 1);
        assert_eq!(filtered.steps[0].lectures[0].title, "Strings");
        assert_eq!(filtered.title, "DSA Sheet");
    }

    #[test]
    fn test_filter_by_difficulty_is_exact() {
        let filtered = sheet().filter("", "Hard");
        let ids: Vec<u64> = filtered.questions().map(|q| q.id).collect();
        // "hard" (lowercase) is not the same label
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_filter_all_keeps_everything() {
        assert_eq!(sheet().filter("", "All").questions().count(), 6);
    }
}
