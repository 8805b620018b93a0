use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct HomeDocument {
    #[serde(default)]
    pub hero: Hero,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(rename = "socialLinks", default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Hero {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cta: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Highlight {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

/// Community link shown on the home and contact pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<String>,
}

impl SocialLink {
    /// Audience size, whichever of followers/members the document provides.
    pub fn audience(&self) -> Option<&str> {
        self.followers.as_deref().or(self.members.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_home() {
        let home: HomeDocument = serde_json::from_str(
            r#"{
                "hero": {"title": "Codeveda", "tagline": "Learn", "description": "d", "cta": "Start"},
                "highlights": [{"id": "dsa", "title": "DSA", "icon": "brain", "color": "primary"}],
                "socialLinks": [{"platform": "Telegram", "url": "https://t.me/x", "members": "5K+"}]
            }"#,
        )
        .unwrap();
        assert_eq!(home.hero.cta, "Start");
        assert_eq!(home.highlights[0].icon, "brain");
        assert_eq!(home.social_links[0].audience(), Some("5K+"));
    }
}
