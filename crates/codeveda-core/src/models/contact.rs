//! Contact page content and the (simulated) contact form.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::SocialLink;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct ContactDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "contactInfo", default)]
    pub contact_info: ContactInfo,
    #[serde(rename = "communityStats", default)]
    pub community_stats: CommunityStats,
    #[serde(rename = "businessOpportunities", default)]
    pub business_opportunities: BusinessOpportunities,
    #[serde(rename = "socialLinks", default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub availability: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct CommunityStats {
    #[serde(rename = "totalMembers", default)]
    pub total_members: String,
    #[serde(rename = "monthlyViews", default)]
    pub monthly_views: String,
    #[serde(rename = "contentPieces", default)]
    pub content_pieces: String,
    #[serde(rename = "successStories", default)]
    pub success_stories: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct BusinessOpportunities {
    #[serde(default)]
    pub sponsorship: Opportunity,
    #[serde(default)]
    pub partnerships: Opportunity,
}

/// Sponsorship lists `benefits`, partnerships list `opportunities`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Opportunity {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "opportunities")]
    pub benefits: Vec<String>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Toast shown after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub title: String,
    pub description: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(label));
            }
        }

        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// There is no backend: a valid form is acknowledged and cleared.
    pub fn submit(&mut self) -> Result<SubmissionReceipt, ContactError> {
        self.validate()?;
        info!(subject = %self.subject, "Contact form submitted");
        *self = ContactForm::default();
        Ok(SubmissionReceipt {
            title: "Message sent!".to_string(),
            description: "We'll get back to you within 24 hours.".to_string(),
        })
    }
}

/// `local@domain.tld` with non-empty parts.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Sponsorship".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_submit_clears_form() {
        let mut form = filled();
        let receipt = form.submit().unwrap();
        assert_eq!(receipt.title, "Message sent!");
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_missing_field_rejected_and_form_kept() {
        let mut form = ContactForm {
            subject: "  ".to_string(),
            ..filled()
        };
        assert_eq!(form.submit(), Err(ContactError::MissingField("subject")));
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn test_email_shape() {
        for bad in ["ada", "ada@", "@example.com", "ada@example", "a@b@c.com"] {
            let form = ContactForm {
                email: bad.to_string(),
                ..filled()
            };
            assert!(matches!(form.validate(), Err(ContactError::InvalidEmail(_))), "{bad}");
        }
    }

    #[test]
    fn test_parse_contact_document() {
        let doc: ContactDocument = serde_json::from_str(
            r#"{
                "title": "Contact",
                "contactInfo": {"email": "hi@codeveda.dev", "response": "24h"},
                "communityStats": {"totalMembers": "10K+"},
                "businessOpportunities": {
                    "sponsorship": {"title": "Sponsor", "benefits": ["Reach"]},
                    "partnerships": {"title": "Partner", "opportunities": ["Workshops"]}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(doc.contact_info.email, "hi@codeveda.dev");
        assert_eq!(doc.community_stats.total_members, "10K+");
        assert_eq!(doc.business_opportunities.partnerships.benefits, vec!["Workshops"]);
    }
}
