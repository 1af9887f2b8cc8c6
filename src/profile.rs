//! Page content, kept out of the components in `config/profile.json`.

use serde::Deserialize;

const EMBEDDED_PROFILE: &str = include_str!("../config/profile.json");
const CONTACT_SCHEMES: [&str; 3] = ["mailto:", "tel:", "https://"];

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("ticker needs at least one label")]
    EmptyTicker,
    #[error("nav link {0:?} must target an in-page anchor")]
    NavTarget(String),
    #[error("contact link {0:?} uses an unsupported scheme")]
    ContactHref(String),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Profile {
    pub brand: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub intro: String,
    pub contact_cta: String,
    pub resume: Link,
    pub nav: Vec<Link>,
    pub ticker: Vec<String>,
    pub skills: SkillsContent,
    pub projects: ProjectsContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SkillsContent {
    pub number: String,
    pub title: String,
    pub groups: Vec<SkillGroup>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SkillGroup {
    pub icon: String,
    pub title: String,
    pub pills: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProjectsContent {
    pub number: String,
    pub title: String,
    pub items: Vec<Project>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactContent {
    pub kicker: String,
    pub heading: String,
    pub emphasis: String,
    pub links: Vec<ContactLink>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
    pub href: String,
}

impl ContactLink {
    /// Profile pages open in a new tab, `mailto:`/`tel:` hand off in place.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("https://")
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FooterContent {
    pub owner: String,
    pub location: String,
}

impl FooterContent {
    pub fn copyright(&self, year: u32) -> String {
        format!("© {year} — {}", self.owner)
    }
}

impl Profile {
    pub fn embedded() -> Result<Self, ProfileError> {
        Self::parse(EMBEDDED_PROFILE)
    }

    pub fn parse(raw: &str) -> Result<Self, ProfileError> {
        let profile: Self = serde_json::from_str(raw)?;
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> Result<(), ProfileError> {
        if self.ticker.is_empty() {
            return Err(ProfileError::EmptyTicker);
        }

        if let Some(link) = self.nav.iter().find(|link| !link.href.starts_with('#')) {
            return Err(ProfileError::NavTarget(link.href.clone()));
        }

        if let Some(link) = self.contact.links.iter().find(|link| {
            !CONTACT_SCHEMES
                .iter()
                .any(|scheme| link.href.starts_with(scheme))
        }) {
            return Err(ProfileError::ContactHref(link.href.clone()));
        }

        Ok(())
    }
}
