//! Content records as they appear in the catalog file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Headline numbers, e.g. `uptime = "99.95%"`.
    #[serde(default)]
    pub metrics: BTreeMap<String, String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub case_study: Option<String>,
}

impl Project {
    /// Returns `true` if the project carries `tag` (exact, case-sensitive).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// One position on the experience timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub impact: BTreeMap<String, String>,
}

/// Self-assessed skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Expert,
    Advanced,
    Intermediate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: Proficiency,
}

/// A titled group of skills, e.g. "Infrastructure as Code".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// A pinned repository on the open-source page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub language: String,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub forks: u32,
    /// Last push, `YYYY-MM-DD`.
    pub updated: String,
    pub url: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionKind {
    PullRequest,
    Issue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionStatus {
    Open,
    Merged,
    Closed,
}

/// An upstream pull request or issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub id: u32,
    /// `owner/name` of the upstream repository.
    pub repo: String,
    pub kind: ContributionKind,
    pub title: String,
    pub status: ContributionStatus,
    pub date: String,
    pub url: String,
}

/// A headline figure, e.g. `Stars Earned = 624`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenSource {
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub pinned: Vec<Repository>,
    #[serde(default)]
    pub contributions: Vec<Contribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talk {
    pub id: u32,
    pub title: String,
    pub event: String,
    pub date: String,
    pub location: String,
    pub audience: String,
    /// "Conference Talk", "Meetup Talk", ...
    pub format: String,
    pub description: String,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub slides: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub publication: String,
    pub date: String,
    pub read_time: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// A podcast appearance as a guest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Podcast {
    pub id: u32,
    pub title: String,
    pub show: String,
    pub date: String,
    pub duration: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A consulting offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub duration: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Free text, e.g. "Starting at $5,000".
    pub price: String,
}

/// One step of the engagement process shown under the services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}
