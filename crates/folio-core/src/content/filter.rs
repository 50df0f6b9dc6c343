//! Narrowing projects by tag and search term, skills by level, and the
//! open-source and writing lists by status or featured flag.

use std::collections::BTreeSet;

use super::model::{
    BlogPost, Contribution, ContributionStatus, Proficiency, Project, SkillCategory, Talk,
};

/// Criteria for the portfolio page.
///
/// Both parts are optional: an empty tag list and an empty search term
/// together match every project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// A project matches if it carries **any** of these tags.
    pub tags: Vec<String>,
    /// Case-insensitive substring matched against title and description.
    pub search: String,
}

impl ProjectFilter {
    /// Builds a filter from a comma-separated tag list and a search term.
    /// Blank tag segments are dropped.
    #[must_use]
    pub fn parse(tags: Option<&str>, search: Option<&str>) -> Self {
        let tags = tags
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            tags,
            search: search.unwrap_or_default().trim().to_string(),
        }
    }

    /// Returns `true` if `project` satisfies both the tag and search criteria.
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        let matches_tags = self.tags.is_empty() || self.tags.iter().any(|t| project.has_tag(t));
        if !matches_tags {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        project.title.to_lowercase().contains(&needle)
            || project.description.to_lowercase().contains(&needle)
    }
}

/// Returns the projects matching `filter`, in their original order.
pub fn filter_projects(projects: &[Project], filter: &ProjectFilter) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

/// Every distinct tag used by `projects`, sorted.
pub fn all_tags(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Keeps only the skills at `level`. Categories left without skills are
/// dropped.
pub fn skills_at(categories: &[SkillCategory], level: Proficiency) -> Vec<SkillCategory> {
    categories
        .iter()
        .filter_map(|c| {
            let skills: Vec<_> = c
                .skills
                .iter()
                .filter(|s| s.proficiency == level)
                .cloned()
                .collect();
            if skills.is_empty() {
                None
            } else {
                Some(SkillCategory {
                    skills,
                    ..c.clone()
                })
            }
        })
        .collect()
}

/// Contributions with the given `status`, in their original order.
pub fn contributions_with_status(
    contributions: &[Contribution],
    status: ContributionStatus,
) -> Vec<Contribution> {
    contributions
        .iter()
        .filter(|c| c.status == status)
        .cloned()
        .collect()
}

pub fn featured_talks(talks: &[Talk]) -> Vec<Talk> {
    talks.iter().filter(|t| t.featured).cloned().collect()
}

pub fn featured_posts(posts: &[BlogPost]) -> Vec<BlogPost> {
    posts.iter().filter(|p| p.featured).cloned().collect()
}
