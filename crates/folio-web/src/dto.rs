use folio_core::{
    BlogPost, ContributionStatus, EngagementStep, Podcast, Proficiency, Project, Service, Talk,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    /// Comma-separated tag list; a project matches if it has any of them.
    pub tags: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SkillsQuery {
    pub proficiency: Option<Proficiency>,
}

#[derive(Debug, Deserialize)]
pub struct OpenSourceQuery {
    pub status: Option<ContributionStatus>,
}

#[derive(Debug, Deserialize)]
pub struct TalksWritingQuery {
    /// When `true`, only featured talks and posts are returned. Podcasts are
    /// never featured and are always listed.
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Serialize)]
pub struct TalksWritingResponse {
    pub talks: Vec<Talk>,
    pub posts: Vec<BlogPost>,
    pub podcasts: Vec<Podcast>,
}

#[derive(Debug, Serialize)]
pub struct ServicesResponse {
    pub services: Vec<Service>,
    pub engagement: Vec<EngagementStep>,
}
