use axum::extract::{Query, State};
use axum::Json;
use folio_core::{
    all_tags, contributions_with_status, featured_posts, featured_talks, filter_projects,
    skills_at, Experience, OpenSource, ProjectFilter, SkillCategory,
};

use crate::dto::{
    OpenSourceQuery, ProjectListResponse, ProjectQuery, ServicesResponse, SkillsQuery,
    TagsResponse, TalksWritingQuery, TalksWritingResponse,
};
use crate::state::AppState;

pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> Json<ProjectListResponse> {
    let filter = ProjectFilter::parse(query.tags.as_deref(), query.q.as_deref());
    let projects = filter_projects(&state.catalog.projects, &filter);
    tracing::debug!(
        "Project filter tags={:?} search={:?} -> {} of {}",
        filter.tags,
        filter.search,
        projects.len(),
        state.catalog.projects.len()
    );

    Json(ProjectListResponse {
        total: projects.len(),
        projects,
    })
}

pub async fn list_tags(State(state): State<AppState>) -> Json<TagsResponse> {
    Json(TagsResponse {
        tags: all_tags(&state.catalog.projects),
    })
}

pub async fn list_experience(State(state): State<AppState>) -> Json<Vec<Experience>> {
    Json(state.catalog.experience.clone())
}

pub async fn list_skills(
    State(state): State<AppState>,
    Query(query): Query<SkillsQuery>,
) -> Json<Vec<SkillCategory>> {
    let categories = match query.proficiency {
        Some(level) => skills_at(&state.catalog.skills, level),
        None => state.catalog.skills.clone(),
    };
    Json(categories)
}

pub async fn open_source(
    State(state): State<AppState>,
    Query(query): Query<OpenSourceQuery>,
) -> Json<OpenSource> {
    let mut open_source = state.catalog.open_source.clone();
    if let Some(status) = query.status {
        open_source.contributions = contributions_with_status(&open_source.contributions, status);
    }
    Json(open_source)
}

pub async fn talks_writing(
    State(state): State<AppState>,
    Query(query): Query<TalksWritingQuery>,
) -> Json<TalksWritingResponse> {
    let catalog = &state.catalog;
    let (talks, posts) = if query.featured {
        (featured_talks(&catalog.talks), featured_posts(&catalog.posts))
    } else {
        (catalog.talks.clone(), catalog.posts.clone())
    };

    Json(TalksWritingResponse {
        talks,
        posts,
        podcasts: catalog.podcasts.clone(),
    })
}

pub async fn list_services(State(state): State<AppState>) -> Json<ServicesResponse> {
    Json(ServicesResponse {
        services: state.catalog.services.clone(),
        engagement: state.catalog.engagement.clone(),
    })
}
