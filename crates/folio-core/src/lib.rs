//! Folio core library: portfolio content and contact-form logic.
//!
//! `folio-core` holds everything that does not depend on HTTP: the contact
//! form model with its validation rules, and the read-only portfolio content
//! (projects, experience, skills, open source, talks and writing, services)
//! with the filters the site applies to it.
//!
//! # Modules
//!
//! - [`contact`]: Contact form payload, sanitising, and validation ([`ContactForm`], [`Submission`]).
//! - [`content`]: Portfolio content model, catalog loading, and project filtering.
//! - [`error`]: Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod contact;
pub mod content;
pub mod error;

pub use contact::{
    is_truthy, is_valid_email, parse_submission, sanitize, ContactForm, FormError, Submission,
    ValidationError,
};
pub use content::catalog::Catalog;
pub use content::filter::{
    all_tags, contributions_with_status, featured_posts, featured_talks, filter_projects,
    skills_at, ProjectFilter,
};
pub use content::model::{
    BlogPost, Contribution, ContributionKind, ContributionStatus, EngagementStep, Experience,
    OpenSource, Podcast, Proficiency, Project, Repository, Service, Skill, SkillCategory, Stat,
    Talk,
};
pub use error::{CoreError, CoreResult};
