//! Loading the content catalog from TOML.
//!
//! The bundled catalog lives in `content/site.toml` and is compiled into the
//! binary; a deployment can point at its own file instead.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::model::{
    BlogPost, EngagementStep, Experience, OpenSource, Podcast, Project, Service, SkillCategory,
    Talk,
};
use crate::error::{CoreError, CoreResult};

const BUILTIN: &str = include_str!("../../content/site.toml");

/// Everything the site displays, in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub open_source: OpenSource,
    #[serde(default)]
    pub talks: Vec<Talk>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub podcasts: Vec<Podcast>,
    #[serde(default)]
    pub services: Vec<Service>,
    /// How a services engagement runs, in step order.
    #[serde(default)]
    pub engagement: Vec<EngagementStep>,
}

impl Catalog {
    /// Parses the catalog bundled with the crate.
    ///
    /// # Errors
    ///
    /// [`CoreError::ContentParse`] if the bundled file is malformed.
    pub fn builtin() -> CoreResult<Self> {
        Self::from_toml_str(BUILTIN)
    }

    /// Parses a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// [`CoreError::ContentParse`] if the TOML is malformed or a record is
    /// missing a required field.
    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        toml::from_str(content).map_err(|e| CoreError::ContentParse(e.to_string()))
    }

    /// Loads a catalog from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ContentParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded catalog from {}: {} projects, {} positions, {} skill categories, {} talks, {} posts, {} services",
            path.display(),
            catalog.projects.len(),
            catalog.experience.len(),
            catalog.skills.len(),
            catalog.talks.len(),
            catalog.posts.len(),
            catalog.services.len()
        );
        Ok(catalog)
    }
}
