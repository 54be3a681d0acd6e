use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::validation::{
    validate_asset_path, validate_asset_paths, validate_not_blank, validate_slug, validate_url,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[validate(custom(function = "validate_not_blank"))]
    pub id: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    pub description: String,

    #[serde(default)]
    pub long_description: String,

    #[validate(custom(function = "validate_asset_path"))]
    pub cover_image: String,

    #[serde(default)]
    #[validate(custom(function = "validate_asset_paths"))]
    pub images: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub technologies: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_url"))]
    pub demo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_url"))]
    pub github_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_url"))]
    pub video_url: Option<String>,

    pub year: i32,
    pub category: String,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub in_progress: bool,
}

impl Project {
    pub fn uses_technology(&self, technology: &str) -> bool {
        self.technologies.iter().any(|t| t == technology)
    }
}

/// Detail view: the project plus a few from the same category.
#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse<'a> {
    pub project: &'a Project,
    pub related: Vec<&'a Project>,
}

/// Option lists for the filter controls.
#[derive(Debug, Serialize)]
pub struct ProjectFilterOptions<'a> {
    pub categories: Vec<&'a str>,
    pub technologies: Vec<&'a str>,
}
