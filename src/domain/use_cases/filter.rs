use serde::Deserialize;

use crate::{constants::RELATED_ITEMS_LIMIT, entities::project::Project};

/// Optional project predicates, combined with AND.
/// An absent or empty value places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub technology: Option<String>,

    #[serde(default, alias = "q")]
    pub query: Option<String>,
}

impl FilterCriteria {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = Some(technology.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        active(&self.category).is_none()
            && active(&self.technology).is_none()
            && active(&self.query).is_none()
    }

    pub fn matches(&self, project: &Project) -> bool {
        if let Some(category) = active(&self.category) {
            if project.category != category {
                return false;
            }
        }

        if let Some(technology) = active(&self.technology) {
            if !project.uses_technology(technology) {
                return false;
            }
        }

        if let Some(query) = active(&self.query) {
            let query = query.to_lowercase();
            let in_title = project.title.to_lowercase().contains(&query);
            let in_description = project.description.to_lowercase().contains(&query);
            if !in_title && !in_description {
                return false;
            }
        }

        true
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Keeps the projects matching every set criterion, in their original order.
pub fn filter_projects<'a, I>(projects: I, criteria: &FilterCriteria) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    projects
        .into_iter()
        .filter(|project| criteria.matches(project))
        .collect()
}

pub fn featured_projects<'a, I>(projects: I) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    projects.into_iter().filter(|project| project.featured).collect()
}

/// Other projects in the same category, first `RELATED_ITEMS_LIMIT` in store order.
pub fn related_projects<'a>(projects: &'a [Project], current: &Project) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| p.id != current.id && p.category == current.category)
        .take(RELATED_ITEMS_LIMIT)
        .collect()
}

/// Distinct categories in first-encountered order.
pub fn unique_categories(projects: &[Project]) -> Vec<&str> {
    dedup_in_order(projects.iter().map(|p| p.category.as_str()))
}

/// Distinct technologies across all projects in first-encountered order.
pub fn unique_technologies(projects: &[Project]) -> Vec<&str> {
    dedup_in_order(
        projects
            .iter()
            .flat_map(|p| p.technologies.iter().map(String::as_str)),
    )
}

fn dedup_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = std::collections::HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
