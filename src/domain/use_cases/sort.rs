use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{entities::project::Project, use_cases::filter::{filter_projects, FilterCriteria}};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    #[display("recent")]
    Recent,
    #[display("oldest")]
    Oldest,
    #[display("name")]
    Name,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(SortKey::Recent),
            "oldest" => Ok(SortKey::Oldest),
            "name" => Ok(SortKey::Name),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

/// Returns a reordered copy; the input is never touched. All orderings are stable.
pub fn sort_projects<'a, I>(projects: I, key: SortKey) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut sorted: Vec<&Project> = projects.into_iter().collect();

    match key {
        SortKey::Recent => sorted.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::Oldest => sorted.sort_by(|a, b| a.year.cmp(&b.year)),
        SortKey::Name => sorted.sort_by_cached_key(|p| collation_key(&p.title)),
    }

    sorted
}

/// Like [`sort_projects`] but for keys from untyped input: an unknown key keeps
/// the input order, an absent key means [`SortKey::Recent`].
pub fn sort_projects_by_param<'a, I>(projects: I, key: Option<&str>) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    match key.map(SortKey::from_str) {
        None => sort_projects(projects, SortKey::default()),
        Some(Ok(key)) => sort_projects(projects, key),
        Some(Err(_)) => projects.into_iter().collect(),
    }
}

/// Accent- and case-folded form of a title, so `Élan` sorts beside `elan`.
pub fn collation_key(title: &str) -> String {
    deunicode::deunicode(title).to_lowercase()
}

/// Filter criteria and ordering applied together: filter first, then sort.
/// Mirrors the query string of the project listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectQuery {
    #[serde(flatten)]
    pub criteria: FilterCriteria,

    #[serde(default)]
    pub sort: Option<String>,
}

impl ProjectQuery {
    pub fn run<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        let filtered = filter_projects(projects, &self.criteria);
        sort_projects_by_param(filtered, self.sort.as_deref())
    }
}
