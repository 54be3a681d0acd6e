use serde::Serialize;

use crate::entities::project::Project;

/// Which project field a search query was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedField {
    Title,
    Description,
    Tags,
    Technologies,
}

impl MatchedField {
    /// Fields in the order they are tried; the first hit wins.
    pub const PRIORITY: [MatchedField; 4] = [
        MatchedField::Title,
        MatchedField::Description,
        MatchedField::Tags,
        MatchedField::Technologies,
    ];

    /// `needle` must already be lower-cased.
    fn contains(self, project: &Project, needle: &str) -> bool {
        let hit = |value: &String| value.to_lowercase().contains(needle);
        match self {
            MatchedField::Title => hit(&project.title),
            MatchedField::Description => hit(&project.description),
            MatchedField::Tags => project.tags.iter().any(hit),
            MatchedField::Technologies => project.technologies.iter().any(hit),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub record: &'a Project,
    pub matched_field: MatchedField,
}

/// Case-insensitive substring search. At most one result per project, in input
/// order. A blank query yields nothing. Unbounded: callers truncate.
pub fn search<'a, I>(projects: I, query: &str) -> Vec<SearchResult<'a>>
where
    I: IntoIterator<Item = &'a Project>,
{
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();

    projects
        .into_iter()
        .filter_map(|record| {
            MatchedField::PRIORITY
                .into_iter()
                .find(|field| field.contains(record, &needle))
                .map(|matched_field| SearchResult { record, matched_field })
        })
        .collect()
}
