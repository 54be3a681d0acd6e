use std::collections::HashMap;

use serde::Serialize;

use crate::{
    constants::{FREQUENCY_TABLE_THRESHOLD, OTHER_LABEL},
    entities::{blog_post::BlogPost, project::Project},
};

/// Label/count pairs for chart-style summaries, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
}

impl FrequencyTable {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn count_of(&self, label: &str) -> Option<usize> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.counts[i])
    }
}

/// Counts the labels `extractor` yields per record, keeping the top
/// [`FREQUENCY_TABLE_THRESHOLD`] and folding the rest into a trailing "Other".
pub fn build_frequency_table<'a, R, F, I, S>(records: &'a [R], extractor: F) -> FrequencyTable
where
    F: FnMut(&'a R) -> I,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build_frequency_table_with_threshold(records, extractor, FREQUENCY_TABLE_THRESHOLD)
}

pub fn build_frequency_table_with_threshold<'a, R, F, I, S>(
    records: &'a [R],
    mut extractor: F,
    threshold: usize,
) -> FrequencyTable
where
    F: FnMut(&'a R) -> I,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    // first-seen order is kept so the stable sort below breaks ties by it
    let mut entries: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in records {
        for label in extractor(record) {
            let label = label.as_ref();
            match positions.get(label) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    positions.insert(label.to_string(), entries.len());
                    entries.push((label.to_string(), 1));
                }
            }
        }
    }

    entries.sort_by(|a, b| b.1.cmp(&a.1));

    let overflow: usize = entries.iter().skip(threshold).map(|(_, count)| count).sum();
    entries.truncate(threshold);

    let (mut labels, mut counts): (Vec<String>, Vec<usize>) = entries.into_iter().unzip();

    if overflow > 0 {
        labels.push(OTHER_LABEL.to_string());
        counts.push(overflow);
    }

    FrequencyTable { labels, counts }
}

pub fn technology_distribution(projects: &[Project]) -> FrequencyTable {
    build_frequency_table(projects, |p| p.technologies.iter())
}

pub fn category_distribution(projects: &[Project]) -> FrequencyTable {
    build_frequency_table(projects, |p| std::iter::once(p.category.as_str()))
}

pub fn tag_distribution(posts: &[BlogPost]) -> FrequencyTable {
    build_frequency_table(posts, |p| p.tags.iter())
}
