use crate::entities::skill::{Skill, SkillCategory};

/// How many of each category the overview shows.
const OVERVIEW_QUOTAS: [(SkillCategory, usize); 4] = [
    (SkillCategory::Frontend, 3),
    (SkillCategory::Backend, 3),
    (SkillCategory::Devops, 2),
    (SkillCategory::Design, 2),
];

/// Skills of one category, strongest first.
pub fn skills_in_category(skills: &[Skill], category: SkillCategory) -> Vec<&Skill> {
    let mut selected: Vec<&Skill> = skills.iter().filter(|s| s.category == category).collect();
    selected.sort_by(|a, b| b.level.cmp(&a.level));
    selected
}

/// With a category: that category by level. Without: the overview mix of the
/// strongest frontend, backend, devops and design skills.
pub fn top_skills(skills: &[Skill], category: Option<SkillCategory>) -> Vec<&Skill> {
    match category {
        Some(category) => skills_in_category(skills, category),
        None => OVERVIEW_QUOTAS
            .iter()
            .flat_map(|&(category, quota)| {
                skills_in_category(skills, category).into_iter().take(quota)
            })
            .collect(),
    }
}
