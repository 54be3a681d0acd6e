use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::validation::validate_not_blank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    #[display("frontend")]
    Frontend,
    #[display("backend")]
    Backend,
    #[display("devops")]
    Devops,
    #[display("design")]
    Design,
    #[display("other")]
    Other,
}

impl FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(SkillCategory::Frontend),
            "backend" => Ok(SkillCategory::Backend),
            "devops" => Ok(SkillCategory::Devops),
            "design" => Ok(SkillCategory::Design),
            "other" => Ok(SkillCategory::Other),
            other => Err(format!("Unknown skill category: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Skill {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(range(max = 100, message = "Skill level must be between 0 and 100"))]
    pub level: u8,

    pub category: SkillCategory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
