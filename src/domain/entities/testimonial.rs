use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::validation::{validate_asset_path, validate_not_blank};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[validate(custom(function = "validate_not_blank"))]
    pub id: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    pub role: String,
    pub company: String,

    #[validate(custom(function = "validate_asset_path"))]
    pub avatar: String,

    pub content: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: u8,
}
