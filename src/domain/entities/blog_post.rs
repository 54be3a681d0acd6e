use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    entities::validation::{validate_asset_path, validate_not_blank, validate_slug},
    utils::markdown::{safe_markdown_to_html, ReadingLength, ReadingTime},
};

// ───── Content Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[validate(custom(function = "validate_not_blank"))]
    pub id: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    pub excerpt: String,

    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,

    #[validate(custom(function = "validate_asset_path"))]
    pub cover_image: String,

    pub publish_date: NaiveDate,

    #[serde(default)]
    pub tags: Vec<String>,

    #[validate(nested)]
    pub author: Author,

    /// Minutes as authored. Responses use [`BlogPost::reading_time`] instead.
    #[serde(default)]
    pub reading_time: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(custom(function = "validate_asset_path"))]
    pub avatar: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostListResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub cover_image: String,
    pub publish_date: NaiveDate,
    pub tags: Vec<String>,
    pub author: Author,
    pub reading_time: u32,
    pub reading_time_label: String,
    pub reading_length: ReadingLength,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDetailResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content_html: String,
    pub cover_image: String,
    pub publish_date: NaiveDate,
    pub tags: Vec<String>,
    pub author: Author,
    pub reading_time: u32,
    pub reading_time_label: String,
    pub related: Vec<BlogPostListResponse>,
}

// ───── Conversions ──────────────────────────────────────────────────

impl BlogPost {
    /// Estimated from the current content, never from the stored minutes.
    pub fn reading_time(&self) -> ReadingTime {
        ReadingTime::estimate(&self.content)
    }

    /// True when the authored `readingTime` disagrees with the live estimate.
    pub fn has_stale_reading_time(&self) -> bool {
        self.reading_time != self.reading_time().minutes
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn to_list_response(&self) -> BlogPostListResponse {
        let reading_time = self.reading_time();
        BlogPostListResponse {
            id: self.id.clone(),
            title: self.title.clone(),
            slug: self.slug.clone(),
            excerpt: self.excerpt.clone(),
            cover_image: self.cover_image.clone(),
            publish_date: self.publish_date,
            tags: self.tags.clone(),
            author: self.author.clone(),
            reading_time: reading_time.minutes,
            reading_time_label: reading_time.to_string(),
            reading_length: reading_time.length(),
        }
    }

    pub fn to_detail_response(&self, related: &[&BlogPost]) -> BlogPostDetailResponse {
        let reading_time = self.reading_time();
        BlogPostDetailResponse {
            id: self.id.clone(),
            title: self.title.clone(),
            slug: self.slug.clone(),
            excerpt: self.excerpt.clone(),
            content_html: safe_markdown_to_html(&self.content),
            cover_image: self.cover_image.clone(),
            publish_date: self.publish_date,
            tags: self.tags.clone(),
            author: self.author.clone(),
            reading_time: reading_time.minutes,
            reading_time_label: reading_time.to_string(),
            related: related.iter().map(|post| post.to_list_response()).collect(),
        }
    }
}
