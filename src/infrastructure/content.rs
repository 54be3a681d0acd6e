//! The read-only record store and the ways it gets loaded.
//!
//! Content comes either from a directory of JSON arrays (`projects.json`,
//! `blog.json`, `timeline.json`, `testimonials.json`, `skills.json`) or from a
//! remote content service returning one [`RecordBundle`]. A failed remote fetch
//! falls back to the directory. Everything is validated once, up front.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::fs;
use tracing::{info, warn};
use validator::Validate;

use crate::{
    entities::{
        blog_post::BlogPost, project::Project, skill::Skill, testimonial::Testimonial,
        timeline::TimelineEvent,
    },
    errors::ContentError,
    settings::AppConfig,
};

const PROJECTS_FILE: &str = "projects.json";
const BLOG_FILE: &str = "blog.json";
const TIMELINE_FILE: &str = "timeline.json";
const TESTIMONIALS_FILE: &str = "testimonials.json";
const SKILLS_FILE: &str = "skills.json";

/// Raw collections as they arrive from a content source, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordBundle {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Validated, immutable content. Shared by reference for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    projects: Vec<Project>,
    blog_posts: Vec<BlogPost>,
    timeline: Vec<TimelineEvent>,
    testimonials: Vec<Testimonial>,
    skills: Vec<Skill>,
}

impl TryFrom<RecordBundle> for RecordStore {
    type Error = ContentError;

    fn try_from(bundle: RecordBundle) -> Result<Self, Self::Error> {
        validate_all("project", &bundle.projects, |p| &p.id)?;
        validate_all("blog post", &bundle.blog_posts, |p| &p.id)?;
        validate_all("timeline event", &bundle.timeline, |e| &e.id)?;
        validate_all("testimonial", &bundle.testimonials, |t| &t.id)?;
        validate_all("skill", &bundle.skills, |s| &s.name)?;

        ensure_unique_slugs("project", bundle.projects.iter().map(|p| p.slug.as_str()))?;
        ensure_unique_slugs("blog post", bundle.blog_posts.iter().map(|p| p.slug.as_str()))?;

        if let Some(event) = bundle.timeline.iter().find(|e| !e.has_ordered_period()) {
            return Err(ContentError::TimelineOrder(event.id.clone()));
        }

        for post in bundle.blog_posts.iter().filter(|p| p.has_stale_reading_time()) {
            warn!(
                slug = %post.slug,
                stored = post.reading_time,
                computed = post.reading_time().minutes,
                "Stored reading time disagrees with content; serving the computed value"
            );
        }

        Ok(RecordStore {
            projects: bundle.projects,
            blog_posts: bundle.blog_posts,
            timeline: bundle.timeline,
            testimonials: bundle.testimonials,
            skills: bundle.skills,
        })
    }
}

fn validate_all<T, F>(kind: &'static str, records: &[T], id: F) -> Result<(), ContentError>
where
    T: Validate,
    F: Fn(&T) -> &String,
{
    for record in records {
        record
            .validate()
            .map_err(|e| ContentError::InvalidRecord(kind, id(record).clone(), e.to_string()))?;
    }
    Ok(())
}

fn ensure_unique_slugs<'a>(
    kind: &'static str,
    slugs: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for slug in slugs {
        if !seen.insert(slug) {
            return Err(ContentError::DuplicateSlug(kind, slug.to_string()));
        }
    }
    Ok(())
}

impl RecordStore {
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.blog_posts
    }

    pub fn timeline(&self) -> &[TimelineEvent] {
        &self.timeline
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    pub fn blog_post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.blog_posts.iter().find(|p| p.slug == slug)
    }

    /// Loads every collection from `dir`. A missing file is an empty collection.
    pub async fn load_from_dir(dir: &Path) -> Result<Self, ContentError> {
        let (projects, blog_posts, timeline, testimonials, skills) = futures::try_join!(
            read_collection(dir.join(PROJECTS_FILE)),
            read_collection(dir.join(BLOG_FILE)),
            read_collection(dir.join(TIMELINE_FILE)),
            read_collection(dir.join(TESTIMONIALS_FILE)),
            read_collection(dir.join(SKILLS_FILE)),
        )?;

        RecordStore::try_from(RecordBundle {
            projects,
            blog_posts,
            timeline,
            testimonials,
            skills,
        })
    }

    /// Fetches a [`RecordBundle`] from a content service.
    pub async fn fetch_remote(
        client: &Client,
        url: &str,
        access_token: Option<&str>,
    ) -> Result<Self, ContentError> {
        let mut request = client.get(url);
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }

        let bundle: RecordBundle = request
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| ContentError::Remote(e.to_string()))?
            .json()
            .await
            .map_err(|e| ContentError::Remote(e.to_string()))?;

        RecordStore::try_from(bundle)
    }
}

async fn read_collection<T: DeserializeOwned>(path: PathBuf) -> Result<Vec<T>, ContentError> {
    let raw = match fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Content file {} not found; using an empty collection", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(ContentError::Io(path, e)),
    };

    serde_json::from_str(&raw).map_err(|e| ContentError::Json(path.display().to_string(), e))
}

/// Loads the store for the configured sources: the remote service when one is
/// configured and reachable, the content directory otherwise.
pub async fn load_record_store(config: &AppConfig) -> Result<RecordStore, ContentError> {
    if let Some(url) = &config.content_url {
        let client = Client::new();
        match RecordStore::fetch_remote(&client, url, config.content_access_token.as_deref()).await {
            Ok(store) => {
                info!(source = %url, "Loaded content from remote service");
                return Ok(store);
            }
            Err(e) => warn!("{}; falling back to {}", e, config.content_dir.display()),
        }
    } else {
        info!("No content service configured; using local content");
    }

    let store = RecordStore::load_from_dir(&config.content_dir).await?;
    info!(
        projects = store.projects().len(),
        blog_posts = store.blog_posts().len(),
        timeline = store.timeline().len(),
        testimonials = store.testimonials().len(),
        skills = store.skills().len(),
        "Loaded content from {}",
        config.content_dir.display()
    );
    Ok(store)
}
