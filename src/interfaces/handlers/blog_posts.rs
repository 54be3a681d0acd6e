use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    entities::blog_post::BlogPostListResponse,
    errors::AppError,
    use_cases::blog::{posts_with_tag, related_posts},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct BlogParams {
    pub tag: Option<String>,
}

#[instrument(skip(state))]
pub async fn get_all_blog_posts(
    state: web::Data<AppState>,
    params: web::Query<BlogParams>,
) -> Result<impl Responder, AppError> {
    let posts: Vec<BlogPostListResponse> = posts_with_tag(state.store.blog_posts(), params.tag.as_deref())
        .into_iter()
        .map(|post| post.to_list_response())
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

#[instrument(skip(state))]
pub async fn get_blog_post_by_slug(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state
        .store
        .blog_post_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Blog post '{}'", slug)))?;

    let related = related_posts(state.store.blog_posts(), post);
    Ok(HttpResponse::Ok().json(post.to_detail_response(&related)))
}
