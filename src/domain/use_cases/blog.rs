use crate::{constants::RELATED_ITEMS_LIMIT, entities::blog_post::BlogPost};

/// Posts in store order, optionally only those carrying `tag`.
pub fn posts_with_tag<'a>(posts: &'a [BlogPost], tag: Option<&str>) -> Vec<&'a BlogPost> {
    match tag.filter(|t| !t.is_empty()) {
        Some(tag) => posts.iter().filter(|post| post.has_tag(tag)).collect(),
        None => posts.iter().collect(),
    }
}

/// Other posts sharing at least one tag with `current`, first few in store order.
pub fn related_posts<'a>(posts: &'a [BlogPost], current: &BlogPost) -> Vec<&'a BlogPost> {
    posts
        .iter()
        .filter(|post| post.id != current.id && post.tags.iter().any(|t| current.has_tag(t)))
        .take(RELATED_ITEMS_LIMIT)
        .collect()
}
