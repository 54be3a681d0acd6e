pub mod blog_post;
pub mod contact_me;
pub mod project;
pub mod skill;
pub mod testimonial;
pub mod timeline;
pub mod validation;
