pub mod analytics;
pub mod blog_posts;
pub mod contact_me;
pub mod home;
pub mod projects;
pub mod search;
pub mod skills;
pub mod system;
pub mod testimonials;
pub mod timeline;
