use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod analytics;
mod blog;
mod contact;
mod json_error;
mod projects;
mod timeline;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .configure(projects::config_routes)
            .configure(analytics::config_routes)
            .configure(timeline::config_routes)
            .configure(blog::config_routes)
            .configure(contact::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
