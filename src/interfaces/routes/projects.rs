use actix_web::web;

use crate::handlers::{projects, search, skills, testimonials};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .service(
                web::resource("")
                    .route(web::get().to(projects::list_projects))
            )
            .service(
                web::resource("/filters")
                    .route(web::get().to(projects::get_filter_options))
            )
            .service(
                web::resource("/featured")
                    .route(web::get().to(projects::get_featured_projects))
            )
            .service(
                web::resource("/{slug}")
                    .route(web::get().to(projects::get_project_by_slug))
            )
    );

    cfg.service(
        web::resource("/search")
            .route(web::get().to(search::search_projects))
    );

    cfg.service(
        web::resource("/skills")
            .route(web::get().to(skills::get_skills))
    );

    cfg.service(
        web::resource("/testimonials")
            .route(web::get().to(testimonials::get_testimonials))
    );
}
