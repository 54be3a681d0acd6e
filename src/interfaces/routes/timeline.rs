use actix_web::web;

use crate::handlers::timeline;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/timeline")
            .service(
                web::resource("")
                    .route(web::get().to(timeline::get_timeline))
            )
            .service(
                web::resource("/by-year")
                    .route(web::get().to(timeline::get_timeline_by_year))
            )
            .service(
                web::resource("/years")
                    .route(web::get().to(timeline::get_timeline_years))
            )
            .service(
                web::resource("/milestones")
                    .route(web::get().to(timeline::get_milestones))
            )
    );
}
