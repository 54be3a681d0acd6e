use actix_web::web;

use crate::handlers::analytics;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/analytics")
            .route("/technologies", web::get().to(analytics::technology_chart))
            .route("/categories", web::get().to(analytics::category_chart))
            .route("/tags", web::get().to(analytics::tag_chart))
    );
}
