use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/teachers/:teacher_id/timetable",
            get(handlers::timetable::get_teacher_timetable),
        )
        .route("/api/days/normalize", get(handlers::timetable::normalize))
}
