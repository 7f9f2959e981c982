use super::handlers::{
    capture_image::capture_image, get_page::get_page, run_analysis::run_analysis,
    upload_image::upload_image,
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn page_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/", root_path), get(get_page))
        .route(
            &format!("{}/images/capture", root_path),
            post(capture_image),
        )
        .route(&format!("{}/images/upload", root_path), post(upload_image))
        .route(&format!("{}/analysis", root_path), post(run_analysis))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
}
