use axum::{middleware as axum_middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{handlers::pages, middleware, state::AppState};

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    // Static prefixes (`/buns`, `/static`) win over the parameter routes, so
    // a bun file name is never taken for a time zone region.
    Router::new()
        .route("/", get(pages::landing))
        .route("/buns/{bun_file}", get(pages::with_bun))
        .route("/{segment}", get(pages::at_time))
        .route("/{segment}/{*rest}", get(pages::in_time_zone))
        .nest_service("/static", static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(middleware::request_id)),
        )
        .with_state(state)
}
