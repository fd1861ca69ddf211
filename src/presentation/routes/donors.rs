use crate::presentation::handlers::donors;
use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::infrastructure::state::AppState;

/// Donor routes. `/reset` is a static segment and takes precedence over `/{id}`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(donors::list_donors).post(donors::create_donor))
        .route("/reset", delete(donors::reset_donors))
        .route(
            "/{id}",
            put(donors::update_donor).delete(donors::delete_donor),
        )
}
