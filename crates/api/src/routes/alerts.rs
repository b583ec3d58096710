use axum::routing::get;
use axum::Router;

use crate::handlers::alert;
use crate::state::AppState;

/// Routes mounted at `/alerts`.
///
/// ```text
/// GET    /failure    -> list_failures
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/failure", get(alert::list_failures))
}
