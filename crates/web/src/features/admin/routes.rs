use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{admin_list_athletes, admin_list_fees};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/athletes", get(admin_list_athletes))
        .route("/fees", get(admin_list_fees))
}
