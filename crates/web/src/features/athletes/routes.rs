use axum::{
    Router,
    routing::get,
};
use storage::Database;

use super::handlers::{
    create_athlete, delete_athlete, get_athlete, list_athletes, partial_update_athlete,
    update_athlete,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_athletes).post(create_athlete))
        .route(
            "/:id",
            get(get_athlete)
                .put(update_athlete)
                .patch(partial_update_athlete)
                .delete(delete_athlete),
        )
}
