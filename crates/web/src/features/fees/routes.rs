use axum::{
    Router,
    routing::get,
};
use storage::Database;

use super::handlers::{
    create_fee, delete_fee, get_fee, list_fees, partial_update_fee, update_fee,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_fees).post(create_fee))
        .route(
            "/:id",
            get(get_fee)
                .put(update_fee)
                .patch(partial_update_fee)
                .delete(delete_fee),
        )
}
