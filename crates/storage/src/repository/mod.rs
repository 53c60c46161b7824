pub mod athlete;
pub mod fee;
