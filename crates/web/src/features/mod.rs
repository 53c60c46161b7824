pub mod admin;
pub mod athletes;
pub mod fees;
