pub mod assistant;
pub mod documents;
pub mod questions;
pub mod users;
