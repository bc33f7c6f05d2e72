pub mod colleges;
pub mod companies;
pub mod connection;
pub mod courses;
pub mod jobs;
pub mod models;
pub mod redis;
pub mod setup;
pub mod stats;
pub mod streams;
pub mod transaction;
pub mod users;

pub use connection::DbClient;
