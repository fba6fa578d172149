pub mod books;
pub mod cookies;
pub mod metrics;
pub mod schedule;
pub mod sessions;
pub mod users;
