pub mod books;
pub mod schedule;
pub mod sessions;
pub mod users;
