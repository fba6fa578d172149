#![allow(dead_code)]

pub mod test_app;

pub use test_app::TestApp;
