pub mod auth;
pub mod books;
pub mod health;
pub mod metrics;
pub mod schedule;

pub use auth::*;
pub use books::*;
pub use health::*;
pub use metrics::*;
pub use schedule::*;
