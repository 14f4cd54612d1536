//! Router builders.

mod common;
mod fruits;
mod stub;

pub use common::{common_routes, common_routes_with_ready};
pub use fruits::fruit_routes;
pub use stub::stub_routes;
