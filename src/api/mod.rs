pub mod routes;

pub use routes::{api_routes, notion_routes};
