pub mod client;
pub mod error;
pub mod fetcher;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use client::HttpNotionClient;
pub use error::NotionError;
pub use fetcher::BlockFetcher;
pub use types::{Block, TextBlock};
