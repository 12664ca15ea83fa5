use std::sync::Arc;

use log::{debug, warn};

use super::{
    client::{ListChildrenRequest, NotionClient},
    error::NotionError,
    types::Block,
};

pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Collects every top-level child block of a page by following the
/// upstream continuation cursor.
pub struct BlockFetcher {
    client: Arc<dyn NotionClient>,
    page_size: u32,
}

impl BlockFetcher {
    pub fn new(client: Arc<dyn NotionClient>) -> Self {
        BlockFetcher {
            client,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Blocks come back in upstream order, page N before page N+1.
    /// The first failing call aborts the whole fetch.
    pub async fn fetch_all_blocks(&self, page_id: &str) -> Result<Vec<Block>, NotionError> {
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let response = self
                .client
                .list_children(ListChildrenRequest {
                    block_id: page_id.to_string(),
                    start_cursor: cursor.take(),
                    page_size: self.page_size,
                })
                .await?;

            pages += 1;
            debug!(
                "Fetched page {} of children for {}: {} blocks",
                pages,
                page_id,
                response.results.len()
            );

            blocks.extend(response.results);

            if !response.has_more {
                break;
            }

            match response.next_cursor {
                Some(next) => cursor = Some(next),
                None => {
                    warn!(
                        "Upstream reported more children for {} without a cursor, stopping",
                        page_id
                    );
                    break;
                }
            }
        }

        debug!(
            "Fetched {} blocks for {} in {} pages",
            blocks.len(),
            page_id,
            pages
        );

        Ok(blocks)
    }
}
