//! Test doubles for the upstream client.

use std::{collections::VecDeque, sync::Mutex};

use async_trait::async_trait;

use super::{
    client::{ListChildrenRequest, NotionClient},
    error::NotionError,
    types::{Block, BlockChildren, TextBlock},
};

/// Replays queued responses in order and records every request it sees.
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<BlockChildren, NotionError>>>,
    calls: Mutex<Vec<ListChildrenRequest>>,
}

impl ScriptedClient {
    pub fn new(responses: Vec<Result<BlockChildren, NotionError>>) -> Self {
        ScriptedClient {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ListChildrenRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotionClient for ScriptedClient {
    async fn list_children(
        &self,
        request: ListChildrenRequest,
    ) -> Result<BlockChildren, NotionError> {
        self.calls.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")
    }
}

pub fn page(results: Vec<Block>, next_cursor: Option<&str>) -> BlockChildren {
    BlockChildren {
        results,
        has_more: next_cursor.is_some(),
        next_cursor: next_cursor.map(str::to_string),
    }
}

pub fn paragraph(text: &str) -> Block {
    Block::Paragraph {
        paragraph: TextBlock::new([text]),
    }
}

pub fn api_error(status: u16, code: &str) -> NotionError {
    NotionError::Api {
        status,
        code: code.to_string(),
        message: format!("{} from upstream", code),
    }
}
