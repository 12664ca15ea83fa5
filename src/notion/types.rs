use serde::Deserialize;

/// A top-level block returned by the "list block children" endpoint.
///
/// Only the kinds the renderer knows about are modelled; every other `type`
/// tag collapses into [`Block::Unsupported`] and its payload is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: TextBlock },

    #[serde(rename = "heading_1")]
    Heading1 { heading_1: TextBlock },

    #[serde(rename = "heading_2")]
    Heading2 { heading_2: TextBlock },

    #[serde(rename = "heading_3")]
    Heading3 { heading_3: TextBlock },

    #[serde(rename = "bulleted_list_item")]
    BulletedListItem { bulleted_list_item: TextBlock },

    #[serde(other)]
    Unsupported,
}

/// Payload shared by every text-bearing block kind.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RichText {
    pub plain_text: String,
}

/// One page of children as returned by the upstream API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BlockChildren {
    pub results: Vec<Block>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[cfg(test)]
impl TextBlock {
    pub fn new<T: Into<String>>(runs: impl IntoIterator<Item = T>) -> Self {
        TextBlock {
            rich_text: runs
                .into_iter()
                .map(|text| RichText {
                    plain_text: text.into(),
                })
                .collect(),
        }
    }
}
