use crate::notion::{Block, TextBlock};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Drop paragraphs whose text is empty instead of emitting `<p></p>`.
    pub skip_empty_paragraphs: bool,
}

pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Renderer { options }
    }

    /// Renders blocks in order and joins the fragments without a separator.
    /// Unsupported blocks contribute nothing.
    pub fn render(&self, blocks: &[Block]) -> String {
        blocks
            .iter()
            .map(|block| block_to_html(block, &self.options))
            .collect()
    }
}

fn block_to_html(block: &Block, options: &RenderOptions) -> String {
    let (tag, content) = match block {
        Block::Paragraph { paragraph } => ("p", paragraph),
        Block::Heading1 { heading_1 } => ("h1", heading_1),
        Block::Heading2 { heading_2 } => ("h2", heading_2),
        Block::Heading3 { heading_3 } => ("h3", heading_3),
        Block::BulletedListItem { bulleted_list_item } => ("li", bulleted_list_item),
        Block::Unsupported => return String::new(),
    };

    let text = rich_text_to_html(content);

    if tag == "p" && text.is_empty() && options.skip_empty_paragraphs {
        return String::new();
    }

    format!("<{tag}>{text}</{tag}>")
}

fn rich_text_to_html(content: &TextBlock) -> String {
    content
        .rich_text
        .iter()
        .map(|run| escape_angle_brackets(&run.plain_text))
        .collect()
}

// Only angle brackets; `&` and quotes pass through untouched.
fn escape_angle_brackets(s: &str) -> String {
    s.replace('<', "&lt;").replace('>', "&gt;")
}
