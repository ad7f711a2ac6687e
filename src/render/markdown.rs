//! GitHub-flavored markdown renderer.

use crate::document::{Block, Document, Inline, Paragraph};
use crate::render::Renderer;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> String {
        let blocks: Vec<String> = doc
            .blocks()
            .iter()
            .map(render_block)
            .filter(|b| !b.is_empty())
            .collect();
        if blocks.is_empty() {
            return String::new();
        }
        let mut output = blocks.join("\n\n");
        output.push('\n');
        output
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => {
            format!("{} {}", "#".repeat(usize::from(*level).max(1)), text)
        }
        Block::Paragraph { content } => render_paragraph(content),
        Block::List { ordered, items } => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if *ordered {
                    format!("{}. {}", i + 1, render_paragraph(item))
                } else {
                    format!("- {}", render_paragraph(item))
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Block::Code { lang, code } => format!("```{}\n{}\n```", lang, code),
        Block::HorizontalRule => "***".to_string(),
    }
}

fn render_paragraph(paragraph: &Paragraph) -> String {
    paragraph.content.iter().map(render_inline).collect()
}

/// Render one inline run.
///
/// Whitespace and square brackets at either edge of a linked run stay
/// outside the link, so `"Go ["` linked to `u` becomes `[Go](u) [`.
/// A linked run made only of those characters renders as plain text.
fn render_inline(inline: &Inline) -> String {
    let Some(url) = inline.url.as_deref() else {
        return inline.text.clone();
    };

    let is_edge = |c: char| c.is_whitespace() || c == '[' || c == ']';
    let text = inline.text.as_str();
    let core = text.trim_matches(is_edge);
    if core.is_empty() {
        return inline.text.clone();
    }

    let lead = text.len() - text.trim_start_matches(is_edge).len();
    format!(
        "{}[{}]({}){}",
        &text[..lead],
        core,
        url,
        &text[lead + core.len()..]
    )
}
