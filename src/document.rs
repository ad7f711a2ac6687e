//! Markdown element model — format-agnostic README structure.
//!
//! Renderers in [`crate::render`] turn a [`Document`] into text.

use serde::Serialize;

/// A run of text, optionally linked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inline {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: Some(url.into()),
        }
    }
}

/// A paragraph made of inline runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Paragraph {
    pub content: Vec<Inline>,
}

impl Paragraph {
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![Inline::text(text)])
    }

    /// Link every occurrence of `target` to `url`.
    ///
    /// The matched text becomes its own inline; the fragments around it
    /// keep the link they already had, so a linked line can carry a second
    /// link inside it.
    pub fn insert_link(mut self, target: &str, url: &str) -> Self {
        if target.is_empty() {
            return self;
        }
        let mut content = Vec::with_capacity(self.content.len());
        for inline in self.content.drain(..) {
            if !inline.text.contains(target) {
                content.push(inline);
                continue;
            }
            let mut pieces = inline.text.split(target).peekable();
            while let Some(piece) = pieces.next() {
                if !piece.is_empty() {
                    content.push(Inline {
                        text: piece.to_string(),
                        url: inline.url.clone(),
                    });
                }
                if pieces.peek().is_some() {
                    content.push(Inline::link(target, url));
                }
            }
        }
        self.content = content;
        self
    }

    /// `(anchor text, target)` for every linked inline, in order.
    #[cfg(test)]
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.content
            .iter()
            .filter_map(|i| i.url.as_deref().map(|url| (i.text.as_str(), url)))
    }

    /// The paragraph's text with links flattened.
    #[cfg(test)]
    pub fn plain_text(&self) -> String {
        self.content.iter().map(|i| i.text.as_str()).collect()
    }
}

/// A top-level document element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { content: Paragraph },
    List { ordered: bool, items: Vec<Paragraph> },
    Code { lang: String, code: String },
    HorizontalRule,
}

/// One rendered README, as an ordered sequence of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) -> &mut Self {
        self.blocks.push(Block::Heading {
            level,
            text: text.into(),
        });
        self
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.blocks.push(Block::Paragraph { content: paragraph });
        self
    }

    pub fn add_list(&mut self, items: Vec<Paragraph>, ordered: bool) -> &mut Self {
        self.blocks.push(Block::List { ordered, items });
        self
    }

    pub fn add_code(&mut self, code: impl Into<String>, lang: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Code {
            lang: lang.into(),
            code: code.into(),
        });
        self
    }

    pub fn add_horizontal_rule(&mut self) -> &mut Self {
        self.blocks.push(Block::HorizontalRule);
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}
