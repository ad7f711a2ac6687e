//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the Document model directly as JSON.

use crate::document::Document;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> String {
        // The model holds only strings, integers and booleans.
        let mut out = serde_json::to_string_pretty(doc).unwrap_or_default();
        out.push('\n');
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
