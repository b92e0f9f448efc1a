//! HTML Page
//!
//! Injects per-request fragments into the built `index.html`: `head` just
//! before the first `</head>`, `body` just before the last `</body>`. Tags
//! match case-insensitively; a document missing either tag is returned
//! without that fragment.

use crate::domain::ports::HtmlTemplater;

const HEAD_CLOSE: &str = "</head";
const BODY_CLOSE: &str = "</body";

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPage;

impl HtmlPage {
    pub fn new() -> Self {
        Self
    }
}

impl HtmlTemplater for HtmlPage {
    fn render(&self, content: &str, head: &str, body: &str) -> String {
        let mut html = String::with_capacity(content.len() + head.len() + body.len());
        html.push_str(content);

        if let Some(index) = html.to_ascii_lowercase().find(HEAD_CLOSE) {
            html.insert_str(index, head);
        }
        // Inline scripts may mention the tag; the real one is the last.
        if let Some(index) = html.to_ascii_lowercase().rfind(BODY_CLOSE) {
            html.insert_str(index, body);
        }

        html
    }
}
