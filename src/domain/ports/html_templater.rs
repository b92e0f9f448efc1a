//! HtmlTemplater port - merges per-request fragments into the built HTML shell

pub trait HtmlTemplater: Send + Sync {
    fn render(&self, content: &str, head: &str, body: &str) -> String;
}
