//! HTML templating for the built application shell

mod html_page;

pub use html_page::HtmlPage;
