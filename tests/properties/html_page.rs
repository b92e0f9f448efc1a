//! Property tests for fragment injection.

use proptest::prelude::*;

use ember_lift::domain::ports::HtmlTemplater;
use ember_lift::infrastructure::HtmlPage;

fn fragment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("(<meta name=\"[a-z]{1,8}\">|<script>[a-z();]{0,12}</script>){0,3}")
        .unwrap()
}

fn inner_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ]{0,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rendering never panics, even on non-HTML input.
    #[test]
    fn property_render_never_panics(content in ".*", head in ".*", body in ".*") {
        let _ = HtmlPage::new().render(&content, &head, &body);
    }

    /// PROPERTY: rendering only adds the fragments; nothing is dropped.
    #[test]
    fn property_render_preserves_document(
        title in inner_text(),
        main in inner_text(),
        head in fragment(),
        body in fragment(),
    ) {
        let shell = format!("<html><head><title>{title}</title></head><body>{main}</body></html>");

        let html = HtmlPage::new().render(&shell, &head, &body);

        prop_assert_eq!(html.len(), shell.len() + head.len() + body.len());
        let head_end = format!("{head}</head>");
        let body_end = format!("{body}</body></html>");
        prop_assert!(html.contains(&head_end));
        prop_assert!(html.ends_with(&body_end));
    }

    /// PROPERTY: empty fragments leave any document unchanged.
    #[test]
    fn property_empty_fragments_are_identity(content in ".*") {
        prop_assert_eq!(HtmlPage::new().render(&content, "", ""), content);
    }
}
