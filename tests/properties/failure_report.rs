//! Property tests for error sentinel parsing.

use proptest::prelude::*;

use ember_lift::domain::value_objects::FailureReport;

fn report_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        proptest::string::string_regex("[ \t]{0,4}[A-Za-z0-9:.()/_-][A-Za-z0-9 :.()/_-]{0,40}")
            .unwrap(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary content never panics.
    #[test]
    fn property_parse_never_panics(content in ".*") {
        let report = FailureReport::parse(&content);
        let _ = report.summary();
    }

    /// PROPERTY: the trace is exactly the non-blank lines, in order.
    #[test]
    fn property_trace_is_non_blank_lines(
        lines in proptest::collection::vec(report_line(), 0..12),
        crlf in any::<bool>(),
    ) {
        let newline = if crlf { "\r\n" } else { "\n" };
        let content = lines.join(newline);

        let report = FailureReport::parse(&content);

        let expected: Vec<String> = lines
            .iter()
            .map(|line| line.trim_end().to_string())
            .filter(|line| !line.trim().is_empty())
            .collect();
        prop_assert_eq!(report.lines(), expected.as_slice());
        prop_assert_eq!(report.summary(), expected.first().map(String::as_str).unwrap_or(""));
        prop_assert_eq!(report.is_empty(), expected.is_empty());
    }
}
