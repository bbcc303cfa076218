use line_utils::{count_lines, multiply, processed_line_count, LineReport};
use proptest::prelude::*;
use std::io::Cursor;

proptest! {
    #[test]
    fn test_non_positive_counts_are_zero(raw in i64::MIN..=0, has_header in any::<bool>()) {
        prop_assert_eq!(processed_line_count(raw, has_header), 0);
    }

    #[test]
    fn test_positive_counts_drop_only_header(raw in 1i64..=i64::MAX, has_header in any::<bool>()) {
        let expected = if has_header { raw - 1 } else { raw };
        prop_assert_eq!(processed_line_count(raw, has_header), expected);
    }

    #[test]
    fn test_processed_count_never_negative(raw in any::<i64>(), has_header in any::<bool>()) {
        let processed = processed_line_count(raw, has_header);
        prop_assert!(processed >= 0);
        prop_assert!(processed <= raw.max(0));
    }

    #[test]
    fn test_count_lines_matches_joined_rows(
        rows in prop::collection::vec("[a-z0-9,]*", 0..50),
        trailing_newline in any::<bool>(),
    ) {
        let mut text = rows.join("\n");
        if trailing_newline && !rows.is_empty() {
            text.push('\n');
        }

        // An empty final row without a newline adds no bytes, so it is not a line.
        let expected = match rows.last() {
            None => 0,
            Some(_) if trailing_newline => rows.len() as i64,
            Some(last) if last.is_empty() => rows.len() as i64 - 1,
            Some(_) => rows.len() as i64,
        };
        prop_assert_eq!(count_lines(Cursor::new(text)).unwrap(), expected);
    }

    #[test]
    fn test_report_data_lines_consistent(raw in -100i64..10000, has_header in any::<bool>()) {
        let report = LineReport::new("prop.csv", raw, has_header);
        prop_assert_eq!(report.data_lines, processed_line_count(raw, has_header));
        prop_assert_eq!(report.to_json().unwrap()["dataLines"].as_i64(), Some(report.data_lines));
    }

    #[test]
    fn test_multiply_by_zero_and_one(a in -1e12f64..1e12) {
        prop_assert_eq!(multiply(a, 1.0), a);
        prop_assert_eq!(multiply(a, 0.0).abs(), 0.0);
    }
}
