#[cfg(test)]
mod report_tests {
    use crate::aggregator::structs::log_aggregator::LogAggregator;

    fn sample() -> LogAggregator {
        let mut aggregator = LogAggregator::with_capacities(101, 1009).unwrap();
        aggregator.ingest_lines([
            "Jun 1 10:00:00 1.2.3.5:22 Failed password",
            "Jun 1 10:00:01 1.2.3.4:22 Failed password",
            "Jun 1 10:00:02 1.2.9.9:22 Failed password",
            "Jun 1 10:00:03 1.2.9.9:22 Invalid user",
            "Jun 1 10:00:04 7.7.0.1:22 Invalid user",
        ]).unwrap();
        aggregator
    }

    fn render(mode: crate::report::enums::query_mode::QueryMode, format: crate::report::enums::output_format::OutputFormat, input: &str) -> String {
        let mut out = Vec::new();
        crate::report::report::answer(&sample(), mode, format, input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_only_networks_and_range_read_queries() {
        use crate::report::enums::query_mode::QueryMode;
        assert!(QueryMode::Networks.reads_queries());
        assert!(QueryMode::Range.reads_queries());
        assert!(!QueryMode::Busiest.reads_queries());
        assert!(!QueryMode::Sorted.reads_queries());
    }

    mod text_tests {
        use crate::report::enums::output_format::OutputFormat;
        use crate::report::enums::query_mode::QueryMode;
        use super::render;

        #[test]
        fn test_networks_text() {
            let output = render(QueryMode::Networks, OutputFormat::Text, "2\n1.2\n9.9\n");
            assert_eq!(output, "1.2\n4\n3\n1.2.3.4\n1.2.3.5\n1.2.9.9\n\n9.9\nnetwork not found\n");
        }

        #[test]
        fn test_networks_count_limits_queries() {
            let output = render(QueryMode::Networks, OutputFormat::Text, "1 7.7 1.2");
            assert_eq!(output, "7.7\n1\n1\n7.7.0.1\n");
        }

        #[test]
        fn test_networks_empty_input() {
            assert_eq!(render(QueryMode::Networks, OutputFormat::Text, ""), "");
        }

        #[test]
        fn test_busiest_text() {
            let output = render(QueryMode::Busiest, OutputFormat::Text, "");
            assert_eq!(output, "1.2\n\n1.2.9.9\n");
        }

        #[test]
        fn test_sorted_text_ascending() {
            let output = render(QueryMode::Sorted, OutputFormat::Text, "ignored input");
            assert_eq!(output, concat!(
                "Jun 1 10:00:01 1.2.3.4:22 Failed password\n",
                "Jun 1 10:00:00 1.2.3.5:22 Failed password\n",
                "Jun 1 10:00:02 1.2.9.9:22 Failed password\n",
                "Jun 1 10:00:03 1.2.9.9:22 Invalid user\n",
                "Jun 1 10:00:04 7.7.0.1:22 Invalid user\n",
            ));
        }

        #[test]
        fn test_range_text_descending() {
            let output = render(QueryMode::Range, OutputFormat::Text, "1.2.3.4 1.2.9.9");
            assert_eq!(output, concat!(
                "Jun 1 10:00:03 1.2.9.9:22 Invalid user\n",
                "Jun 1 10:00:02 1.2.9.9:22 Failed password\n",
                "Jun 1 10:00:00 1.2.3.5:22 Failed password\n",
                "Jun 1 10:00:01 1.2.3.4:22 Failed password\n",
            ));
        }
    }

    mod json_tests {
        use crate::report::enums::output_format::OutputFormat;
        use crate::report::enums::query_mode::QueryMode;
        use super::render;

        #[test]
        fn test_networks_json() {
            let output = render(QueryMode::Networks, OutputFormat::Json, "2 1.2 9.9");
            let value: serde_json::Value = serde_json::from_str(&output).unwrap();
            assert_eq!(value[0]["found"], true);
            assert_eq!(value[0]["prefix"], "1.2");
            assert_eq!(value[0]["access_count"], 4);
            assert_eq!(value[0]["sorted_hosts"][0], "1.2.3.4");
            assert_eq!(value[1]["found"], false);
            assert_eq!(value[1]["query"], "9.9");
        }

        #[test]
        fn test_busiest_json() {
            let output = render(QueryMode::Busiest, OutputFormat::Json, "");
            let value: serde_json::Value = serde_json::from_str(&output).unwrap();
            assert_eq!(value["networks"], serde_json::json!(["1.2"]));
            assert_eq!(value["hosts"], serde_json::json!(["1.2.9.9"]));
        }

        #[test]
        fn test_sorted_json() {
            let output = render(QueryMode::Sorted, OutputFormat::Json, "");
            let value: serde_json::Value = serde_json::from_str(&output).unwrap();
            assert_eq!(value.as_array().map(|records| records.len()), Some(5));
            assert_eq!(value[0]["host"], "1.2.3.4");
            assert_eq!(value[4]["host"], "7.7.0.1");
        }

        #[test]
        fn test_range_json() {
            let output = render(QueryMode::Range, OutputFormat::Json, "7.7.0.0 7.7.255.255");
            let value: serde_json::Value = serde_json::from_str(&output).unwrap();
            assert_eq!(value[0]["host"], "7.7.0.1");
            assert_eq!(value[0]["port"], 22);
            assert_eq!(value[0]["timestamp"]["month"], 6);
        }
    }

    mod error_tests {
        use crate::report::enums::output_format::OutputFormat;
        use crate::report::enums::query_mode::QueryMode;
        use crate::report::report::answer;
        use super::sample;

        #[test]
        fn test_bad_count() {
            let mut out = Vec::new();
            assert!(answer(&sample(), QueryMode::Networks, OutputFormat::Text, "many 1.2", &mut out).is_err());
        }

        #[test]
        fn test_range_needs_two_addresses() {
            let mut out = Vec::new();
            assert!(answer(&sample(), QueryMode::Range, OutputFormat::Text, "1.2.3.4", &mut out).is_err());
            assert!(answer(&sample(), QueryMode::Range, OutputFormat::Text, "1.2.3.4 nope", &mut out).is_err());
        }
    }
}
