mod tests {
    use crate::parse::{DayTimings, TimingTable};
    use crate::report::{render_day_table, render_year_tables};

    fn day(days: &mut DayTimings, name: &str, parts: &[(&str, &str)]) {
        let slot = days.entry(name.to_string()).or_default();
        for (part, time) in parts {
            slot.insert(part.to_string(), time.to_string());
        }
    }

    #[test]
    fn renders_header_and_total_row() {
        let mut days = DayTimings::new();
        day(&mut days, "day3", &[("part1", "50.00"), ("part2", "25.50")]);

        let table = render_day_table(&days).expect("render");
        let mut lines = table.lines();
        assert_eq!(
            lines.next(),
            Some("| Day Number | Part 1 Time (µs) | Part 2 Time (µs) | Total Time (µs) |")
        );
        assert_eq!(
            lines.next(),
            Some("|------------|------------------|------------------|-----------------|")
        );
        assert_eq!(
            lines.next(),
            Some("| 3          | 50.00          | 25.50          | 75.50          |")
        );
        assert_eq!(lines.next(), None);
        assert!(!table.ends_with('\n'));
    }

    #[test]
    fn missing_part_renders_na_and_no_total() {
        let mut days = DayTimings::new();
        day(&mut days, "day1", &[("part1", "100.00")]);

        let table = render_day_table(&days).expect("render");
        let row = table.lines().nth(2).expect("data row");
        assert_eq!(row, "| 1          | 100.00          | N/A          | N/A          |");
    }

    #[test]
    fn day_order_is_plain_string_order() {
        let mut days = DayTimings::new();
        day(&mut days, "day2", &[("part1", "1.0")]);
        day(&mut days, "day10", &[("part1", "2.0")]);

        let table = render_day_table(&days).expect("render");
        let labels: Vec<&str> = table
            .lines()
            .skip(2)
            .map(|row| row.split_whitespace().nth(1).expect("day label"))
            .collect();
        // "day10" sorts before "day2" on the string key; kept on purpose.
        assert_eq!(labels, ["10", "2"]);
    }

    #[test]
    fn total_sums_to_two_decimals() {
        let mut days = DayTimings::new();
        day(&mut days, "day7", &[("part1", "12.345"), ("part2", "0.005")]);

        let table = render_day_table(&days).expect("render");
        assert!(table.contains("| 12.35          |"), "got: {table}");
    }

    #[test]
    fn malformed_recorded_time_is_an_error() {
        let mut days = DayTimings::new();
        day(&mut days, "day5", &[("part1", "1.2.3"), ("part2", "4.0")]);

        let err = render_day_table(&days).unwrap_err();
        assert!(err.to_string().contains("day5"), "got: {err}");
    }

    #[test]
    fn multi_year_body_has_sorted_headings_and_blank_separation() {
        let mut table = TimingTable::new();
        table.record_run("2024", "day1 part 1  time: [1.0 µs 2.0 µs 3.0 µs]");
        table.record_run("2015", "day1 part 1  time: [4.0 µs 5.0 µs 6.0 µs]");

        let body = render_year_tables(&table).expect("render");
        let year_2015 = body.find("### Year 2015").expect("2015 heading");
        let year_2024 = body.find("### Year 2024").expect("2024 heading");
        assert!(year_2015 < year_2024);
        assert!(body.ends_with("|\n\n"), "body should end with a blank line");
        assert!(body.contains("|\n\n### Year 2024"), "tables separated by a blank line");
    }

    #[test]
    fn empty_table_renders_empty_body() {
        let body = render_year_tables(&TimingTable::new()).expect("render");
        assert!(body.is_empty());
    }
}
