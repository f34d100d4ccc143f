use crate::core::validator::parse_number;
use crate::domain::model::ParsedLists;

/// Best-effort extraction of the two columns of a location file.
///
/// Each non-blank line contributes its first token to `list1` and its second
/// token to `list2`, independently: a slot whose token is missing or not a
/// number is skipped, so the two lists may end up with different lengths.
/// Fractional values are kept as-is. Blanks at either end of a line never
/// produce an empty token, so they never turn into a value.
///
/// ```
/// use chronicler::parse_input_file;
///
/// let parsed = parse_input_file("10 20\n30 40");
/// assert_eq!(parsed.list1, vec![10.0, 30.0]);
/// assert_eq!(parsed.list2, vec![20.0, 40.0]);
/// ```
pub fn parse_input_file(content: &str) -> ParsedLists {
    let mut parsed = ParsedLists::default();

    for line in content.lines().filter(|line| !line.trim().is_empty()) {
        let mut tokens = line.split_whitespace();
        if let Some(value) = tokens.next().and_then(parse_number) {
            parsed.list1.push(value);
        }
        if let Some(value) = tokens.next().and_then(parse_number) {
            parsed.list2.push(value);
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_columns() {
        let parsed = parse_input_file("10 20\n30 40");
        assert_eq!(parsed.list1, vec![10.0, 30.0]);
        assert_eq!(parsed.list2, vec![20.0, 40.0]);
    }

    #[test]
    fn test_skips_invalid_slots_independently() {
        let parsed = parse_input_file("1 x\ny 2\n3\n\n4 5 6");
        assert_eq!(parsed.list1, vec![1.0, 3.0, 4.0]);
        assert_eq!(parsed.list2, vec![2.0, 5.0]);
    }

    #[test]
    fn test_keeps_fractions() {
        let parsed = parse_input_file("1.5 -2.25\n");
        assert_eq!(parsed.list1, vec![1.5]);
        assert_eq!(parsed.list2, vec![-2.25]);
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert!(parse_input_file("").is_empty());
        assert!(parse_input_file("hello world\nNaN nan").is_empty());
        assert!(parse_input_file("inf infinity").is_empty());
    }

    #[test]
    fn test_blanks_at_line_edges_add_no_values() {
        let parsed = parse_input_file(" 10 20");
        assert_eq!(parsed.list1, vec![10.0]);
        assert_eq!(parsed.list2, vec![20.0]);

        let parsed = parse_input_file("10 \n\t30\t40\t");
        assert_eq!(parsed.list1, vec![10.0, 30.0]);
        assert_eq!(parsed.list2, vec![40.0]);
    }

    #[test]
    fn test_infinity_spelling() {
        let parsed = parse_input_file("-Infinity 1");
        assert_eq!(parsed.list1, vec![f64::NEG_INFINITY]);
        assert_eq!(parsed.list2, vec![1.0]);
    }
}
