use super::matches::{MatchType, SetScore};

const SET_DELIMITER: &str = " | ";
const POINTS_DELIMITER: &str = " : ";

/// Typed form of a raw results string such as `"5 : 4 | 1 : 5 | - : -"`
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResults {
    pub sets: Vec<SetScore>,
    pub match_type: MatchType,
}

/// Parse a results string into set scores.
///
/// The match type is taken from the number of sets listed, placeholder sets
/// included. Sets with a non-numeric side (`- : -` for a set that was never
/// played) are dropped, so the result may hold fewer sets than listed, or none.
pub fn parse_match_results(raw: &str) -> ParsedResults {
    let sets_raw: Vec<&str> = raw.trim().split(SET_DELIMITER).collect();
    let match_type = if sets_raw.len() == 1 {
        MatchType::SingleSet
    } else {
        MatchType::MultiSet
    };

    let sets = sets_raw.into_iter().filter_map(parse_set).collect();

    ParsedResults { sets, match_type }
}

fn parse_set(set_raw: &str) -> Option<SetScore> {
    let mut points = set_raw.split(POINTS_DELIMITER);
    let points_a = parse_points(points.next())?;
    let points_b = parse_points(points.next())?;
    Some(SetScore(points_a, points_b))
}

fn parse_points(token: Option<&str>) -> Option<u64> {
    token?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_set() {
        let parsed = parse_match_results("7 : 3");

        assert_eq!(parsed.sets, vec![SetScore(7, 3)]);
        assert_eq!(parsed.match_type, MatchType::SingleSet);
    }

    #[test]
    fn test_unplayed_set_is_dropped() {
        let parsed = parse_match_results("5 : 4 | 1 : 5 | - : -");

        assert_eq!(parsed.sets, vec![SetScore(5, 4), SetScore(1, 5)]);
        assert_eq!(parsed.match_type, MatchType::MultiSet);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let parsed = parse_match_results("\n   10 : 10 \n");

        assert_eq!(parsed.sets, vec![SetScore(10, 10)]);
        assert_eq!(parsed.match_type, MatchType::SingleSet);
    }

    #[test]
    fn test_nothing_parseable_yields_no_sets() {
        let parsed = parse_match_results("- : -");
        assert!(parsed.sets.is_empty());
        assert_eq!(parsed.match_type, MatchType::SingleSet);

        let parsed = parse_match_results("- : - | - : -");
        assert!(parsed.sets.is_empty());
        assert_eq!(parsed.match_type, MatchType::MultiSet);

        let parsed = parse_match_results("");
        assert!(parsed.sets.is_empty());
    }

    #[test]
    fn test_half_placeholder_and_missing_delimiter_are_dropped() {
        let parsed = parse_match_results("3 : - | 6 | 2 : 4");

        assert_eq!(parsed.sets, vec![SetScore(2, 4)]);
        assert_eq!(parsed.match_type, MatchType::MultiSet);
    }

    #[test]
    fn test_points_beyond_u32_are_kept() {
        let parsed = parse_match_results("5000000000 : 3");

        assert_eq!(parsed.sets, vec![SetScore(5_000_000_000, 3)]);
        assert_eq!(parsed.match_type, MatchType::SingleSet);
    }
}
