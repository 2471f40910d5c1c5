/// Tournaments listed on tugeny.org that are not jugger events.
///
/// Their matches would pull unrelated results into the ranking, so ingestion
/// drops them before any page for them is fetched.
const EXCLUDED_TOURNAMENTS: &[&str] = &["1-smash-brothers-turnier-zu-muenster"];

pub fn get_excluded_tournaments() -> &'static [&'static str] {
    EXCLUDED_TOURNAMENTS
}

pub fn is_excluded(slug: &str) -> bool {
    EXCLUDED_TOURNAMENTS.contains(&slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smash_brothers_is_excluded() {
        assert!(is_excluded("1-smash-brothers-turnier-zu-muenster"));
        assert!(!is_excluded("deutsche-meisterschaft-2019"));
        assert_eq!(get_excluded_tournaments().len(), 1);
    }
}
