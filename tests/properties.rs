use dash_scrub::{filter_people, strip_all_dashes, strip_dashes, Person, DELIMITER};
use proptest::prelude::*;

proptest! {
    #[test]
    fn strip_is_idempotent(s: String) {
        let once = strip_dashes(&s);
        prop_assert_eq!(strip_dashes(&once), once);
    }

    #[test]
    fn stripped_output_has_no_delimiter_and_expected_length(s: String) {
        let out = strip_dashes(&s);
        prop_assert!(!out.contains(DELIMITER));
        // The delimiter is a one-byte character, so byte lengths line up too.
        let removed = s.matches(DELIMITER).count();
        prop_assert_eq!(out.len(), s.len() - removed);
    }

    #[test]
    fn strip_all_matches_per_element_strip(phrases: Vec<String>) {
        let all: Vec<String> = strip_all_dashes(phrases.iter()).collect();
        prop_assert_eq!(all.len(), phrases.len());
        for (out, input) in all.iter().zip(&phrases) {
            prop_assert_eq!(out, &strip_dashes(input));
        }
    }

    #[test]
    fn filter_preserves_relative_order(first_names: Vec<String>) {
        let people: Vec<Person> = first_names
            .iter()
            .map(|name| Person::new(name.clone(), ""))
            .collect();

        let kept: Vec<Person> =
            filter_people(people.clone(), |p| p.first_name_starts_with("B")).collect();

        let expected: Vec<Person> = people
            .into_iter()
            .filter(|p| p.first_name.starts_with("B"))
            .collect();

        prop_assert_eq!(kept, expected);
    }
}
