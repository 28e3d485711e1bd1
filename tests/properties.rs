use proptest::prelude::*;
use regex_fsm::RegexFsm;

proptest! {
    #[test]
    fn literal_pattern_accepts_itself(pattern in "[a-zA-Z0-9]{1,12}") {
        let fsm = RegexFsm::new(&pattern).unwrap();
        prop_assert!(fsm.matches(&pattern));
    }

    #[test]
    fn literal_pattern_rejects_proper_prefixes(pattern in "[a-zA-Z0-9]{2,12}") {
        let fsm = RegexFsm::new(&pattern).unwrap();
        prop_assert!(!fsm.matches(&pattern[..pattern.len() - 1]));
    }

    #[test]
    fn literal_pattern_rejects_extensions(
        pattern in "[a-zA-Z0-9]{1,12}",
        extra in "[a-zA-Z0-9]{1,4}",
    ) {
        let fsm = RegexFsm::new(&pattern).unwrap();
        let extended = format!("{pattern}{extra}");
        prop_assert!(!fsm.matches(&extended));
    }

    #[test]
    fn star_accepts_any_repetition_count(count in 0usize..20) {
        let fsm = RegexFsm::new("a*bc").unwrap();
        let input = format!("{}bc", "a".repeat(count));
        prop_assert!(fsm.matches(&input));
    }

    #[test]
    fn verdict_is_stable_across_calls(input in "[a-z0-9]{0,8}") {
        let fsm = RegexFsm::new("a*4.+hi").unwrap();
        let first = fsm.matches(&input);
        for _ in 0..3 {
            prop_assert_eq!(fsm.matches(&input), first);
        }
    }
}
