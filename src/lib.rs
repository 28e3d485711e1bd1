//! A small regular-expression engine over a compiled state graph.
//!
//! Patterns support literal ASCII characters, `.` (any single character),
//! and the postfix quantifiers `*` and `+`. A pattern is compiled once into
//! a graph of states; matching is a backtracking search over that graph and
//! accepts whole strings only.

mod fsm;

pub use fsm::{PatternError, RegexFsm};

#[cfg(test)]
mod tests {
    use crate::RegexFsm;

    #[test]
    pub fn test_match() {
        {
            let pattern = "a+b+";
            let fsm = RegexFsm::new(pattern).unwrap();
            assert_eq!(fsm.matches("aaaabbb"), true);
            assert_eq!(fsm.matches("aaaa"), false);
            let pattern = "a*4.+hi";
            let fsm = RegexFsm::new(pattern).unwrap();
            assert_eq!(fsm.matches("aaaaaa4uhi"), true);
            assert_eq!(fsm.matches("meow"), false);
        }
    }
}
