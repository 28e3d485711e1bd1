use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(usize);

/// Variant tag of a graph node. Quantifier wrappers hold the handle of the
/// atom they wrap; the same handle also appears in their outgoing edges, so
/// the wrapper and the linear chain share one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StateKind {
    Start,
    Termination,
    Literal(char),
    Wildcard,
    Star(StateId),
    Plus(StateId),
}

#[derive(Debug)]
struct State {
    kind: StateKind,
    // outgoing edges in left-to-right pattern order
    next: Vec<StateId>,
}

/// Errors raised while compiling a pattern. Matching itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("character {ch:?} at index {index} is not supported")]
    UnsupportedCharacter { ch: char, index: usize },

    #[error("quantifier {quantifier:?} at index {index} has no preceding atom")]
    QuantifierWithoutOperand { quantifier: char, index: usize },
}

/// A pattern compiled into a state graph. Built once by [`RegexFsm::new`];
/// [`RegexFsm::matches`] only reads the graph, so a compiled instance can be
/// shared freely between threads.
#[derive(Debug)]
pub struct RegexFsm {
    states: Vec<State>,
    start: StateId,
}

impl RegexFsm {
    /// Compiles `pattern` into a state graph.
    ///
    /// Supported syntax: literal ASCII characters, `.` for any single
    /// character, and the postfix quantifiers `*` and `+` applied to the
    /// immediately preceding atom.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let mut fsm = RegexFsm {
            states: Vec::new(),
            start: StateId(0),
        };
        fsm.start = fsm.alloc(StateKind::Start);

        let mut chain: Vec<StateId> = Vec::new();
        for (index, ch) in pattern.chars().enumerate() {
            match ch {
                '.' => chain.push(fsm.alloc(StateKind::Wildcard)),
                '*' | '+' => {
                    let inner =
                        chain
                            .pop()
                            .ok_or(PatternError::QuantifierWithoutOperand {
                                quantifier: ch,
                                index,
                            })?;
                    let kind = if ch == '*' {
                        StateKind::Star(inner)
                    } else {
                        StateKind::Plus(inner)
                    };
                    let wrapper = fsm.alloc(kind);
                    // the wrapper matches through its inner atom, so the
                    // inner handle becomes its first outgoing edge
                    fsm.states[wrapper.0].next.push(inner);
                    chain.push(wrapper);
                }
                c if c.is_ascii() => chain.push(fsm.alloc(StateKind::Literal(c))),
                c => return Err(PatternError::UnsupportedCharacter { ch: c, index }),
            }
        }

        for pair in chain.windows(2) {
            fsm.states[pair[0].0].next.push(pair[1]);
        }

        let termination = fsm.alloc(StateKind::Termination);
        match (chain.first().copied(), chain.last().copied()) {
            (Some(first), Some(last)) => {
                fsm.states[last.0].next.push(termination);
                fsm.states[fsm.start.0].next.push(first);
            }
            // empty pattern: accept only the empty string
            _ => fsm.states[fsm.start.0].next.push(termination),
        }

        debug!(pattern, states = fsm.states.len(), "compiled pattern");
        Ok(fsm)
    }

    /// Whether `input` is accepted in full: there is at least one path from
    /// the start state to the termination state that consumes every
    /// character of `input` in order.
    ///
    /// Backtracking search; nested quantifiers against adversarial input can
    /// take exponential time.
    pub fn matches(&self, input: &str) -> bool {
        let chars: Vec<char> = input.chars().collect();
        let verdict = self.accepts(self.start, 0, &chars);
        trace!(input, verdict, "match finished");
        verdict
    }

    fn alloc(&mut self, kind: StateKind) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(State { kind, next: Vec::new() });
        id
    }

    fn accepts(&self, state: StateId, pos: usize, input: &[char]) -> bool {
        if pos == input.len() {
            return self.terminates(state);
        }
        let c = input[pos];
        if self.check_self(state, c) && self.accepts(state, pos + 1, input) {
            return true;
        }
        for &next in &self.states[state.0].next {
            if self.check_self(next, c) && self.accepts(next, pos + 1, input) {
                return true;
            }
            // a star may contribute zero occurrences, so also enter it
            // without consuming a character
            if matches!(self.states[next.0].kind, StateKind::Star(_))
                && self.accepts(next, pos, input)
            {
                return true;
            }
        }
        false
    }

    // Termination reachable through zero-consumption edges only: either a
    // direct successor, or transitively through star skips.
    fn terminates(&self, state: StateId) -> bool {
        self.states[state.0]
            .next
            .iter()
            .any(|&next| match self.states[next.0].kind {
                StateKind::Termination => true,
                StateKind::Star(_) => self.terminates(next),
                _ => false,
            })
    }

    fn check_self(&self, state: StateId, c: char) -> bool {
        match self.states[state.0].kind {
            StateKind::Start | StateKind::Termination => false,
            StateKind::Literal(sym) => sym == c,
            StateKind::Wildcard => true,
            StateKind::Plus(inner) => self.check_self(inner, c),
            // a star matches through its inner atom, or through anything
            // else reachable over its outgoing edges
            StateKind::Star(inner) => {
                self.check_self(inner, c)
                    || self.states[state.0]
                        .next
                        .iter()
                        .any(|&next| self.check_self(next, c))
            }
        }
    }
}
