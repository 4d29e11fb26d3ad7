//! Text-cycling effect for the hero headline.
//!
//! The effect types a role one character at a time, holds the full text,
//! deletes it again and moves on to the next role, forever. Everything here
//! is a pure function of the current state and the elapsed time, so the
//! timer wiring in `components::typewriter_text` stays a thin driver.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_interval_ms: u32,
    pub delete_interval_ms: u32,
    pub hold_ms: u32,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one role")]
    NoRoles,
    #[error("typewriter intervals must be greater than zero")]
    ZeroInterval,
}

/// Where the effect currently is. Only [`Typewriter`] can move it forward,
/// which keeps `visible_text` a prefix of the current role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypewriterState {
    role_index: usize,
    visible_text: String,
    is_deleting: bool,
    // time already spent waiting for the next transition
    pending_ms: u64,
}

impl TypewriterState {
    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn visible_text(&self) -> &str {
        &self.visible_text
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    roles: Vec<String>,
    timing: TypewriterTiming,
}

impl Typewriter {
    pub fn new(roles: Vec<String>, timing: TypewriterTiming) -> Result<Self, TypewriterError> {
        if roles.is_empty() {
            return Err(TypewriterError::NoRoles);
        }
        if timing.type_interval_ms == 0 || timing.delete_interval_ms == 0 || timing.hold_ms == 0 {
            return Err(TypewriterError::ZeroInterval);
        }
        Ok(Self { roles, timing })
    }

    /// The role the given state is typing or deleting.
    pub fn current_role(&self, state: &TypewriterState) -> &str {
        &self.roles[state.role_index % self.roles.len()]
    }

    /// Milliseconds to wait in `state` before the next transition fires.
    /// Zero only when a deletion just finished and the next role is due.
    pub fn next_delay(&self, state: &TypewriterState) -> u32 {
        let shown = state.visible_text.chars().count();
        let full = self.current_role(state).chars().count();

        match (state.is_deleting, shown < full) {
            (false, true) => self.timing.type_interval_ms,
            (false, false) => self.timing.hold_ms,
            (true, _) if shown > 0 => self.timing.delete_interval_ms,
            (true, _) => 0,
        }
    }

    /// Applies exactly one transition, ignoring timing.
    pub fn tick(&self, state: &TypewriterState) -> TypewriterState {
        let role = self.current_role(state);
        let shown = state.visible_text.chars().count();

        let mut next = TypewriterState {
            role_index: state.role_index % self.roles.len(),
            visible_text: state.visible_text.clone(),
            is_deleting: state.is_deleting,
            pending_ms: 0,
        };

        if !state.is_deleting {
            match role.chars().nth(shown) {
                Some(c) => next.visible_text.push(c),
                None => next.is_deleting = true,
            }
        } else if next.visible_text.pop().is_none() {
            next.is_deleting = false;
            next.role_index = (next.role_index + 1) % self.roles.len();
        }

        next
    }

    /// Moves `state` forward by `elapsed_ms`, firing every transition whose
    /// delay fits. Leftover time is kept in the returned state so that
    /// splitting an interval into smaller steps gives the same result.
    pub fn advance(&self, state: &TypewriterState, elapsed_ms: u32) -> TypewriterState {
        let mut budget = (state.pending_ms + u64::from(elapsed_ms)) % self.period_ms();
        let mut state = TypewriterState {
            pending_ms: 0,
            ..state.clone()
        };

        loop {
            let delay = u64::from(self.next_delay(&state));
            if budget < delay {
                break;
            }
            budget -= delay;
            state = self.tick(&state);
        }

        state.pending_ms = budget;
        state
    }

    /// Length of one full cycle through every role.
    pub fn period_ms(&self) -> u64 {
        let timing = self.timing;
        self.roles
            .iter()
            .map(|role| {
                let chars = role.chars().count() as u64;
                chars * u64::from(timing.type_interval_ms)
                    + u64::from(timing.hold_ms)
                    + chars * u64::from(timing.delete_interval_ms)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(type_ms: u32, delete_ms: u32, hold_ms: u32) -> TypewriterTiming {
        TypewriterTiming {
            type_interval_ms: type_ms,
            delete_interval_ms: delete_ms,
            hold_ms,
        }
    }

    fn typewriter(roles: &[&str], timing: TypewriterTiming) -> Typewriter {
        Typewriter::new(roles.iter().map(|r| r.to_string()).collect(), timing).unwrap()
    }

    #[test]
    fn rejects_empty_role_list() {
        assert_eq!(
            Typewriter::new(Vec::new(), timing(1, 1, 1)),
            Err(TypewriterError::NoRoles)
        );
    }

    #[test]
    fn rejects_zero_intervals() {
        let roles = vec!["a".to_string()];
        assert_eq!(
            Typewriter::new(roles.clone(), timing(0, 1, 1)),
            Err(TypewriterError::ZeroInterval)
        );
        assert_eq!(
            Typewriter::new(roles.clone(), timing(1, 0, 1)),
            Err(TypewriterError::ZeroInterval)
        );
        assert_eq!(
            Typewriter::new(roles, timing(1, 1, 0)),
            Err(TypewriterError::ZeroInterval)
        );
    }

    #[test]
    fn starts_empty_on_first_role() {
        let state = TypewriterState::default();
        assert_eq!(state.role_index(), 0);
        assert_eq!(state.visible_text(), "");
        assert!(!state.is_deleting());
    }

    #[test]
    fn delay_depends_on_phase() {
        let tw = typewriter(&["ab"], timing(100, 50, 2000));
        let mut state = TypewriterState::default();
        assert_eq!(tw.next_delay(&state), 100);

        state = tw.tick(&tw.tick(&state));
        assert_eq!(state.visible_text(), "ab");
        assert_eq!(tw.next_delay(&state), 2000);

        state = tw.tick(&state);
        assert!(state.is_deleting());
        assert_eq!(tw.next_delay(&state), 50);

        state = tw.tick(&tw.tick(&state));
        assert_eq!(state.visible_text(), "");
        assert!(state.is_deleting());
        assert_eq!(tw.next_delay(&state), 0);
    }

    #[test]
    fn single_role_types_then_deletes_every_prefix() {
        let tw = typewriter(&["abc"], timing(1, 1, 1));
        let mut state = TypewriterState::default();
        let mut shown = Vec::new();
        for _ in 0..8 {
            state = tw.tick(&state);
            shown.push(state.visible_text().to_string());
        }
        assert_eq!(shown, ["a", "ab", "abc", "abc", "ab", "a", "", ""]);
        assert_eq!(state, TypewriterState::default());
    }

    #[test]
    fn two_roles_cycle_one_millisecond_at_a_time() {
        let tw = typewriter(&["X", "Yo"], timing(1, 1, 1));
        let mut state = TypewriterState::default();
        let mut displayed: Vec<String> = Vec::new();
        for _ in 0..9 {
            state = tw.advance(&state, 1);
            let text = state.visible_text().to_string();
            if displayed.last() != Some(&text) {
                displayed.push(text);
            }
        }
        assert_eq!(displayed, ["X", "", "Y", "Yo", "Y", "", "X"]);
        assert_eq!(state.role_index(), 0);
    }

    #[test]
    fn wrap_to_next_role_costs_no_extra_time() {
        let tw = typewriter(&["X", "Yo"], timing(1, 1, 1));
        // type X, hold, delete X
        let state = tw.advance(&TypewriterState::default(), 3);
        assert_eq!(state.role_index(), 1);
        assert_eq!(state.visible_text(), "");
        assert!(!state.is_deleting());
        assert_eq!(tw.advance(&state, 1).visible_text(), "Y");
    }

    #[test]
    fn returns_to_start_after_one_period() {
        let tw = typewriter(&["X", "Yo"], timing(1, 1, 1));
        assert_eq!(tw.period_ms(), 8);

        let mut state = TypewriterState::default();
        for _ in 0..tw.period_ms() {
            state = tw.advance(&state, 1);
        }
        assert_eq!(state, TypewriterState::default());
    }

    #[test]
    fn visible_text_is_always_a_prefix_of_the_role() {
        let cases: [&[&str]; 4] = [
            &["Full Stack Developer", "Problem Solver", "AI Enthusiast"],
            &["a"],
            &["héllo ✓", "日本"],
            &["", "xy"],
        ];
        for roles in cases {
            let tw = typewriter(roles, timing(3, 2, 7));
            let mut state = TypewriterState::default();
            for _ in 0..(tw.period_ms() * 2) {
                state = tw.advance(&state, 1);
                let role = tw.current_role(&state);
                assert!(
                    role.starts_with(state.visible_text()),
                    "{:?} is not a prefix of {:?}",
                    state.visible_text(),
                    role
                );
                assert!(state.visible_text().chars().count() <= role.chars().count());
                assert!(state.role_index() < roles.len());
            }
        }
    }

    #[test]
    fn one_big_step_matches_many_small_steps() {
        let tw = typewriter(&["Problem Solver", "AI"], timing(100, 50, 2000));
        let mut stepped = TypewriterState::default();
        for _ in 0..137 {
            stepped = tw.advance(&stepped, 37);
        }
        let jumped = tw.advance(&TypewriterState::default(), 137 * 37);
        assert_eq!(stepped, jumped);
    }

    #[test]
    fn partial_elapsed_time_is_carried_over() {
        let tw = typewriter(&["ab"], timing(100, 50, 2000));
        let state = tw.advance(&TypewriterState::default(), 60);
        assert_eq!(state.visible_text(), "");
        assert_eq!(state.pending_ms, 60);

        let state = tw.advance(&state, 40);
        assert_eq!(state.visible_text(), "a");
        assert_eq!(state.pending_ms, 0);
    }
}
