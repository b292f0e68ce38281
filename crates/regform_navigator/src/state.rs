//! Step counter state.
//!
//! The current step is an explicit value: transitions are free functions
//! taking a state and returning the next one. The index always stays within
//! `0..=last`.

/// Position within a fixed sequence of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepState {
    index: usize,
    last: usize,
}

impl StepState {
    /// Initial state (step 0) for a form whose last step index is `last`.
    pub fn new(last: usize) -> Self {
        Self { index: 0, last }
    }

    /// Current step index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Index of the last step.
    pub fn last(&self) -> usize {
        self.last
    }

    /// Returns true on step 0.
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Returns true on the last step.
    pub fn is_last(&self) -> bool {
        self.index == self.last
    }
}

/// Moves one step forward; the last step is a fixed point.
pub fn advance(state: StepState) -> StepState {
    StepState {
        index: (state.index + 1).min(state.last),
        ..state
    }
}

/// Moves one step back; step 0 is a fixed point.
pub fn retreat(state: StepState) -> StepState {
    StepState {
        index: state.index.saturating_sub(1),
        ..state
    }
}

/// Returns to step 0.
pub fn reset(state: StepState) -> StepState {
    StepState { index: 0, ..state }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initial_state() {
        let state = StepState::new(2);
        assert_eq!(state.index(), 0);
        assert!(state.is_first());
        assert!(!state.is_last());
    }

    #[test]
    fn test_advance_and_retreat() {
        let state = advance(StepState::new(2));
        assert_eq!(state.index(), 1);
        let state = advance(state);
        assert!(state.is_last());
        assert_eq!(retreat(state).index(), 1);
    }

    #[test]
    fn test_bounds_are_fixed_points() {
        let first = StepState::new(2);
        assert_eq!(retreat(first), first);

        let last = advance(advance(first));
        assert_eq!(advance(last), last);
    }

    #[test]
    fn test_single_step_form() {
        let state = StepState::new(0);
        assert!(state.is_first() && state.is_last());
        assert_eq!(advance(state), state);
    }

    #[test]
    fn test_reset_from_any_step() {
        let mut state = StepState::new(4);
        for _ in 0..5 {
            assert_eq!(reset(state).index(), 0);
            assert_eq!(reset(state).last(), 4);
            state = advance(state);
        }
    }

    proptest! {
        #[test]
        fn prop_reset_from_any_reachable_step(
            last in 0usize..20,
            moves in prop::collection::vec(any::<bool>(), 0..50),
        ) {
            let mut state = StepState::new(last);
            for forward in moves {
                state = if forward { advance(state) } else { retreat(state) };
                prop_assert!(state.index() <= last);
            }

            let state = reset(state);
            prop_assert_eq!(state.index(), 0);
            prop_assert_eq!(state.last(), last);
        }
    }
}
