//! Reducer for the counter state machine.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

/// Pure transition table: `increment` adds one, `decrement` subtracts one,
/// anything else leaves the state untouched.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState {
                count: state.count.saturating_add(1),
            },
            CounterIntent::Decrement => CounterState {
                count: state.count.saturating_sub(1),
            },
            CounterIntent::Unrecognized(_) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_adds_one() {
        let state = CounterReducer::reduce(CounterState { count: 4 }, CounterIntent::Increment);
        assert_eq!(state.count, 5);
    }

    #[test]
    fn decrement_goes_negative() {
        let state = CounterReducer::reduce(CounterState::default(), CounterIntent::Decrement);
        assert_eq!(state.count, -1);
    }

    #[test]
    fn unrecognized_is_identity() {
        let state = CounterState { count: 7 };
        let next = CounterReducer::reduce(state, CounterIntent::from_name("reset"));
        assert_eq!(next, state);
    }

    #[test]
    fn bounds_saturate() {
        let state =
            CounterReducer::reduce(CounterState { count: i64::MAX }, CounterIntent::Increment);
        assert_eq!(state.count, i64::MAX);
    }
}
