//! The five counter variants and the root composer that shows them together.

mod basic;
mod callback;
mod data_attribute;
mod functional;
pub mod reducer_counter;
mod root;

pub use basic::BasicCounter;
pub use callback::CallbackCounter;
pub use data_attribute::{
    parse_delta, DataAttributeCounter, DEFAULT_DECREMENT_DELTA, DEFAULT_INCREMENT_DELTA,
    DELTA_ATTRIBUTE,
};
pub use functional::FunctionalCounter;
pub use reducer_counter::{CounterIntent, CounterReducer, CounterState, Dispatch, ReducerCounter};
pub use root::RootComposer;
