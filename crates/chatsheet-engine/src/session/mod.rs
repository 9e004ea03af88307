pub mod assembler;
pub mod turn_builder;

pub use assembler::{aggregate_session, aggregate_turns, reorganize_session};
pub use turn_builder::TurnAggregator;
