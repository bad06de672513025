//! Binary-choice word filtering engine
//!
//! A session asks about one letter at a time. Each left/right answer narrows two
//! pools of candidate words under opposite readings of the same answer, until the
//! letters run out or either pool is down to one word.
//!
//! Everything here is pure: no I/O, no shared state between calls.

mod partition;
mod result;
mod state;

pub use partition::{Partition, classify, partition};
pub use result::GameResult;
pub use state::{
    FilterError, FilterState, Phase, initialize, pools_exhausted, transition, transition_input,
};
