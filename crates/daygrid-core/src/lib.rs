//! Building blocks shared by the day grid crates: error kinds, an
//! invalidation-aware FIFO queue and a toolkit of single-pass iterator
//! combinators.

pub mod error;
pub mod queue;
pub mod seq;

pub use error::{CoreError, CoreResult, SeqError, SeqResult};
pub use queue::Queue;
