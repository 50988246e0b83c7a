//! Application layer orchestrating a counter session.
//!
//! `CounterSession` drives the operator dialogue. Accepted orders are copied
//! onto an `OrderQueue`, a bounded `tokio` channel drained by one worker task,
//! while the session keeps its own `Ledger` for the summary and settlement.

pub mod queue;
pub mod session;
pub mod settlement;
pub mod summary;
