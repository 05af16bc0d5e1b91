//! The availability and scheduling engine.
//!
//! Every operation here is a pure function over whole records: it takes
//! an `Availability` (and request data), computes, and returns the next
//! record for the caller to persist. There is no locking; concurrent
//! writers follow read-modify-write and the last save wins.

pub mod meeting;
pub mod projector;
pub mod range_update;
pub mod recurrence;
pub mod resolver;
pub mod slots;
