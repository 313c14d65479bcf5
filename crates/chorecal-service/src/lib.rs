pub mod chores;
pub mod error;
pub mod range;
pub mod recurrence;
