pub mod chore;

pub use chore::{Chore, ChoreUpdate, NewChore, RecurrenceRule};
