pub mod lifecycle;
pub mod standings;
pub mod validation;

pub use lifecycle::{LifecycleError, Transition};
pub use standings::{compute_standings, compute_standings_with, NameOrdering};
pub use validation::{TournamentValidator, ValidationError};
