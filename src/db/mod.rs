pub mod fixtures;
pub mod memory_store;
pub mod store;

pub use fixtures::{load_fixtures, FixtureError, FixtureSet};
pub use memory_store::MemoryStore;
pub use store::{GameFilter, StoreError, TournamentStore};
