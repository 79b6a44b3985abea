pub mod common;
pub mod game;
pub mod group;
pub mod phase;
pub mod stadium;
pub mod standings;
pub mod team;
