pub mod game_handler;
pub mod phase_handler;
pub mod stadium_handler;
pub mod standings_handler;
pub mod team_handler;
