pub mod game_query_service;
pub mod match_service;
pub mod standings_service;

pub use game_query_service::GameQueryService;
pub use match_service::MatchService;
pub use standings_service::StandingsService;
