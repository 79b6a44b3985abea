pub mod game_management_handler;
