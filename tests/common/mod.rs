#![allow(dead_code)]

pub mod tournament_helpers;
pub mod utils;
