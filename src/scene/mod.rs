pub mod display;
pub mod end_of_game;
pub mod error;
pub mod host;
pub mod outcome;
pub mod presentable;
pub mod stage;
pub mod style;
