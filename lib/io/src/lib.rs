pub mod board_io;
pub mod error;
pub mod game_io;
pub mod move_io;
