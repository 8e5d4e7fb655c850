pub mod representations {
	pub mod board;
	pub mod piece;
	pub mod state;
	pub mod moves;
}

pub mod moves {
	pub mod move_gen;
}

pub mod bots {
	pub mod bot;
	pub mod random_bot;
	pub mod heuristic_bot;
	pub mod smart_bot;
}

pub mod constants;
pub mod error;
pub mod play;
pub mod util;
