/// Board dimensions and diagonal geometry.
pub mod geometry;
/// The contents of the board and its text encodings.
pub mod state;
