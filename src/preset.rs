pub mod boards {
    /// The standard opening position, in the notation used by
    /// [`Board::from_notation`](crate::board::state::Board::from_notation).
    pub const STANDARD: &str = "1B1B1B1B/B1B1B1B1/1B1B1B1B/8/8/C1C1C1C1/1C1C1C1C/C1C1C1C1";
}
