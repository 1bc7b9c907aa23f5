pub mod bitboard;

pub use bitboard::{Bitboard, BitboardBits, ParseBitboardError};
