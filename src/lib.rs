pub mod array;
pub use array::{BoolArray, FixedArray};

pub mod bit;
pub use bit::{Bitboard, BitboardBits, ParseBitboardError};

pub mod bounds;
pub use bounds::OutOfBounds;

pub mod elementwise;
pub use elementwise::Elementwise;

pub mod ring;
pub use ring::RingBuffer;
