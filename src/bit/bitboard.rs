use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};
use std::str::FromStr;

use derive_more::{Display, Error};
use rand::Rng;
use sorted_iter::{SortedIterator, assume::AssumeSortedByItemExt};

use crate::bounds::{OutOfBounds, check_index};
use crate::elementwise::Elementwise;

/// A 64-bit unsigned bit vector.
///
/// The canonical textual form is a zero-padded 64-character binary string
/// with no `0b` prefix; bit index 0 addresses the most-significant bit (the
/// first character) and index 63 the least-significant bit (the last
/// character). [`Display`](std::fmt::Display) and [`to_binary`](Self::to_binary)
/// always produce exactly this form, and [`bit`](Self::bit),
/// [`set_bit`](Self::set_bit), and [`support`](Self::support) all follow the
/// same convention.
///
/// ```
/// use linar::Bitboard;
///
/// let board = Bitboard::from_bits(5);
/// let canonical = board.to_binary();
/// assert_eq!(canonical.len(), 64);
/// assert!(canonical.ends_with("101"));
/// assert_eq!(board.bit(63), Ok(true));
/// assert_eq!(board.bit(62), Ok(false));
/// assert_eq!(board.bit(61), Ok(true));
/// ```
///
/// # Construction
///
/// ```
/// use linar::Bitboard;
///
/// let empty = Bitboard::zeros();
/// let full = Bitboard::ones();
/// let parsed: Bitboard = "10011".parse().unwrap();
/// let raw = Bitboard::from_bits(0b10011);
/// assert_eq!(parsed, raw);
/// assert_eq!(empty.weight() + full.weight(), 64);
/// ```
///
/// # Operations
///
/// The pairwise operators of [`Elementwise`] (also available as `&`, `|`, and
/// `^`) return new boards; the shifts mutate the receiver in place and return
/// it again, so they chain.
///
/// ```
/// use linar::{Bitboard, Elementwise};
///
/// let mask = Bitboard::from_bits(0b110);
/// let other = Bitboard::from_bits(0b011);
/// assert_eq!(u64::from(mask.and_with(&other)), 0b010);
/// assert_eq!(u64::from(mask | other), 0b111);
///
/// let mut board = Bitboard::from_bits(0b1010);
/// board.shift_left(2).shift_right(1);
/// assert_eq!(u64::from(board), 0b10100);
/// ```
#[must_use]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// The fixed number of bits in every board.
    pub const WIDTH: usize = 64;

    /// Creates a board with every bit cleared.
    ///
    /// # Example
    ///
    /// ```
    /// use linar::Bitboard;
    ///
    /// let board = Bitboard::zeros();
    /// assert!(board.is_zero());
    /// assert_eq!(board.first_bit(), None);
    /// ```
    pub fn zeros() -> Bitboard {
        Bitboard { bits: 0 }
    }

    /// Creates a board with every bit set.
    ///
    /// # Example
    ///
    /// ```
    /// use linar::Bitboard;
    ///
    /// let board = Bitboard::ones();
    /// assert_eq!(board.weight(), 64);
    /// assert_eq!(board.to_binary(), "1".repeat(64));
    /// ```
    pub fn ones() -> Bitboard {
        Bitboard { bits: u64::MAX }
    }

    /// Creates a board holding the given raw value.
    pub fn from_bits(bits: u64) -> Bitboard {
        Bitboard { bits }
    }

    /// Creates a board from a binary string of `'0'` and `'1'` characters.
    ///
    /// The string may be shorter than 64 characters (it is value-extended
    /// with leading zeros) or longer, as long as the magnitude fits in 64
    /// bits. No sign, whitespace, or `0b` prefix is accepted.
    ///
    /// # Errors
    ///
    /// [`ParseBitboardError::Empty`] for an empty string,
    /// [`ParseBitboardError::InvalidDigit`] for any character other than
    /// `'0'` or `'1'`, and [`ParseBitboardError::Overflow`] when the value
    /// needs more than 64 bits.
    ///
    /// # Example
    ///
    /// ```
    /// use linar::Bitboard;
    ///
    /// let board = Bitboard::from_binary("101").unwrap();
    /// assert_eq!(u64::from(board), 5);
    ///
    /// assert!(Bitboard::from_binary("").is_err());
    /// assert!(Bitboard::from_binary("102").is_err());
    /// assert!(Bitboard::from_binary(&"1".repeat(65)).is_err());
    /// ```
    pub fn from_binary(source: &str) -> Result<Bitboard, ParseBitboardError> {
        if source.is_empty() {
            return Err(ParseBitboardError::Empty);
        }
        for (position, character) in source.chars().enumerate() {
            if character != '0' && character != '1' {
                return Err(ParseBitboardError::InvalidDigit { character, position });
            }
        }
        let bits = u64::from_str_radix(source, 2).map_err(|_| ParseBitboardError::Overflow)?;
        Ok(Bitboard { bits })
    }

    /// Creates a board with uniformly random bits.
    ///
    /// # Example
    ///
    /// ```
    /// use linar::Bitboard;
    ///
    /// let board = Bitboard::random(&mut rand::thread_rng());
    /// assert_eq!(board.to_binary().len(), 64);
    /// ```
    pub fn random(random_number_generator: &mut impl Rng) -> Bitboard {
        Bitboard {
            bits: random_number_generator.r#gen::<u64>(),
        }
    }

    /// Returns the raw 64-bit value.
    #[must_use]
    pub fn to_bits(&self) -> u64 {
        self.bits
    }

    /// Renders the canonical textual form: 64 characters, zero-padded,
    /// most-significant bit first.
    ///
    /// # Example
    ///
    /// ```
    /// use linar::Bitboard;
    ///
    /// let board = Bitboard::from_binary("1010").unwrap();
    /// let mut expected = "0".repeat(60);
    /// expected.push_str("1010");
    /// assert_eq!(board.to_binary(), expected);
    /// ```
    #[must_use]
    pub fn to_binary(&self) -> String {
        format!("{:064b}", self.bits)
    }

    /// Overwrites the whole board from a binary string, validating it
    /// exactly like [`from_binary`](Self::from_binary). A failed parse
    /// leaves the board unchanged.
    ///
    /// # Errors
    ///
    /// The same errors as [`from_binary`](Self::from_binary).
    ///
    /// # Example
    ///
    /// ```
    /// use linar::Bitboard;
    ///
    /// let mut board = Bitboard::ones();
    /// board.assign_binary("10").unwrap();
    /// assert_eq!(u64::from(board), 2);
    ///
    /// assert!(board.assign_binary("21").is_err());
    /// assert_eq!(u64::from(board), 2);
    /// ```
    pub fn assign_binary(&mut self, source: &str) -> Result<(), ParseBitboardError> {
        self.bits = Bitboard::from_binary(source)?.bits;
        Ok(())
    }

    /// Reads the bit at `index` under the MSB-is-0 convention.
    ///
    /// # Errors
    ///
    /// [`OutOfBounds`] when `index` is not in `[0, 63]`.
    ///
    /// # Example
    ///
    /// ```
    /// use linar::Bitboard;
    ///
    /// let board = Bitboard::from_binary("1").unwrap();
    /// assert_eq!(board.bit(63), Ok(true));
    /// assert_eq!(board.bit(0), Ok(false));
    /// assert!(board.bit(64).is_err());
    /// ```
    pub fn bit(&self, index: usize) -> Result<bool, OutOfBounds> {
        check_index(index, Self::WIDTH)?;
        let mask = Self::mask(index);
        Ok(self.bits & mask == mask)
    }

    /// Replaces the single bit at `index` under the MSB-is-0 convention,
    /// leaving every other bit untouched.
    ///
    /// # Errors
    ///
    /// [`OutOfBounds`] when `index` is not in `[0, 63]`.
    ///
    /// # Example
    ///
    /// ```
    /// use linar::Bitboard;
    ///
    /// let mut board = Bitboard::zeros();
    /// board.set_bit(0, true).unwrap();
    /// assert_eq!(u64::from(board), 1 << 63);
    /// board.set_bit(0, false).unwrap();
    /// assert!(board.is_zero());
    /// ```
    pub fn set_bit(&mut self, index: usize, value: bool) -> Result<(), OutOfBounds> {
        check_index(index, Self::WIDTH)?;
        let mask = Self::mask(index);
        if value {
            self.bits |= mask;
        } else {
            self.bits &= !mask;
        }
        Ok(())
    }

    /// Shifts the whole board toward the most-significant end, discarding
    /// bits shifted past it. Shifting by 64 or more clears the board.
    /// Returns the receiver again, so shifts chain.
    ///
    /// # Example
    ///
    /// ```
    /// use linar::Bitboard;
    ///
    /// let mut board = Bitboard::from_bits(0b1010);
    /// board.shift_left(2).shift_left(1);
    /// assert_eq!(u64::from(board), 0b1010000);
    ///
    /// let mut top = Bitboard::from_bits(1 << 63);
    /// top.shift_left(1);
    /// assert!(top.is_zero());
    /// ```
    pub fn shift_left(&mut self, bits: usize) -> &mut Bitboard {
        self.bits = u32::try_from(bits)
            .ok()
            .and_then(|distance| self.bits.checked_shl(distance))
            .unwrap_or(0);
        self
    }

    /// Shifts the whole board toward the least-significant end, discarding
    /// bits shifted past it. Shifting by 64 or more clears the board.
    /// Returns the receiver again, so shifts chain.
    ///
    /// # Example
    ///
    /// ```
    /// use linar::Bitboard;
    ///
    /// let mut board = Bitboard::from_bits(0b1010);
    /// board.shift_right(1);
    /// assert_eq!(u64::from(board), 0b101);
    ///
    /// board.shift_right(70);
    /// assert!(board.is_zero());
    /// ```
    pub fn shift_right(&mut self, bits: usize) -> &mut Bitboard {
        self.bits = u32::try_from(bits)
            .ok()
            .and_then(|distance| self.bits.checked_shr(distance))
            .unwrap_or(0);
        self
    }

    /// Position of the lowest set bit, counted from the least-significant
    /// end, or `None` when the board is all zeros.
    ///
    /// This scan and [`last_bit`](Self::last_bit) count from opposite ends:
    /// when only canonical bit `i` is set, `first_bit()` is `63 - i` while
    /// `last_bit()` is `i`.
    ///
    /// # Example
    ///
    /// ```
    /// use linar::Bitboard;
    ///
    /// let board = Bitboard::from_bits(0b100);
    /// assert_eq!(board.first_bit(), Some(2));
    /// assert_eq!(Bitboard::zeros().first_bit(), None);
    /// ```
    #[must_use]
    pub fn first_bit(&self) -> Option<usize> {
        if self.is_zero() {
            return None;
        }
        Some(self.bits.trailing_zeros() as usize)
    }

    /// Offset of the highest set bit, counted from the most-significant
    /// end (the number of leading zeros), or `None` when the board is all
    /// zeros. Despite the name this is an MSB-relative offset, not an
    /// LSB-relative index; see [`first_bit`](Self::first_bit).
    ///
    /// # Example
    ///
    /// ```
    /// use linar::Bitboard;
    ///
    /// let board = Bitboard::from_bits(0b100);
    /// assert_eq!(board.last_bit(), Some(61));
    ///
    /// let top = Bitboard::from_bits(1 << 63);
    /// assert_eq!(top.last_bit(), Some(0));
    /// assert_eq!(Bitboard::zeros().last_bit(), None);
    /// ```
    #[must_use]
    pub fn last_bit(&self) -> Option<usize> {
        if self.is_zero() {
            return None;
        }
        Some(self.bits.leading_zeros() as usize)
    }

    /// Returns the number of set bits.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` when no bit is set.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.bits == 0
    }

    /// Clears every bit in place.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Iterates over all 64 bits in canonical order, most significant
    /// first.
    ///
    /// # Example
    ///
    /// ```
    /// use linar::Bitboard;
    ///
    /// let board = Bitboard::from_bits(1);
    /// let bits: Vec<bool> = board.iter().collect();
    /// assert_eq!(bits.len(), 64);
    /// assert!(bits[63]);
    /// assert!(!bits[0]);
    /// ```
    pub fn iter(&self) -> BitboardBits {
        BitboardBits {
            mask: 1 << (Self::WIDTH - 1),
            bits: self.bits,
        }
    }

    /// Iterates over the canonical (MSB-is-0) indices of the set bits, in
    /// ascending order.
    ///
    /// # Example
    ///
    /// ```
    /// use linar::Bitboard;
    ///
    /// let board = Bitboard::from_binary("1001").unwrap();
    /// assert_eq!(board.support().collect::<Vec<_>>(), vec![60, 63]);
    /// ```
    pub fn support(&self) -> impl SortedIterator<Item = usize> {
        self.iter()
            .enumerate()
            .filter(|pair| pair.1)
            .map(|pair| pair.0)
            .assume_sorted_by_item()
    }

    #[inline]
    fn mask(index: usize) -> u64 {
        1 << (Self::WIDTH - 1 - index)
    }
}

impl Elementwise for Bitboard {
    #[inline]
    fn and_with(&self, other: &Self) -> Self {
        Bitboard {
            bits: self.bits & other.bits,
        }
    }

    #[inline]
    fn or_with(&self, other: &Self) -> Self {
        Bitboard {
            bits: self.bits | other.bits,
        }
    }

    #[inline]
    fn xor_with(&self, other: &Self) -> Self {
        Bitboard {
            bits: self.bits ^ other.bits,
        }
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    fn bitand(self, other: Bitboard) -> Bitboard {
        self.and_with(&other)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, other: Bitboard) -> Bitboard {
        self.or_with(&other)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    fn bitxor(self, other: Bitboard) -> Bitboard {
        self.xor_with(&other)
    }
}

impl BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, other: Bitboard) {
        self.bits &= other.bits;
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, other: Bitboard) {
        self.bits |= other.bits;
    }
}

impl BitXorAssign for Bitboard {
    fn bitxor_assign(&mut self, other: Bitboard) {
        self.bits ^= other.bits;
    }
}

impl From<u64> for Bitboard {
    fn from(bits: u64) -> Bitboard {
        Bitboard { bits }
    }
}

impl From<Bitboard> for u64 {
    fn from(board: Bitboard) -> u64 {
        board.bits
    }
}

impl FromStr for Bitboard {
    type Err = ParseBitboardError;

    fn from_str(source: &str) -> Result<Bitboard, ParseBitboardError> {
        Bitboard::from_binary(source)
    }
}

impl std::fmt::Display for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:064b}", self.bits)
    }
}

impl std::fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bitboard({self})")
    }
}

impl<'life> IntoIterator for &'life Bitboard {
    type Item = bool;
    type IntoIter = BitboardBits;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = BitboardBits;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over all 64 bits of a [`Bitboard`], most significant first.
pub struct BitboardBits {
    mask: u64,
    bits: u64,
}

impl Iterator for BitboardBits {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.mask == 0 {
            None
        } else {
            let value = self.bits & self.mask == self.mask;
            self.mask >>= 1;
            Some(value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitboardBits {
    fn len(&self) -> usize {
        if self.mask == 0 {
            0
        } else {
            self.mask.trailing_zeros() as usize + 1
        }
    }
}

/// The ways a binary string can fail to describe a [`Bitboard`].
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum ParseBitboardError {
    /// The input had no characters at all.
    #[display("empty binary string")]
    Empty,
    /// The input contained a character other than `'0'` or `'1'`.
    #[display("invalid digit {character:?} at position {position}")]
    InvalidDigit { character: char, position: usize },
    /// The digits describe a magnitude that needs more than 64 bits.
    #[display("binary string does not fit in 64 bits")]
    Overflow,
}
