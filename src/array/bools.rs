use std::iter::Copied;
use std::slice;

use crate::array::FixedArray;
use crate::bounds::OutOfBounds;
use crate::elementwise::Elementwise;

/// Iterator over the cells of a [`BoolArray`], in index order.
pub type BoolCells<'life> = Copied<slice::Iter<'life, Option<bool>>>;

/// A fixed-length array of nullable boolean cells.
///
/// Each cell is either absent or holds a boolean; absent is a third state,
/// distinct from `false`. The pairwise operators of [`Elementwise`] treat an
/// absent operand cell as contaminating: the paired result cell is absent.
/// Operands of different lengths pair up to the shorter length, so the result
/// is as long as the shorter operand.
///
/// # Example
///
/// ```
/// use linar::{BoolArray, Elementwise};
///
/// let left: BoolArray = [Some(true), None, Some(false), Some(true)].into_iter().collect();
/// let right: BoolArray = [Some(true), Some(true), None, Some(false)].into_iter().collect();
///
/// let both = left.and_with(&right);
/// assert_eq!(both.iter().collect::<Vec<_>>(), vec![Some(true), None, None, Some(false)]);
///
/// let either = left.or_with(&right);
/// assert_eq!(either.iter().collect::<Vec<_>>(), vec![Some(true), None, None, Some(true)]);
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BoolArray {
    cells: FixedArray<bool>,
}

impl BoolArray {
    /// Creates an array of `length` absent cells.
    pub fn of_length(length: usize) -> BoolArray {
        BoolArray {
            cells: FixedArray::of_length(length),
        }
    }

    /// Returns the number of cells, present or absent.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` when the array has no cells at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at `index`. An absent cell reads as `Ok(None)`; it
    /// never decays to `false`.
    pub fn get(&self, index: usize) -> Result<Option<bool>, OutOfBounds> {
        Ok(self.cells.get(index)?.copied())
    }

    /// Stores `value` at `index`.
    pub fn set(&mut self, index: usize, value: bool) -> Result<(), OutOfBounds> {
        self.cells.set(index, value)?;
        Ok(())
    }

    /// Assigns `value` to every cell, overwriting absent cells too.
    pub fn fill(&mut self, value: bool) {
        self.cells.fill(value);
    }

    /// Makes every cell absent again.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Negates every present cell in place; absent cells stay absent.
    ///
    /// Unlike the [`Elementwise`] operators this mutates the receiver, since
    /// negation has no second operand to combine with.
    ///
    /// # Example
    ///
    /// ```
    /// use linar::BoolArray;
    ///
    /// let mut cells: BoolArray = [Some(true), None, Some(false)].into_iter().collect();
    /// cells.invert();
    /// assert_eq!(cells.iter().collect::<Vec<_>>(), vec![Some(false), None, Some(true)]);
    /// ```
    pub fn invert(&mut self) {
        for flag in self.cells.iter_mut().flatten() {
            *flag = !*flag;
        }
    }

    /// Iterates over the cells in index order, `None` marking absent ones.
    pub fn iter(&self) -> BoolCells<'_> {
        self.cells.as_slice().iter().copied()
    }

    fn combined_with(&self, other: &Self, combine: impl Fn(&Option<bool>, &Option<bool>) -> Option<bool>) -> BoolArray {
        self.cells
            .as_slice()
            .iter()
            .zip(other.cells.as_slice())
            .map(|(left, right)| combine(left, right))
            .collect()
    }
}

impl Elementwise for BoolArray {
    fn and_with(&self, other: &Self) -> Self {
        self.combined_with(other, |left, right| left.and_with(right))
    }

    fn or_with(&self, other: &Self) -> Self {
        self.combined_with(other, |left, right| left.or_with(right))
    }

    fn xor_with(&self, other: &Self) -> Self {
        self.combined_with(other, |left, right| left.xor_with(right))
    }
}

impl FromIterator<Option<bool>> for BoolArray {
    fn from_iter<Iterable: IntoIterator<Item = Option<bool>>>(cells: Iterable) -> Self {
        BoolArray {
            cells: cells.into_iter().collect(),
        }
    }
}

impl FromIterator<bool> for BoolArray {
    fn from_iter<Iterable: IntoIterator<Item = bool>>(values: Iterable) -> Self {
        values.into_iter().map(Some).collect()
    }
}

impl<'life> IntoIterator for &'life BoolArray {
    type Item = Option<bool>;
    type IntoIter = BoolCells<'life>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for BoolArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in self.iter() {
            let glyph = match cell {
                Some(true) => '1',
                Some(false) => '0',
                None => '_',
            };
            write!(f, "{glyph}")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for BoolArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BoolArray(length={},cells={})", self.len(), self)
    }
}
