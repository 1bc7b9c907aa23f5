use std::iter::Map;
use std::slice;

use crate::bounds::{OutOfBounds, check_index};

/// Iterator over borrowed cells of a [`FixedArray`], in index order.
pub type Cells<'life, T> = Map<slice::Iter<'life, Option<T>>, fn(&'life Option<T>) -> Option<&'life T>>;

/// Iterator over mutably borrowed cells of a [`FixedArray`], in index order.
pub type CellsMut<'life, T> = Map<slice::IterMut<'life, Option<T>>, fn(&'life mut Option<T>) -> Option<&'life mut T>>;

/// A fixed-length array of optional cells.
///
/// The length is chosen at construction and never changes. Every cell starts
/// *absent* and can hold at most one value of `T`; absence is a first-class
/// state, distinct from any value the cell could hold. All indexed access is
/// bounds-checked and reports failures as [`OutOfBounds`] values rather than
/// panicking.
///
/// # Construction
///
/// ```
/// use linar::FixedArray;
///
/// let empty = FixedArray::<u8>::of_length(4);
/// assert_eq!(empty.len(), 4);
/// assert!(empty.iter().all(|cell| cell.is_none()));
///
/// // Collect explicit cells, absent ones included.
/// let cells: FixedArray<u8> = [Some(1), None, Some(3)].into_iter().collect();
/// assert_eq!(cells.len(), 3);
/// ```
///
/// # Cell access
///
/// ```
/// use linar::FixedArray;
///
/// let mut cells = FixedArray::of_length(3);
/// assert_eq!(cells.set(0, 7), Ok(None));
/// assert_eq!(cells.set(0, 9), Ok(Some(7)));
/// assert_eq!(cells.get(0), Ok(Some(&9)));
/// assert_eq!(cells.get(1), Ok(None));
/// assert!(cells.get(3).is_err());
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FixedArray<T> {
    cells: Box<[Option<T>]>,
}

impl<T> FixedArray<T> {
    /// Creates an array of `length` absent cells.
    ///
    /// # Example
    ///
    /// ```
    /// use linar::FixedArray;
    ///
    /// let cells = FixedArray::<String>::of_length(2);
    /// assert_eq!(cells.get(0), Ok(None));
    /// assert_eq!(cells.get(1), Ok(None));
    /// ```
    pub fn of_length(length: usize) -> FixedArray<T> {
        FixedArray {
            cells: std::iter::repeat_with(|| None).take(length).collect(),
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

    /// Returns the cell at `index`, or [`OutOfBounds`] when the index does
    /// not address a cell. An absent cell reads as `Ok(None)`, never as a
    /// default value.
    pub fn get(&self, index: usize) -> Result<Option<&T>, OutOfBounds> {
        check_index(index, self.len())?;
        Ok(self.cells[index].as_ref())
    }

    /// Stores `value` at `index`, returning whatever the cell held before.
    ///
    /// # Example
    ///
    /// ```
    /// use linar::FixedArray;
    ///
    /// let mut cells = FixedArray::of_length(2);
    /// assert_eq!(cells.set(1, "new"), Ok(None));
    /// assert_eq!(cells.set(1, "newer"), Ok(Some("new")));
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, OutOfBounds> {
        check_index(index, self.len())?;
        Ok(self.replace(index, Some(value)))
    }

    /// Removes and returns the cell at `index`, leaving it absent.
    ///
    /// # Example
    ///
    /// ```
    /// use linar::FixedArray;
    ///
    /// let mut cells = FixedArray::of_length(1);
    /// cells.set(0, 5).unwrap();
    /// assert_eq!(cells.take(0), Ok(Some(5)));
    /// assert_eq!(cells.take(0), Ok(None));
    /// ```
    pub fn take(&mut self, index: usize) -> Result<Option<T>, OutOfBounds> {
        check_index(index, self.len())?;
        Ok(self.replace(index, None))
    }

    /// Assigns `value` to every cell, overwriting absent cells too.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.cells.fill(Some(value));
    }

    /// Makes every cell absent again.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = None;
        }
    }

    /// Iterates over the cells in index order, yielding `Some(&value)` for
    /// present cells and `None` for absent ones. The iterator visits every
    /// cell, so its length equals [`len`](Self::len).
    pub fn iter(&self) -> Cells<'_, T> {
        self.cells.iter().map(Option::as_ref)
    }

    /// Iterates over the cells in index order with mutable access to the
    /// present ones.
    pub fn iter_mut(&mut self) -> CellsMut<'_, T> {
        self.cells.iter_mut().map(Option::as_mut)
    }

    #[inline]
    pub(crate) fn slot(&self, index: usize) -> &Option<T> {
        &self.cells[index]
    }

    #[inline]
    pub(crate) fn replace(&mut self, index: usize, cell: Option<T>) -> Option<T> {
        std::mem::replace(&mut self.cells[index], cell)
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[Option<T>] {
        &self.cells
    }
}

impl<T> FromIterator<Option<T>> for FixedArray<T> {
    fn from_iter<Iterable: IntoIterator<Item = Option<T>>>(cells: Iterable) -> Self {
        FixedArray {
            cells: cells.into_iter().collect(),
        }
    }
}

impl<'life, T> IntoIterator for &'life FixedArray<T> {
    type Item = Option<&'life T>;
    type IntoIter = Cells<'life, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for FixedArray<T> {
    type Item = Option<T>;
    type IntoIter = std::vec::IntoIter<Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_vec().into_iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for FixedArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FixedArray(length={},cells=[", self.len())?;
        for (index, cell) in self.cells.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            match cell {
                Some(value) => write!(f, "{value:?}")?,
                None => write!(f, "_")?,
            }
        }
        write!(f, "])")
    }
}
