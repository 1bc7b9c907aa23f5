use derive_more::{Display, Error};

/// The error returned when an index falls outside a container's length.
///
/// Carries both the offending index and the length it was checked against, so
/// callers can report the failure without re-deriving either value.
///
/// # Example
///
/// ```
/// use linar::{BoolArray, OutOfBounds};
///
/// let cells = BoolArray::of_length(3);
/// assert_eq!(cells.get(7), Err(OutOfBounds { index: 7, length: 3 }));
/// ```
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display("index {index} is out of bounds for length {length}")]
pub struct OutOfBounds {
    pub index: usize,
    pub length: usize,
}

#[inline]
pub(crate) fn check_index(index: usize, length: usize) -> Result<(), OutOfBounds> {
    if index < length {
        Ok(())
    } else {
        Err(OutOfBounds { index, length })
    }
}
