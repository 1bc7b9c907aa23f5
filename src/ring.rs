use crate::array::FixedArray;

/// A fixed-capacity queue that overwrites its oldest item when full.
///
/// Items are stored in a [`FixedArray`] whose cell occupancy tracks the
/// queued region between the read and write cursors. Writing never fails:
/// once the buffer is full, each write displaces the oldest unread item and
/// hands it back to the caller.
///
/// # Example
///
/// ```
/// use linar::RingBuffer;
///
/// let mut buffer = RingBuffer::with_capacity(3);
/// assert_eq!(buffer.write(1), None);
/// assert_eq!(buffer.write(2), None);
/// assert_eq!(buffer.write(3), None);
/// assert!(buffer.is_full());
///
/// assert_eq!(buffer.write(4), Some(1));
/// assert_eq!(buffer.read(), Some(2));
/// assert_eq!(buffer.iter().collect::<Vec<_>>(), vec![&3, &4]);
/// ```
#[must_use]
#[derive(Clone)]
pub struct RingBuffer<T> {
    cells: FixedArray<T>,
    read_cursor: usize,
    write_cursor: usize,
    length: usize,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` items.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> RingBuffer<T> {
        assert!(capacity > 0, "ring buffer capacity must be positive");
        RingBuffer {
            cells: FixedArray::of_length(capacity),
            read_cursor: 0,
            write_cursor: 0,
            length: 0,
        }
    }

    /// Returns the fixed number of items the buffer can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of queued items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns `true` when the next write will overwrite the oldest item.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.length == self.capacity()
    }

    /// Stores `item` at the write cursor and advances the cursor.
    ///
    /// On a full buffer this displaces the oldest unread item, returns it,
    /// and advances the read cursor past the overwritten slot. Otherwise
    /// returns `None`.
    pub fn write(&mut self, item: T) -> Option<T> {
        let displaced = self.cells.replace(self.write_cursor, Some(item));
        self.write_cursor = self.advanced(self.write_cursor);
        if displaced.is_some() {
            self.read_cursor = self.write_cursor;
        } else {
            self.length += 1;
        }
        displaced
    }

    /// Removes and returns the oldest queued item, advancing the read
    /// cursor, or `None` (leaving the cursor alone) when the buffer is
    /// empty.
    pub fn read(&mut self) -> Option<T> {
        let item = self.cells.replace(self.read_cursor, None)?;
        self.read_cursor = self.advanced(self.read_cursor);
        self.length -= 1;
        Some(item)
    }

    /// Returns the oldest queued item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.cells.slot(self.read_cursor).as_ref()
    }

    /// Drops every queued item and resets both cursors.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.read_cursor = 0;
        self.write_cursor = 0;
        self.length = 0;
    }

    /// Iterates over the queued items, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.length).filter_map(|offset| self.cells.slot((self.read_cursor + offset) % self.capacity()).as_ref())
    }

    #[inline]
    fn advanced(&self, cursor: usize) -> usize {
        (cursor + 1) % self.capacity()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RingBuffer(capacity={},items=[", self.capacity())?;
        for (position, item) in self.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item:?}")?;
        }
        write!(f, "])")
    }
}
