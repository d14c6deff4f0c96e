//! The growable list.
//!
//! A [`List`] is either uninitialised (no block) or owns one block of
//! `capacity` slots of which the first `length` are live. The pair
//! `(capacity, length)` is the list's [`Header`].

use std::fmt;
use std::slice;

use crate::error::ListError;

/// Slots allocated by [`List::new`].
pub const LIST_INITIAL_CAPACITY: usize = 8;

/// Header words (`capacity`, `length`) counted into every growth step.
pub const HEADER_SLOTS: usize = 2;

/// Capacity reported by a list that has not been initialised.
const UNINIT_CAPACITY: usize = 1;

/// Capacity after one growth step: `2 * capacity + HEADER_SLOTS`.
///
/// Returns `None` on arithmetic overflow.
pub fn grown_capacity(capacity: usize) -> Option<usize> {
    capacity.checked_mul(2)?.checked_add(HEADER_SLOTS)
}

/// Capacity and length of a list at one point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Allocated element slots.
    pub capacity: usize,
    /// Occupied element slots.
    pub length: usize,
}

#[derive(Clone)]
struct Block<T> {
    /// Logical capacity. The `Vec` may hold more; growth follows this value.
    capacity: usize,
    data: Vec<T>,
}

impl<T> Block<T> {
    fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| ListError::AllocationFailed {
                requested_slots: capacity,
            })?;
        Ok(Self { capacity, data })
    }

    fn grow(&mut self) -> Result<(), ListError> {
        let new_capacity =
            grown_capacity(self.capacity).ok_or(ListError::AllocationFailed {
                requested_slots: usize::MAX,
            })?;
        self.data
            .try_reserve_exact(new_capacity - self.data.len())
            .map_err(|_| ListError::AllocationFailed {
                requested_slots: new_capacity,
            })?;
        tracing::trace!(from = self.capacity, to = new_capacity, "list grew");
        self.capacity = new_capacity;
        Ok(())
    }
}

/// A growable, contiguous, indexable sequence.
///
/// Must be initialised before the first append. An uninitialised list
/// still answers the read-only queries: `capacity() == 1`, `len() == 0`,
/// `is_empty() == true`.
///
/// # Growth
///
/// An append grows the block first when `length + 1 >= capacity`, to
/// `2 * capacity + HEADER_SLOTS` slots. Existing elements are preserved.
///
/// # Example
///
/// ```
/// use cairn_list::List;
///
/// let mut list = List::new()?;
/// list.append(1)?;
/// list.append(2)?;
/// list.append(3)?;
/// assert_eq!(list.pop()?, 3);
/// assert_eq!(list.len(), 2);
/// assert_eq!(*list.get(0)?, 1);
/// # Ok::<(), cairn_list::ListError>(())
/// ```
#[derive(Clone)]
pub struct List<T> {
    block: Option<Block<T>>,
}

impl<T> List<T> {
    /// An uninitialised list. Allocates nothing.
    pub const fn uninit() -> Self {
        Self { block: None }
    }

    /// Allocate a list with [`LIST_INITIAL_CAPACITY`] slots.
    pub fn new() -> Result<Self, ListError> {
        Self::with_capacity(LIST_INITIAL_CAPACITY)
    }

    /// Allocate a list with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        Ok(Self {
            block: Some(Block::with_capacity(capacity)?),
        })
    }

    /// Initialise this handle in place with [`LIST_INITIAL_CAPACITY`] slots.
    ///
    /// Any previous contents are dropped. On error the handle is unchanged.
    pub fn init(&mut self) -> Result<(), ListError> {
        *self = Self::new()?;
        Ok(())
    }

    /// Whether the list owns a block.
    pub fn is_initialized(&self) -> bool {
        self.block.is_some()
    }

    /// Append `value` at the end, growing the block first if needed.
    ///
    /// Fails with [`ListError::Uninitialized`] on an uninitialised list and
    /// with [`ListError::AllocationFailed`] if growth is refused; in both
    /// cases the list is unchanged.
    pub fn append(&mut self, value: T) -> Result<(), ListError> {
        let block = self.block.as_mut().ok_or(ListError::Uninitialized)?;
        if block.data.len() + 1 >= block.capacity {
            block.grow()?;
        }
        block.data.push(value);
        Ok(())
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Result<T, ListError> {
        self.block
            .as_mut()
            .and_then(|block| block.data.pop())
            .ok_or(ListError::EmptyCollection)
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.as_slice()
            .get(index)
            .ok_or(ListError::IndexOutOfBounds {
                index,
                length: self.len(),
            })
    }

    /// Element at `index`, mutably.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let length = self.len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ListError::IndexOutOfBounds { index, length })
    }

    /// Allocated slots; 1 for an uninitialised list.
    pub fn capacity(&self) -> usize {
        self.block
            .as_ref()
            .map_or(UNINIT_CAPACITY, |block| block.capacity)
    }

    /// Occupied slots; 0 for an uninitialised list.
    pub fn len(&self) -> usize {
        self.block.as_ref().map_or(0, |block| block.data.len())
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacity and length together.
    pub fn header(&self) -> Header {
        Header {
            capacity: self.capacity(),
            length: self.len(),
        }
    }

    /// The live elements, element zero first.
    pub fn as_slice(&self) -> &[T] {
        match &self.block {
            Some(block) => block.data.as_slice(),
            None => &[],
        }
    }

    /// The live elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.block {
            Some(block) => block.data.as_mut_slice(),
            None => &mut [],
        }
    }

    /// Iterate over the live elements in order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Free the block. Dropping the list does the same.
    pub fn release(self) {}
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::uninit()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("capacity", &self.capacity())
            .field("items", &self.as_slice())
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn append_pop_get_scenario() {
        let mut list = List::new().unwrap();
        list.append(1).unwrap();
        list.append(2).unwrap();
        list.append(3).unwrap();
        assert_eq!(list.pop().unwrap(), 3);
        assert_eq!(list.len(), 2);
        assert_eq!(*list.get(0).unwrap(), 1);
    }

    #[test]
    fn new_list_header() {
        let list: List<u32> = List::new().unwrap();
        assert_eq!(
            list.header(),
            Header {
                capacity: LIST_INITIAL_CAPACITY,
                length: 0,
            }
        );
        assert!(list.is_initialized());
        assert!(list.is_empty());
    }

    #[test]
    fn uninit_queries_do_not_panic() {
        let list: List<String> = List::default();
        assert!(!list.is_initialized());
        assert_eq!(list.capacity(), 1);
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert!(list.as_slice().is_empty());
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn uninit_append_is_rejected() {
        let mut list = List::uninit();
        assert_eq!(list.append(5u8), Err(ListError::Uninitialized));
        assert!(!list.is_initialized());
    }

    #[test]
    fn init_in_place_then_append() {
        let mut list = List::uninit();
        list.init().unwrap();
        list.append('x').unwrap();
        assert_eq!(list.as_slice(), &['x']);
    }

    #[test]
    fn pop_on_empty_and_uninit() {
        let mut list: List<i64> = List::new().unwrap();
        assert_eq!(list.pop(), Err(ListError::EmptyCollection));
        let mut never: List<i64> = List::uninit();
        assert_eq!(never.pop(), Err(ListError::EmptyCollection));
    }

    #[test]
    fn get_out_of_bounds() {
        let mut list = List::new().unwrap();
        list.append(10u16).unwrap();
        assert_eq!(
            list.get(1),
            Err(ListError::IndexOutOfBounds {
                index: 1,
                length: 1,
            })
        );
        assert!(List::<u16>::uninit().get(0).is_err());
    }

    #[test]
    fn get_mut_writes_through() {
        let mut list = List::new().unwrap();
        list.append(1u32).unwrap();
        *list.get_mut(0).unwrap() += 41;
        assert_eq!(*list.get(0).unwrap(), 42);
        assert!(list.get_mut(1).is_err());
    }

    #[test]
    fn growth_schedule() {
        let mut list = List::new().unwrap();
        for i in 0..7 {
            list.append(i).unwrap();
        }
        // Seven of eight slots used: the next append grows first.
        assert_eq!(list.capacity(), 8);
        list.append(7).unwrap();
        assert_eq!(list.capacity(), 18);
        for i in 8..17 {
            list.append(i).unwrap();
        }
        assert_eq!(list.capacity(), 18);
        list.append(17).unwrap();
        assert_eq!(list.capacity(), 38);
    }

    #[test]
    fn growth_keeps_first_elements() {
        let mut list = List::new().unwrap();
        for i in 0..=LIST_INITIAL_CAPACITY {
            list.append(i * 100).unwrap();
        }
        assert!(list.capacity() > LIST_INITIAL_CAPACITY);
        let expected: Vec<usize> = (0..=LIST_INITIAL_CAPACITY).map(|i| i * 100).collect();
        assert_eq!(list.as_slice(), expected.as_slice());
    }

    #[test]
    fn zero_capacity_list_grows_on_first_append() {
        let mut list = List::with_capacity(0).unwrap();
        list.append("a").unwrap();
        assert_eq!(list.capacity(), HEADER_SLOTS);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn pop_never_shrinks() {
        let mut list = List::new().unwrap();
        for i in 0..20 {
            list.append(i).unwrap();
        }
        let cap = list.capacity();
        while list.pop().is_ok() {}
        assert_eq!(list.capacity(), cap);
        assert!(list.is_empty());
    }

    #[test]
    fn unallocatable_capacity_fails_cleanly() {
        assert_eq!(
            List::<u64>::with_capacity(usize::MAX).unwrap_err(),
            ListError::AllocationFailed {
                requested_slots: usize::MAX
            }
        );
    }

    #[test]
    fn grown_capacity_overflow_is_none() {
        assert_eq!(grown_capacity(8), Some(18));
        assert_eq!(grown_capacity(usize::MAX / 2 + 1), None);
    }

    #[test]
    fn iterates_in_order() {
        let mut list = List::new().unwrap();
        for c in ["a", "b", "c"] {
            list.append(c).unwrap();
        }
        let joined: String = (&list).into_iter().copied().collect();
        assert_eq!(joined, "abc");
    }

    #[test]
    fn debug_shows_capacity_and_items() {
        let mut list = List::new().unwrap();
        list.append(1u8).unwrap();
        assert_eq!(format!("{list:?}"), "List { capacity: 8, items: [1] }");
    }

    proptest! {
        #[test]
        fn get_returns_values_in_append_order(
            values in proptest::collection::vec(any::<i32>(), 0..200),
        ) {
            let mut list = List::new().unwrap();
            for &v in &values {
                list.append(v).unwrap();
            }
            prop_assert_eq!(list.len(), values.len());
            for (i, v) in values.iter().enumerate() {
                prop_assert_eq!(list.get(i).unwrap(), v);
            }
            prop_assert!(list.len() < list.capacity());
        }

        #[test]
        fn pop_returns_reverse_order_then_fails(
            values in proptest::collection::vec(any::<u8>(), 0..100),
        ) {
            let mut list = List::new().unwrap();
            for &v in &values {
                list.append(v).unwrap();
            }
            for &v in values.iter().rev() {
                prop_assert_eq!(list.pop().unwrap(), v);
            }
            prop_assert_eq!(list.pop(), Err(ListError::EmptyCollection));
        }
    }
}
