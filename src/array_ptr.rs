
pub(crate) mod allocation;

use std::{fmt, marker::PhantomData, mem::{self, ManuallyDrop}, ops::{Index, IndexMut}, ptr::{self, NonNull}, slice};

use crate::errors::AllocErr;
use allocation::{allocate, deallocate, infallible};


/// A fixed-size, heap allocated block of `T`.
///
/// Every one of the `capacity` slots always holds a live `T`, so the whole
/// block can be viewed as a slice. The block never changes size; an owner
/// that needs more room builds a new `ArrayPtr` and [`swap`](Self::swap)s it in.
///
/// # Examples
/// ```
/// use simple_vector::ArrayPtr;
///
/// let mut buf = ArrayPtr::<i32>::new(3);
/// assert_eq!(buf.as_slice(), [0, 0, 0]);
///
/// buf[1] = 7;
/// let mut other = ArrayPtr::from_array([1, 2]);
/// buf.swap(&mut other);
///
/// assert_eq!(buf.as_slice(), [1, 2]);
/// assert_eq!(other.as_slice(), [0, 7, 0]);
/// ```
pub struct ArrayPtr<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T: Send> Send for ArrayPtr<T> {}
unsafe impl<T: Sync> Sync for ArrayPtr<T> {}

// Tracks how many slots have been written while a buffer is being filled, so
// a panicking producer leaves nothing leaked or half-dropped.
struct PartialInit<T> {
    ptr: NonNull<T>,
    init: usize,
    capacity: usize,
}

impl<T> Drop for PartialInit<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.init));
            deallocate(self.ptr, self.capacity);
        }
    }
}

impl<T> Drop for ArrayPtr<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(self.as_mut_slice());
            deallocate(self.ptr, self.capacity);
        }
    }
}

impl<T> Default for ArrayPtr<T> {
    #[inline]
    fn default() -> Self { Self::empty() }
}

#[cfg(not(tarpaulin_include))]
impl<T: fmt::Debug> fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Index<usize> for ArrayPtr<T> {
    type Output = T;

    #[inline]
    fn index(&self, offset: usize) -> &Self::Output { &self.as_slice()[offset] }
}

impl<T> IndexMut<usize> for ArrayPtr<T> {
    #[inline]
    fn index_mut(&mut self, offset: usize) -> &mut Self::Output { &mut self.as_mut_slice()[offset] }
}

impl<T> ArrayPtr<T> {

    /// A buffer with no slots. Does not allocate.
    #[inline]
    pub const fn empty() -> Self {
        Self { ptr: NonNull::dangling(), capacity: 0, _marker: PhantomData }
    }

    /// Allocates `capacity` slots, each set to `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if the layout overflows, aborts if the allocator fails.
    /// See [`try_new`](Self::try_new) for the fallible version.
    #[inline]
    pub fn new(capacity: usize) -> Self where T: Default {
        infallible(Self::try_new(capacity))
    }

    #[inline]
    pub fn try_new(capacity: usize) -> Result<Self, AllocErr> where T: Default {
        Self::try_from_fn(capacity, |_| T::default())
    }

    /// Allocates `capacity` slots, slot `i` set to `f(i)`.
    pub fn try_from_fn<F>(capacity: usize, mut f: F) -> Result<Self, AllocErr>
    where
        F: FnMut(usize) -> T
    {
        let ptr = allocate::<T>(capacity)?;
        let mut guard = PartialInit { ptr, init: 0, capacity };

        while guard.init < capacity {
            unsafe { ptr.add(guard.init).write(f(guard.init)) };
            guard.init += 1;
        }

        mem::forget(guard);
        Ok(unsafe { Self::from_raw_parts(ptr, capacity) })
    }

    /// Allocates `capacity` slots, filled in order from `items`. Slots left
    /// over once `items` runs dry are set to `T::default()`, surplus items
    /// are not consumed.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::ArrayPtr;
    ///
    /// let buf = ArrayPtr::try_from_iter(4, [5, 6]).unwrap();
    /// assert_eq!(buf.as_slice(), [5, 6, 0, 0]);
    /// ```
    pub fn try_from_iter<I>(capacity: usize, items: I) -> Result<Self, AllocErr>
    where
        T: Default,
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter();
        Self::try_from_fn(capacity, |_| items.next().unwrap_or_default())
    }

    /// Infallible version of [`try_from_iter`](Self::try_from_iter).
    #[inline]
    pub(crate) fn new_from<I>(capacity: usize, items: I) -> Self
    where
        T: Default,
        I: IntoIterator<Item = T>,
    {
        infallible(Self::try_from_iter(capacity, items))
    }

    /// Moves the elements of an array into a buffer of exactly `N` slots.
    pub fn from_array<const N: usize>(arr: [T; N]) -> Self {
        let arr = ManuallyDrop::new(arr);
        let ptr = infallible(allocate::<T>(N));

        unsafe {
            ptr::copy_nonoverlapping(arr.as_ptr(), ptr.as_ptr(), N);
            Self::from_raw_parts(ptr, N)
        }
    }

    /// Moves the elements of `vec` into a buffer of exactly `vec.len()` slots.
    pub fn from_vec(mut vec: Vec<T>) -> Self {
        let len = vec.len();
        let ptr = infallible(allocate::<T>(len));

        unsafe {
            ptr::copy_nonoverlapping(vec.as_ptr(), ptr.as_ptr(), len);
            vec.set_len(0);
            Self::from_raw_parts(ptr, len)
        }
    }

    /// # Safety
    ///
    /// `ptr` must come from [`allocate`] with `capacity`, and all `capacity`
    /// slots must be initialized.
    #[inline]
    pub(crate) const unsafe fn from_raw_parts(ptr: NonNull<T>, capacity: usize) -> Self {
        Self { ptr, capacity, _marker: PhantomData }
    }

    /// Gives up ownership without dropping any slot or freeing the block.
    #[inline]
    pub(crate) fn into_raw_parts(self) -> (NonNull<T>, usize) {
        let this = ManuallyDrop::new(self);
        (this.ptr, this.capacity)
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize { self.capacity }

    /// Pointer to the first slot. Dangling when `capacity == 0`.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T { self.ptr.as_ptr() }

    #[inline(always)]
    pub const fn as_mut_ptr(&mut self) -> *mut T { self.ptr.as_ptr() }

    /// Exchanges storage with `other` without touching any element.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) { mem::swap(self, other) }

    /// # Safety
    ///
    /// `offset` must be less than `capacity`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, offset: usize) -> &T {
        debug_assert!(offset < self.capacity);
        unsafe { &*self.ptr.as_ptr().add(offset) }
    }

    /// # Safety
    ///
    /// `offset` must be less than `capacity`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, offset: usize) -> &mut T {
        debug_assert!(offset < self.capacity);
        unsafe { &mut *self.ptr.as_ptr().add(offset) }
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        // Every slot is initialized for as long as the buffer lives
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.capacity) }
    }

    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.capacity) }
    }
}
