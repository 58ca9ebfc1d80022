
mod into_iter;

use std::{cmp::Ordering, fmt, hash::{Hash, Hasher}, iter, mem, ops::{Deref, DerefMut, Index, IndexMut}, slice::{self, SliceIndex}};

use crate::{
    array_ptr::{allocation::infallible, ArrayPtr},
    errors::{AllocErr, OutOfRangeError},
    reserve::ReserveProxy,
};
pub use into_iter::IntoIter;

/// A contiguous growable array type with a visible growth policy.
///
/// `SimpleVec` owns exactly one [`ArrayPtr`] and tracks how many of its slots
/// are live. Slots past [`len`](Self::len) are *unused*: they still hold a
/// valid `T` (a default value, or whatever was popped or erased) but are never
/// exposed through the slice view.
///
/// # Examples
///
/// ```
/// use simple_vector::SimpleVec;
///
/// let mut vec = SimpleVec::new();
/// vec.push(3);
/// vec.push(7);
///
/// assert_eq!(vec.len(), 2);
/// assert_eq!(vec[0], 3);
///
/// vec.pop_back();
/// assert_eq!(vec, [3]);
///
/// vec[0] = 19;
/// vec.extend([20, 21]);
/// for v in &vec {
///     println!("{v}");
/// }
///
/// assert_eq!(vec, [19, 20, 21]);
/// ```
///
/// # Capacity
///
/// Capacity only ever changes by building a new buffer, moving the live
/// elements into it and swapping it in. When a [`push`](Self::push) or
/// [`insert`](Self::insert) finds the buffer full, the new capacity is
/// `max(1, 2 * len)`, so pushing onto an empty vec walks the capacities
/// `0, 1, 2, 4, 8, ...`.
///
/// [`reserve`](Self::reserve) and [`resize`](Self::resize) grow to exactly the
/// requested capacity. Nothing shrinks the capacity.
///
/// ```
/// use simple_vector::SimpleVec;
///
/// let mut vec = SimpleVec::new();
/// let caps = (0..5)
///     .map(|i| { vec.push(i); vec.capacity() })
///     .collect::<Vec<_>>();
///
/// assert_eq!(caps, [1, 2, 4, 4, 8]);
/// ```
///
/// Growing needs a fresh default value for every new slot, so everything that
/// may allocate requires `T: Default`.
///
/// # Indexing
///
/// `SimpleVec` dereferences to a slice of its live elements, so indexing,
/// slicing and the slice methods all work as they would on a [`Vec`].
/// Indexing at or past `len` panics; use [`at`](Self::at) for a checked
/// lookup that returns an error instead.
///
/// ```should_panic
/// use simple_vector::SimpleVec;
///
/// let vec = SimpleVec::from([1, 2, 3]);
/// println!("{}", vec[3]); // Panics!
/// ```
pub struct SimpleVec<T> {
    buf: ArrayPtr<T>,
    len: usize,
}

impl<T> Default for SimpleVec<T> {
    #[inline]
    fn default() -> Self { Self::new() }
}

#[cfg(not(tarpaulin_include))]
impl<T: fmt::Debug> fmt::Debug for SimpleVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T: Clone + Default> Clone for SimpleVec<T> {
    /// Deep-copies the live elements into a buffer of the same capacity.
    ///
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let mut vec = SimpleVec::with_capacity(8);
    /// vec.extend([1, 2, 3]);
    ///
    /// let copy = vec.clone();
    /// assert_eq!(copy, [1, 2, 3]);
    /// assert_eq!(copy.capacity(), 8);
    /// ```
    fn clone(&self) -> Self {
        let buf = ArrayPtr::new_from(self.capacity(), self.iter().cloned());
        Self { buf, len: self.len }
    }

    /// An empty `source` just clears `self`, keeping its buffer. Otherwise
    /// `self` takes a fresh copy of `source` and drops its old buffer.
    fn clone_from(&mut self, source: &Self) {
        if source.is_empty() { return self.clear() }

        let mut copy = source.clone();
        self.swap_with(&mut copy);
    }
}

impl<T: PartialEq> PartialEq for SimpleVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVec<T> {}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for SimpleVec<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<&[U; N]> for SimpleVec<T> {
    fn eq(&self, other: &&[U; N]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for SimpleVec<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for SimpleVec<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for SimpleVec<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

/// Lexicographic: the first differing element decides, and a strict prefix
/// orders before the longer vec. `<=`, `>` and `>=` follow from `partial_cmp`.
///
/// ```
/// use simple_vector::SimpleVec;
///
/// assert!(SimpleVec::from([1, 2]) < SimpleVec::from([1, 2, 3]));
/// assert!(SimpleVec::from([1, 3]) > SimpleVec::from([1, 2, 9]));
/// ```
impl<T: PartialOrd> PartialOrd for SimpleVec<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVec<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVec<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) { self.as_slice().hash(state) }
}

impl <T> Deref for SimpleVec<T> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &Self::Target { self.as_slice() }
}

impl <T> DerefMut for SimpleVec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target { self.as_mut_slice() }
}

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVec<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(&**self, index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVec<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(&mut **self, index)
    }
}

impl<'a, T> IntoIterator for &'a SimpleVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T> IntoIterator for &'a mut SimpleVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T> IntoIterator for SimpleVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Moves the live elements out, front to back.
    ///
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let vec = SimpleVec::from(["a".to_string(), "b".to_string()]);
    /// let joined: String = vec.into_iter().collect();
    ///
    /// assert_eq!(joined, "ab");
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter { IntoIter::new(self) }
}

impl<T: Default> Extend<T> for SimpleVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        items.into_iter().for_each(|item| self.push(item));
    }
}

impl<T: Default> FromIterator<T> for SimpleVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut vec = Self::new();
        vec.extend(items);
        vec
    }
}

impl <T, const N: usize> From<[T; N]> for SimpleVec<T> {

    /// Moves the elements of an array in order. Both `len` and `capacity`
    /// equal `N`.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let vec = SimpleVec::from([1, 2, 3]);
    /// assert_eq!(vec.len(), 3);
    /// assert_eq!(vec.capacity(), 3);
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self { buf: ArrayPtr::from_array(arr), len: N }
    }
}

impl <T> From<Vec<T>> for SimpleVec<T> {
    fn from(vec: Vec<T>) -> Self {
        let len = vec.len();
        Self { buf: ArrayPtr::from_vec(vec), len }
    }
}

impl <T> From<SimpleVec<T>> for Vec<T> {
    fn from(vec: SimpleVec<T>) -> Self { vec.into_iter().collect() }
}

impl <T: Default> From<ReserveProxy> for SimpleVec<T> {
    /// Same as [`SimpleVec::with_capacity`].
    #[inline]
    fn from(proxy: ReserveProxy) -> Self { Self::with_capacity(proxy.capacity()) }
}

impl <T> SimpleVec<T> {

    /// Constructs a new, empty `SimpleVec<T>`.
    ///
    /// Does not allocate.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let vec = SimpleVec::<i32>::new();
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self { buf: ArrayPtr::empty(), len: 0 }
    }

    /// Creates a vec of `len` copies of `value`. Both `len` and `capacity`
    /// equal `len`.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let vec = SimpleVec::from_elem(3, &"ab".to_string());
    /// assert_eq!(vec, ["ab", "ab", "ab"]);
    /// ```
    pub fn from_elem(len: usize, value: &T) -> Self where T: Clone {
        let buf = infallible(ArrayPtr::try_from_fn(len, |_| value.clone()));
        Self { buf, len }
    }

    /// Like [`from_elem`](Self::from_elem), but moves `value` into the last
    /// slot instead of cloning it. `value` is left as `T::default()`.
    ///
    /// Unlike [`push`](Self::push) and [`insert`](Self::insert), which take
    /// their value by move and so leave nothing behind to observe, this takes
    /// `&mut T` so the caller keeps a usable, reset source. Pass an owned
    /// value through [`from_elem`](Self::from_elem) when the source is not
    /// needed afterwards.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let mut value = "ab".to_string();
    /// let vec = SimpleVec::from_elem_moved(2, &mut value);
    ///
    /// assert_eq!(vec, ["ab", "ab"]);
    /// assert_eq!(value, "");
    /// ```
    pub fn from_elem_moved(len: usize, value: &mut T) -> Self where T: Clone + Default {
        let buf = ArrayPtr::new_from(len, iter::repeat_n(mem::take(value), len));
        Self { buf, len }
    }

    /// Returns the number of live elements.
    #[inline(always)]
    pub const fn len(&self) -> usize { self.len }

    /// Returns the number of slots in the backing buffer.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let mut vec = SimpleVec::<i32>::with_capacity(10);
    /// vec.push(1);
    /// assert_eq!(vec.capacity(), 10);
    /// ```
    #[inline(always)]
    pub const fn capacity(&self) -> usize { self.buf.capacity() }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns a reference to the element at `index`, or an
    /// [`OutOfRangeError`] when `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let vec = SimpleVec::from([10, 20]);
    /// assert_eq!(vec.at(1), Ok(&20));
    /// assert!(vec.at(2).is_err());
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, OutOfRangeError> {
        let len = self.len;
        self.as_slice().get(index).ok_or(OutOfRangeError { index, len })
    }

    /// Mutable counterpart of [`at`](Self::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRangeError> {
        let len = self.len;
        self.as_mut_slice().get_mut(index).ok_or(OutOfRangeError { index, len })
    }

    /// Sets `len` to zero. The buffer and its capacity are kept.
    #[inline]
    pub fn clear(&mut self) { self.len = 0 }

    /// Drops the last element out of the live range, if there is one.
    ///
    /// The value stays in its slot, now unused, until it is overwritten or
    /// the buffer is released. Use [`pop`](Self::pop) to get it back.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let mut vec = SimpleVec::from([1, 2]);
    /// vec.pop_back();
    /// vec.pop_back();
    /// vec.pop_back();
    ///
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 2);
    /// ```
    #[inline]
    pub fn pop_back(&mut self) {
        if self.len != 0 { self.len -= 1 }
    }

    /// Erases the element at `index`, shifting everything after it one slot
    /// to the left. Returns `index`, which now holds the element that followed
    /// the erased one, or equals `len` if the last element was erased.
    ///
    /// The erased value moves into the first unused slot.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let mut vec = SimpleVec::from([1, 2, 3]);
    /// let next = vec.erase(1);
    ///
    /// assert_eq!(vec, [1, 3]);
    /// assert_eq!(vec[next], 3);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(`len - index`) time.
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(index < self.len, "Index out of bounds");

        self.buf.as_mut_slice()[index..self.len].rotate_left(1);
        self.len -= 1;
        index
    }

    /// Exchanges buffers and lengths with `other` without touching any element.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let mut a = SimpleVec::from([1, 2, 3]);
    /// let mut b = SimpleVec::new();
    /// a.swap_with(&mut b);
    ///
    /// assert!(a.is_empty());
    /// assert_eq!(b, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the whole vec out, leaving `self` empty with no buffer.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let mut src = SimpleVec::from([1, 2, 3]);
    /// let dst = src.take();
    ///
    /// assert_eq!(dst, [1, 2, 3]);
    /// assert_eq!((src.len(), src.capacity()), (0, 0));
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self { mem::take(self) }

    /// Extracts a slice of the live elements.
    ///
    /// Equivalent to `&vec[..]`.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        // Slots below len are always initialized and inside the buffer
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Extracts a mutable slice of the live elements.
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }
}

impl <T: Default> SimpleVec<T> {

    /// Creates a vec of `len` default values. Both `len` and `capacity` equal
    /// `len`.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let vec = SimpleVec::<i32>::with_len(3);
    /// assert_eq!(vec, [0, 0, 0]);
    /// assert_eq!(vec.capacity(), 3);
    /// ```
    #[inline]
    pub fn with_len(len: usize) -> Self {
        Self { buf: ArrayPtr::new(len), len }
    }

    /// Creates an empty vec with room for `capacity` elements.
    ///
    /// See also [`reserve`](crate::reserve()) for the proxy form.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let vec = SimpleVec::<i32>::with_capacity(4);
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 4);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: ArrayPtr::new(capacity), len: 0 }
    }

    /// Grows the buffer to exactly `new_capacity` slots if it is currently
    /// smaller. Note that, unlike [`Vec::reserve`], the argument is the total
    /// capacity and not the additional room.
    ///
    /// # Panics
    ///
    /// Panics if the layout overflows, aborts if the allocator fails.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let mut vec = SimpleVec::from([1, 2]);
    /// vec.reserve(10);
    /// assert_eq!(vec.capacity(), 10);
    ///
    /// vec.reserve(5);
    /// assert_eq!(vec.capacity(), 10);
    /// assert_eq!(vec, [1, 2]);
    /// ```
    #[inline]
    pub fn reserve(&mut self, new_capacity: usize) {
        infallible(self.try_reserve(new_capacity))
    }

    /// Fallible version of [`reserve`](Self::reserve). On error the vec is
    /// left untouched.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::{AllocErr, SimpleVec};
    ///
    /// let mut vec = SimpleVec::from([1u64, 2]);
    /// assert_eq!(vec.try_reserve(usize::MAX), Err(AllocErr::Layout));
    /// assert_eq!(vec, [1, 2]);
    /// ```
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), AllocErr> {
        match new_capacity > self.capacity() {
            true => self.try_relocate(new_capacity),
            false => Ok(()),
        }
    }

    /// Sets `len` to `new_len`.
    ///
    /// Shrinking only moves the end of the live range. Growing within the
    /// current capacity resets the newly exposed slots to `T::default()`.
    /// Growing past it reallocates to exactly `new_len` slots.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let mut vec = SimpleVec::from([1, 2, 3]);
    /// vec.resize(5);
    /// assert_eq!(vec, [1, 2, 3, 0, 0]);
    /// assert_eq!(vec.capacity(), 5);
    ///
    /// vec.resize(2);
    /// assert_eq!(vec, [1, 2]);
    /// assert_eq!(vec.capacity(), 5);
    /// ```
    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.capacity() {
            infallible(self.try_relocate(new_len));
        } else if new_len > self.len {
            self.buf.as_mut_slice()[self.len..new_len]
                .iter_mut()
                .for_each(|slot| *slot = T::default());
        }
        self.len = new_len;
    }

    /// Appends an element to the back of the vec, growing the buffer if it
    /// is full.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let mut vec = SimpleVec::from([1, 2]);
    /// vec.push(3);
    ///
    /// assert_eq!(vec, [1, 2, 3]);
    /// assert_eq!(vec.capacity(), 4);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes amortized *O*(1) time.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() { self.grow_one() }

        unsafe { *self.buf.get_unchecked_mut(self.len) = value };
        self.len += 1;
    }

    /// Inserts an element at `index`, shifting every element at or after it
    /// one slot to the right. Returns `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let mut vec = SimpleVec::from([1, 2, 3]);
    /// let at = vec.insert(0, 0);
    ///
    /// assert_eq!(vec, [0, 1, 2, 3]);
    /// assert_eq!(vec[at], 0);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(`len - index`) time, plus a reallocation when full.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        assert!(index <= self.len, "Index out of bounds");
        if self.len == self.capacity() { self.grow_one() }

        let slots = &mut self.buf.as_mut_slice()[index..=self.len];
        slots[slots.len() - 1] = value;
        slots.rotate_right(1);

        self.len += 1;
        index
    }

    /// Removes the last element and returns it, or `None` if the vec is empty.
    ///
    /// The vacated slot is left holding `T::default()`.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let mut vec = SimpleVec::from([1, 2]);
    /// assert_eq!(vec.pop(), Some(2));
    /// assert_eq!(vec.pop(), Some(1));
    /// assert_eq!(vec.pop(), None);
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        match self.len == 0 {
            true => None,
            false => {
                self.len -= 1;
                Some(mem::take(unsafe { self.buf.get_unchecked_mut(self.len) }))
            }
        }
    }

    /// Erases the element at `index` like [`erase`](Self::erase) and returns
    /// it.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use simple_vector::SimpleVec;
    ///
    /// let mut vec = SimpleVec::from([3, 4, 5]);
    /// assert_eq!(vec.remove(1), 4);
    /// assert_eq!(vec, [3, 5]);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.erase(index);
        mem::take(unsafe { self.buf.get_unchecked_mut(self.len) })
    }

    #[cold]
    fn grow_one(&mut self) {
        infallible(grown_capacity(self.len).and_then(|cap| self.try_relocate(cap)));
    }

    // Builds the replacement buffer first so a failed allocation leaves
    // `self` unchanged.
    fn try_relocate(&mut self, new_cap: usize) -> Result<(), AllocErr> {
        debug_assert!(new_cap >= self.len);

        let live = self.buf.as_mut_slice()[..self.len].iter_mut().map(mem::take);
        let mut fresh = ArrayPtr::try_from_iter(new_cap, live)?;

        self.buf.swap(&mut fresh);
        Ok(())
    }
}

/// Capacity a full vec of `len` elements grows to.
#[inline]
fn grown_capacity(len: usize) -> Result<usize, AllocErr> {
    len.checked_mul(2)
        .map(|cap| cap.max(1))
        .ok_or(AllocErr::Overflow)
}
