use std::{iter::FusedIterator, ptr::{self, NonNull}};

use crate::array_ptr::allocation::deallocate;
use super::SimpleVec;


/// An iterator that moves out of a [`SimpleVec`].
/// 
/// Created by [`SimpleVec::into_iter`]. Slots `front..back` still hold the
/// values not yet yielded; values in the unused tail of the buffer are
/// dropped together with the buffer.
pub struct IntoIter<T> {
    buf: NonNull<T>,
    capacity: usize,
    len: usize,
    front: usize,
    back: usize,
}

unsafe impl<T: Send> Send for IntoIter<T> {}
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl <T> IntoIter<T> {
    #[inline]
    pub(super) fn new(vec: SimpleVec<T>) -> Self {
        let SimpleVec { buf, len } = vec;
        let (buf, capacity) = buf.into_raw_parts();

        Self { buf, capacity, len, front: 0, back: len }
    }

    // Caller moves `front` or `back` past `offset` so it is never read twice
    #[inline(always)]
    unsafe fn read(&self, offset: usize) -> T {
        debug_assert!(offset < self.len);
        unsafe { self.buf.as_ptr().add(offset).read() }
    }
}

impl <T> Iterator for IntoIter<T> {
    type Item = T;
    
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None }

        self.front += 1;
        Some(unsafe { self.read(self.front - 1) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl <T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None }

        self.back -= 1;
        Some(unsafe { self.read(self.back) })
    }
}

impl <T> ExactSizeIterator for IntoIter<T> {}

impl <T> FusedIterator for IntoIter<T> {}

impl <T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let base = self.buf.as_ptr();
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                base.add(self.front), 
                self.back - self.front
            ));
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                base.add(self.len), 
                self.capacity - self.len
            ));
            deallocate(self.buf, self.capacity);
        }
    }
}


#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};
    use crate::SimpleVec;

    #[derive(Default)]
    struct Counted(Option<Rc<Cell<usize>>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            if let Some(count) = &self.0 { count.set(count.get() + 1) }
        }
    }

    #[test]
    fn into_iter() {
        let vec = SimpleVec::from(["aa".to_string(), "bb".to_string(), "cc".to_string()]);
        let mut iter = vec.into_iter();

        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some("aa".to_string()));
        assert_eq!(iter.next_back(), Some("cc".to_string()));
        assert_eq!(iter.next(), Some("bb".to_string()));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn into_iter_zst() {
        let vec = SimpleVec::from([(), (), ()]);
        let mut iter = vec.into_iter();

        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!(iter.next(), Some(()));
        assert_eq!(iter.next_back(), Some(()));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.count(), 1);
    }

    #[test]
    fn partial_consume_drops_everything_once() {
        let count = Rc::new(Cell::new(0));
        let mut vec = SimpleVec::with_capacity(4);
        for _ in 0..3 { vec.push(Counted(Some(count.clone()))); }

        let mut iter = vec.into_iter();
        drop(iter.next());
        assert_eq!(count.get(), 1);

        drop(iter);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn tail_slots_are_dropped() {
        let count = Rc::new(Cell::new(0));
        let mut vec = SimpleVec::from([
            Counted(Some(count.clone())), 
            Counted(Some(count.clone()))
        ]);
        // popped slot stays in the buffer until the buffer goes away
        vec.pop_back();

        let collected = vec.into_iter().collect::<Vec<_>>();
        assert_eq!(count.get(), 1);
        assert_eq!(collected.len(), 1);

        drop(collected);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn size_hint_shrinks_from_both_ends() {
        let vec = SimpleVec::from([1, 2, 3, 4, 5]);
        let mut iter = vec.into_iter();

        assert_eq!(iter.next_back(), Some(5));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.size_hint(), (3, Some(3)));

        assert_eq!(iter.by_ref().rev().collect::<Vec<_>>(), [4, 3, 2]);
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn drop_from_both_ends_counts_once() {
        let count = Rc::new(Cell::new(0));
        let mut vec = SimpleVec::with_capacity(8);
        for _ in 0..5 { vec.push(Counted(Some(count.clone()))); }

        let mut iter = vec.into_iter();
        drop(iter.next());
        drop(iter.next_back());
        assert_eq!(count.get(), 2);

        drop(iter);
        assert_eq!(count.get(), 5);
    }
}
