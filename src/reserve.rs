
/// A capacity request, consumed by [`SimpleVec::from`](crate::SimpleVec).
///
/// Tells "hold `n` elements" (`SimpleVec::with_len(n)`) apart from "have room
/// for `n` elements" at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    #[inline]
    pub const fn new(capacity: usize) -> Self { Self { capacity } }

    #[inline]
    pub const fn capacity(self) -> usize { self.capacity }
}

/// Builds a [`ReserveProxy`] for `capacity` slots.
///
/// # Examples
/// ```
/// use simple_vector::{reserve, SimpleVec};
///
/// let vec = SimpleVec::<i32>::from(reserve(5));
/// assert_eq!(vec.len(), 0);
/// assert_eq!(vec.capacity(), 5);
/// ```
#[inline]
pub const fn reserve(capacity: usize) -> ReserveProxy { ReserveProxy::new(capacity) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity() {
        assert_eq!(reserve(7).capacity(), 7);
        assert_eq!(reserve(0), ReserveProxy::new(0));
    }
}
