use std::{alloc::{Layout, LayoutError}, error::Error, fmt};


/// Returned by [`SimpleVec::at`](crate::SimpleVec::at) when `index >= len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRangeError {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "index {} out of range for length {}", self.index, self.len)
    }
}

impl Error for OutOfRangeError {}

/// Failure to obtain a backing buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocErr {
    /// The requested capacity does not fit in `usize`.
    Overflow,
    /// The requested capacity exceeds what a [`Layout`] can describe.
    Layout,
    /// The allocator returned null.
    Alloc { layout: Layout }
}

impl AllocErr {
    #[inline]
    pub(crate) const fn layout(_err: LayoutError) -> Self { Self::Layout }

    #[inline]
    pub(crate) const fn alloc(layout: Layout) -> Self { Self::Alloc { layout } }
}

impl fmt::Display for AllocErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow => write!(f, "capacity overflow"),
            Self::Layout => write!(f, "invalid parameters to Layout::array"),
            Self::Alloc { layout } => write!(f, "memory allocation of {} bytes failed", layout.size()),
        }
    }
}

impl Error for AllocErr {}
