use std::{alloc::{self, Layout}, mem, ptr::NonNull};

use crate::errors::AllocErr;

#[inline]
pub(crate) fn infallible<T>(result: Result<T, AllocErr>) -> T {
    match result {
        Ok(x) => x,
        Err(AllocErr::Layout) => panic!("invalid parameters to Layout::array"),
        Err(AllocErr::Overflow) => panic!("capacity overflow"),
        Err(AllocErr::Alloc { layout }) => alloc::handle_alloc_error(layout),
    }
}

#[inline(always)]
const fn needs_alloc<T>(cap: usize) -> bool { cap != 0 && mem::size_of::<T>() != 0 }

/// Allocates uninitialized room for `cap` values of `T`.
/// 
/// Zero capacities and zero-sized types get a dangling pointer.
#[inline]
pub(crate) fn allocate<T>(cap: usize) -> Result<NonNull<T>, AllocErr> {
    if !needs_alloc::<T>(cap) { return Ok(NonNull::dangling()) }

    let layout = Layout::array::<T>(cap).map_err(AllocErr::layout)?;
    debug_assert!(layout.size() > 0);

    NonNull::new(unsafe { alloc::alloc(layout) })
        .ok_or(AllocErr::alloc(layout))
        .map(NonNull::cast)
}

/// # Safety
/// 
/// `ptr` must have come from [`allocate`] with the same `cap`, and every
/// value still living in it must already have been dropped or moved out.
#[inline]
pub(crate) unsafe fn deallocate<T>(ptr: NonNull<T>, cap: usize) {
    if !needs_alloc::<T>(cap) { return }

    // `allocate` already validated this layout
    let layout = unsafe { Layout::from_size_align_unchecked(
        mem::size_of::<T>() * cap, 
        mem::align_of::<T>()
    )};
    unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) };
}

#[cfg(test)]
mod tests {
    use std::panic;
    use super::*;

    fn panic_message<T>(result: Result<T, AllocErr>) -> Option<&'static str> {
        panic::catch_unwind(panic::AssertUnwindSafe(|| { infallible(result); }))
            .err()
            .and_then(|err| err.downcast_ref::<&str>().copied())
    }

    #[test]
    fn infallible_passes_ok_through() {
        let ptr = infallible(allocate::<u32>(4));
        assert_ne!(ptr, NonNull::dangling());
        unsafe { deallocate(ptr, 4) };
    }

    #[test]
    fn infallible_panics_per_variant() {
        assert_eq!(panic_message(allocate::<u64>(usize::MAX)), Some("invalid parameters to Layout::array"));
        assert_eq!(panic_message::<()>(Err(AllocErr::Overflow)), Some("capacity overflow"));
    }

    #[test]
    fn allocate_and_deallocate() {
        let ptr = allocate::<u64>(8).unwrap();
        unsafe {
            for i in 0..8 { ptr.add(i).write(i as u64); }
            assert_eq!(ptr.add(7).read(), 7);
            deallocate(ptr, 8);
        }
    }

    #[test]
    fn zero_capacity_is_dangling() {
        assert_eq!(allocate::<u64>(0).unwrap(), NonNull::dangling());
        assert_eq!(allocate::<()>(16).unwrap(), NonNull::dangling());

        // no-ops
        unsafe {
            deallocate(NonNull::<u64>::dangling(), 0);
            deallocate(NonNull::<()>::dangling(), 16);
        }
    }

    #[test]
    fn oversized_layout() {
        assert_eq!(allocate::<u64>(usize::MAX), Err(AllocErr::Layout));
    }
}
