use core::alloc::Layout;
use core::mem;
use core::ptr::NonNull;

use alloc::alloc::{alloc, dealloc};

use crate::error::RingDequeError;

/// Owns an uninitialized block of element slots.
///
/// `RawBuf` only manages the memory: it never constructs or drops elements.
/// Which slots hold live values is tracked by the container above it.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    capacity: usize,
}

impl<T> RawBuf<T> {
    /// A block of zero slots. Performs no allocation.
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
        }
    }

    /// Acquires an uninitialized block of `capacity` slots.
    ///
    /// Zero-capacity blocks and zero-sized element types are represented by a
    /// dangling, well-aligned pointer and perform no allocation.
    ///
    /// # Errors
    ///
    /// Returns `RingDequeError::CapacityOverflow` if a block of `capacity`
    /// slots exceeds the maximum allocation size, and
    /// `RingDequeError::AllocationFailed` if the allocator cannot provide
    /// the block. Nothing is allocated on failure.
    pub(crate) fn allocate(capacity: usize) -> Result<Self, RingDequeError> {
        if capacity == 0 || mem::size_of::<T>() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
            });
        }

        let layout = Layout::array::<T>(capacity)
            .map_err(|_| RingDequeError::CapacityOverflow { requested: capacity })?;

        // SAFETY: the layout has non-zero size (capacity > 0 and T is not
        // zero-sized on this path).
        let raw = unsafe { alloc(layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => Ok(Self { ptr, capacity }),
            None => Err(RingDequeError::AllocationFailed { slots: capacity }),
        }
    }

    /// Pointer to the first slot. Dangling (but aligned) for empty blocks.
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) fn as_non_null(&self) -> NonNull<T> {
        self.ptr
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        // Layout::array succeeded for these parameters during allocation;
        // zero-sized layouts were never allocated in the first place.
        if let Ok(layout) = Layout::array::<T>(self.capacity) {
            if layout.size() != 0 {
                // SAFETY: the block was obtained from `alloc` with this
                // exact layout and has not been released yet.
                unsafe { dealloc(self.ptr.as_ptr().cast(), layout) }
            }
        }
    }
}
