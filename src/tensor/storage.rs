//! Storage: exclusively owned, lane-aligned f32 buffer

use super::layout::LANES;
use crate::error::{Error, Result};
use std::alloc::{Layout as AllocLayout, alloc_zeroed, dealloc};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::slice;

/// Byte alignment of every buffer: one full lane of f32s
pub(crate) const ALIGN: usize = LANES * std::mem::size_of::<f32>();

/// Heap buffer backing one tensor
///
/// Holds exactly the padded element count of its tensor, aligned to [`ALIGN`]
/// bytes and zero-initialized at allocation. The buffer is owned exclusively:
/// there is no sharing, and writes require `&mut`.
pub(crate) struct Storage {
    ptr: NonNull<f32>,
    len: usize,
}

// The buffer is uniquely owned and only reachable through &/&mut methods.
unsafe impl Send for Storage {}
unsafe impl Sync for Storage {}

impl Storage {
    /// Allocate a zeroed buffer of `len` f32 elements.
    ///
    /// Fails with [`Error::Internal`] if the allocator refuses the request;
    /// the failure is surfaced to the caller, never retried.
    pub(crate) fn zeroed(len: usize) -> Result<Self> {
        if len == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len: 0,
            });
        }

        let size_bytes = len
            .checked_mul(std::mem::size_of::<f32>())
            .ok_or_else(|| Error::internal(format!("{} elements overflow isize", len)))?;
        let layout = AllocLayout::from_size_align(size_bytes, ALIGN)
            .map_err(|_| Error::internal(format!("invalid layout for {} bytes", size_bytes)))?;

        let ptr = NonNull::new(unsafe { alloc_zeroed(layout) }.cast::<f32>())
            .ok_or_else(|| Error::internal(format!("allocation of {} bytes failed", size_bytes)))?;

        Ok(Self { ptr, len })
    }

    /// Allocate a fresh aligned buffer holding a verbatim copy of this one.
    pub(crate) fn try_clone(&self) -> Result<Self> {
        let mut copy = Self::zeroed(self.len)?;
        copy.copy_from_slice(self);
        Ok(copy)
    }

    /// Number of f32 elements in the buffer.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

impl Deref for Storage {
    type Target = [f32];

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl DerefMut for Storage {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl Drop for Storage {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }

        // Same size/align pair that zeroed() allocated with.
        let layout =
            AllocLayout::from_size_align(self.len * std::mem::size_of::<f32>(), ALIGN)
                .expect("Invalid allocation layout");

        unsafe {
            dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
        }
    }
}
