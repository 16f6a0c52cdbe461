//! Scratch (temporary) memory management for [`TernaryRef`](crate::TernaryRef).
//!
//! Owned buffers come from [`alloc_aligned`] and carry leading slack so that a
//! [`DEFAULTALIGN`]-aligned region of the requested size always exists.
//! `take_slice_impl` carves typed slices from the first aligned byte and returns
//! the remainder, which the next call re-aligns.

use std::marker::PhantomData;

use ternpoly_hal::{
    DEFAULTALIGN, alloc_aligned,
    api::ScratchFromBytes,
    layouts::{Backend, Scratch, ScratchOwned},
    oep::{ScratchAvailableImpl, ScratchFromBytesImpl, ScratchOwnedAllocImpl, ScratchOwnedBorrowImpl, TakeSliceImpl},
    take_slice_aligned,
};

use crate::TernaryRef;

unsafe impl<B: Backend> ScratchOwnedAllocImpl<B> for TernaryRef {
    fn scratch_owned_alloc_impl(size: usize) -> ScratchOwned<B> {
        ScratchOwned {
            data: alloc_aligned(size),
            _phantom: PhantomData,
        }
    }
}

unsafe impl<B: Backend> ScratchOwnedBorrowImpl<B> for TernaryRef
where
    B: ScratchFromBytesImpl<B>,
{
    fn scratch_owned_borrow_impl(scratch: &mut ScratchOwned<B>) -> &mut Scratch<B> {
        Scratch::from_bytes(&mut scratch.data)
    }
}

unsafe impl<B: Backend> ScratchFromBytesImpl<B> for TernaryRef {
    fn scratch_from_bytes_impl(data: &mut [u8]) -> &mut Scratch<B> {
        // SAFETY: `Scratch<B>` is `#[repr(C)]` with layout `{ PhantomData<B>, [u8] }`.
        // `PhantomData` is zero-sized, so the byte layout is identical to `[u8]`.
        unsafe { &mut *(data as *mut [u8] as *mut Scratch<B>) }
    }
}

unsafe impl<B: Backend> ScratchAvailableImpl<B> for TernaryRef {
    fn scratch_available_impl(scratch: &Scratch<B>) -> usize {
        let aligned_offset: usize = scratch.data.as_ptr().align_offset(DEFAULTALIGN);
        scratch.data.len().saturating_sub(aligned_offset)
    }
}

unsafe impl<B: Backend> TakeSliceImpl<B> for TernaryRef
where
    B: ScratchFromBytesImpl<B>,
{
    fn take_slice_impl<T>(scratch: &mut Scratch<B>, len: usize) -> (&mut [T], &mut Scratch<B>) {
        debug_assert!(
            DEFAULTALIGN.is_multiple_of(std::mem::align_of::<T>()),
            "DEFAULTALIGN ({DEFAULTALIGN}) must be a multiple of align_of::<T>() ({})",
            std::mem::align_of::<T>()
        );
        let (take_slice, rem_slice) = take_slice_aligned(&mut scratch.data, len * std::mem::size_of::<T>());

        // SAFETY: `take_slice` is aligned to `DEFAULTALIGN` which is a multiple of
        // `align_of::<T>()` (asserted above) and spans `len * size_of::<T>()` bytes.
        // The remainder is a disjoint sub-slice.
        unsafe {
            (
                &mut *(std::ptr::slice_from_raw_parts_mut(take_slice.as_mut_ptr() as *mut T, len)),
                Scratch::from_bytes(rem_slice),
            )
        }
    }
}
