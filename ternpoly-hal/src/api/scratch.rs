//! Scratch memory allocation, borrowing, and arena-style sub-allocation.

use crate::layouts::{Backend, Scratch};

/// Allocates a new [crate::layouts::ScratchOwned] of `size` aligned bytes.
pub trait ScratchOwnedAlloc<B: Backend> {
    fn alloc(size: usize) -> Self;
}

/// Borrows a slice of bytes into a [Scratch].
pub trait ScratchOwnedBorrow<B: Backend> {
    fn borrow(&mut self) -> &mut Scratch<B>;
}

/// Wrap an array of mutable borrowed bytes into a [Scratch].
pub trait ScratchFromBytes<B: Backend> {
    fn from_bytes(data: &mut [u8]) -> &mut Scratch<B>;
}

/// Returns how many bytes left can be taken from the scratch.
pub trait ScratchAvailable {
    fn available(&self) -> usize;
}

/// Takes a slice of bytes from a [Scratch] and return a new [Scratch] minus the taken array of bytes.
pub trait TakeSlice {
    fn take_slice<T>(&mut self, len: usize) -> (&mut [T], &mut Self);
}

impl<B: Backend> Scratch<B>
where
    Self: TakeSlice + ScratchAvailable + ScratchFromBytes<B>,
{
    /// Splits off `len` bytes from the front and returns the taken region
    /// as a new [`Scratch`] plus the remaining scratch.
    pub fn split_at_mut(&mut self, len: usize) -> (&mut Scratch<B>, &mut Self) {
        let (take_slice, rem_slice) = self.take_slice(len);
        (Self::from_bytes(take_slice), rem_slice)
    }

    /// Splits off `n` non-overlapping [`Scratch`] regions of `len` bytes each.
    ///
    /// # Panics
    ///
    /// Panics if the scratch cannot hold `n` aligned regions of `len` bytes.
    pub fn split_mut(&mut self, n: usize, len: usize) -> (Vec<&mut Scratch<B>>, &mut Self) {
        assert!(self.available() >= n * len);
        let mut scratches: Vec<&mut Scratch<B>> = Vec::with_capacity(n);
        let mut scratch: &mut Scratch<B> = self;
        for _ in 0..n {
            let (tmp, scratch_new) = scratch.split_at_mut(len);
            scratch = scratch_new;
            scratches.push(tmp);
        }
        (scratches, scratch)
    }
}
