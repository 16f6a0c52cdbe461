use std::marker::PhantomData;

use crate::layouts::Backend;

/// Owned, caller-held scratch memory. Borrow it as a [`Scratch`] for each call.
pub struct ScratchOwned<B: Backend> {
    pub data: Vec<u8>,
    pub _phantom: PhantomData<B>,
}

/// Borrowed scratch memory, carved front-to-back by [`crate::api::TakeSlice`].
#[repr(C)]
pub struct Scratch<B: Backend> {
    pub _phantom: PhantomData<B>,
    pub data: [u8],
}
