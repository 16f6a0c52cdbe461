mod module;
mod scratch;
mod ternary;
mod znx8;

pub use module::*;
pub use scratch::*;
pub use ternary::*;
pub use znx8::*;

pub trait Data: PartialEq + Eq + Sized {}
impl<T: PartialEq + Eq + Sized> Data for T {}

pub trait DataRef: Data + AsRef<[u8]> {}
impl<T: Data + AsRef<[u8]>> DataRef for T {}

pub trait DataMut: DataRef + AsMut<[u8]> {}
impl<T: DataRef + AsMut<[u8]>> DataMut for T {}
