#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use lagrid_core as grid;

#[doc(inline)]
pub use lagrid_io as io;

#[doc(inline)]
pub use lagrid_resample as resample;
