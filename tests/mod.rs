
#[cfg(feature = "std")]
pub mod wrap;

#[cfg(feature = "async")]
pub mod async_ext;
