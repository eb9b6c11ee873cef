
#[cfg(feature = "serde")]
pub mod serialization;

#[cfg(feature = "async")]
pub mod async_ext;

#[cfg(feature = "tracing")]
pub mod tracing_ext;
