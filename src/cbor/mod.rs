//! The CBOR value model: the sole interface between this codec and an outer byte-level
//! CBOR serializer/deserializer. Turning a [`CborValue`] into bytes (and back) is
//! deliberately left to a general-purpose crate (`serde_cbor` in this workspace's tests
//! and `cli` member) rather than owned here.

pub mod float;
pub mod number;
mod value;

pub use value::CborValue;
