#![doc = include_str!("../README.md")]

pub mod ast;
pub mod builtins;
pub mod cbor;
mod decode;
mod encode;
pub mod error;

pub use ast::Expr;
pub use decode::decode;
pub use encode::encode;
pub use error::DecodeError;
