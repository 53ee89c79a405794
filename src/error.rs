//! Decode errors.
//!
//! Encoding never fails — [`crate::encode`] returns a [`crate::cbor::CborValue`]
//! directly. Decoding is partial; every failure carries the [`CborPath`] that was
//! being visited when the problem was discovered, built up as the decoder recurses
//! rather than reconstructed afterwards.

use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::cbor::CborValue;

/// One step on the way from the root CBOR item to the point of failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    Index(usize),
    Key(String),
}

impl Display for PathStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PathStep::Index(i) => write!(f, "[{}]", i),
            PathStep::Key(k) => write!(f, ".{}", k),
        }
    }
}

/// The chain of steps taken while decoding, attached to every [`DecodeError`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CborPath(Vec<PathStep>);

impl CborPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Return a path extended by one more step, without mutating `self`.
    pub fn at(&self, step: PathStep) -> Self {
        let mut steps = self.0.clone();
        steps.push(step);
        Self(steps)
    }

    pub fn index(&self, i: usize) -> Self {
        self.at(PathStep::Index(i))
    }

    pub fn key(&self, k: impl Into<String>) -> Self {
        self.at(PathStep::Key(k.into()))
    }
}

impl Display for CborPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            write!(f, "$")
        } else {
            write!(f, "$")?;
            for step in &self.0 {
                write!(f, "{}", step)?;
            }
            Ok(())
        }
    }
}

/// A decode failure, naming what went wrong plus the path at which it occurred.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("unknown label {label} at {path}")]
    UnknownLabel { label: u64, path: CborPath },

    #[error("wrong arity: expected {expected}, got {got} at {path}")]
    WrongArity {
        expected: &'static str,
        got: usize,
        path: CborPath,
    },

    #[error("type mismatch at {path}: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: String,
        path: CborPath,
    },

    #[error("unknown builtin or constant {name:?} at {path}")]
    UnknownBuiltin { name: String, path: CborPath },

    #[error("variable or binder named `_` spelled out in long form at {path}")]
    ReservedName { path: CborPath },

    #[error("application with no arguments at {path}")]
    EmptyApplication { path: CborPath },

    #[error("unknown import scheme discriminator {discriminator} at {path}")]
    BadImportScheme { discriminator: u64, path: CborPath },

    #[error("malformed multihash at {path}")]
    BadMultihash { path: CborPath },

    #[error("unknown import mode {mode} at {path}")]
    BadMode { mode: u64, path: CborPath },

    #[error("unknown operator code {code} at {path}")]
    BadOperator { code: u64, path: CborPath },

    #[error("text literal has an even number of trailing items at {path}")]
    MalformedText { path: CborPath },

    #[error("malformed time literal at {path}")]
    MalformedTime { path: CborPath },

    #[error("malformed date literal at {path}")]
    MalformedDate { path: CborPath },

    #[error("legacy union/constructors encoding (label {label}) is not supported at {path}")]
    MalformedUnionLegacy { label: u64, path: CborPath },

    #[error("unsupported CBOR tag {tag} at {path}")]
    UnknownTag { tag: u64, path: CborPath },

    #[error("`let` with no bindings at {path}")]
    EmptyLet { path: CborPath },

    #[error("non-empty list shape has no elements at {path}")]
    EmptyList { path: CborPath },
}

impl DecodeError {
    pub fn type_mismatch(expected: &'static str, got: &CborValue, path: &CborPath) -> Self {
        DecodeError::TypeMismatch {
            expected,
            got: describe(got),
            path: path.clone(),
        }
    }

    pub fn wrong_arity(expected: &'static str, got: usize, path: &CborPath) -> Self {
        DecodeError::WrongArity {
            expected,
            got,
            path: path.clone(),
        }
    }

    /// The path at which this error occurred.
    pub fn path(&self) -> &CborPath {
        match self {
            DecodeError::UnknownLabel { path, .. }
            | DecodeError::WrongArity { path, .. }
            | DecodeError::TypeMismatch { path, .. }
            | DecodeError::UnknownBuiltin { path, .. }
            | DecodeError::ReservedName { path }
            | DecodeError::EmptyApplication { path }
            | DecodeError::BadImportScheme { path, .. }
            | DecodeError::BadMultihash { path }
            | DecodeError::BadMode { path, .. }
            | DecodeError::BadOperator { path, .. }
            | DecodeError::MalformedText { path }
            | DecodeError::MalformedTime { path }
            | DecodeError::MalformedDate { path }
            | DecodeError::MalformedUnionLegacy { path, .. }
            | DecodeError::UnknownTag { path, .. }
            | DecodeError::EmptyLet { path }
            | DecodeError::EmptyList { path } => path,
        }
    }
}

fn describe(v: &CborValue) -> String {
    match v {
        CborValue::UInt(_) => "unsigned int".into(),
        CborValue::NInt(_) => "negative int".into(),
        CborValue::Bytes(_) => "byte string".into(),
        CborValue::Text(_) => "text string".into(),
        CborValue::Array(_) => "array".into(),
        CborValue::Map(_) => "map".into(),
        CborValue::Bool(_) => "bool".into(),
        CborValue::Null => "null".into(),
        CborValue::Half(_) | CborValue::Single(_) | CborValue::Double(_) => "float".into(),
        CborValue::BignumPos(_) => "positive bignum".into(),
        CborValue::BignumNeg(_) => "negative bignum".into(),
        CborValue::Tag(t, _) => format!("tag {}", t),
    }
}
