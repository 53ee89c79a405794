//! The Dhall expression AST: the sole input/output type of this codec.
//!
//! Dhall parsing, type checking, and normalization all live outside this crate; `Expr`
//! is just a tree shape precise enough for [`crate::encode`]/[`crate::decode`] to form
//! a bijection onto a CBOR subset.

use num_bigint::{BigInt, BigUint};

use crate::builtins::{Builtin, Constant};

/// A Dhall expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Variable {
        name: String,
        index: BigUint,
    },
    Builtin(Builtin),
    Constant(Constant),
    Lambda {
        name: String,
        domain: Box<Expr>,
        body: Box<Expr>,
    },
    Forall {
        name: String,
        domain: Box<Expr>,
        codomain: Box<Expr>,
    },
    Application {
        function: Box<Expr>,
        arguments: Vec<Expr>,
    },
    Operator {
        left: Box<Expr>,
        op: Operator,
        right: Box<Expr>,
    },
    Completion {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    EmptyList {
        element_type: Box<Expr>,
    },
    /// `[] : T` where `T` is not written as `List _` — the annotation is carried whole
    /// rather than unwrapped to an element type.
    EmptyListOther {
        annotation: Box<Expr>,
    },
    NonEmptyList {
        elements: Vec<Expr>,
    },
    Some {
        value: Box<Expr>,
    },
    Merge {
        handler: Box<Expr>,
        union: Box<Expr>,
        annotation: Option<Box<Expr>>,
    },
    ToMap {
        record: Box<Expr>,
        annotation: Option<Box<Expr>>,
    },
    ShowConstructor {
        argument: Box<Expr>,
    },
    RecordType {
        fields: Vec<(String, Expr)>,
    },
    RecordLiteral {
        fields: Vec<(String, Expr)>,
    },
    Field {
        record: Box<Expr>,
        label: String,
    },
    ProjectByLabels {
        record: Box<Expr>,
        labels: Vec<String>,
    },
    ProjectByType {
        record: Box<Expr>,
        ty: Box<Expr>,
    },
    UnionType {
        alternatives: Vec<(String, Option<Expr>)>,
    },
    If {
        condition: Box<Expr>,
        then: Box<Expr>,
        else_: Box<Expr>,
    },
    BoolLiteral(bool),
    NaturalLiteral(BigUint),
    IntegerLiteral(BigInt),
    DoubleLiteral(f64),
    TextLiteral {
        chunks: Vec<(String, Expr)>,
        suffix: String,
    },
    BytesLiteral(Vec<u8>),
    Assert {
        ty: Box<Expr>,
    },
    Import(Import),
    Let {
        bindings: Vec<Binding>,
        body: Box<Expr>,
    },
    Annotation {
        value: Box<Expr>,
        ty: Box<Expr>,
    },
    With {
        subject: Box<Expr>,
        path: Vec<PathKey>,
        value: Box<Expr>,
    },
    DateLiteral {
        year: i64,
        month: u8,
        day: u8,
    },
    TimeLiteral {
        hour: u8,
        minute: u8,
        seconds: Seconds,
    },
    TimeZoneLiteral {
        offset_minutes: i32,
    },
}

impl Expr {
    pub fn var(name: impl Into<String>, index: u64) -> Self {
        Expr::Variable {
            name: name.into(),
            index: BigUint::from(index),
        }
    }

    pub fn natural(n: u64) -> Self {
        Expr::NaturalLiteral(BigUint::from(n))
    }

    pub fn integer(n: i64) -> Self {
        Expr::IntegerLiteral(BigInt::from(n))
    }
}

/// Decimal seconds field of a [`Expr::TimeLiteral`], preserving the precision the user
/// wrote: the value is `mantissa * 10^-precision`.
#[derive(Debug, Clone, PartialEq)]
pub struct Seconds {
    pub precision: u32,
    pub mantissa: BigInt,
}

/// The 13 binary operators sharing one encoding slot. `::` (record completion) also
/// uses an operator code, but is represented as [`Expr::Completion`] rather than
/// `Operator { op: Operator::Completion, .. }`, since it binds differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Or,
    And,
    Equal,
    NotEqual,
    Plus,
    Times,
    TextAppend,
    ListAppend,
    RecordMerge,
    RightBiasedRecordMerge,
    RecordTypeMerge,
    Equivalent,
    Deprecated,
}

impl Operator {
    pub fn code(self) -> u64 {
        match self {
            Operator::Or => 0,
            Operator::And => 1,
            Operator::Equal => 2,
            Operator::NotEqual => 3,
            Operator::Plus => 4,
            Operator::Times => 5,
            Operator::TextAppend => 6,
            Operator::ListAppend => 7,
            Operator::RecordMerge => 8,
            Operator::RightBiasedRecordMerge => 9,
            Operator::RecordTypeMerge => 10,
            Operator::Equivalent => 11,
            Operator::Deprecated => 12,
        }
    }

    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(Operator::Or),
            1 => Some(Operator::And),
            2 => Some(Operator::Equal),
            3 => Some(Operator::NotEqual),
            4 => Some(Operator::Plus),
            5 => Some(Operator::Times),
            6 => Some(Operator::TextAppend),
            7 => Some(Operator::ListAppend),
            8 => Some(Operator::RecordMerge),
            9 => Some(Operator::RightBiasedRecordMerge),
            10 => Some(Operator::RecordTypeMerge),
            11 => Some(Operator::Equivalent),
            12 => Some(Operator::Deprecated),
            _ => None,
        }
    }
}

/// Code allocated to [`Expr::Completion`] in the shared operator slot.
pub const COMPLETION_OP_CODE: u64 = 13;

/// A step in a `with`-expression path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathKey {
    DescendOptional,
    Label(String),
}

/// A single binding of a (possibly flattened) `let` chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub ty: Option<Expr>,
    pub value: Expr,
}

/// `Code`, `RawText`, `Location`, or `RawBytes` import mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    Code,
    RawText,
    Location,
    RawBytes,
}

impl ImportMode {
    pub fn code(self) -> u64 {
        match self {
            ImportMode::Code => 0,
            ImportMode::RawText => 1,
            ImportMode::Location => 2,
            ImportMode::RawBytes => 3,
        }
    }

    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(ImportMode::Code),
            1 => Some(ImportMode::RawText),
            2 => Some(ImportMode::Location),
            3 => Some(ImportMode::RawBytes),
            _ => None,
        }
    }
}

/// `HTTP` or `HTTPS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

/// A path-style import prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPrefix {
    Absolute,
    Here,
    Parent,
    Home,
}

impl PathPrefix {
    pub fn discriminator(self) -> u64 {
        match self {
            PathPrefix::Absolute => 2,
            PathPrefix::Here => 3,
            PathPrefix::Parent => 4,
            PathPrefix::Home => 5,
        }
    }

    pub fn from_discriminator(d: u64) -> Option<Self> {
        match d {
            2 => Some(PathPrefix::Absolute),
            3 => Some(PathPrefix::Here),
            4 => Some(PathPrefix::Parent),
            5 => Some(PathPrefix::Home),
            _ => None,
        }
    }
}

/// A remote URL import target. `directory` is stored root-first, matching the wire
/// format, so neither encode nor decode needs to reverse it.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportUrl {
    pub scheme: Scheme,
    pub authority: String,
    pub directory: Vec<String>,
    pub file: String,
    pub query: Option<String>,
    pub headers: Option<Box<Expr>>,
}

/// The discriminated target of an [`Import`].
#[derive(Debug, Clone, PartialEq)]
pub enum ImportType {
    Remote(ImportUrl),
    Path {
        prefix: PathPrefix,
        directory: Vec<String>,
        file: String,
    },
    Env(String),
    Missing,
}

/// A Dhall `import` expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub import_type: ImportType,
    pub mode: ImportMode,
    /// A 32-byte SHA-256 digest, if a hash was pinned.
    pub hash: Option<[u8; 32]>,
}
