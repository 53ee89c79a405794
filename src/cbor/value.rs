use std::fmt::{Debug, Display, Formatter};

use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;

/// The CBOR value model this codec produces and consumes.
///
/// This is deliberately *not* a byte-level representation: turning a [`CborValue`] into
/// bytes (and back) is the job of an outer CBOR serializer such as `serde_cbor`. Only the
/// shapes the Dhall codec actually needs are represented here.
#[derive(Clone, PartialEq)]
pub enum CborValue {
    /// Major type 0.
    UInt(u64),
    /// Major type 1. The represented value is `-1 - value`.
    NInt(u64),
    /// Major type 2.
    Bytes(Vec<u8>),
    /// Major type 3.
    Text(String),
    /// Major type 4, definite length.
    Array(Vec<CborValue>),
    /// Major type 5, definite length. Preserves insertion order.
    Map(Vec<(CborValue, CborValue)>),
    /// Major type 7, simple value 20/21.
    Bool(bool),
    /// Major type 7, simple value 22.
    Null,
    /// Major type 7, additional info 25 (binary16).
    Half(u16),
    /// Major type 7, additional info 26 (binary32).
    Single(f32),
    /// Major type 7, additional info 27 (binary64).
    Double(f64),
    /// Tag 2: arbitrary-precision non-negative integer, big-endian minimal-length bytes.
    BignumPos(Vec<u8>),
    /// Tag 3: arbitrary-precision negative integer, stored as `-1 - mantissa`.
    BignumNeg(Vec<u8>),
    /// Any other tagged item, `(tag, item)`.
    Tag(u64, Box<CborValue>),
}

impl Debug for CborValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for CborValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CborValue::UInt(x) => write!(f, "{}", x),
            CborValue::NInt(x) => write!(f, "{}", -1 - i128::from(*x)),
            CborValue::Bytes(b) => {
                write!(f, "h'")?;
                for byte in b {
                    write!(f, "{:02x}", byte)?;
                }
                write!(f, "'")
            }
            CborValue::Text(s) => write!(f, "{:?}", s),
            CborValue::Array(a) => {
                write!(f, "[")?;
                for (i, item) in a.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            CborValue::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            CborValue::Bool(b) => write!(f, "{}", b),
            CborValue::Null => write!(f, "null"),
            CborValue::Half(h) => write!(f, "{}_16", half::f16::from_bits(*h)),
            CborValue::Single(s) => write!(f, "{}_32", s),
            CborValue::Double(d) => write!(f, "{}", d),
            CborValue::BignumPos(b) => write!(f, "2(h'{}')", hex(b)),
            CborValue::BignumNeg(b) => write!(f, "3(h'{}')", hex(b)),
            CborValue::Tag(t, v) => write!(f, "{}({})", t, v),
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        s.push_str(&format!("{:02x}", b));
    }
    s
}

impl CborValue {
    pub fn text(s: impl Into<String>) -> Self {
        CborValue::Text(s.into())
    }

    pub fn array(items: impl IntoIterator<Item = CborValue>) -> Self {
        CborValue::Array(items.into_iter().collect())
    }

    pub fn as_array(&self) -> Option<&[CborValue]> {
        match self {
            CborValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn into_array(self) -> Option<Vec<CborValue>> {
        match self {
            CborValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CborValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CborValue::Null)
    }

    /// The leading label of an array-shaped node (position 0), if this is an array
    /// whose first element is a naked non-negative integer.
    pub fn label(&self) -> Option<u64> {
        match self {
            CborValue::Array(a) => match a.first() {
                Some(CborValue::UInt(n)) => Some(*n),
                _ => None,
            },
            _ => None,
        }
    }

    /// Strip any number of nested `tag 55799` ("self-describe CBOR") wrappers.
    pub fn strip_self_describe(&self) -> &CborValue {
        let mut v = self;
        while let CborValue::Tag(55799, inner) = v {
            v = inner;
        }
        v
    }

    /// Encode a non-negative arbitrary-precision integer using the smallest form:
    /// compact unsigned int if it fits in 64 bits, otherwise a positive bignum.
    pub fn from_biguint(n: &BigUint) -> Self {
        match n.to_u64() {
            Some(v) => CborValue::UInt(v),
            None => CborValue::BignumPos(n.to_bytes_be()),
        }
    }

    /// Encode a signed arbitrary-precision integer using the smallest of:
    /// compact unsigned, compact negative, positive bignum, negative bignum.
    pub fn from_bigint(n: &BigInt) -> Self {
        use num_bigint::Sign;
        let (sign, magnitude) = n.to_bytes_be();
        match sign {
            Sign::NoSign | Sign::Plus => {
                let m = BigUint::from_bytes_be(&magnitude);
                match m.to_u64() {
                    Some(v) => CborValue::UInt(v),
                    None => CborValue::BignumPos(m.to_bytes_be()),
                }
            }
            Sign::Minus => {
                // represented value is -1 - value, i.e. value = |n| - 1
                let m = BigUint::from_bytes_be(&magnitude) - BigUint::from(1u8);
                match m.to_u64() {
                    Some(v) => CborValue::NInt(v),
                    None => CborValue::BignumNeg(m.to_bytes_be()),
                }
            }
        }
    }
}
