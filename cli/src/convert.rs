//! Bridges `serde_cbor::Value`, a general-purpose byte-level CBOR representation, to
//! `dhall_cbor`'s in-memory item model. The library crate deliberately stays agnostic
//! about which byte-level CBOR crate is used; this binary is where that choice is made.

use dhall_cbor::cbor::{float, CborValue};

pub fn from_serde(v: &serde_cbor::Value) -> CborValue {
    match v {
        serde_cbor::Value::Null => CborValue::Null,
        serde_cbor::Value::Bool(b) => CborValue::Bool(*b),
        serde_cbor::Value::Integer(n) => {
            if *n >= 0 {
                CborValue::UInt(*n as u64)
            } else {
                CborValue::NInt((-1 - *n) as u64)
            }
        }
        serde_cbor::Value::Float(f) => float::encode_double(*f),
        serde_cbor::Value::Bytes(b) => CborValue::Bytes(b.clone()),
        serde_cbor::Value::Text(s) => CborValue::Text(s.clone()),
        serde_cbor::Value::Array(items) => CborValue::Array(items.iter().map(from_serde).collect()),
        serde_cbor::Value::Map(m) => CborValue::Map(
            m.iter()
                .map(|(k, v)| (from_serde(k), from_serde(v)))
                .collect(),
        ),
        serde_cbor::Value::Tag(2, inner) => match inner.as_ref() {
            serde_cbor::Value::Bytes(b) => CborValue::BignumPos(b.clone()),
            other => CborValue::Tag(2, Box::new(from_serde(other))),
        },
        serde_cbor::Value::Tag(3, inner) => match inner.as_ref() {
            serde_cbor::Value::Bytes(b) => CborValue::BignumNeg(b.clone()),
            other => CborValue::Tag(3, Box::new(from_serde(other))),
        },
        serde_cbor::Value::Tag(t, inner) => CborValue::Tag(*t, Box::new(from_serde(inner))),
        other => panic!("unsupported serde_cbor value variant: {:?}", other),
    }
}

pub fn to_serde(v: &CborValue) -> serde_cbor::Value {
    match v {
        CborValue::Null => serde_cbor::Value::Null,
        CborValue::Bool(b) => serde_cbor::Value::Bool(*b),
        CborValue::UInt(n) => serde_cbor::Value::Integer(*n as i128),
        CborValue::NInt(n) => serde_cbor::Value::Integer(-1 - *n as i128),
        CborValue::Half(_) | CborValue::Single(_) | CborValue::Double(_) => {
            serde_cbor::Value::Float(float::widen(v).expect("float variant"))
        }
        CborValue::Bytes(b) => serde_cbor::Value::Bytes(b.clone()),
        CborValue::Text(s) => serde_cbor::Value::Text(s.clone()),
        CborValue::Array(items) => serde_cbor::Value::Array(items.iter().map(to_serde).collect()),
        CborValue::Map(m) => serde_cbor::Value::Map(
            m.iter()
                .map(|(k, v)| (to_serde(k), to_serde(v)))
                .collect(),
        ),
        CborValue::BignumPos(b) => {
            serde_cbor::Value::Tag(2, Box::new(serde_cbor::Value::Bytes(b.clone())))
        }
        CborValue::BignumNeg(b) => {
            serde_cbor::Value::Tag(3, Box::new(serde_cbor::Value::Bytes(b.clone())))
        }
        CborValue::Tag(t, inner) => serde_cbor::Value::Tag(*t, Box::new(to_serde(inner))),
    }
}
