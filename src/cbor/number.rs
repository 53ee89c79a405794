//! Smallest-form integer encoding and decoding.
//!
//! Every arbitrary-precision integer the codec touches (variable indices, `Natural`,
//! `Integer`, the mantissa of a decimal-fraction seconds field) goes through the same
//! narrowing rule: compact unsigned, then compact negative, then bignum.

use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;

use super::value::CborValue;
use crate::error::{CborPath, DecodeError};

/// Decode a `CborValue` that is required to hold a non-negative integer (`UInt` or
/// `BignumPos`) into a [`BigUint`].
pub fn to_biguint(v: &CborValue, path: &CborPath) -> Result<BigUint, DecodeError> {
    match v {
        CborValue::UInt(n) => Ok(BigUint::from(*n)),
        CborValue::BignumPos(bytes) => Ok(BigUint::from_bytes_be(bytes)),
        other => Err(DecodeError::type_mismatch("non-negative integer", other, path)),
    }
}

/// Decode a `CborValue` that is required to hold a signed integer (`UInt`, `NInt`,
/// `BignumPos`, or `BignumNeg`) into a [`BigInt`].
pub fn to_bigint(v: &CborValue, path: &CborPath) -> Result<BigInt, DecodeError> {
    match v {
        CborValue::UInt(n) => Ok(BigInt::from(*n)),
        CborValue::NInt(n) => Ok(-BigInt::from(1u8) - BigInt::from(*n)),
        CborValue::BignumPos(bytes) => Ok(BigInt::from(BigUint::from_bytes_be(bytes))),
        CborValue::BignumNeg(bytes) => {
            Ok(-BigInt::from(1u8) - BigInt::from(BigUint::from_bytes_be(bytes)))
        }
        other => Err(DecodeError::type_mismatch("integer", other, path)),
    }
}

/// Decode a `CborValue` integer that is expected to fit a `u64`, for slots (like a
/// record field count sentinel or a date/time component) that never legitimately grow
/// past machine width. Non-minimal (bignum-encoded but small) forms are still accepted.
pub fn to_u64(v: &CborValue, path: &CborPath) -> Result<u64, DecodeError> {
    match v {
        CborValue::UInt(n) => Ok(*n),
        CborValue::BignumPos(bytes) => BigUint::from_bytes_be(bytes)
            .to_u64()
            .ok_or_else(|| DecodeError::type_mismatch("u64-sized integer", v, path)),
        other => Err(DecodeError::type_mismatch("non-negative integer", other, path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CborPath;

    #[test]
    fn biguint_roundtrip() {
        let p = CborPath::root();
        assert_eq!(to_biguint(&CborValue::UInt(5), &p).unwrap(), BigUint::from(5u8));
        let big = BigUint::from(2u8).pow(64);
        assert_eq!(
            to_biguint(&CborValue::from_biguint(&big), &p).unwrap(),
            big
        );
    }

    #[test]
    fn bigint_roundtrip() {
        let p = CborPath::root();
        assert_eq!(to_bigint(&CborValue::UInt(5), &p).unwrap(), BigInt::from(5));
        assert_eq!(to_bigint(&CborValue::NInt(0), &p).unwrap(), BigInt::from(-1));
        assert_eq!(to_bigint(&CborValue::NInt(41), &p).unwrap(), BigInt::from(-42));

        let big = BigInt::from(2).pow(64);
        assert_eq!(to_bigint(&CborValue::from_bigint(&big), &p).unwrap(), big);
        let neg_big = -BigInt::from(2).pow(64) - BigInt::from(1);
        assert_eq!(
            to_bigint(&CborValue::from_bigint(&neg_big), &p).unwrap(),
            neg_big
        );
    }
}
