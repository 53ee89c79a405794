//! Shortest-form IEEE-754 float encoding.
//!
//! A double `d` encodes to half iff `f64(f16(d)) == d`; else to single iff
//! `f64(f32(d)) == d`; else to double. NaN always encodes as the canonical half
//! `0x7e00`, regardless of its bit pattern on input, since NaN != NaN makes the
//! round-trip comparison above useless for that case.

use half::f16;

use super::value::CborValue;

const CANONICAL_NAN_HALF: u16 = 0x7e00;

/// Encode a double-precision float into the shortest CBOR float width that preserves
/// its value exactly.
pub fn encode_double(d: f64) -> CborValue {
    if d.is_nan() {
        return CborValue::Half(CANONICAL_NAN_HALF);
    }
    let half = f16::from_f64(d);
    if half.to_f64() == d {
        return CborValue::Half(half.to_bits());
    }
    let single = d as f32;
    if f64::from(single) == d {
        return CborValue::Single(single);
    }
    CborValue::Double(d)
}

/// Widen any of the three float representations back to `f64`.
pub fn widen(v: &CborValue) -> Option<f64> {
    match v {
        CborValue::Half(bits) => Some(f16::from_bits(*bits).to_f64()),
        CborValue::Single(f) => Some(f64::from(*f)),
        CborValue::Double(d) => Some(*d),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_signed_zero() {
        assert!(matches!(encode_double(0.0), CborValue::Half(0x0000)));
        assert!(matches!(encode_double(-0.0), CborValue::Half(0x8000)));
    }

    #[test]
    fn nan_is_canonical() {
        let weird_nan = f64::from_bits(0x7ff8_0000_0000_0001);
        assert!(weird_nan.is_nan());
        assert!(matches!(
            encode_double(weird_nan),
            CborValue::Half(CANONICAL_NAN_HALF)
        ));
    }

    #[test]
    fn infinities() {
        assert!(matches!(encode_double(f64::INFINITY), CborValue::Half(0x7c00)));
        assert!(matches!(
            encode_double(f64::NEG_INFINITY),
            CborValue::Half(0xfc00)
        ));
    }

    #[test]
    fn widens_to_single_when_half_loses_precision() {
        // smallest representable step above 1.0 in single precision: exact in f32, but
        // half precision only has 10 mantissa bits so it cannot tell this apart from 1.0.
        let v = 1.0 + 2f64.powi(-23);
        match encode_double(v) {
            CborValue::Single(s) => assert_eq!(f64::from(s), v),
            other => panic!("expected Single, got {:?}", other),
        }
    }

    #[test]
    fn widens_to_double_when_single_loses_precision() {
        let v = 1.3e34_f64;
        match encode_double(v) {
            CborValue::Double(d) => assert_eq!(d, v),
            other => panic!("expected Double, got {:?}", other),
        }
    }

    #[test]
    fn round_trip_widen() {
        for d in [0.0, -0.0, 1.0, -1.1, 1.3e34, f64::INFINITY, f64::NEG_INFINITY] {
            let encoded = encode_double(d);
            let widened = widen(&encoded).unwrap();
            if d == 0.0 {
                assert_eq!(widened.to_bits(), d.to_bits());
            } else {
                assert_eq!(widened, d);
            }
        }
    }
}
