use dhall_cbor::ast::*;
use dhall_cbor::cbor::CborValue;
use dhall_cbor::error::DecodeError;
use dhall_cbor::{decode, encode};
use rand::Rng;

#[test]
fn reserved_label_twelve_and_thirteen_are_rejected() {
    let twelve = CborValue::array([CborValue::UInt(12)]);
    let thirteen = CborValue::array([CborValue::UInt(13)]);
    assert!(matches!(
        decode(&twelve),
        Err(DecodeError::MalformedUnionLegacy { label: 12, .. })
    ));
    assert!(matches!(
        decode(&thirteen),
        Err(DecodeError::MalformedUnionLegacy { label: 13, .. })
    ));
}

#[test]
fn single_argument_application_is_rejected() {
    let item = CborValue::array([
        CborValue::UInt(0),
        CborValue::array([CborValue::text("f"), CborValue::UInt(0)]),
    ]);
    assert!(matches!(decode(&item), Err(DecodeError::EmptyApplication { .. })));
}

#[test]
fn lambda_spelling_out_underscore_is_rejected() {
    let item = CborValue::array([
        CborValue::UInt(1),
        CborValue::text("_"),
        CborValue::text("Natural"),
        CborValue::UInt(0),
    ]);
    assert!(matches!(decode(&item), Err(DecodeError::ReservedName { .. })));
}

#[test]
fn variable_spelling_out_underscore_long_form_is_rejected() {
    let item = CborValue::array([CborValue::text("_"), CborValue::UInt(3)]);
    assert!(matches!(decode(&item), Err(DecodeError::ReservedName { .. })));
}

#[test]
fn unrecognized_tag_is_rejected() {
    let item = CborValue::Tag(21, Box::new(CborValue::UInt(0)));
    assert!(matches!(decode(&item), Err(DecodeError::UnknownTag { tag: 21, .. })));
}

#[test]
fn self_describe_tag_wraps_transparently_any_number_of_times() {
    let once = CborValue::Tag(55799, Box::new(CborValue::UInt(7)));
    let twice = CborValue::Tag(55799, Box::new(once.clone()));
    assert_eq!(decode(&once).unwrap(), Expr::var("_", 7));
    assert_eq!(decode(&twice).unwrap(), Expr::var("_", 7));
}

#[test]
fn record_map_is_emitted_in_ascending_codepoint_order() {
    let e = Expr::RecordType {
        fields: vec![
            ("z".into(), Expr::Builtin(dhall_cbor::builtins::Builtin::Natural)),
            ("a".into(), Expr::Builtin(dhall_cbor::builtins::Builtin::Bool)),
            ("m".into(), Expr::Builtin(dhall_cbor::builtins::Builtin::Text)),
        ],
    };
    let item = encode(&e);
    let map = match &item {
        CborValue::Array(items) => match &items[1] {
            CborValue::Map(m) => m,
            other => panic!("expected map, got {:?}", other),
        },
        other => panic!("expected array, got {:?}", other),
    };
    let keys: Vec<&str> = map.iter().map(|(k, _)| k.as_text().unwrap()).collect();
    assert_eq!(keys, vec!["a", "m", "z"]);
}

#[test]
fn deterministic_encoding_is_stable_across_calls() {
    let e = sample_expr();
    assert_eq!(encode(&e), encode(&e));
}

fn sample_expr() -> Expr {
    Expr::Let {
        bindings: vec![Binding {
            name: "x".into(),
            ty: Some(Expr::Builtin(dhall_cbor::builtins::Builtin::Natural)),
            value: Expr::natural(1),
        }],
        body: Box::new(Expr::RecordLiteral {
            fields: vec![
                ("b".into(), Expr::var("x", 0)),
                ("a".into(), Expr::BoolLiteral(true)),
            ],
        }),
    }
}

/// Generates small, well-formed expressions so round-trip identity can be checked
/// against more than a handful of hand-written cases.
struct Gen<'a> {
    rng: &'a mut rand::rngs::ThreadRng,
    depth_remaining: u32,
}

impl<'a> Gen<'a> {
    fn expr(&mut self) -> Expr {
        if self.depth_remaining == 0 {
            return self.leaf();
        }
        self.depth_remaining -= 1;
        let choice = self.rng.gen_range(0..6);
        let result = match choice {
            0 => self.leaf(),
            1 => Expr::Lambda {
                name: "x".into(),
                domain: Box::new(Expr::Builtin(dhall_cbor::builtins::Builtin::Natural)),
                body: Box::new(self.expr()),
            },
            2 => Expr::Application {
                function: Box::new(Expr::var("f", 0)),
                arguments: vec![self.expr()],
            },
            3 => Expr::RecordLiteral {
                fields: vec![("a".into(), self.expr()), ("b".into(), self.expr())],
            },
            4 => Expr::If {
                condition: Box::new(Expr::BoolLiteral(true)),
                then: Box::new(self.expr()),
                else_: Box::new(self.expr()),
            },
            _ => Expr::Some { value: Box::new(self.expr()) },
        };
        self.depth_remaining += 1;
        result
    }

    fn leaf(&mut self) -> Expr {
        match self.rng.gen_range(0..4) {
            0 => Expr::natural(self.rng.gen_range(0..1000)),
            1 => Expr::integer(self.rng.gen_range(-1000..1000)),
            2 => Expr::BoolLiteral(self.rng.gen_bool(0.5)),
            _ => Expr::Builtin(dhall_cbor::builtins::Builtin::Natural),
        }
    }
}

#[test]
fn nan_round_trips_to_the_canonical_bit_pattern() {
    let weird_nan = f64::from_bits(0x7ff8_0000_0000_0001);
    let e = Expr::DoubleLiteral(weird_nan);
    let item = encode(&e);
    assert_eq!(item, CborValue::Half(0x7e00));
    let canonical = dhall_cbor::cbor::float::widen(&CborValue::Half(0x7e00)).unwrap();
    match decode(&item).unwrap() {
        Expr::DoubleLiteral(d) => assert_eq!(d.to_bits(), canonical.to_bits()),
        other => panic!("expected DoubleLiteral, got {:?}", other),
    }
}

#[test]
fn fuzzed_small_expressions_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let mut gen = Gen { rng: &mut rng, depth_remaining: 4 };
        let e = gen.expr();
        let item = encode(&e);
        assert_eq!(decode(&item).unwrap(), e, "item was {:?}", item);
    }
}
