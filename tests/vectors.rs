use dhall_cbor::ast::*;
use dhall_cbor::cbor::CborValue;
use dhall_cbor::{decode, encode};

fn natural(n: u64) -> Expr {
    Expr::natural(n)
}

#[test]
fn variable_underscore_encodes_as_naked_int() {
    let e = Expr::var("_", 2);
    assert_eq!(encode(&e), CborValue::UInt(2));
    assert_eq!(decode(&CborValue::UInt(2)).unwrap(), e);
}

#[test]
fn variable_named_encodes_as_pair() {
    let e = Expr::var("x", 0);
    let expected = CborValue::array([CborValue::text("x"), CborValue::UInt(0)]);
    assert_eq!(encode(&e), expected);
    assert_eq!(decode(&expected).unwrap(), e);
}

#[test]
fn builtin_encodes_as_naked_text() {
    let e = Expr::Builtin(dhall_cbor::builtins::Builtin::NaturalFold);
    assert_eq!(encode(&e), CborValue::text("Natural/fold"));
}

#[test]
fn lambda_with_underscore_name_drops_the_name() {
    let e = Expr::Lambda {
        name: "_".into(),
        domain: Box::new(Expr::Builtin(dhall_cbor::builtins::Builtin::Natural)),
        body: Box::new(Expr::var("_", 0)),
    };
    let expected = CborValue::array([
        CborValue::UInt(1),
        CborValue::text("Natural"),
        CborValue::UInt(0),
    ]);
    assert_eq!(encode(&e), expected);
    assert_eq!(decode(&expected).unwrap(), e);
}

#[test]
fn application_flattens_all_arguments_into_one_array() {
    let e = Expr::Application {
        function: Box::new(Expr::var("f", 0)),
        arguments: vec![natural(1), natural(2)],
    };
    let expected = CborValue::array([
        CborValue::UInt(0),
        CborValue::array([CborValue::text("f"), CborValue::UInt(0)]),
        CborValue::array([CborValue::UInt(15), CborValue::UInt(1)]),
        CborValue::array([CborValue::UInt(15), CborValue::UInt(2)]),
    ]);
    assert_eq!(encode(&e), expected);
    assert_eq!(decode(&expected).unwrap(), e);
}

#[test]
fn record_literal_sorts_fields_by_codepoint() {
    let e = Expr::RecordLiteral {
        fields: vec![("b".into(), natural(1)), ("a".into(), natural(2))],
    };
    let expected = CborValue::array([
        CborValue::UInt(8),
        CborValue::Map(vec![
            (CborValue::text("a"), CborValue::array([CborValue::UInt(15), CborValue::UInt(2)])),
            (CborValue::text("b"), CborValue::array([CborValue::UInt(15), CborValue::UInt(1)])),
        ]),
    ]);
    assert_eq!(encode(&e), expected);
}

#[test]
fn natural_literal_past_u64_uses_a_positive_bignum() {
    let big: num_bigint::BigUint = num_bigint::BigUint::from(1u8) << 64;
    let e = Expr::NaturalLiteral(big.clone());
    match encode(&e) {
        CborValue::Array(items) => {
            assert_eq!(items[0], CborValue::UInt(15));
            assert!(matches!(&items[1], CborValue::BignumPos(_)));
        }
        other => panic!("expected array, got {:?}", other),
    }
    assert_eq!(decode(&encode(&e)).unwrap(), e);
}

#[test]
fn double_zero_and_negative_zero_encode_as_distinct_halves() {
    assert_eq!(encode(&Expr::DoubleLiteral(0.0)), CborValue::Half(0x0000));
    assert_eq!(encode(&Expr::DoubleLiteral(-0.0)), CborValue::Half(0x8000));
}

#[test]
fn text_literal_interleaves_chunks_and_suffix() {
    let e = Expr::TextLiteral {
        chunks: vec![("hi ".into(), Expr::var("x", 0))],
        suffix: " there".into(),
    };
    let expected = CborValue::array([
        CborValue::UInt(18),
        CborValue::text("hi "),
        CborValue::array([CborValue::text("x"), CborValue::UInt(0)]),
        CborValue::text(" there"),
    ]);
    assert_eq!(encode(&e), expected);
    assert_eq!(decode(&expected).unwrap(), e);
}

#[test]
fn remote_import_without_hash() {
    let e = Expr::Import(Import {
        import_type: ImportType::Remote(ImportUrl {
            scheme: Scheme::Https,
            authority: "example.com".into(),
            directory: vec!["a".into()],
            file: "b".into(),
            query: Some("q=1".into()),
            headers: None,
        }),
        mode: ImportMode::Code,
        hash: None,
    });
    let expected = CborValue::array([
        CborValue::UInt(24),
        CborValue::Null,
        CborValue::UInt(0),
        CborValue::UInt(1),
        CborValue::Null,
        CborValue::text("example.com"),
        CborValue::text("a"),
        CborValue::text("b"),
        CborValue::text("q=1"),
    ]);
    assert_eq!(encode(&e), expected);
    assert_eq!(decode(&expected).unwrap(), e);
}

#[test]
fn remote_import_with_empty_directory() {
    let e = Expr::Import(Import {
        import_type: ImportType::Remote(ImportUrl {
            scheme: Scheme::Https,
            authority: "example.com".into(),
            directory: vec![],
            file: "index.dhall".into(),
            query: None,
            headers: None,
        }),
        mode: ImportMode::Code,
        hash: None,
    });
    let expected = CborValue::array([
        CborValue::UInt(24),
        CborValue::Null,
        CborValue::UInt(0),
        CborValue::UInt(1),
        CborValue::Null,
        CborValue::text("example.com"),
        CborValue::text("index.dhall"),
        CborValue::Null,
    ]);
    assert_eq!(encode(&e), expected);
    assert_eq!(decode(&expected).unwrap(), e);
}

#[test]
fn let_chain_flattens_into_one_array() {
    let e = Expr::Let {
        bindings: vec![
            Binding {
                name: "x".into(),
                ty: Some(Expr::Builtin(dhall_cbor::builtins::Builtin::Natural)),
                value: natural(1),
            },
            Binding {
                name: "y".into(),
                ty: None,
                value: natural(2),
            },
        ],
        body: Box::new(Expr::var("x", 0)),
    };
    let expected = CborValue::array([
        CborValue::UInt(25),
        CborValue::text("x"),
        CborValue::text("Natural"),
        CborValue::array([CborValue::UInt(15), CborValue::UInt(1)]),
        CborValue::text("y"),
        CborValue::Null,
        CborValue::array([CborValue::UInt(15), CborValue::UInt(2)]),
        CborValue::array([CborValue::text("x"), CborValue::UInt(0)]),
    ]);
    assert_eq!(encode(&e), expected);
    assert_eq!(decode(&expected).unwrap(), e);
}

#[test]
fn with_expression_descend_optional_path() {
    let e = Expr::With {
        subject: Box::new(Expr::var("e", 0)),
        path: vec![PathKey::DescendOptional, PathKey::Label("foo".into())],
        value: Box::new(Expr::var("v", 0)),
    };
    let expected = CborValue::array([
        CborValue::UInt(29),
        CborValue::array([CborValue::text("e"), CborValue::UInt(0)]),
        CborValue::array([CborValue::UInt(0), CborValue::text("foo")]),
        CborValue::array([CborValue::text("v"), CborValue::UInt(0)]),
    ]);
    assert_eq!(encode(&e), expected);
    assert_eq!(decode(&expected).unwrap(), e);
}

#[test]
fn date_literal() {
    let e = Expr::DateLiteral { year: 2020, month: 1, day: 2 };
    let expected = CborValue::array([
        CborValue::UInt(30),
        CborValue::UInt(2020),
        CborValue::UInt(1),
        CborValue::UInt(2),
    ]);
    assert_eq!(encode(&e), expected);
    assert_eq!(decode(&expected).unwrap(), e);
}

#[test]
fn time_literal_preserves_seconds_precision() {
    let e = Expr::TimeLiteral {
        hour: 12,
        minute: 30,
        seconds: Seconds {
            precision: 2,
            mantissa: num_bigint::BigInt::from(1525),
        },
    };
    let expected = CborValue::array([
        CborValue::UInt(31),
        CborValue::UInt(12),
        CborValue::UInt(30),
        CborValue::Tag(
            4,
            Box::new(CborValue::array([CborValue::NInt(1), CborValue::UInt(1525)])),
        ),
    ]);
    assert_eq!(encode(&e), expected);
    assert_eq!(decode(&expected).unwrap(), e);
}

#[test]
fn timezone_literal_positive_offset() {
    let e = Expr::TimeZoneLiteral { offset_minutes: 5 * 60 + 30 };
    let expected = CborValue::array([
        CborValue::UInt(32),
        CborValue::Bool(true),
        CborValue::UInt(5),
        CborValue::UInt(30),
    ]);
    assert_eq!(encode(&e), expected);
    assert_eq!(decode(&expected).unwrap(), e);
}
