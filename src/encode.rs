//! Total encoder: turns an [`Expr`] into the [`CborValue`] tree that is its canonical
//! binary representation. Encoding never fails.

use crate::ast::*;
use crate::cbor::CborValue;

/// Encode a single Dhall expression. Total — every `Expr` has exactly one encoding.
pub fn encode(expr: &Expr) -> CborValue {
    match expr {
        Expr::Variable { name, index } => {
            if name == "_" {
                CborValue::from_biguint(index)
            } else {
                CborValue::array([CborValue::text(name.clone()), CborValue::from_biguint(index)])
            }
        }
        Expr::Builtin(b) => CborValue::text(b.as_str()),
        Expr::Constant(c) => CborValue::text(c.as_str()),
        Expr::Lambda { name, domain, body } => {
            labeled_binder(1, name, domain, body)
        }
        Expr::Forall { name, domain, codomain } => {
            labeled_binder(2, name, domain, codomain)
        }
        Expr::Application { function, arguments } => {
            let mut items = vec![CborValue::UInt(0), encode(function)];
            items.extend(arguments.iter().map(encode));
            CborValue::Array(items)
        }
        Expr::Operator { left, op, right } => CborValue::array([
            CborValue::UInt(3),
            CborValue::UInt(op.code()),
            encode(left),
            encode(right),
        ]),
        Expr::Completion { left, right } => CborValue::array([
            CborValue::UInt(3),
            CborValue::UInt(COMPLETION_OP_CODE),
            encode(left),
            encode(right),
        ]),
        Expr::EmptyList { element_type } => {
            CborValue::array([CborValue::UInt(4), encode(element_type)])
        }
        Expr::EmptyListOther { annotation } => {
            CborValue::array([CborValue::UInt(28), encode(annotation)])
        }
        Expr::NonEmptyList { elements } => {
            let mut items = vec![CborValue::UInt(4), CborValue::Null];
            items.extend(elements.iter().map(encode));
            CborValue::Array(items)
        }
        Expr::Some { value } => CborValue::array([CborValue::UInt(5), CborValue::Null, encode(value)]),
        Expr::Merge { handler, union, annotation } => {
            let mut items = vec![CborValue::UInt(6), encode(handler), encode(union)];
            if let Some(t) = annotation {
                items.push(encode(t));
            }
            CborValue::Array(items)
        }
        Expr::ToMap { record, annotation } => {
            let mut items = vec![CborValue::UInt(27), encode(record)];
            if let Some(t) = annotation {
                items.push(encode(t));
            }
            CborValue::Array(items)
        }
        Expr::ShowConstructor { argument } => {
            CborValue::array([CborValue::UInt(34), encode(argument)])
        }
        Expr::RecordType { fields } => {
            CborValue::array([CborValue::UInt(7), sorted_map(fields, encode)])
        }
        Expr::RecordLiteral { fields } => {
            CborValue::array([CborValue::UInt(8), sorted_map(fields, encode)])
        }
        Expr::Field { record, label } => CborValue::array([
            CborValue::UInt(9),
            encode(record),
            CborValue::text(label.clone()),
        ]),
        Expr::ProjectByLabels { record, labels } => {
            let mut items = vec![CborValue::UInt(10), encode(record)];
            items.extend(labels.iter().map(|l| CborValue::text(l.clone())));
            CborValue::Array(items)
        }
        Expr::ProjectByType { record, ty } => CborValue::array([
            CborValue::UInt(10),
            encode(record),
            CborValue::array([encode(ty)]),
        ]),
        Expr::UnionType { alternatives } => {
            let mut sorted: Vec<&(String, Option<Expr>)> = alternatives.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(&b.0));
            let map = sorted
                .into_iter()
                .map(|(name, ty)| {
                    let value = match ty {
                        Some(t) => encode(t),
                        None => CborValue::Null,
                    };
                    (CborValue::text(name.clone()), value)
                })
                .collect();
            CborValue::array([CborValue::UInt(11), CborValue::Map(map)])
        }
        Expr::If { condition, then, else_ } => CborValue::array([
            CborValue::UInt(14),
            encode(condition),
            encode(then),
            encode(else_),
        ]),
        Expr::BoolLiteral(b) => CborValue::Bool(*b),
        Expr::NaturalLiteral(n) => {
            CborValue::array([CborValue::UInt(15), CborValue::from_biguint(n)])
        }
        Expr::IntegerLiteral(n) => {
            CborValue::array([CborValue::UInt(16), CborValue::from_bigint(n)])
        }
        Expr::DoubleLiteral(d) => crate::cbor::float::encode_double(*d),
        Expr::TextLiteral { chunks, suffix } => {
            let mut items = vec![CborValue::UInt(18)];
            for (text, e) in chunks {
                items.push(CborValue::text(text.clone()));
                items.push(encode(e));
            }
            items.push(CborValue::text(suffix.clone()));
            CborValue::Array(items)
        }
        Expr::BytesLiteral(bytes) => {
            CborValue::array([CborValue::UInt(33), CborValue::Bytes(bytes.clone())])
        }
        Expr::Assert { ty } => CborValue::array([CborValue::UInt(19), encode(ty)]),
        Expr::Import(import) => encode_import(import),
        Expr::Let { bindings, body } => {
            let mut items = vec![CborValue::UInt(25)];
            for binding in bindings {
                items.push(CborValue::text(binding.name.clone()));
                items.push(match &binding.ty {
                    Some(t) => encode(t),
                    None => CborValue::Null,
                });
                items.push(encode(&binding.value));
            }
            items.push(encode(body));
            CborValue::Array(items)
        }
        Expr::Annotation { value, ty } => {
            CborValue::array([CborValue::UInt(26), encode(value), encode(ty)])
        }
        Expr::With { subject, path, value } => {
            let path_items = path
                .iter()
                .map(|key| match key {
                    PathKey::DescendOptional => CborValue::UInt(0),
                    PathKey::Label(l) => CborValue::text(l.clone()),
                })
                .collect();
            CborValue::array([
                CborValue::UInt(29),
                encode(subject),
                CborValue::Array(path_items),
                encode(value),
            ])
        }
        Expr::DateLiteral { year, month, day } => CborValue::array([
            CborValue::UInt(30),
            encode_i64(*year),
            CborValue::UInt(u64::from(*month)),
            CborValue::UInt(u64::from(*day)),
        ]),
        Expr::TimeLiteral { hour, minute, seconds } => CborValue::array([
            CborValue::UInt(31),
            CborValue::UInt(u64::from(*hour)),
            CborValue::UInt(u64::from(*minute)),
            encode_seconds(seconds),
        ]),
        Expr::TimeZoneLiteral { offset_minutes } => {
            let sign = *offset_minutes >= 0;
            let magnitude = offset_minutes.unsigned_abs();
            CborValue::array([
                CborValue::UInt(32),
                CborValue::Bool(sign),
                CborValue::UInt(u64::from(magnitude / 60)),
                CborValue::UInt(u64::from(magnitude % 60)),
            ])
        }
    }
}

fn labeled_binder(label: u64, name: &str, domain: &Expr, body: &Expr) -> CborValue {
    if name == "_" {
        CborValue::array([CborValue::UInt(label), encode(domain), encode(body)])
    } else {
        CborValue::array([
            CborValue::UInt(label),
            CborValue::text(name.to_owned()),
            encode(domain),
            encode(body),
        ])
    }
}

fn sorted_map(
    fields: &[(String, Expr)],
    mut encode_value: impl FnMut(&Expr) -> CborValue,
) -> CborValue {
    let mut sorted: Vec<&(String, Expr)> = fields.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    CborValue::Map(
        sorted
            .into_iter()
            .map(|(name, ty)| (CborValue::text(name.clone()), encode_value(ty)))
            .collect(),
    )
}

fn encode_i64(n: i64) -> CborValue {
    if n >= 0 {
        CborValue::UInt(n as u64)
    } else {
        CborValue::NInt((-1 - n) as u64)
    }
}

fn encode_seconds(seconds: &Seconds) -> CborValue {
    let exponent = encode_i64(-i64::from(seconds.precision));
    let mantissa = CborValue::from_bigint(&seconds.mantissa);
    CborValue::Tag(4, Box::new(CborValue::array([exponent, mantissa])))
}

fn encode_import(import: &Import) -> CborValue {
    let hash = match &import.hash {
        Some(digest) => {
            let mut bytes = Vec::with_capacity(34);
            bytes.push(0x12);
            bytes.push(0x20);
            bytes.extend_from_slice(digest);
            CborValue::Bytes(bytes)
        }
        None => CborValue::Null,
    };
    let mode = CborValue::UInt(import.mode.code());

    let mut items = vec![CborValue::UInt(24), hash, mode];
    match &import.import_type {
        ImportType::Remote(url) => {
            let scheme = match url.scheme {
                Scheme::Http => 0,
                Scheme::Https => 1,
            };
            items.push(CborValue::UInt(scheme));
            items.push(match &url.headers {
                Some(h) => encode(h),
                None => CborValue::Null,
            });
            items.push(CborValue::text(url.authority.clone()));
            for component in &url.directory {
                items.push(CborValue::text(component.clone()));
            }
            items.push(CborValue::text(url.file.clone()));
            items.push(match &url.query {
                Some(q) => CborValue::text(q.clone()),
                None => CborValue::Null,
            });
        }
        ImportType::Path { prefix, directory, file } => {
            items.push(CborValue::UInt(prefix.discriminator()));
            for component in directory {
                items.push(CborValue::text(component.clone()));
            }
            items.push(CborValue::text(file.clone()));
        }
        ImportType::Env(name) => {
            items.push(CborValue::UInt(6));
            items.push(CborValue::text(name.clone()));
        }
        ImportType::Missing => {
            items.push(CborValue::UInt(7));
        }
    }
    CborValue::Array(items)
}
