//! Partial decoder: the inverse of [`crate::encode::encode`]. Every failure carries the
//! [`CborPath`] at which it was discovered.

use num_traits::ToPrimitive;

use crate::ast::*;
use crate::builtins::{Builtin, Constant};
use crate::cbor::{number, CborValue};
use crate::error::{CborPath, DecodeError};

/// Decode a complete Dhall expression from its CBOR representation.
pub fn decode(v: &CborValue) -> Result<Expr, DecodeError> {
    decode_expr(v, &CborPath::root())
}

fn decode_expr(v: &CborValue, path: &CborPath) -> Result<Expr, DecodeError> {
    let v = v.strip_self_describe();
    match v {
        CborValue::UInt(_) | CborValue::BignumPos(_) => Ok(Expr::Variable {
            name: "_".to_owned(),
            index: number::to_biguint(v, path)?,
        }),
        CborValue::Text(s) => decode_identifier(s, path),
        CborValue::Bool(b) => Ok(Expr::BoolLiteral(*b)),
        CborValue::Half(_) | CborValue::Single(_) | CborValue::Double(_) => Ok(Expr::DoubleLiteral(
            crate::cbor::float::widen(v).expect("float variant always widens"),
        )),
        CborValue::Array(items) => decode_array(items, path),
        CborValue::Tag(tag, _) => Err(DecodeError::UnknownTag {
            tag: *tag,
            path: path.clone(),
        }),
        other => Err(DecodeError::type_mismatch(
            "variable, identifier, bool, or labeled array",
            other,
            path,
        )),
    }
}

fn decode_identifier(s: &str, path: &CborPath) -> Result<Expr, DecodeError> {
    if let Some(b) = Builtin::from_str(s) {
        return Ok(Expr::Builtin(b));
    }
    if let Some(c) = Constant::from_str(s) {
        return Ok(Expr::Constant(c));
    }
    Err(DecodeError::UnknownBuiltin {
        name: s.to_owned(),
        path: path.clone(),
    })
}

fn decode_array(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    let head = items
        .first()
        .ok_or_else(|| DecodeError::type_mismatch("non-empty array", &CborValue::Array(vec![]), path))?;

    match head {
        CborValue::Text(name) => decode_variable_long_form(items, name, path),
        CborValue::UInt(label) => decode_labeled(*label, items, path),
        other => Err(DecodeError::type_mismatch(
            "a label (uint) or variable name (text)",
            other,
            &path.index(0),
        )),
    }
}

fn decode_variable_long_form(
    items: &[CborValue],
    name: &str,
    path: &CborPath,
) -> Result<Expr, DecodeError> {
    if items.len() != 2 {
        return Err(DecodeError::wrong_arity("[name, index]", items.len(), path));
    }
    if name == "_" {
        return Err(DecodeError::ReservedName { path: path.clone() });
    }
    let index = number::to_biguint(&items[1], &path.index(1))?;
    Ok(Expr::Variable {
        name: name.to_owned(),
        index,
    })
}

fn decode_labeled(label: u64, items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    match label {
        0 => decode_application(items, path),
        1 => decode_binder(items, path).map(|(name, domain, body)| Expr::Lambda {
            name,
            domain: Box::new(domain),
            body: Box::new(body),
        }),
        2 => decode_binder(items, path).map(|(name, domain, codomain)| Expr::Forall {
            name,
            domain: Box::new(domain),
            codomain: Box::new(codomain),
        }),
        3 => decode_operator(items, path),
        4 => decode_list(items, path),
        5 => decode_some(items, path),
        6 => decode_merge(items, path),
        7 => decode_record_type(items, path),
        8 => decode_record_literal(items, path),
        9 => decode_field(items, path),
        10 => decode_project(items, path),
        11 => decode_union_type(items, path),
        12 | 13 => Err(DecodeError::MalformedUnionLegacy {
            label,
            path: path.clone(),
        }),
        14 => decode_if(items, path),
        15 => decode_natural(items, path),
        16 => decode_integer(items, path),
        18 => decode_text(items, path),
        19 => decode_one("assert", items, path).map(|ty| Expr::Assert { ty: Box::new(ty) }),
        24 => decode_import(items, path),
        25 => decode_let(items, path),
        26 => decode_annotation(items, path),
        27 => decode_to_map(items, path),
        28 => decode_one("empty list annotation", items, path)
            .map(|annotation| Expr::EmptyListOther {
                annotation: Box::new(annotation),
            }),
        29 => decode_with(items, path),
        30 => decode_date(items, path),
        31 => decode_time(items, path),
        32 => decode_timezone(items, path),
        33 => decode_bytes(items, path),
        34 => decode_one("show_constructor", items, path)
            .map(|argument| Expr::ShowConstructor { argument: Box::new(argument) }),
        other => Err(DecodeError::UnknownLabel {
            label: other,
            path: path.clone(),
        }),
    }
}

fn decode_one(shape: &'static str, items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() != 2 {
        return Err(DecodeError::wrong_arity(shape, items.len(), path));
    }
    decode_expr(&items[1], &path.index(1))
}

fn decode_application(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() < 3 {
        return Err(DecodeError::EmptyApplication { path: path.clone() });
    }
    let function = decode_expr(&items[1], &path.index(1))?;
    let arguments = items[2..]
        .iter()
        .enumerate()
        .map(|(i, e)| decode_expr(e, &path.index(i + 2)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Expr::Application {
        function: Box::new(function),
        arguments,
    })
}

fn decode_binder(items: &[CborValue], path: &CborPath) -> Result<(String, Expr, Expr), DecodeError> {
    match items.len() {
        3 => {
            let domain = decode_expr(&items[1], &path.index(1))?;
            let body = decode_expr(&items[2], &path.index(2))?;
            Ok(("_".to_owned(), domain, body))
        }
        4 => {
            let name = text_of(&items[1], &path.index(1))?;
            if name == "_" {
                return Err(DecodeError::ReservedName { path: path.clone() });
            }
            let domain = decode_expr(&items[2], &path.index(2))?;
            let body = decode_expr(&items[3], &path.index(3))?;
            Ok((name.to_owned(), domain, body))
        }
        n => Err(DecodeError::wrong_arity("[domain, body] or [name, domain, body]", n, path)),
    }
}

fn decode_operator(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() != 4 {
        return Err(DecodeError::wrong_arity("[op, left, right]", items.len(), path));
    }
    let code = number::to_u64(&items[1], &path.index(1))?;
    let left = decode_expr(&items[2], &path.index(2))?;
    let right = decode_expr(&items[3], &path.index(3))?;
    if code == COMPLETION_OP_CODE {
        return Ok(Expr::Completion {
            left: Box::new(left),
            right: Box::new(right),
        });
    }
    let op = Operator::from_code(code).ok_or_else(|| DecodeError::BadOperator {
        code,
        path: path.index(1),
    })?;
    Ok(Expr::Operator {
        left: Box::new(left),
        op,
        right: Box::new(right),
    })
}

fn decode_list(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() < 2 {
        return Err(DecodeError::wrong_arity("[type] or [null, elements...]", items.len(), path));
    }
    if items[1].is_null() {
        if items.len() < 3 {
            return Err(DecodeError::EmptyList { path: path.clone() });
        }
        let elements = items[2..]
            .iter()
            .enumerate()
            .map(|(i, e)| decode_expr(e, &path.index(i + 2)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Expr::NonEmptyList { elements })
    } else {
        if items.len() != 2 {
            return Err(DecodeError::type_mismatch("null marker for list elements", &items[1], &path.index(1)));
        }
        let element_type = decode_expr(&items[1], &path.index(1))?;
        Ok(Expr::EmptyList {
            element_type: Box::new(element_type),
        })
    }
}

fn decode_some(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() != 3 {
        return Err(DecodeError::wrong_arity("[null, value]", items.len(), path));
    }
    if !items[1].is_null() {
        return Err(DecodeError::type_mismatch("null", &items[1], &path.index(1)));
    }
    let value = decode_expr(&items[2], &path.index(2))?;
    Ok(Expr::Some { value: Box::new(value) })
}

fn decode_merge(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() != 3 && items.len() != 4 {
        return Err(DecodeError::wrong_arity("[handler, union] or [handler, union, type]", items.len(), path));
    }
    let handler = decode_expr(&items[1], &path.index(1))?;
    let union = decode_expr(&items[2], &path.index(2))?;
    let annotation = if items.len() == 4 {
        Some(Box::new(decode_expr(&items[3], &path.index(3))?))
    } else {
        None
    };
    Ok(Expr::Merge {
        handler: Box::new(handler),
        union: Box::new(union),
        annotation,
    })
}

fn decode_to_map(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() != 2 && items.len() != 3 {
        return Err(DecodeError::wrong_arity("[record] or [record, type]", items.len(), path));
    }
    let record = decode_expr(&items[1], &path.index(1))?;
    let annotation = if items.len() == 3 {
        Some(Box::new(decode_expr(&items[2], &path.index(2))?))
    } else {
        None
    };
    Ok(Expr::ToMap {
        record: Box::new(record),
        annotation,
    })
}

fn decode_record_type(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    decode_field_map(items, path).map(|fields| Expr::RecordType { fields })
}

fn decode_record_literal(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    decode_field_map(items, path).map(|fields| Expr::RecordLiteral { fields })
}

fn decode_field_map(items: &[CborValue], path: &CborPath) -> Result<Vec<(String, Expr)>, DecodeError> {
    if items.len() != 2 {
        return Err(DecodeError::wrong_arity("[fields]", items.len(), path));
    }
    let map_path = path.index(1);
    let entries = map_of(&items[1], &map_path)?;
    entries
        .iter()
        .map(|(k, v)| {
            let key = text_of(k, &map_path)?.to_owned();
            let field_path = map_path.key(key.clone());
            let value = decode_expr(v, &field_path)?;
            Ok((key, value))
        })
        .collect()
}

fn decode_field(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() != 3 {
        return Err(DecodeError::wrong_arity("[record, label]", items.len(), path));
    }
    let record = decode_expr(&items[1], &path.index(1))?;
    let label = text_of(&items[2], &path.index(2))?.to_owned();
    Ok(Expr::Field {
        record: Box::new(record),
        label,
    })
}

fn decode_project(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() < 2 {
        return Err(DecodeError::wrong_arity("[record, ...]", items.len(), path));
    }
    let record = decode_expr(&items[1], &path.index(1))?;
    if items.len() == 3 {
        if let CborValue::Array(wrapped) = &items[2] {
            if wrapped.len() == 1 {
                let ty = decode_expr(&wrapped[0], &path.index(2).index(0))?;
                return Ok(Expr::ProjectByType {
                    record: Box::new(record),
                    ty: Box::new(ty),
                });
            }
        }
    }
    let labels = items[2..]
        .iter()
        .enumerate()
        .map(|(i, l)| text_of(l, &path.index(i + 2)).map(str::to_owned))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Expr::ProjectByLabels {
        record: Box::new(record),
        labels,
    })
}

fn decode_union_type(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() != 2 {
        return Err(DecodeError::wrong_arity("[alternatives]", items.len(), path));
    }
    let map_path = path.index(1);
    let entries = map_of(&items[1], &map_path)?;
    let alternatives = entries
        .iter()
        .map(|(k, v)| {
            let key = text_of(k, &map_path)?.to_owned();
            if v.is_null() {
                Ok((key, None))
            } else {
                let field_path = map_path.key(key.clone());
                Ok((key, Some(decode_expr(v, &field_path)?)))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Expr::UnionType { alternatives })
}

fn decode_if(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() != 4 {
        return Err(DecodeError::wrong_arity("[condition, then, else]", items.len(), path));
    }
    let condition = decode_expr(&items[1], &path.index(1))?;
    let then = decode_expr(&items[2], &path.index(2))?;
    let else_ = decode_expr(&items[3], &path.index(3))?;
    Ok(Expr::If {
        condition: Box::new(condition),
        then: Box::new(then),
        else_: Box::new(else_),
    })
}

fn decode_natural(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() != 2 {
        return Err(DecodeError::wrong_arity("[value]", items.len(), path));
    }
    let n = number::to_biguint(&items[1], &path.index(1))?;
    Ok(Expr::NaturalLiteral(n))
}

fn decode_integer(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() != 2 {
        return Err(DecodeError::wrong_arity("[value]", items.len(), path));
    }
    let n = number::to_bigint(&items[1], &path.index(1))?;
    Ok(Expr::IntegerLiteral(n))
}

fn decode_text(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.is_empty() || items.len() % 2 != 0 {
        return Err(DecodeError::MalformedText { path: path.clone() });
    }
    let trailing = &items[1..];
    let pair_count = (trailing.len() - 1) / 2;
    let mut chunks = Vec::with_capacity(pair_count);
    for i in 0..pair_count {
        let text = text_of(&trailing[2 * i], &path.index(2 * i + 1))?.to_owned();
        let expr = decode_expr(&trailing[2 * i + 1], &path.index(2 * i + 2))?;
        chunks.push((text, expr));
    }
    let suffix = text_of(trailing.last().unwrap(), &path.index(items.len() - 1))?.to_owned();
    Ok(Expr::TextLiteral { chunks, suffix })
}

fn decode_bytes(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() != 2 {
        return Err(DecodeError::wrong_arity("[bytes]", items.len(), path));
    }
    match &items[1] {
        CborValue::Bytes(b) => Ok(Expr::BytesLiteral(b.clone())),
        other => Err(DecodeError::type_mismatch("byte string", other, &path.index(1))),
    }
}

fn decode_let(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.is_empty() {
        return Err(DecodeError::EmptyLet { path: path.clone() });
    }
    let trailing = &items[1..];
    if trailing.is_empty() || (trailing.len() - 1) % 3 != 0 {
        return Err(DecodeError::wrong_arity("3 items per binding plus a body", items.len(), path));
    }
    let binding_count = (trailing.len() - 1) / 3;
    if binding_count == 0 {
        return Err(DecodeError::EmptyLet { path: path.clone() });
    }
    let mut bindings = Vec::with_capacity(binding_count);
    for i in 0..binding_count {
        let base = 1 + 3 * i;
        let name = text_of(&items[base], &path.index(base))?.to_owned();
        let ty = if items[base + 1].is_null() {
            None
        } else {
            Some(decode_expr(&items[base + 1], &path.index(base + 1))?)
        };
        let value = decode_expr(&items[base + 2], &path.index(base + 2))?;
        bindings.push(Binding { name, ty, value });
    }
    let body_index = items.len() - 1;
    let body = decode_expr(&items[body_index], &path.index(body_index))?;
    Ok(Expr::Let {
        bindings,
        body: Box::new(body),
    })
}

fn decode_annotation(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() != 3 {
        return Err(DecodeError::wrong_arity("[value, type]", items.len(), path));
    }
    let value = decode_expr(&items[1], &path.index(1))?;
    let ty = decode_expr(&items[2], &path.index(2))?;
    Ok(Expr::Annotation {
        value: Box::new(value),
        ty: Box::new(ty),
    })
}

fn decode_with(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() != 4 {
        return Err(DecodeError::wrong_arity("[subject, path, value]", items.len(), path));
    }
    let subject = decode_expr(&items[1], &path.index(1))?;
    let path_path = path.index(2);
    let raw_path = match &items[2] {
        CborValue::Array(a) => a,
        other => return Err(DecodeError::type_mismatch("array", other, &path_path)),
    };
    if raw_path.is_empty() {
        return Err(DecodeError::wrong_arity("non-empty with-path", 0, &path_path));
    }
    let path_keys = raw_path
        .iter()
        .enumerate()
        .map(|(i, key)| match key {
            CborValue::UInt(0) => Ok(PathKey::DescendOptional),
            CborValue::Text(label) => Ok(PathKey::Label(label.clone())),
            other => Err(DecodeError::type_mismatch("0 or a label", other, &path_path.index(i))),
        })
        .collect::<Result<Vec<_>, _>>()?;
    let value = decode_expr(&items[3], &path.index(3))?;
    Ok(Expr::With {
        subject: Box::new(subject),
        path: path_keys,
        value: Box::new(value),
    })
}

fn decode_date(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() != 4 {
        return Err(DecodeError::MalformedDate { path: path.clone() });
    }
    let year = number::to_u64(&items[1], &path.index(1))? as i64;
    let month = number::to_u64(&items[2], &path.index(2))? as u8;
    let day = number::to_u64(&items[3], &path.index(3))? as u8;
    Ok(Expr::DateLiteral { year, month, day })
}

fn decode_time(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() != 4 {
        return Err(DecodeError::MalformedTime { path: path.clone() });
    }
    let hour = number::to_u64(&items[1], &path.index(1))? as u8;
    let minute = number::to_u64(&items[2], &path.index(2))? as u8;
    let seconds = decode_seconds(&items[3], &path.index(3))?;
    Ok(Expr::TimeLiteral { hour, minute, seconds })
}

fn decode_seconds(v: &CborValue, path: &CborPath) -> Result<Seconds, DecodeError> {
    let inner = match v {
        CborValue::Tag(4, inner) => inner.as_ref(),
        other => return Err(DecodeError::type_mismatch("tag 4 decimal fraction", other, path)),
    };
    let pair = match inner {
        CborValue::Array(a) if a.len() == 2 => a,
        other => return Err(DecodeError::type_mismatch("[exponent, mantissa]", other, path)),
    };
    let exponent = number::to_bigint(&pair[0], &path.index(0))?
        .to_i64()
        .ok_or_else(|| DecodeError::MalformedTime { path: path.clone() })?;
    if exponent > 0 {
        return Err(DecodeError::MalformedTime { path: path.clone() });
    }
    let precision = (-exponent) as u32;
    let mantissa = number::to_bigint(&pair[1], &path.index(1))?;
    Ok(Seconds { precision, mantissa })
}

fn decode_timezone(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() != 4 {
        return Err(DecodeError::wrong_arity("[sign, hours, minutes]", items.len(), path));
    }
    let sign = match &items[1] {
        CborValue::Bool(b) => *b,
        other => return Err(DecodeError::type_mismatch("bool", other, &path.index(1))),
    };
    let hours = number::to_u64(&items[2], &path.index(2))?;
    let minutes = number::to_u64(&items[3], &path.index(3))?;
    let magnitude = (hours * 60 + minutes) as i32;
    Ok(Expr::TimeZoneLiteral {
        offset_minutes: if sign { magnitude } else { -magnitude },
    })
}

fn decode_import(items: &[CborValue], path: &CborPath) -> Result<Expr, DecodeError> {
    if items.len() < 4 {
        return Err(DecodeError::wrong_arity("[hash, mode, scheme, ...]", items.len(), path));
    }
    let hash = decode_hash(&items[1], &path.index(1))?;
    let mode_code = number::to_u64(&items[2], &path.index(2))?;
    let mode = ImportMode::from_code(mode_code).ok_or_else(|| DecodeError::BadMode {
        mode: mode_code,
        path: path.index(2),
    })?;
    let discriminator = number::to_u64(&items[3], &path.index(3))?;
    let scheme_path = path.index(3);

    let import_type = match discriminator {
        0 | 1 => {
            if items.len() < 8 {
                return Err(DecodeError::wrong_arity(
                    "[scheme, headers, authority, path..., file, query]",
                    items.len(),
                    path,
                ));
            }
            let scheme = if discriminator == 0 { Scheme::Http } else { Scheme::Https };
            let headers = if items[4].is_null() {
                None
            } else {
                Some(Box::new(decode_expr(&items[4], &path.index(4))?))
            };
            let authority = text_of(&items[5], &path.index(5))?.to_owned();
            let directory = items[6..items.len() - 2]
                .iter()
                .enumerate()
                .map(|(i, c)| text_of(c, &path.index(i + 6)).map(str::to_owned))
                .collect::<Result<Vec<_>, _>>()?;
            let file = text_of(&items[items.len() - 2], &path.index(items.len() - 2))?.to_owned();
            let query = if items[items.len() - 1].is_null() {
                None
            } else {
                Some(text_of(&items[items.len() - 1], &path.index(items.len() - 1))?.to_owned())
            };
            ImportType::Remote(ImportUrl {
                scheme,
                authority,
                directory,
                file,
                query,
                headers,
            })
        }
        2..=5 => {
            if items.len() < 5 {
                return Err(DecodeError::wrong_arity("[prefix, path..., file]", items.len(), path));
            }
            let prefix = PathPrefix::from_discriminator(discriminator)
                .ok_or_else(|| DecodeError::BadImportScheme { discriminator, path: scheme_path.clone() })?;
            let directory = items[4..items.len() - 1]
                .iter()
                .enumerate()
                .map(|(i, c)| text_of(c, &path.index(i + 4)).map(str::to_owned))
                .collect::<Result<Vec<_>, _>>()?;
            let file = text_of(&items[items.len() - 1], &path.index(items.len() - 1))?.to_owned();
            ImportType::Path { prefix, directory, file }
        }
        6 => {
            if items.len() != 5 {
                return Err(DecodeError::wrong_arity("[6, name]", items.len(), path));
            }
            ImportType::Env(text_of(&items[4], &path.index(4))?.to_owned())
        }
        7 => {
            if items.len() != 4 {
                return Err(DecodeError::wrong_arity("[7]", items.len(), path));
            }
            ImportType::Missing
        }
        other => {
            return Err(DecodeError::BadImportScheme {
                discriminator: other,
                path: scheme_path,
            })
        }
    };

    Ok(Expr::Import(Import { import_type, mode, hash }))
}

fn decode_hash(v: &CborValue, path: &CborPath) -> Result<Option<[u8; 32]>, DecodeError> {
    match v {
        CborValue::Null => Ok(None),
        CborValue::Bytes(b) if b.len() == 34 && b[0] == 0x12 && b[1] == 0x20 => {
            let mut digest = [0u8; 32];
            digest.copy_from_slice(&b[2..]);
            Ok(Some(digest))
        }
        CborValue::Bytes(_) => Err(DecodeError::BadMultihash { path: path.clone() }),
        other => Err(DecodeError::type_mismatch("null or multihash byte string", other, path)),
    }
}

fn text_of<'a>(v: &'a CborValue, path: &CborPath) -> Result<&'a str, DecodeError> {
    v.as_text()
        .ok_or_else(|| DecodeError::type_mismatch("text string", v, path))
}

fn map_of<'a>(v: &'a CborValue, path: &CborPath) -> Result<&'a [(CborValue, CborValue)], DecodeError> {
    match v {
        CborValue::Map(entries) => Ok(entries),
        other => Err(DecodeError::type_mismatch("map", other, path)),
    }
}
