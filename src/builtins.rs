//! The closed identifier vocabulary: builtins and constants, each of which
//! encodes/decodes as a naked CBOR text string equal to its Dhall identifier.

use std::fmt::{Display, Formatter};

macro_rules! closed_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            pub fn from_str(s: &str) -> Option<Self> {
                match s {
                    $($text => Some(Self::$variant)),+,
                    _ => None,
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_enum!(Builtin {
    NaturalBuild => "Natural/build",
    NaturalFold => "Natural/fold",
    NaturalIsZero => "Natural/isZero",
    NaturalEven => "Natural/even",
    NaturalOdd => "Natural/odd",
    NaturalToInteger => "Natural/toInteger",
    NaturalShow => "Natural/show",
    NaturalSubtract => "Natural/subtract",
    IntegerToDouble => "Integer/toDouble",
    IntegerShow => "Integer/show",
    IntegerNegate => "Integer/negate",
    IntegerClamp => "Integer/clamp",
    DoubleShow => "Double/show",
    ListBuild => "List/build",
    ListFold => "List/fold",
    ListLength => "List/length",
    ListHead => "List/head",
    ListLast => "List/last",
    ListIndexed => "List/indexed",
    ListReverse => "List/reverse",
    TextShow => "Text/show",
    TextReplace => "Text/replace",
    DateShow => "Date/show",
    TimeShow => "Time/show",
    TimeZoneShow => "TimeZone/show",
    Bool => "Bool",
    Optional => "Optional",
    None => "None",
    Natural => "Natural",
    Integer => "Integer",
    Double => "Double",
    Text => "Text",
    Bytes => "Bytes",
    List => "List",
    Date => "Date",
    Time => "Time",
    TimeZone => "TimeZone",
});

closed_enum!(Constant {
    Type => "Type",
    Kind => "Kind",
    Sort => "Sort",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_builtin() {
        for b in [
            Builtin::NaturalBuild,
            Builtin::NaturalFold,
            Builtin::NaturalIsZero,
            Builtin::NaturalEven,
            Builtin::NaturalOdd,
            Builtin::NaturalToInteger,
            Builtin::NaturalShow,
            Builtin::NaturalSubtract,
            Builtin::IntegerToDouble,
            Builtin::IntegerShow,
            Builtin::IntegerNegate,
            Builtin::IntegerClamp,
            Builtin::DoubleShow,
            Builtin::ListBuild,
            Builtin::ListFold,
            Builtin::ListLength,
            Builtin::ListHead,
            Builtin::ListLast,
            Builtin::ListIndexed,
            Builtin::ListReverse,
            Builtin::TextShow,
            Builtin::TextReplace,
            Builtin::DateShow,
            Builtin::TimeShow,
            Builtin::TimeZoneShow,
            Builtin::Bool,
            Builtin::Optional,
            Builtin::None,
            Builtin::Natural,
            Builtin::Integer,
            Builtin::Double,
            Builtin::Text,
            Builtin::Bytes,
            Builtin::List,
            Builtin::Date,
            Builtin::Time,
            Builtin::TimeZone,
        ] {
            assert_eq!(Builtin::from_str(b.as_str()), Some(b));
        }
    }

    #[test]
    fn rejects_unknown_identifier() {
        assert_eq!(Builtin::from_str("Natural/frobnicate"), None);
        assert_eq!(Constant::from_str("Sorted"), None);
    }

    #[test]
    fn constants_round_trip() {
        for c in [Constant::Type, Constant::Kind, Constant::Sort] {
            assert_eq!(Constant::from_str(c.as_str()), Some(c));
        }
    }
}
