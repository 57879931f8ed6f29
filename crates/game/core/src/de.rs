//! Case-insensitive deserialization for name-tagged enums.

use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;

use serde::de::{self, Deserializer, EnumAccess, VariantAccess, Visitor};

/// Deserializes a unit-only enum through its `FromStr` impl.
///
/// Accepts a string (`"Water"` in TOML or JSON) as well as a bare variant
/// identifier (`Water` in RON), in any letter case.
pub(crate) fn from_name<'de, D, T>(
    deserializer: D,
    name: &'static str,
    variants: &'static [&'static str],
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    deserializer.deserialize_enum(
        name,
        variants,
        NameVisitor {
            variants,
            marker: PhantomData,
        },
    )
}

struct NameVisitor<T> {
    variants: &'static [&'static str],
    marker: PhantomData<T>,
}

impl<T: FromStr> NameVisitor<T> {
    fn parse<E: de::Error>(&self, value: &str) -> Result<T, E> {
        value
            .parse()
            .map_err(|_| E::unknown_variant(value, self.variants))
    }
}

impl<'de, T: FromStr> Visitor<'de> for NameVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "one of {:?} in any case", self.variants)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        self.parse(value)
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<T, A::Error> {
        let (variant, access): (String, _) = data.variant()?;
        access.unit_variant()?;
        self.parse(&variant)
    }
}
