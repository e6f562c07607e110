//! Setting kinds and typed values
//!
//! [`SettingKind`] is the closed set of primitive types a setting can declare,
//! and [`SettingValue`] is the matching sum type a setting stores. Decoding an
//! environment string into a value is a plain match over the kind.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Setting Kinds
// =============================================================================

/// Declared type of a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Boolean,
    /// Platform-width signed integer (`isize`)
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    /// Platform-width unsigned integer (`usize`)
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    /// Raw environment text, never JSON-decoded
    String,
}

impl SettingKind {
    /// Every supported kind, in declaration order
    pub const ALL: [SettingKind; 14] = [
        SettingKind::Boolean,
        SettingKind::Int,
        SettingKind::Int8,
        SettingKind::Int16,
        SettingKind::Int32,
        SettingKind::Int64,
        SettingKind::Uint,
        SettingKind::Uint8,
        SettingKind::Uint16,
        SettingKind::Uint32,
        SettingKind::Uint64,
        SettingKind::Float32,
        SettingKind::Float64,
        SettingKind::String,
    ];

    /// Lowercase name of the kind (e.g. `"uint8"`)
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SettingKind::Boolean => "boolean",
            SettingKind::Int => "int",
            SettingKind::Int8 => "int8",
            SettingKind::Int16 => "int16",
            SettingKind::Int32 => "int32",
            SettingKind::Int64 => "int64",
            SettingKind::Uint => "uint",
            SettingKind::Uint8 => "uint8",
            SettingKind::Uint16 => "uint16",
            SettingKind::Uint32 => "uint32",
            SettingKind::Uint64 => "uint64",
            SettingKind::Float32 => "float32",
            SettingKind::Float64 => "float64",
            SettingKind::String => "string",
        }
    }

    /// Decode raw environment text into a value of this kind.
    ///
    /// Strings are taken verbatim. Every other kind must be a JSON literal of
    /// the exact shape: `true`/`false`, a bare integer that fits the width, or
    /// a number for floats.
    pub fn decode(self, raw: &str) -> Result<SettingValue, serde_json::Error> {
        match self {
            SettingKind::String => Ok(SettingValue::String(raw.to_owned())),
            SettingKind::Boolean => decode_json::<bool>(raw),
            SettingKind::Int => decode_json::<isize>(raw),
            SettingKind::Int8 => decode_json::<i8>(raw),
            SettingKind::Int16 => decode_json::<i16>(raw),
            SettingKind::Int32 => decode_json::<i32>(raw),
            SettingKind::Int64 => decode_json::<i64>(raw),
            SettingKind::Uint => decode_json::<usize>(raw),
            SettingKind::Uint8 => decode_json::<u8>(raw),
            SettingKind::Uint16 => decode_json::<u16>(raw),
            SettingKind::Uint32 => decode_json::<u32>(raw),
            SettingKind::Uint64 => decode_json::<u64>(raw),
            SettingKind::Float32 => decode_float32(raw),
            SettingKind::Float64 => decode_json::<f64>(raw),
        }
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn decode_json<T>(raw: &str) -> Result<SettingValue, serde_json::Error>
where
    T: SettingPrimitive + DeserializeOwned,
{
    serde_json::from_str::<T>(raw).map(SettingPrimitive::into_value)
}

/// Narrowing a finite `f64` that overflows `f32` is an error, not infinity
fn decode_float32(raw: &str) -> Result<SettingValue, serde_json::Error> {
    let wide: f64 = serde_json::from_str(raw)?;
    let narrow = wide as f32;
    if wide.is_finite() && narrow.is_infinite() {
        return Err(serde_json::Error::custom(format!(
            "number {wide} out of range for float32"
        )));
    }
    Ok(SettingValue::Float32(narrow))
}

// =============================================================================
// Setting Values
// =============================================================================

/// A typed setting value
///
/// Serializes as the bare JSON scalar (`true`, `42`, `"text"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Boolean(bool),
    Int(isize),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint(usize),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    String(String),
}

impl SettingValue {
    /// Runtime kind of this value
    #[must_use]
    pub fn kind(&self) -> SettingKind {
        match self {
            SettingValue::Boolean(_) => SettingKind::Boolean,
            SettingValue::Int(_) => SettingKind::Int,
            SettingValue::Int8(_) => SettingKind::Int8,
            SettingValue::Int16(_) => SettingKind::Int16,
            SettingValue::Int32(_) => SettingKind::Int32,
            SettingValue::Int64(_) => SettingKind::Int64,
            SettingValue::Uint(_) => SettingKind::Uint,
            SettingValue::Uint8(_) => SettingKind::Uint8,
            SettingValue::Uint16(_) => SettingKind::Uint16,
            SettingValue::Uint32(_) => SettingKind::Uint32,
            SettingValue::Uint64(_) => SettingKind::Uint64,
            SettingValue::Float32(_) => SettingKind::Float32,
            SettingValue::Float64(_) => SettingKind::Float64,
            SettingValue::String(_) => SettingKind::String,
        }
    }

    /// Extract a primitive, returning `None` if the kind differs
    #[must_use]
    pub fn into_primitive<T: SettingPrimitive>(self) -> Option<T> {
        T::from_value(self)
    }

    /// JSON representation of the value
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            SettingValue::Boolean(v) => (*v).into(),
            SettingValue::Int(v) => (*v).into(),
            SettingValue::Int8(v) => (*v).into(),
            SettingValue::Int16(v) => (*v).into(),
            SettingValue::Int32(v) => (*v).into(),
            SettingValue::Int64(v) => (*v).into(),
            SettingValue::Uint(v) => (*v).into(),
            SettingValue::Uint8(v) => (*v).into(),
            SettingValue::Uint16(v) => (*v).into(),
            SettingValue::Uint32(v) => (*v).into(),
            SettingValue::Uint64(v) => (*v).into(),
            SettingValue::Float32(v) => (*v).into(),
            SettingValue::Float64(v) => (*v).into(),
            SettingValue::String(v) => v.as_str().into(),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Boolean(v) => write!(f, "{v}"),
            SettingValue::Int(v) => write!(f, "{v}"),
            SettingValue::Int8(v) => write!(f, "{v}"),
            SettingValue::Int16(v) => write!(f, "{v}"),
            SettingValue::Int32(v) => write!(f, "{v}"),
            SettingValue::Int64(v) => write!(f, "{v}"),
            SettingValue::Uint(v) => write!(f, "{v}"),
            SettingValue::Uint8(v) => write!(f, "{v}"),
            SettingValue::Uint16(v) => write!(f, "{v}"),
            SettingValue::Uint32(v) => write!(f, "{v}"),
            SettingValue::Uint64(v) => write!(f, "{v}"),
            SettingValue::Float32(v) => write!(f, "{v}"),
            SettingValue::Float64(v) => write!(f, "{v}"),
            SettingValue::String(v) => f.write_str(v),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::String(value.to_owned())
    }
}

// =============================================================================
// Primitive Mapping
// =============================================================================

/// A Rust primitive that can be stored in a setting
pub trait SettingPrimitive: Sized {
    /// Kind declared for settings of this type
    const KIND: SettingKind;

    /// Wrap into a [`SettingValue`]
    fn into_value(self) -> SettingValue;

    /// Unwrap from a [`SettingValue`] of the same kind
    fn from_value(value: SettingValue) -> Option<Self>;
}

macro_rules! setting_primitives {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl SettingPrimitive for $ty {
                const KIND: SettingKind = SettingKind::$variant;

                fn into_value(self) -> SettingValue {
                    SettingValue::$variant(self)
                }

                fn from_value(value: SettingValue) -> Option<Self> {
                    match value {
                        SettingValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for SettingValue {
                fn from(value: $ty) -> Self {
                    SettingValue::$variant(value)
                }
            }
        )*
    };
}

setting_primitives! {
    bool => Boolean,
    isize => Int,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    usize => Uint,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Float32,
    f64 => Float64,
    String => String,
}
