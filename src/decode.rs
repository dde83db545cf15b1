//! Conversion between register words and the values they represent.
//!
//! All multi-word quantities are big-endian: the register at the lower address carries the
//! more significant half.

use crate::registers::{DataType, RegisterBlock, RegisterInfo, Unit};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("`{name}` at {address} needs {needed} words at offset {offset}, but only {available} were read")]
    WordsExhausted { name: &'static str, address: u16, offset: usize, needed: usize, available: usize },
    #[error("`{name}` at {address} lies before the start of the read at {start}")]
    BeforeStart { name: &'static str, address: u16, start: u16 },
    #[error("raw value {raw} does not fit into a register word (signed: {signed})")]
    NotRepresentable { raw: i64, signed: bool },
}

/// A decoded register value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Text(_) => None,
        }
    }

    /// The raw integer behind enumerated and boolean registers.
    pub fn as_code(&self) -> Option<u16> {
        match self {
            Value::Integer(i) => u16::try_from(*i).ok(),
            Value::Float(_) | Value::Text(_) => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(i) => i.fmt(f),
            Value::Float(v) => v.fmt(f),
            Value::Text(s) => s.fmt(f),
        }
    }
}

impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Text(s) => serializer.serialize_str(s),
        }
    }
}

pub fn unsigned_u32(high: u16, low: u16) -> u32 {
    (u32::from(high) << 16) | u32::from(low)
}

/// Two's complement reading of a 32-bit register pair.
///
/// Not used for `I32` registers, which the GX reports through the unsigned path.
pub fn signed_i32(high: u16, low: u16) -> i32 {
    unsigned_u32(high, low) as i32
}

/// Turn a raw register value into the physical quantity it represents.
pub fn apply_scale(raw: i64, unit: Unit, scale: f64) -> Value {
    if scale == 0.0 || (unit.is_empty() && scale == 1.0) {
        Value::Integer(raw)
    } else {
        Value::Float(raw as f64 / scale)
    }
}

/// The shape a `display` value takes once read back from a register described by `info`.
pub fn display_value(info: &RegisterInfo, display: f64) -> Value {
    if info.scale == 0.0 || (info.unit.is_empty() && info.scale == 1.0) {
        Value::Integer(display.round() as i64)
    } else {
        Value::Float(display)
    }
}

/// Inverse of [`apply_scale`].
pub fn encode(display: f64, unit: Unit, scale: f64) -> i64 {
    if scale == 0.0 || (unit.is_empty() && scale == 1.0) {
        display.round() as i64
    } else {
        (display * scale).round() as i64
    }
}

/// The word transmitted for `raw`; values of signed registers are sent in two's complement and
/// must fit an `i16`.
pub fn register_word(raw: i64, signed: bool) -> Result<u16, Error> {
    let not_representable = |_| Error::NotRepresentable { raw, signed };
    if signed {
        i16::try_from(raw).map(|v| v as u16).map_err(not_representable)
    } else {
        u16::try_from(raw).map_err(not_representable)
    }
}

/// Decode a single register from the words starting at its address.
pub fn decode_register(info: &RegisterInfo, words: &[u16]) -> Option<Value> {
    let words = words.get(..usize::from(info.words()))?;
    let raw = match info.data_type {
        DataType::U16 => i64::from(words[0]),
        DataType::I16 => i64::from(words[0] as i16),
        DataType::U32 | DataType::I32 => i64::from(unsigned_u32(words[0], words[1])),
        DataType::String { read_bytes, .. } => {
            let bytes = words
                .iter()
                .flat_map(|w| w.to_be_bytes())
                .take(usize::from(read_bytes))
                .take_while(|b| *b != 0)
                .collect::<Vec<u8>>();
            return Some(Value::Text(String::from_utf8_lossy(&bytes).into_owned()));
        }
    };
    Some(apply_scale(raw, info.unit, info.scale))
}

/// Decode every register of `block` from the words read starting at `start`.
pub fn decode_block(
    block: &'static RegisterBlock,
    start: u16,
    words: &[u16],
) -> Result<Vec<(&'static RegisterInfo, Value)>, Error> {
    block
        .registers
        .iter()
        .map(|info| {
            let offset = info.address.checked_sub(start).ok_or(Error::BeforeStart {
                name: info.name,
                address: info.address,
                start,
            })?;
            let offset = usize::from(offset);
            let value = words.get(offset..).and_then(|w| decode_register(info, w)).ok_or(
                Error::WordsExhausted {
                    name: info.name,
                    address: info.address,
                    offset,
                    needed: usize::from(info.words()),
                    available: words.len(),
                },
            )?;
            Ok((info, value))
        })
        .collect()
}
