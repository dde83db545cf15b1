//! The static register catalog of a Victron GX device.
//!
//! Registers are grouped into named blocks. Each block is laid out so that it can be fetched
//! with a single "read holding registers" request, see [`crate::planner`]. The tables
//! themselves live in [`blocks`] and the enumerations used to interpret textual registers live
//! in [`enumerations`].

mod blocks;
pub mod enumerations;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    U16,
    I16,
    U32,
    I32,
    /// A null-padded string spanning `words` registers, of which `read_bytes` are significant.
    String { words: u16, read_bytes: u16 },
}

impl DataType {
    /// The number of 16-bit registers a value of this type occupies.
    pub const fn words(&self) -> u16 {
        match self {
            Self::U16 | Self::I16 => 1,
            Self::U32 | Self::I32 => 2,
            Self::String { words, .. } => *words,
        }
    }

    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::I16 | Self::I32)
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::U16 => f.write_str("u16"),
            Self::I16 => f.write_str("i16"),
            Self::U32 => f.write_str("u32"),
            Self::I32 => f.write_str("i32"),
            Self::String { words, .. } => f.write_fmt(format_args!("string({words})")),
        }
    }
}

impl serde::Serialize for DataType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Physical unit of a decoded register value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
pub enum Unit {
    #[strum(serialize = "")]
    Empty,
    #[strum(serialize = "V")]
    Volt,
    #[strum(serialize = "A")]
    Ampere,
    #[strum(serialize = "Ah")]
    AmpereHour,
    #[strum(serialize = "W")]
    Watt,
    #[strum(serialize = "Wh")]
    WattHour,
    #[strum(serialize = "kWh")]
    KiloWattHour,
    #[strum(serialize = "%")]
    Percent,
    #[strum(serialize = "Hz")]
    Hertz,
    #[strum(serialize = "s")]
    Second,
    #[strum(serialize = "°C")]
    Celsius,
    #[strum(serialize = "m³")]
    CubicMetre,
    #[strum(serialize = "m")]
    Metre,
    #[strum(serialize = "m/s")]
    MetrePerSecond,
    #[strum(serialize = "°")]
    Degree,
    #[strum(serialize = "hPa")]
    HectoPascal,
    #[strum(serialize = "RPM")]
    Rpm,
    #[strum(serialize = "W/m²")]
    WattPerSquareMetre,
}

impl Unit {
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl serde::Serialize for Unit {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.into())
    }
}

/// Which side of the system a writable power/current register acts on.
///
/// Selects the system voltage and current limit used to derive the write bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum PowerDomain {
    #[strum(serialize = "AC")]
    Ac,
    #[strum(serialize = "DC")]
    Dc,
}

/// Semantic role of a register.
#[derive(Clone, Copy, Debug)]
pub enum EntityKind {
    ReadNumeric,
    /// Non-zero reads as `true`.
    ReadBool,
    ReadText(&'static Enumeration),
    /// Writes `0` or `1`.
    WriteSwitch,
    /// Writes `1` when triggered.
    WriteButton,
    /// Writes the numeric value of an enumeration member.
    WriteSelect(&'static Enumeration),
    WriteSlider { domain: Option<PowerDomain>, signed: bool },
}

impl EntityKind {
    pub const fn is_writable(&self) -> bool {
        matches!(
            self,
            Self::WriteSwitch | Self::WriteButton | Self::WriteSelect(_) | Self::WriteSlider { .. }
        )
    }

    pub const fn enumeration(&self) -> Option<&'static Enumeration> {
        match self {
            Self::ReadText(e) | Self::WriteSelect(e) => Some(*e),
            _ => None,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::ReadNumeric => "number",
            Self::ReadBool => "bool",
            Self::ReadText(_) => "text",
            Self::WriteSwitch => "switch",
            Self::WriteButton => "button",
            Self::WriteSelect(_) => "select",
            Self::WriteSlider { .. } => "slider",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())?;
        match self {
            Self::ReadText(e) | Self::WriteSelect(e) => f.write_fmt(format_args!("({})", e.name)),
            Self::WriteSlider { domain, signed } => {
                f.write_str("(")?;
                if let Some(domain) = domain {
                    f.write_fmt(format_args!("{domain}, "))?;
                }
                f.write_str(if *signed { "signed)" } else { "unsigned)" })
            }
            _ => Ok(()),
        }
    }
}

impl serde::Serialize for EntityKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Descriptor of one logical register.
#[derive(Debug)]
pub struct RegisterInfo {
    pub name: &'static str,
    pub address: u16,
    pub data_type: DataType,
    pub unit: Unit,
    /// `decoded = raw / scale`, `raw = display * scale`. `0` passes values through unchanged.
    pub scale: f64,
    pub kind: EntityKind,
    /// Preferred granularity of writes, if the device documents one.
    pub step: Option<f64>,
}

impl RegisterInfo {
    pub const fn words(&self) -> u16 {
        self.data_type.words()
    }

    pub fn is_writable(&self) -> bool {
        self.kind.is_writable()
    }
}

/// An ordered group of registers fetched together.
#[derive(Debug)]
pub struct RegisterBlock {
    pub name: &'static str,
    pub registers: &'static [RegisterInfo],
}

impl RegisterBlock {
    pub fn first(&self) -> &'static RegisterInfo {
        &self.registers[0]
    }

    pub fn last(&self) -> &'static RegisterInfo {
        &self.registers[self.registers.len() - 1]
    }

    pub fn register(&self, name: &str) -> Option<&'static RegisterInfo> {
        self.registers.iter().find(|r| r.name == name)
    }

    pub fn register_at(&self, address: u16) -> Option<&'static RegisterInfo> {
        self.registers.iter().find(|r| r.address == address)
    }
}

/// Integer code to symbolic name mapping for textual registers.
///
/// Members whose name ends in `_DUPLICATE_<n>` are distinct wire codes that share a meaning
/// with another member.
#[derive(Debug)]
pub struct Enumeration {
    pub name: &'static str,
    pub members: &'static [(u16, &'static str)],
}

impl Enumeration {
    pub fn name_of(&self, code: u16) -> Option<&'static str> {
        self.members.iter().find(|(c, _)| *c == code).map(|(_, n)| *n)
    }

    pub fn value_of(&self, name: &str) -> Option<u16> {
        self.members
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(c, _)| *c)
    }

    /// Like [`Self::name_of`] but with the `_DUPLICATE_<n>` suffix stripped.
    pub fn display_name(&self, code: u16) -> Option<&'static str> {
        let name = self.name_of(code)?;
        Some(match name.find("_DUPLICATE_") {
            Some(idx) => &name[..idx],
            None => name,
        })
    }

    pub fn contains(&self, code: u16) -> bool {
        self.name_of(code).is_some()
    }
}

/// The complete set of register blocks known for GX devices.
pub struct Catalog {
    blocks: &'static [&'static RegisterBlock],
}

pub static CATALOG: Catalog = Catalog { blocks: &blocks::ALL_BLOCKS };

impl Catalog {
    /// Blocks in their natural enumeration order.
    pub fn blocks(&self) -> impl Iterator<Item = &'static RegisterBlock> + use<> {
        let blocks: &'static [&'static RegisterBlock] = self.blocks;
        blocks.iter().copied()
    }

    pub fn block(&self, name: &str) -> Option<&'static RegisterBlock> {
        self.blocks().find(|b| b.name == name)
    }

    pub fn register(&self, name: &str) -> Option<(&'static RegisterBlock, &'static RegisterInfo)> {
        self.blocks().find_map(|b| Some((b, b.register(name)?)))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
