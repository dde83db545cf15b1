//! Engine settings supplied by whoever embeds the coordinator.

use crate::bounds::SystemHints;
use std::path::PathBuf;
use std::time::Duration;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AcVoltage {
    #[value(name = "120")]
    V120,
    #[value(name = "230")]
    V230,
}

impl AcVoltage {
    pub fn volts(self) -> f64 {
        match self {
            AcVoltage::V120 => 120.0,
            AcVoltage::V230 => 230.0,
        }
    }
}

/// Nominal voltage of the battery bank: 4, 8 or 16 LiFePO4 cells.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DcVoltage {
    #[value(name = "12")]
    V12,
    #[value(name = "24")]
    V24,
    #[value(name = "48")]
    V48,
}

impl DcVoltage {
    pub fn volts(self) -> f64 {
        match self {
            DcVoltage::V12 => 12.0,
            DcVoltage::V24 => 24.0,
            DcVoltage::V48 => 48.0,
        }
    }
}

#[derive(clap::Parser, Clone, Debug)]
#[group(id = "config::Args")]
pub struct Args {
    /// Seconds between the starts of two consecutive polls.
    #[arg(long, default_value = "30")]
    pub interval: u64,

    /// Allow writing to registers.
    #[arg(long)]
    pub advanced: bool,

    /// Nominal AC voltage of the installation.
    #[arg(long, value_enum, default_value = "230")]
    pub ac_system_voltage: AcVoltage,

    /// Current limit of the AC input, in amperes.
    #[arg(long, default_value = "16")]
    pub ac_current_limit: f64,

    /// Nominal voltage of the battery bank.
    #[arg(long, value_enum, default_value = "48")]
    pub dc_system_voltage: DcVoltage,

    /// Maximum battery charge and discharge current, in amperes.
    #[arg(long, default_value = "100")]
    pub dc_current_limit: f64,

    /// A register set saved by `scan --save`. Discovery is skipped when given.
    #[arg(long)]
    pub register_set: Option<PathBuf>,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("the poll interval must be at least one second")]
    IntervalTooShort,
    #[error("the {0} current limit must be a non-negative number of amperes, not {1}")]
    CurrentLimit(&'static str, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub interval: Duration,
    pub advanced: bool,
    pub hints: SystemHints,
    pub register_set: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
            advanced: false,
            hints: SystemHints::default(),
            register_set: None,
        }
    }
}

impl Args {
    pub fn into_settings(self) -> Result<Settings, Error> {
        if self.interval < 1 {
            return Err(Error::IntervalTooShort);
        }
        let current = |name, limit: f64| {
            if limit.is_finite() && limit >= 0.0 { Ok(limit) } else { Err(Error::CurrentLimit(name, limit)) }
        };
        Ok(Settings {
            interval: Duration::from_secs(self.interval),
            advanced: self.advanced,
            hints: SystemHints {
                ac_voltage: self.ac_system_voltage.volts(),
                ac_current: current("AC", self.ac_current_limit)?,
                dc_voltage: self.dc_system_voltage.volts(),
                dc_current: current("DC", self.dc_current_limit)?,
            },
            register_set: self.register_set,
        })
    }
}
