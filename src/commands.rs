fn runtime() -> Result<tokio::runtime::Runtime, std::io::Error> {
    tokio::runtime::Builder::new_multi_thread().enable_all().build()
}

pub mod registers {
    use crate::output;
    use crate::registers::{CATALOG, DataType, EntityKind, RegisterBlock, RegisterInfo, Unit};

    /// Search and output known modbus registers.
    #[derive(clap::Parser)]
    pub struct Args {
        /// Only list registers whose name, block or address contains this text.
        filter: Option<String>,
        #[clap(flatten)]
        output: output::Args,
    }

    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        #[error("could not output the registers")]
        Output(#[source] output::Error),
    }

    #[derive(serde::Serialize)]
    pub struct RegisterSchema {
        pub block: &'static str,
        pub address: u16,
        pub name: &'static str,
        pub data_type: DataType,
        pub unit: Unit,
        pub scale: f64,
        pub kind: EntityKind,
        pub members: Option<&'static [(u16, &'static str)]>,
    }

    impl RegisterSchema {
        pub fn all_registers() -> impl Iterator<Item = Self> {
            CATALOG.blocks().flat_map(|block: &'static RegisterBlock| {
                block.registers.iter().map(move |register| Self::new(block, register))
            })
        }

        fn new(block: &'static RegisterBlock, register: &'static RegisterInfo) -> Self {
            RegisterSchema {
                block: block.name,
                address: register.address,
                name: register.name,
                data_type: register.data_type,
                unit: register.unit,
                scale: register.scale,
                kind: register.kind,
                members: register.kind.enumeration().map(|e| e.members),
            }
        }

        pub fn is_match(&self, pattern: &str) -> bool {
            let pattern = pattern.to_lowercase();
            self.name.to_lowercase().contains(&pattern)
                || self.block.to_lowercase().contains(&pattern)
                || self.address.to_string().contains(&pattern)
        }

        fn table_row(&self) -> Vec<String> {
            vec![
                self.block.to_string(),
                self.address.to_string(),
                self.name.to_string(),
                self.data_type.to_string(),
                self.unit.to_string(),
                self.scale.to_string(),
                self.kind.to_string(),
            ]
        }
    }

    pub fn run(args: Args) -> Result<(), Error> {
        let mut output = args
            .output
            .to_output(&["Block", "Address", "Name", "Type", "Unit", "Scale", "Kind"])
            .map_err(Error::Output)?;
        for register in RegisterSchema::all_registers() {
            if let Some(filter) = &args.filter {
                if !register.is_match(filter) {
                    continue;
                }
            }
            output.record(|| register.table_row(), || &register).map_err(Error::Output)?;
        }
        output.commit().map_err(Error::Output)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn filters() {
            let matching = |pattern: &str| {
                RegisterSchema::all_registers()
                    .filter(|r| r.is_match(pattern))
                    .map(|r| r.name)
                    .collect::<Vec<_>>()
            };
            assert_eq!(matching("SYSTEM_DC_PV"), ["system_dc_pv_power", "system_dc_pv_current"]);
            assert_eq!(matching("2901"), ["settings_ess_batterylife_minimumsoc"]);
            assert!(matching("gps_registers").contains(&"gps_altitude"));
            assert!(matching("toaster").is_empty());
        }

        #[test]
        fn enumerations_are_listed() {
            let mode = RegisterSchema::all_registers().find(|r| r.name == "vebus_mode").unwrap();
            assert_eq!(mode.block, "vebus_registers");
            assert!(mode.members.unwrap().contains(&(4, "OFF")));
            assert_eq!(mode.table_row()[6], "select(vebus_mode)");
        }
    }
}

pub mod scan {
    use crate::connection::{self, Endpoint, TcpTransport};
    use crate::discovery::{self, Outcome, RegisterSet};
    use crate::output;
    use crate::planner::plan;
    use futures::StreamExt as _;
    use std::path::PathBuf;
    use tracing::info;

    /// Find out which register blocks the units behind a GX device answer to.
    #[derive(clap::Parser)]
    pub struct Args {
        #[clap(flatten)]
        connection: connection::Args,
        /// Probe only these unit IDs instead of every unit ID a GX device assigns.
        #[arg(long, value_delimiter = ',')]
        units: Vec<u8>,
        /// Save the register set to this file, for use with `--register-set`.
        #[arg(long)]
        save: Option<PathBuf>,
        /// Also list the blocks that could not be read.
        #[arg(long)]
        all: bool,
        #[clap(flatten)]
        output: output::Args,
    }

    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        #[error("could not start the async runtime")]
        Runtime(#[source] std::io::Error),
        #[error("{0} is not a unit ID a GX device assigns")]
        NotACandidate(u8),
        #[error("could not output the scan results")]
        Output(#[source] output::Error),
        #[error("could not save the register set")]
        Save(#[source] discovery::Error),
        #[error("could not disconnect from the device")]
        Close(#[source] connection::Error),
    }

    #[derive(serde::Serialize)]
    struct ProbeRecord {
        unit: u8,
        block: &'static str,
        address: u16,
        count: u16,
        supported: bool,
        outcome: String,
    }

    pub fn run(args: Args) -> Result<(), Error> {
        if let Some(unit) = args.units.iter().find(|u| !discovery::is_candidate_unit(**u)) {
            return Err(Error::NotACandidate(*unit));
        }
        let units = if args.units.is_empty() {
            discovery::candidate_units().collect()
        } else {
            args.units.clone()
        };
        let mut output = args
            .output
            .to_output(&["Unit", "Block", "Address", "Count", "Outcome"])
            .map_err(Error::Output)?;
        let endpoint = Endpoint::new(TcpTransport::new(args.connection));
        let (all, save) = (args.all, args.save);
        let rt = super::runtime().map_err(Error::Runtime)?;
        rt.block_on(async {
            let mut register_set = RegisterSet::default();
            let mut probes = std::pin::pin!(discovery::probe(&endpoint, &units));
            while let Some(probe) = probes.next().await {
                if probe.is_supported() {
                    register_set.insert(probe.unit, probe.block);
                } else if !all {
                    continue;
                }
                let plan = plan(probe.block);
                let record = ProbeRecord {
                    unit: probe.unit,
                    block: probe.block.name,
                    address: plan.address,
                    count: plan.count,
                    supported: probe.is_supported(),
                    outcome: match &probe.outcome {
                        Outcome::Supported => "supported".to_string(),
                        Outcome::Exception(exception) => exception.to_string(),
                        Outcome::Failed(error) => error.to_string(),
                    },
                };
                output
                    .record(
                        || {
                            vec![
                                record.unit.to_string(),
                                record.block.to_string(),
                                record.address.to_string(),
                                record.count.to_string(),
                                record.outcome.clone(),
                            ]
                        },
                        || &record,
                    )
                    .map_err(Error::Output)?;
            }
            endpoint.close().await.map_err(Error::Close)?;
            info!(
                message = "scan finished",
                units = register_set.len(),
                blocks = register_set.iter().count()
            );
            if let Some(path) = &save {
                register_set.save(path).await.map_err(Error::Save)?;
                info!(message = "saved the register set", path = %path.display());
            }
            Ok::<_, Error>(())
        })?;
        output.commit().map_err(Error::Output)
    }
}

pub mod poll {
    use crate::config;
    use crate::connection::{self, Endpoint, TcpTransport};
    use crate::coordinator::{self, Coordinator};
    use crate::decode::Value;
    use crate::discovery::{self, RegisterSet};
    use crate::output;
    use futures::StreamExt as _;
    use tracing::info;

    /// Poll every discovered register on an interval and print each snapshot.
    #[derive(clap::Parser)]
    pub struct Args {
        #[clap(flatten)]
        connection: connection::Args,
        #[clap(flatten)]
        config: config::Args,
        /// Exit after printing this many snapshots.
        #[arg(long)]
        count: Option<usize>,
        #[clap(flatten)]
        output: output::Args,
    }

    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        #[error("could not start the async runtime")]
        Runtime(#[source] std::io::Error),
        #[error("invalid configuration")]
        Config(#[source] config::Error),
        #[error("could not load the register set")]
        RegisterSet(#[source] discovery::Error),
        #[error("no unit answered to any known register block")]
        NothingDiscovered,
        #[error("polling failed")]
        Coordinator(#[source] coordinator::Error),
        #[error("could not output the snapshot")]
        Output(#[source] output::Error),
    }

    #[derive(serde::Serialize)]
    struct EntryRecord<'a> {
        taken_at: jiff::Timestamp,
        key: String,
        value: Option<&'a Value>,
        text: Option<String>,
        available: bool,
    }

    pub fn run(args: Args) -> Result<(), Error> {
        let settings = args.config.into_settings().map_err(Error::Config)?;
        let mut output = args
            .output
            .to_output(&["Taken at", "Key", "Value", "Available"])
            .map_err(Error::Output)?;
        let count = args.count;
        let transport = TcpTransport::new(args.connection);
        let coordinator = Coordinator::new(Endpoint::new(transport), settings);
        let rt = super::runtime().map_err(Error::Runtime)?;
        rt.block_on(async {
            match &coordinator.settings().register_set {
                Some(path) => {
                    let register_set = RegisterSet::load(path).await.map_err(Error::RegisterSet)?;
                    coordinator.set_register_set(register_set);
                }
                None => {
                    coordinator.rescan().await.map_err(Error::Coordinator)?;
                }
            }
            if coordinator.register_set().is_empty() {
                return Err(Error::NothingDiscovered);
            }
            let mut snapshots = coordinator.subscribe();
            coordinator.start();
            let mut printed = 0;
            loop {
                let snapshot = tokio::select! {
                    _ = tokio::signal::ctrl_c() => break,
                    snapshot = snapshots.next() => match snapshot {
                        Some(snapshot) => snapshot,
                        None => break,
                    },
                };
                for entry in snapshot.entries() {
                    let record = EntryRecord {
                        taken_at: snapshot.taken_at,
                        key: entry.key(),
                        value: entry.value,
                        text: entry.text(),
                        available: entry.available,
                    };
                    output
                        .record(
                            || {
                                vec![
                                    record.taken_at.to_string(),
                                    record.key.clone(),
                                    record.text.clone().unwrap_or_default(),
                                    record.available.to_string(),
                                ]
                            },
                            || &record,
                        )
                        .map_err(Error::Output)?;
                }
                output.flush().map_err(Error::Output)?;
                printed += 1;
                if count.is_some_and(|count| printed >= count) {
                    break;
                }
            }
            info!(message = "shutting down", snapshots = printed);
            coordinator.shutdown().await.map_err(Error::Coordinator)
        })?;
        output.commit().map_err(Error::Output)
    }
}

pub mod write {
    use crate::config;
    use crate::connection::{self, Endpoint, TcpTransport};
    use crate::coordinator::{self, Coordinator, WriteValue};
    use crate::decode::Value;
    use crate::discovery::{self, RegisterSet};
    use crate::output;
    use crate::registers::{CATALOG, EntityKind, RegisterInfo};
    use crate::snapshot;

    /// Write a value to a register. Requires `--advanced`.
    #[derive(clap::Parser)]
    pub struct Args {
        #[clap(flatten)]
        connection: connection::Args,
        #[clap(flatten)]
        config: config::Args,
        /// Unit ID of the device to write to.
        #[arg(long)]
        unit: u8,
        /// Name of the register, as listed by the `registers` command.
        #[arg(long)]
        register: String,
        /// A number for sliders, `on` or `off` for switches, a member name or code for selects
        /// and `press` for buttons.
        #[arg(allow_negative_numbers = true)]
        value: String,
        #[clap(flatten)]
        output: output::Args,
    }

    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        #[error("could not start the async runtime")]
        Runtime(#[source] std::io::Error),
        #[error("invalid configuration")]
        Config(#[source] config::Error),
        #[error("`{0}` is not a known register")]
        UnknownRegister(String),
        #[error("`{value}` is not a valid value for a {kind} register")]
        InvalidValue { value: String, kind: EntityKind },
        #[error("could not load the register set")]
        RegisterSet(#[source] discovery::Error),
        #[error("the write failed")]
        Coordinator(#[source] coordinator::Error),
        #[error("could not output the written value")]
        Output(#[source] output::Error),
    }

    #[derive(serde::Serialize)]
    struct WriteRecord {
        key: String,
        value: Value,
    }

    pub fn parse_value(register: &RegisterInfo, value: &str) -> Result<WriteValue, Error> {
        let invalid = || Error::InvalidValue { value: value.to_string(), kind: register.kind };
        match register.kind {
            EntityKind::WriteSwitch => match value.to_ascii_lowercase().as_str() {
                "on" | "true" | "1" => Ok(WriteValue::Switch(true)),
                "off" | "false" | "0" => Ok(WriteValue::Switch(false)),
                _ => Err(invalid()),
            },
            EntityKind::WriteButton => match value.to_ascii_lowercase().as_str() {
                "press" | "1" => Ok(WriteValue::Press),
                _ => Err(invalid()),
            },
            EntityKind::WriteSelect(enumeration) => enumeration
                .value_of(value)
                .or_else(|| value.parse().ok())
                .map(WriteValue::Select)
                .ok_or_else(invalid),
            // Read-only registers are refused by the coordinator.
            _ => value.parse().map(WriteValue::Number).map_err(|_| invalid()),
        }
    }

    pub fn run(args: Args) -> Result<(), Error> {
        let (_, register) =
            CATALOG.register(&args.register).ok_or_else(|| Error::UnknownRegister(args.register))?;
        let value = parse_value(register, &args.value)?;
        let settings = args.config.into_settings().map_err(Error::Config)?;
        let mut output = args.output.to_output(&["Key", "Value"]).map_err(Error::Output)?;
        let unit = args.unit;
        let transport = TcpTransport::new(args.connection);
        let coordinator = Coordinator::new(Endpoint::new(transport), settings);
        let rt = super::runtime().map_err(Error::Runtime)?;
        let written = rt.block_on(async {
            match &coordinator.settings().register_set {
                Some(path) => {
                    let register_set = RegisterSet::load(path).await.map_err(Error::RegisterSet)?;
                    coordinator.set_register_set(register_set);
                }
                None => {
                    coordinator.rescan_units(&[unit]).await.map_err(Error::Coordinator)?;
                }
            }
            let written = coordinator.write_named(unit, register.name, value).await;
            coordinator.shutdown().await.map_err(Error::Coordinator)?;
            written.map_err(Error::Coordinator)
        })?;
        let record = WriteRecord { key: snapshot::key(unit, register.name), value: written };
        output
            .record(|| vec![record.key.clone(), record.value.to_string()], || &record)
            .map_err(Error::Output)?;
        output.commit().map_err(Error::Output)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn parse(register: &str, value: &str) -> Result<WriteValue, Error> {
            parse_value(CATALOG.register(register).unwrap().1, value)
        }

        #[test]
        fn values_by_kind() {
            assert_eq!(parse("vebus_disablecharge", "ON").unwrap(), WriteValue::Switch(true));
            assert_eq!(parse("vebus_disablecharge", "0").unwrap(), WriteValue::Switch(false));
            assert_eq!(parse("vebus_systemreset", "press").unwrap(), WriteValue::Press);
            assert_eq!(parse("vebus_mode", "off").unwrap(), WriteValue::Select(4));
            assert_eq!(parse("vebus_mode", "3").unwrap(), WriteValue::Select(3));
            assert_eq!(
                parse("vebus_L1_acpowersetpoint", "-1500").unwrap(),
                WriteValue::Number(-1500.0)
            );
        }

        #[test]
        fn garbage_is_refused() {
            assert!(matches!(parse("vebus_disablecharge", "maybe"), Err(Error::InvalidValue { .. })));
            assert!(matches!(parse("vebus_systemreset", "0"), Err(Error::InvalidValue { .. })));
            assert!(matches!(parse("vebus_mode", "turbo"), Err(Error::InvalidValue { .. })));
            assert!(matches!(
                parse("vebus_L1_acpowersetpoint", "lots"),
                Err(Error::InvalidValue { .. })
            ));
        }
    }
}
