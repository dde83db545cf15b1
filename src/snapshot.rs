use crate::decode::Value;
use crate::discovery::RegisterSet;
use crate::registers::{EntityKind, RegisterBlock, RegisterInfo};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Key of a register of a unit within a [`Snapshot`].
pub fn key(unit: u8, register: &str) -> String {
    format!("{unit}.{register}")
}

/// The outcome of one complete poll, published as a whole.
///
/// Values of registers that failed to read keep their previous value but are marked as
/// unavailable.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Snapshot {
    pub register_set: Arc<RegisterSet>,
    pub data: BTreeMap<String, Value>,
    pub availability: BTreeMap<String, bool>,
    pub taken_at: jiff::Timestamp,
}

impl Snapshot {
    pub fn empty(register_set: Arc<RegisterSet>) -> Self {
        Self {
            register_set,
            data: BTreeMap::new(),
            availability: BTreeMap::new(),
            taken_at: jiff::Timestamp::now(),
        }
    }

    pub fn get(&self, unit: u8, register: &str) -> Option<&Value> {
        self.data.get(&key(unit, register))
    }

    pub fn is_available(&self, unit: u8, register: &str) -> bool {
        self.availability.get(&key(unit, register)).copied().unwrap_or(false)
    }

    /// Every register of the register set with its most recent value, in polling order.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.register_set.iter().flat_map(move |(unit, block)| {
            block.registers.iter().map(move |register| {
                let key = key(unit, register.name);
                Entry {
                    unit,
                    register,
                    value: self.data.get(&key),
                    available: self.availability.get(&key).copied().unwrap_or(false),
                }
            })
        })
    }
}

pub struct Entry<'a> {
    pub unit: u8,
    pub register: &'static RegisterInfo,
    pub value: Option<&'a Value>,
    pub available: bool,
}

impl Entry<'_> {
    pub fn key(&self) -> String {
        key(self.unit, self.register.name)
    }

    /// The value for people to read: enumeration members by name, flags as `true`/`false` and
    /// quantities with their unit.
    pub fn text(&self) -> Option<String> {
        let value = self.value?;
        Some(match (self.register.kind, value.as_code()) {
            (EntityKind::ReadBool | EntityKind::WriteSwitch, Some(code)) => (code != 0).to_string(),
            (EntityKind::ReadText(e) | EntityKind::WriteSelect(e), Some(code)) => {
                match e.display_name(code) {
                    Some(name) => name.to_string(),
                    None => format!("unknown ({code})"),
                }
            }
            _ if self.register.unit.is_empty() => value.to_string(),
            _ => format!("{value} {}", self.register.unit),
        })
    }
}

/// Accumulates the results of one tick on top of the previous snapshot.
pub(crate) struct SnapshotBuilder<'a> {
    register_set: Arc<RegisterSet>,
    previous: &'a Snapshot,
    data: BTreeMap<String, Value>,
    availability: BTreeMap<String, bool>,
}

impl<'a> SnapshotBuilder<'a> {
    pub(crate) fn new(register_set: Arc<RegisterSet>, previous: &'a Snapshot) -> Self {
        Self { register_set, previous, data: BTreeMap::new(), availability: BTreeMap::new() }
    }

    pub(crate) fn record(
        &mut self,
        unit: u8,
        values: impl IntoIterator<Item = (&'static RegisterInfo, Value)>,
    ) {
        for (register, value) in values {
            let key = key(unit, register.name);
            self.availability.insert(key.clone(), true);
            self.data.insert(key, value);
        }
    }

    pub(crate) fn mark_unavailable(&mut self, unit: u8, block: &RegisterBlock) {
        for register in block.registers {
            let key = key(unit, register.name);
            if let Some(stale) = self.previous.data.get(&key) {
                self.data.insert(key.clone(), stale.clone());
            }
            self.availability.insert(key, false);
        }
    }

    pub(crate) fn finish(self) -> Snapshot {
        Snapshot {
            register_set: self.register_set,
            data: self.data,
            availability: self.availability,
            taken_at: jiff::Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::CATALOG;

    fn register_set() -> Arc<RegisterSet> {
        let mut set = RegisterSet::default();
        set.insert(100, CATALOG.block("system_dc_registers").unwrap());
        Arc::new(set)
    }

    #[test]
    fn keys() {
        assert_eq!(key(228, "system_dc_pv_power"), "228.system_dc_pv_power");
    }

    #[test]
    fn failed_blocks_keep_stale_values() {
        let set = register_set();
        let block = CATALOG.block("system_dc_registers").unwrap();
        let empty = Snapshot::empty(Arc::clone(&set));
        let mut builder = SnapshotBuilder::new(Arc::clone(&set), &empty);
        builder.record(100, [(&block.registers[0], Value::Float(420.0))]);
        builder.record(100, [(&block.registers[1], Value::Float(8.5))]);
        let first = builder.finish();
        assert_eq!(first.get(100, "system_dc_pv_power"), Some(&Value::Float(420.0)));
        assert!(first.is_available(100, "system_dc_pv_current"));

        let mut builder = SnapshotBuilder::new(Arc::clone(&set), &first);
        builder.mark_unavailable(100, block);
        let second = builder.finish();
        assert_eq!(second.get(100, "system_dc_pv_power"), Some(&Value::Float(420.0)));
        assert!(!second.is_available(100, "system_dc_pv_power"));
        assert!(!second.is_available(100, "system_dc_pv_current"));
        assert!(second.taken_at >= first.taken_at);

        let entries = second.entries().map(|e| (e.register.name, e.available)).collect::<Vec<_>>();
        assert_eq!(entries, [("system_dc_pv_power", false), ("system_dc_pv_current", false)]);
    }

    #[test]
    fn entry_text() {
        let (_, mode) = CATALOG.register("vebus_mode").unwrap();
        let (_, voltage) = CATALOG.register("battery_voltage").unwrap();
        let (_, relay) = CATALOG.register("system_relay_0").unwrap();
        let text = |register, value: Value| {
            Entry { unit: 227, register, value: Some(&value), available: true }.text()
        };
        assert_eq!(text(mode, Value::Integer(4)).as_deref(), Some("OFF"));
        assert_eq!(text(mode, Value::Integer(999)).as_deref(), Some("unknown (999)"));
        assert_eq!(text(voltage, Value::Float(52.5)).as_deref(), Some("52.5 V"));
        assert_eq!(text(relay, Value::Integer(1)).as_deref(), Some("true"));
        let never = Entry { unit: 227, register: mode, value: None, available: false };
        assert_eq!(never.text(), None);
        assert_eq!(never.key(), "227.vebus_mode");
    }

    #[test]
    fn never_read_registers_have_no_value() {
        let set = register_set();
        let empty = Snapshot::empty(Arc::clone(&set));
        let mut builder = SnapshotBuilder::new(Arc::clone(&set), &empty);
        builder.mark_unavailable(100, CATALOG.block("system_dc_registers").unwrap());
        let snapshot = builder.finish();
        assert!(snapshot.data.is_empty());
        assert_eq!(snapshot.availability.len(), 2);
        assert!(snapshot.entries().all(|e| e.value.is_none() && !e.available));
    }
}
