//! The polling engine: reads every discovered block on an interval, publishes the decoded
//! values as one [`Snapshot`] per tick and carries writes to the device.

use crate::bounds::{self, Bounds};
use crate::config::Settings;
use crate::connection::{self, Endpoint, Transport};
use crate::decode::{self, Value};
use crate::discovery::{self, RegisterSet};
use crate::modbus::{Exception, Response, ResponseKind};
use crate::planner::plan;
use crate::registers::{EntityKind, RegisterBlock, RegisterInfo};
use crate::snapshot::{self, Snapshot, SnapshotBuilder};
use num_traits::FromPrimitive as _;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::WatchStream;
use tokio_util::sync::CancellationToken;
use tokio_util::task::AbortOnDropHandle;
use tracing::{debug, error, info, warn};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not exchange a request with the device")]
    Transport(#[source] connection::Error),
    #[error("unit {unit} answered the request for register {address} with {exception}")]
    Exception { unit: u8, address: u16, exception: Exception },
    #[error("could not convert the value for the register")]
    Decode(#[source] decode::Error),
    #[error("{value} is outside of the range {min}..={max} permitted for `{register}`")]
    OutOfRange { register: &'static str, value: f64, min: f64, max: f64 },
    #[error("`{0}` is a read-only register")]
    NotWritable(&'static str),
    #[error("{value:?} cannot be written to `{register}`, a {kind} register")]
    InvalidWrite { register: &'static str, kind: EntityKind, value: WriteValue },
    #[error("writes are disabled unless the advanced mode is enabled")]
    WritesDisabled,
    #[error("unit {0} is not part of the register set")]
    UnknownUnit(u8),
    #[error("unit {unit} has no register at address {address}")]
    UnknownAddress { unit: u8, address: u16 },
    #[error("unit {unit} has no register named `{register}`")]
    UnknownRegister { unit: u8, register: String },
    #[error("the coordinator has been shut down")]
    TornDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, num_derive::FromPrimitive, strum::Display)]
#[repr(u8)]
pub enum State {
    Idle,
    Discovering,
    Polling,
    Writing,
    TornDown,
}

/// What to write, matching the kind of the target register.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WriteValue {
    /// The display value of a slider, before scaling.
    Number(f64),
    Switch(bool),
    Press,
    /// The code of an enumeration member.
    Select(u16),
}

struct Inner<T> {
    endpoint: Endpoint<T>,
    settings: Settings,
    register_set: RwLock<Arc<RegisterSet>>,
    snapshot: watch::Sender<Arc<Snapshot>>,
    state: AtomicU8,
    writes_in_flight: AtomicUsize,
    /// Held for the duration of a tick or a discovery.
    ticks: tokio::sync::Mutex<()>,
    /// Values written since the last tick started, re-applied when it publishes.
    written: Mutex<BTreeMap<String, Value>>,
    cancel: CancellationToken,
}

pub struct Coordinator<T> {
    inner: Arc<Inner<T>>,
    poller: Mutex<Option<AbortOnDropHandle<()>>>,
}

impl<T: Transport + 'static> Coordinator<T> {
    pub fn new(endpoint: Endpoint<T>, settings: Settings) -> Self {
        let register_set = Arc::new(RegisterSet::default());
        let empty = Snapshot::empty(Arc::clone(&register_set));
        let (snapshot, _) = watch::channel(Arc::new(empty));
        Self {
            inner: Arc::new(Inner {
                endpoint,
                settings,
                register_set: RwLock::new(register_set),
                snapshot,
                state: AtomicU8::new(State::Idle as u8),
                writes_in_flight: AtomicUsize::new(0),
                ticks: tokio::sync::Mutex::new(()),
                written: Mutex::new(BTreeMap::new()),
                cancel: CancellationToken::new(),
            }),
            poller: Mutex::new(None),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub fn state(&self) -> State {
        self.inner.state()
    }

    pub fn register_set(&self) -> Arc<RegisterSet> {
        self.inner.register_set()
    }

    /// Replace the register set, e.g. with one loaded from disk. Takes effect on the next tick.
    pub fn set_register_set(&self, register_set: RegisterSet) {
        self.inner.replace_register_set(register_set);
    }

    /// Run discovery over every candidate unit and replace the register set with its result.
    pub async fn rescan(&self) -> Result<Arc<RegisterSet>, Error> {
        let units = discovery::candidate_units().collect::<Vec<_>>();
        self.rescan_units(&units).await
    }

    pub async fn rescan_units(&self, units: &[u8]) -> Result<Arc<RegisterSet>, Error> {
        self.inner.rescan(units).await
    }

    /// The most recently published snapshot. Never blocks on a tick in progress.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.inner.snapshot.borrow())
    }

    /// Every snapshot published from now on.
    pub fn subscribe(&self) -> WatchStream<Arc<Snapshot>> {
        WatchStream::from_changes(self.inner.snapshot.subscribe())
    }

    /// Run a single tick right away, outside of the interval.
    pub async fn poll_once(&self) -> Result<Arc<Snapshot>, Error> {
        self.inner.tick().await
    }

    /// Spawn the periodic poll. The first tick starts immediately.
    pub fn start(&self) {
        let mut poller = self.poller.lock().unwrap_or_else(|e| e.into_inner());
        if poller.is_some() || self.inner.cancel.is_cancelled() {
            return;
        }
        let inner = Arc::clone(&self.inner);
        *poller = Some(AbortOnDropHandle::new(tokio::spawn(async move { inner.run().await })));
    }

    /// Bounds a slider write to `register` must respect, given the configured system hints.
    pub fn write_bounds(&self, register: &RegisterInfo) -> Option<Bounds> {
        bounds::slider_bounds(register, &self.inner.settings.hints)
    }

    /// Write to the register of `unit` at `address`.
    ///
    /// Returns the value the snapshot now holds for the register.
    pub async fn write(&self, unit: u8, address: u16, value: WriteValue) -> Result<Value, Error> {
        let register = self
            .lookup(unit, |block| block.register_at(address))?
            .ok_or(Error::UnknownAddress { unit, address })?;
        self.write_register(unit, register, value).await
    }

    pub async fn write_named(&self, unit: u8, name: &str, value: WriteValue) -> Result<Value, Error> {
        let register = self
            .lookup(unit, |block| block.register(name))?
            .ok_or_else(|| Error::UnknownRegister { unit, register: name.to_string() })?;
        self.write_register(unit, register, value).await
    }

    fn lookup(
        &self,
        unit: u8,
        find: impl Fn(&'static RegisterBlock) -> Option<&'static RegisterInfo>,
    ) -> Result<Option<&'static RegisterInfo>, Error> {
        let register_set = self.register_set();
        if !register_set.contains_unit(unit) {
            return Err(Error::UnknownUnit(unit));
        }
        Ok(register_set.blocks(unit).iter().find_map(|block| find(*block)))
    }

    async fn write_register(
        &self,
        unit: u8,
        register: &'static RegisterInfo,
        value: WriteValue,
    ) -> Result<Value, Error> {
        let inner = &self.inner;
        if inner.cancel.is_cancelled() {
            return Err(Error::TornDown);
        }
        if !inner.settings.advanced {
            return Err(Error::WritesDisabled);
        }
        if !register.is_writable() {
            return Err(Error::NotWritable(register.name));
        }
        let (word, shown) = self.encode_write(register, value)?;
        let _writing = WriteGuard::enter(&inner.writes_in_flight);
        let response = inner
            .endpoint
            .write_register(unit, register.address, word)
            .await
            .map_err(Error::Transport)?;
        if let Some(exception) = response.exception() {
            warn!(message = "write refused", unit, register = register.name, %exception);
            return Err(Error::Exception { unit, address: register.address, exception });
        }
        info!(message = "wrote register", unit, register = register.name, word, value = %shown);
        let key = snapshot::key(unit, register.name);
        let mut written = inner.written.lock().unwrap_or_else(|e| e.into_inner());
        written.insert(key.clone(), shown.clone());
        inner.snapshot.send_modify(|snapshot| {
            let snapshot = Arc::make_mut(snapshot);
            snapshot.data.insert(key, shown.clone());
            snapshot.taken_at = jiff::Timestamp::now();
        });
        Ok(shown)
    }

    fn encode_write(
        &self,
        register: &'static RegisterInfo,
        value: WriteValue,
    ) -> Result<(u16, Value), Error> {
        let invalid = || Error::InvalidWrite { register: register.name, kind: register.kind, value };
        match (register.kind, value) {
            (EntityKind::WriteSwitch, WriteValue::Switch(on)) => {
                Ok((u16::from(on), Value::Integer(i64::from(on))))
            }
            (EntityKind::WriteButton, WriteValue::Press) => Ok((1, Value::Integer(1))),
            (EntityKind::WriteSelect(enumeration), WriteValue::Select(code))
                if enumeration.contains(code) =>
            {
                Ok((code, Value::Integer(i64::from(code))))
            }
            (EntityKind::WriteSlider { signed, .. }, WriteValue::Number(number)) => {
                if !number.is_finite() {
                    return Err(invalid());
                }
                if let Some(Bounds { min, max, .. }) = self.write_bounds(register) {
                    if !(min..=max).contains(&number) {
                        return Err(Error::OutOfRange {
                            register: register.name,
                            value: number,
                            min,
                            max,
                        });
                    }
                }
                let raw = decode::encode(number, register.unit, register.scale);
                let word = decode::register_word(raw, signed).map_err(Error::Decode)?;
                Ok((word, decode::display_value(register, number)))
            }
            _ => Err(invalid()),
        }
    }

    /// Stop polling and refuse further writes. An exchange in flight is completed first.
    pub async fn shutdown(&self) -> Result<(), Error> {
        self.inner.cancel.cancel();
        let poller = self.poller.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(poller) = poller {
            if let Err(e) = poller.await {
                warn!(message = "poller ended abnormally", error = (&e as &dyn std::error::Error));
            }
        }
        // Wait out a tick started through `poll_once`.
        drop(self.inner.ticks.lock().await);
        self.inner.set_state(State::TornDown);
        self.inner.endpoint.close().await.map_err(Error::Transport)
    }
}

impl<T: Transport + 'static> Inner<T> {
    fn state(&self) -> State {
        if self.cancel.is_cancelled() {
            return State::TornDown;
        }
        if self.writes_in_flight.load(Ordering::SeqCst) > 0 {
            return State::Writing;
        }
        State::from_u8(self.state.load(Ordering::SeqCst)).unwrap_or(State::Idle)
    }

    fn set_state(&self, state: State) {
        self.state.store(state as u8, Ordering::SeqCst);
    }

    fn register_set(&self) -> Arc<RegisterSet> {
        Arc::clone(&self.register_set.read().unwrap_or_else(|e| e.into_inner()))
    }

    fn replace_register_set(&self, register_set: RegisterSet) -> Arc<RegisterSet> {
        let register_set = Arc::new(register_set);
        *self.register_set.write().unwrap_or_else(|e| e.into_inner()) = Arc::clone(&register_set);
        register_set
    }

    async fn rescan(&self, units: &[u8]) -> Result<Arc<RegisterSet>, Error> {
        let _tick = self.ticks.lock().await;
        if self.cancel.is_cancelled() {
            return Err(Error::TornDown);
        }
        self.set_state(State::Discovering);
        let register_set = tokio::select! {
            () = self.cancel.cancelled() => return Err(Error::TornDown),
            register_set = discovery::discover(&self.endpoint, units) => register_set,
        };
        self.set_state(State::Polling);
        Ok(self.replace_register_set(register_set))
    }

    async fn run(&self) {
        let mut interval = tokio::time::interval(self.settings.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                biased;
                () = self.cancel.cancelled() => break,
                _ = interval.tick() => {}
            }
            if let Err(e) = self.tick().await {
                debug!(message = "stopping the poll", reason = (&e as &dyn std::error::Error));
                break;
            }
        }
        debug!(message = "poller exited");
    }

    async fn tick(&self) -> Result<Arc<Snapshot>, Error> {
        let _tick = self.ticks.lock().await;
        if self.cancel.is_cancelled() {
            return Err(Error::TornDown);
        }
        self.set_state(State::Polling);
        self.written.lock().unwrap_or_else(|e| e.into_inner()).clear();
        let register_set = self.register_set();
        let previous = Arc::clone(&self.snapshot.borrow());
        let mut builder = SnapshotBuilder::new(Arc::clone(&register_set), &previous);
        for (unit, block) in register_set.iter() {
            if self.cancel.is_cancelled() {
                debug!(message = "tick abandoned");
                return Err(Error::TornDown);
            }
            let plan = plan(block);
            match self.endpoint.read_holding(unit, plan.address, plan.count).await {
                Ok(Response { kind: ResponseKind::ReadHoldings { words }, .. }) => {
                    match decode::decode_block(block, plan.address, &words) {
                        Ok(values) => builder.record(unit, values),
                        Err(e) => {
                            error!(
                                message = "block could not be decoded",
                                unit,
                                block = block.name,
                                error = (&e as &dyn std::error::Error)
                            );
                            builder.mark_unavailable(unit, block);
                        }
                    }
                }
                Ok(response) => {
                    debug!(
                        message = "block read refused",
                        unit,
                        block = block.name,
                        exception = ?response.exception()
                    );
                    builder.mark_unavailable(unit, block);
                }
                Err(e) => {
                    warn!(
                        message = "block read failed",
                        unit,
                        block = block.name,
                        error = (&e as &dyn std::error::Error)
                    );
                    builder.mark_unavailable(unit, block);
                }
            }
        }
        let mut snapshot = builder.finish();
        // A write that landed mid-tick is newer than what the tick read before it.
        let mut written = self.written.lock().unwrap_or_else(|e| e.into_inner());
        snapshot.data.extend(std::mem::take(&mut *written));
        let snapshot = Arc::new(snapshot);
        self.snapshot.send_replace(Arc::clone(&snapshot));
        drop(written);
        debug!(message = "published a snapshot", values = snapshot.data.len());
        Ok(snapshot)
    }
}

struct WriteGuard<'a>(&'a AtomicUsize);

impl<'a> WriteGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for WriteGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::SystemHints;
    use crate::modbus::{ExceptionCode, Operation};
    use crate::registers::{CATALOG, DataType};
    use crate::testing::{Event, MockTransport};
    use futures::StreamExt as _;
    use std::time::Duration;

    fn settings(advanced: bool) -> Settings {
        Settings { advanced, ..Settings::default() }
    }

    fn coordinator(
        device: &MockTransport,
        advanced: bool,
        blocks: &[(u8, &str)],
    ) -> Coordinator<MockTransport> {
        coordinator_with(device, settings(advanced), blocks)
    }

    fn coordinator_with(
        device: &MockTransport,
        settings: Settings,
        blocks: &[(u8, &str)],
    ) -> Coordinator<MockTransport> {
        let mut register_set = RegisterSet::default();
        for (unit, name) in blocks {
            device.support(*unit, name);
            register_set.insert(*unit, CATALOG.block(name).unwrap());
        }
        let coordinator = Coordinator::new(Endpoint::new(device.clone()), settings);
        coordinator.set_register_set(register_set);
        coordinator
    }

    fn assert_not_interleaved(events: &[Event]) {
        for pair in events.chunks(2) {
            let [Event::Begin(u1, op1), Event::End(u2, op2)] = pair else {
                panic!("interleaved exchanges: {events:?}");
            };
            assert_eq!((u1, op1), (u2, op2));
        }
    }

    fn keys_of(unit: u8, block: &str) -> Vec<String> {
        let block = CATALOG.block(block).unwrap();
        block.registers.iter().map(|r| snapshot::key(unit, r.name)).collect()
    }

    #[tokio::test]
    async fn tick_publishes_decoded_values() {
        let device = MockTransport::new();
        device.set_register(225, "battery_voltage", &[0x1388]);
        device.set_register(225, "battery_current", &[0xFFCE]);
        let coordinator = coordinator(&device, false, &[(225, "battery_registers")]);
        assert_eq!(coordinator.state(), State::Idle);
        assert!(coordinator.snapshot().data.is_empty());

        let snapshot = coordinator.poll_once().await.unwrap();
        assert_eq!(coordinator.state(), State::Polling);
        assert!(Arc::ptr_eq(&snapshot, &coordinator.snapshot()));
        assert_eq!(snapshot.get(225, "battery_voltage"), Some(&Value::Float(50.0)));
        assert_eq!(snapshot.get(225, "battery_current"), Some(&Value::Float(-5.0)));
        for key in keys_of(225, "battery_registers") {
            assert_eq!(snapshot.availability.get(&key), Some(&true), "{key}");
        }
    }

    #[tokio::test]
    async fn failing_block_is_isolated() {
        let device = MockTransport::new();
        device.set_register(100, "system_dc_pv_power", &[420]);
        let coordinator = coordinator(
            &device,
            false,
            &[(100, "system_registers"), (100, "system_dc_registers"), (225, "battery_registers")],
        );
        coordinator.poll_once().await.unwrap();

        device.fail_transport(100, "system_dc_registers");
        device.unsupport(225, "battery_registers");
        let snapshot = coordinator.poll_once().await.unwrap();
        for key in keys_of(100, "system_dc_registers") {
            assert_eq!(snapshot.availability.get(&key), Some(&false), "{key}");
        }
        for key in keys_of(225, "battery_registers") {
            assert_eq!(snapshot.availability.get(&key), Some(&false), "{key}");
        }
        for key in keys_of(100, "system_registers") {
            assert_eq!(snapshot.availability.get(&key), Some(&true), "{key}");
        }
        // The stale value stays readable.
        assert_eq!(snapshot.get(100, "system_dc_pv_power"), Some(&Value::Float(420.0)));

        device.repair_transport(100, "system_dc_registers");
        let snapshot = coordinator.poll_once().await.unwrap();
        assert!(snapshot.is_available(100, "system_dc_pv_power"));
        assert!(device.connects() >= 2);
    }

    #[tokio::test]
    async fn rescan_replaces_the_register_set() {
        let device = MockTransport::new();
        device.support(228, "system_registers");
        device.support(228, "system_battery_registers");
        let coordinator = Coordinator::new(Endpoint::new(device.clone()), settings(false));
        let register_set = coordinator.rescan().await.unwrap();
        assert_eq!(coordinator.state(), State::Polling);
        assert_eq!(register_set.units().collect::<Vec<_>>(), [228]);
        let names = register_set.blocks(228).iter().map(|b| b.name).collect::<Vec<_>>();
        assert_eq!(names, ["system_registers", "system_battery_registers"]);
        assert!(Arc::ptr_eq(&register_set, &coordinator.register_set()));

        let snapshot = coordinator.poll_once().await.unwrap();
        assert_eq!(*snapshot.register_set, *register_set);
        assert!(snapshot.is_available(228, "system_battery_timetogo"));
    }

    #[tokio::test]
    async fn signed_slider_write_is_twos_complement() {
        let device = MockTransport::new();
        let coordinator = coordinator(&device, true, &[(227, "vebus_registers")]);
        let value = coordinator.write(227, 37, WriteValue::Number(-1500.0)).await.unwrap();
        assert_eq!(value, Value::Float(-1500.0));
        assert_eq!(device.writes(), [(227, 37, 0xFA24)]);
        assert_eq!(
            coordinator.snapshot().get(227, "vebus_L1_acpowersetpoint"),
            Some(&Value::Float(-1500.0))
        );
        let snapshot = coordinator.poll_once().await.unwrap();
        assert_eq!(snapshot.get(227, "vebus_L1_acpowersetpoint"), Some(&Value::Float(-1500.0)));
    }

    #[tokio::test]
    async fn signed_sliders_read_back_what_was_written() {
        let device = MockTransport::new();
        let coordinator =
            coordinator(&device, true, &[(100, "vebus_registers"), (100, "settings_registers")]);
        let register_set = coordinator.register_set();
        let sliders = register_set
            .blocks(100)
            .iter()
            .flat_map(|b| b.registers)
            .filter(|r| r.data_type == DataType::I16)
            .filter(|r| matches!(r.kind, EntityKind::WriteSlider { signed: true, .. }))
            .collect::<Vec<_>>();
        assert_eq!(sliders.len(), 7);
        for register in sliders {
            let bounds = coordinator.write_bounds(register).unwrap();
            let steps = ((bounds.max - bounds.min) / bounds.step).round() as i64;
            for i in 0..=steps {
                let value = bounds.min + i as f64 * bounds.step;
                coordinator.write_named(100, register.name, WriteValue::Number(value)).await.unwrap();
                let snapshot = coordinator.poll_once().await.unwrap();
                let read = snapshot.get(100, register.name).and_then(Value::as_f64).unwrap();
                assert!((read - value).abs() < 1e-6, "{}: wrote {value}, read {read}", register.name);
            }
        }
    }

    #[tokio::test]
    async fn wide_setpoint_writes_only_the_high_word() {
        let device = MockTransport::new();
        let coordinator = coordinator(&device, true, &[(227, "vebus_registers")]);
        let name = "vebus_L1_acpowersetpoint32";
        let value = coordinator.write_named(227, name, WriteValue::Number(-1500.0)).await.unwrap();
        assert_eq!(value, Value::Float(-1500.0));
        assert_eq!(device.writes(), [(227, 96, 0xFA24)]);
        assert_eq!(device.word(227, 97), None);
        // The low word stays zero, so the device reports the word shifted up.
        let snapshot = coordinator.poll_once().await.unwrap();
        let read = f64::from(0xFA24_u32 << 16);
        assert_eq!(snapshot.get(227, name), Some(&Value::Float(read)));
    }

    #[tokio::test]
    async fn large_setpoints_stay_within_one_signed_word() {
        let device = MockTransport::new();
        let hints = SystemHints { ac_current: 200.0, ..SystemHints::default() };
        let settings = Settings { advanced: true, hints, ..Settings::default() };
        let coordinator = coordinator_with(&device, settings, &[(227, "vebus_registers")]);
        for value in [40000.0, -40000.0] {
            let error = coordinator.write(227, 37, WriteValue::Number(value)).await;
            assert!(
                matches!(error, Err(Error::OutOfRange { min, max, .. }) if min == -32768.0 && max == 32767.0),
                "{error:?}"
            );
        }
        assert!(device.events().is_empty());

        coordinator.write(227, 37, WriteValue::Number(32767.0)).await.unwrap();
        let snapshot = coordinator.poll_once().await.unwrap();
        assert_eq!(snapshot.get(227, "vebus_L1_acpowersetpoint"), Some(&Value::Float(32767.0)));
        coordinator.write(227, 37, WriteValue::Number(-32768.0)).await.unwrap();
        let snapshot = coordinator.poll_once().await.unwrap();
        assert_eq!(snapshot.get(227, "vebus_L1_acpowersetpoint"), Some(&Value::Float(-32768.0)));
        assert_eq!(device.writes(), [(227, 37, 0x7FFF), (227, 37, 0x8000)]);
    }

    #[tokio::test]
    async fn switches_buttons_and_selects() {
        let device = MockTransport::new();
        let coordinator =
            coordinator(&device, true, &[(100, "settings_registers"), (227, "vebus_registers")]);
        let switch = CATALOG
            .block("settings_registers")
            .unwrap()
            .registers
            .iter()
            .find(|r| matches!(r.kind, EntityKind::WriteSwitch))
            .unwrap();
        coordinator.write(100, switch.address, WriteValue::Switch(true)).await.unwrap();
        let EntityKind::WriteSelect(mode) = CATALOG.register("vebus_mode").unwrap().1.kind else {
            panic!("vebus_mode is a select");
        };
        let (code, _) = mode.members[0];
        let value = coordinator.write_named(227, "vebus_mode", WriteValue::Select(code)).await.unwrap();
        assert_eq!(value, Value::Integer(i64::from(code)));
        assert_eq!(device.writes(), [(100, switch.address, 1), (227, 33, code)]);

        let error = coordinator.write_named(227, "vebus_mode", WriteValue::Select(0xBEEF)).await;
        assert!(matches!(error, Err(Error::InvalidWrite { .. })), "{error:?}");
        let error = coordinator.write_named(227, "vebus_mode", WriteValue::Number(1.0)).await;
        assert!(matches!(error, Err(Error::InvalidWrite { .. })), "{error:?}");
        assert_eq!(device.writes().len(), 2);
    }

    #[tokio::test]
    async fn rejected_writes_transmit_nothing() {
        let device = MockTransport::new();
        let blocks = [(227, "vebus_registers"), (225, "battery_registers")];
        let disabled = coordinator(&device, false, &blocks);
        let error = disabled.write(227, 37, WriteValue::Number(100.0)).await;
        assert!(matches!(error, Err(Error::WritesDisabled)), "{error:?}");

        let coordinator = coordinator(&device, true, &blocks);
        let error = coordinator.write(227, 37, WriteValue::Number(3800.0)).await;
        assert!(
            matches!(error, Err(Error::OutOfRange { min, max, .. }) if min == -3700.0 && max == 3700.0),
            "{error:?}"
        );
        let error = coordinator.write(227, 37, WriteValue::Number(f64::NAN)).await;
        assert!(matches!(error, Err(Error::InvalidWrite { .. })), "{error:?}");
        let error = coordinator.write_named(225, "battery_voltage", WriteValue::Number(1.0)).await;
        assert!(matches!(error, Err(Error::NotWritable("battery_voltage"))), "{error:?}");
        let error = coordinator.write(226, 37, WriteValue::Number(1.0)).await;
        assert!(matches!(error, Err(Error::UnknownUnit(226))), "{error:?}");
        let error = coordinator.write(227, 2700, WriteValue::Number(1.0)).await;
        assert!(matches!(error, Err(Error::UnknownAddress { unit: 227, address: 2700 })));
        let error = coordinator.write_named(227, "toaster", WriteValue::Press).await;
        assert!(matches!(error, Err(Error::UnknownRegister { unit: 227, .. })), "{error:?}");
        assert!(device.events().is_empty());
    }

    #[tokio::test]
    async fn refused_write_leaves_the_snapshot_alone() {
        let device = MockTransport::new();
        device.reject_writes(227, 37);
        let coordinator = coordinator(&device, true, &[(227, "vebus_registers")]);
        let before = coordinator.poll_once().await.unwrap();
        let error = coordinator.write(227, 37, WriteValue::Number(500.0)).await.unwrap_err();
        let Error::Exception { unit: 227, address: 37, exception } = error else {
            panic!("unexpected {error:?}");
        };
        assert_eq!(exception.code(), Some(ExceptionCode::IllegalDataValue));
        assert!(Arc::ptr_eq(&before, &coordinator.snapshot()));
        assert_eq!(device.word(227, 37), None);
    }

    #[tokio::test(start_paused = true)]
    async fn polls_and_writes_do_not_interleave() {
        let device = MockTransport::new();
        device.set_latency(Duration::from_millis(50));
        let coordinator = coordinator(
            &device,
            true,
            &[(227, "vebus_registers"), (100, "system_registers"), (100, "settings_registers")],
        );
        let endpoint = &coordinator.inner.endpoint;
        let (tick, read, write) = tokio::join!(
            coordinator.poll_once(),
            endpoint.read_holding(100, 800, 6),
            coordinator.write(227, 37, WriteValue::Number(-200.0)),
        );
        tick.unwrap();
        read.unwrap();
        write.unwrap();

        let events = device.events();
        assert_eq!(events.len(), 2 * 5);
        assert_not_interleaved(&events);
    }

    #[tokio::test]
    async fn readers_see_the_previous_snapshot_until_the_tick_completes() {
        let device = MockTransport::new();
        device.set_register(100, "system_dc_pv_power", &[100]);
        device.set_register(225, "battery_voltage", &[4800]);
        let coordinator = Arc::new(coordinator(
            &device,
            false,
            &[(100, "system_dc_registers"), (225, "battery_registers")],
        ));
        let first = coordinator.poll_once().await.unwrap();

        device.set_register(100, "system_dc_pv_power", &[200]);
        device.set_register(225, "battery_voltage", &[5000]);
        device.unsupport(225, "battery_registers");
        let gate = device.gate();
        let tick = tokio::spawn({
            let coordinator = Arc::clone(&coordinator);
            async move { coordinator.poll_once().await }
        });
        gate.add_permits(1);
        while device.events().len() < 6 {
            tokio::task::yield_now().await;
        }
        // The first block of the tick has been read, the second is waiting on the gate.
        let first_read = Operation::ReadHoldings { address: 850, count: 2 };
        assert_eq!(device.events()[5], Event::End(100, first_read));
        let mid = coordinator.snapshot();
        assert!(Arc::ptr_eq(&first, &mid));
        assert_eq!(mid.get(100, "system_dc_pv_power"), Some(&Value::Float(100.0)));

        gate.add_permits(1);
        let second = tick.await.unwrap().unwrap();
        assert!(Arc::ptr_eq(&second, &coordinator.snapshot()));
        assert_eq!(second.get(100, "system_dc_pv_power"), Some(&Value::Float(200.0)));
        assert!(second.is_available(100, "system_dc_pv_power"));
        assert_eq!(second.get(225, "battery_voltage"), Some(&Value::Float(48.0)));
        assert!(!second.is_available(225, "battery_voltage"));
    }

    #[tokio::test]
    async fn write_during_a_tick_survives_its_publication() {
        let device = MockTransport::new();
        let coordinator = Arc::new(coordinator(
            &device,
            true,
            &[(227, "vebus_registers"), (228, "system_registers")],
        ));
        let first = coordinator.poll_once().await.unwrap();
        assert_eq!(first.get(227, "vebus_L1_acpowersetpoint"), Some(&Value::Float(0.0)));

        let gate = device.gate();
        let tick = tokio::spawn({
            let coordinator = Arc::clone(&coordinator);
            async move { coordinator.poll_once().await }
        });
        let write = tokio::spawn({
            let coordinator = Arc::clone(&coordinator);
            async move { coordinator.write(227, 37, WriteValue::Number(-1500.0)).await }
        });
        while device.events().len() < 5 || coordinator.state() != State::Writing {
            tokio::task::yield_now().await;
        }
        // The tick reads unit 227 first, then the queued write goes out before unit 228.
        gate.add_permits(1);
        while device.events().len() < 7 {
            tokio::task::yield_now().await;
        }
        let setpoint = Operation::WriteRegister { address: 37, value: 0xFA24 };
        assert_eq!(device.events()[6], Event::Begin(227, setpoint));
        gate.add_permits(1);
        write.await.unwrap().unwrap();
        let written = coordinator.snapshot();
        assert_eq!(written.get(227, "vebus_L1_acpowersetpoint"), Some(&Value::Float(-1500.0)));
        assert!(written.taken_at >= first.taken_at);

        gate.add_permits(1);
        let second = tick.await.unwrap().unwrap();
        assert!(Arc::ptr_eq(&second, &coordinator.snapshot()));
        assert_eq!(second.get(227, "vebus_L1_acpowersetpoint"), Some(&Value::Float(-1500.0)));
        assert_not_interleaved(&device.events());

        // The next tick reads the value back from the device.
        drop(gate);
        let gate = device.gate();
        gate.add_permits(2);
        let third = coordinator.poll_once().await.unwrap();
        assert_eq!(third.get(227, "vebus_L1_acpowersetpoint"), Some(&Value::Float(-1500.0)));
    }

    #[tokio::test(start_paused = true)]
    async fn overrunning_ticks_run_back_to_back() {
        let device = MockTransport::new();
        device.set_latency(Duration::from_secs(100));
        let coordinator = coordinator(&device, false, &[(100, "system_dc_registers")]);
        let started = tokio::time::Instant::now();
        coordinator.start();
        // The first tick overruns three intervals. Later ticks are instant.
        tokio::time::sleep(Duration::from_secs(50)).await;
        device.set_latency(Duration::ZERO);
        tokio::time::sleep(Duration::from_secs(95)).await;
        coordinator.shutdown().await.unwrap();

        let starts = device
            .exchange_starts()
            .iter()
            .map(|s| s.duration_since(started).as_secs_f64().round() as u64)
            .collect::<Vec<_>>();
        // No burst for the missed intervals: one tick right away, then the regular period.
        assert_eq!(starts, [0, 100, 130]);
        assert_not_interleaved(&device.events());
    }

    #[tokio::test(start_paused = true)]
    async fn periodic_poll_until_shutdown() {
        let device = MockTransport::new();
        let coordinator = coordinator(&device, true, &[(100, "system_dc_registers")]);
        let mut snapshots = coordinator.subscribe();
        coordinator.start();
        let first = snapshots.next().await.unwrap();
        device.set_register(100, "system_dc_pv_power", &[7]);
        let started = tokio::time::Instant::now();
        let second = snapshots.next().await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(29));
        assert!(second.taken_at >= first.taken_at);
        assert_eq!(second.get(100, "system_dc_pv_power"), Some(&Value::Float(7.0)));

        coordinator.shutdown().await.unwrap();
        assert_eq!(coordinator.state(), State::TornDown);
        assert!(matches!(coordinator.poll_once().await, Err(Error::TornDown)));
        let write = coordinator.write(100, 850, WriteValue::Number(1.0)).await;
        assert!(matches!(write, Err(Error::TornDown)), "{write:?}");
        assert!(matches!(coordinator.rescan().await, Err(Error::TornDown)));
    }
}
