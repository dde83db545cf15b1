//! A scripted GX device living in memory.

use crate::connection::{Error, Transport};
use crate::modbus::{ExceptionCode, Operation, Response, ResponseKind};
use crate::planner::plan;
use crate::registers::CATALOG;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    Begin(u8, Operation),
    End(u8, Operation),
}

#[derive(Default)]
struct Device {
    images: BTreeMap<u8, BTreeMap<u16, u16>>,
    /// `(unit, start address)` of the block reads that are answered.
    supported: BTreeSet<(u8, u16)>,
    broken: BTreeSet<(u8, u16)>,
    rejected_writes: BTreeSet<(u8, u16)>,
    events: Vec<Event>,
    started: Vec<Instant>,
    connected: bool,
    connects: usize,
    transaction_id: u16,
    latency: Option<Duration>,
    gate: Option<Arc<Semaphore>>,
}

impl Device {
    fn respond(&mut self, unit: u8, operation: Operation) -> Result<ResponseKind, Error> {
        let address = operation.address();
        if self.broken.contains(&(unit, address)) {
            self.connected = false;
            return Err(Error::Closed);
        }
        let image = self.images.entry(unit).or_default();
        Ok(match operation {
            Operation::ReadHoldings { address, count } => {
                if !self.supported.contains(&(unit, address)) {
                    return Ok(exception(operation, ExceptionCode::IllegalDataAddress));
                }
                let words = (address..address + count)
                    .map(|a| image.get(&a).copied().unwrap_or(0))
                    .collect();
                ResponseKind::ReadHoldings { words }
            }
            Operation::WriteRegister { address, value } => {
                if self.rejected_writes.contains(&(unit, address)) {
                    return Ok(exception(operation, ExceptionCode::IllegalDataValue));
                }
                image.insert(address, value);
                ResponseKind::WriteRegister { address, value }
            }
        })
    }
}

fn exception(operation: Operation, code: ExceptionCode) -> ResponseKind {
    ResponseKind::Exception { function: operation.function_code(), code: code as u8 }
}

/// Handles are cheap to clone and share the same device, so a test can keep one to script and
/// inspect the device while another one is owned by an endpoint.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    device: Arc<Mutex<Device>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn device(&self) -> MutexGuard<'_, Device> {
        self.device.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn block_start(block: &str) -> u16 {
        plan(CATALOG.block(block).expect("known block")).address
    }

    /// Answer reads of `block` from `unit`. Other reads are answered with an exception.
    pub(crate) fn support(&self, unit: u8, block: &str) {
        self.device().supported.insert((unit, Self::block_start(block)));
    }

    pub(crate) fn unsupport(&self, unit: u8, block: &str) {
        self.device().supported.remove(&(unit, Self::block_start(block)));
    }

    /// Drop the connection whenever `block` is read from `unit`.
    pub(crate) fn fail_transport(&self, unit: u8, block: &str) {
        self.device().broken.insert((unit, Self::block_start(block)));
    }

    pub(crate) fn repair_transport(&self, unit: u8, block: &str) {
        self.device().broken.remove(&(unit, Self::block_start(block)));
    }

    pub(crate) fn reject_writes(&self, unit: u8, address: u16) {
        self.device().rejected_writes.insert((unit, address));
    }

    pub(crate) fn set_words(&self, unit: u8, address: u16, words: &[u16]) {
        let mut device = self.device();
        let image = device.images.entry(unit).or_default();
        for (address, word) in (address..).zip(words) {
            image.insert(address, *word);
        }
    }

    /// Set the words of a register, looked up by name.
    pub(crate) fn set_register(&self, unit: u8, register: &str, words: &[u16]) {
        let (_, info) = CATALOG.register(register).expect("known register");
        assert_eq!(usize::from(info.words()), words.len(), "width of {register}");
        self.set_words(unit, info.address, words);
    }

    pub(crate) fn word(&self, unit: u8, address: u16) -> Option<u16> {
        self.device().images.get(&unit)?.get(&address).copied()
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.device().events.clone()
    }

    /// When each exchange began, in order.
    pub(crate) fn exchange_starts(&self) -> Vec<Instant> {
        self.device().started.clone()
    }

    pub(crate) fn writes(&self) -> Vec<(u8, u16, u16)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::End(unit, Operation::WriteRegister { address, value }) => {
                    Some((unit, address, value))
                }
                _ => None,
            })
            .collect()
    }

    pub(crate) fn connects(&self) -> usize {
        self.device().connects
    }

    /// Make every exchange take `latency`.
    pub(crate) fn set_latency(&self, latency: Duration) {
        self.device().latency = Some(latency);
    }

    /// From now on, every exchange waits for a permit of the returned semaphore.
    pub(crate) fn gate(&self) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        self.device().gate = Some(Arc::clone(&gate));
        gate
    }
}

impl Transport for MockTransport {
    async fn connect(&mut self) -> Result<(), Error> {
        let mut device = self.device();
        if !device.connected {
            device.connected = true;
            device.connects += 1;
        }
        Ok(())
    }

    async fn exchange(&mut self, unit: u8, operation: Operation) -> Result<Response, Error> {
        self.connect().await?;
        let (latency, gate) = {
            let mut device = self.device();
            device.events.push(Event::Begin(unit, operation));
            device.started.push(Instant::now());
            (device.latency, device.gate.clone())
        };
        if let Some(gate) = gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        let mut device = self.device();
        device.events.push(Event::End(unit, operation));
        device.transaction_id = device.transaction_id.wrapping_add(1);
        let transaction_id = device.transaction_id;
        let kind = device.respond(unit, operation)?;
        Ok(Response { unit, transaction_id, kind })
    }

    async fn close(&mut self) -> Result<(), Error> {
        self.device().connected = false;
        Ok(())
    }
}
