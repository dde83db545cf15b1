//! Finding out which register blocks each unit behind the GX answers to.

use crate::connection::{self, Endpoint, Transport};
use crate::modbus::Exception;
use crate::planner::plan;
use crate::registers::{CATALOG, RegisterBlock};
use futures::{Stream, StreamExt as _};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Unit IDs the GX assigns to the devices it exposes.
const UNIT_ID_RANGES: [RangeInclusive<u8>; 7] =
    [1..=12, 20..=34, 40..=46, 100..=100, 223..=239, 242..=243, 245..=247];

pub fn candidate_units() -> impl Iterator<Item = u8> + Clone {
    UNIT_ID_RANGES.into_iter().flatten()
}

pub fn is_candidate_unit(unit: u8) -> bool {
    UNIT_ID_RANGES.iter().any(|range| range.contains(&unit))
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("`{0}` is not a unit ID a GX device uses")]
    UnknownUnit(String),
    #[error("`{0}` is not a known register block")]
    UnknownBlock(String),
    #[error("register set is not valid JSON")]
    Json(#[source] serde_json::Error),
    #[error("could not read the register set from {1:?}")]
    Read(#[source] std::io::Error, PathBuf),
    #[error("could not write the register set to {1:?}")]
    Write(#[source] std::io::Error, PathBuf),
}

/// Which blocks each unit supports, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct RegisterSet {
    units: BTreeMap<u8, Vec<&'static RegisterBlock>>,
}

impl RegisterSet {
    pub fn insert(&mut self, unit: u8, block: &'static RegisterBlock) {
        let blocks = self.units.entry(unit).or_default();
        if blocks.iter().any(|b| std::ptr::eq(*b, block)) {
            return;
        }
        blocks.push(block);
        blocks.sort_by_key(|b| catalog_position(b));
    }

    pub fn blocks(&self, unit: u8) -> &[&'static RegisterBlock] {
        self.units.get(&unit).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains_unit(&self, unit: u8) -> bool {
        self.units.contains_key(&unit)
    }

    pub fn units(&self) -> impl Iterator<Item = u8> + '_ {
        self.units.keys().copied()
    }

    /// Every `(unit, block)` pair in polling order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &'static RegisterBlock)> + '_ {
        self.units.iter().flat_map(|(unit, blocks)| blocks.iter().map(move |b| (*unit, *b)))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json).map_err(Error::Json)?;
        let mut set = Self::default();
        for (unit, blocks) in raw {
            let unit_id = unit
                .parse::<u8>()
                .ok()
                .filter(|u| is_candidate_unit(*u))
                .ok_or_else(|| Error::UnknownUnit(unit.clone()))?;
            for name in blocks {
                let block = CATALOG.block(&name).ok_or(Error::UnknownBlock(name))?;
                set.insert(unit_id, block);
            }
        }
        Ok(set)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(Error::Json)
    }

    pub async fn load(path: &Path) -> Result<Self, Error> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::Read(e, path.to_path_buf()))?;
        let set = Self::from_json(&json)?;
        info!(message = "loaded register set", path = %path.display(), units = set.len());
        Ok(set)
    }

    pub async fn save(&self, path: &Path) -> Result<(), Error> {
        let json = self.to_json()?;
        tokio::fs::write(path, json).await.map_err(|e| Error::Write(e, path.to_path_buf()))
    }
}

impl PartialEq for RegisterSet {
    fn eq(&self, other: &Self) -> bool {
        self.units.len() == other.units.len()
            && self.units.iter().zip(&other.units).all(|((ua, ba), (ub, bb))| {
                ua == ub
                    && ba.len() == bb.len()
                    && ba.iter().zip(bb).all(|(a, b)| std::ptr::eq(*a, *b))
            })
    }
}

impl serde::Serialize for RegisterSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.units.len()))?;
        for (unit, blocks) in &self.units {
            let names = blocks.iter().map(|b| b.name).collect::<Vec<_>>();
            map.serialize_entry(&unit.to_string(), &names)?;
        }
        map.end()
    }
}

fn catalog_position(block: &RegisterBlock) -> usize {
    CATALOG.blocks().position(|b| std::ptr::eq(b, block)).unwrap_or(usize::MAX)
}

/// Outcome of reading one block from one unit.
#[derive(Debug)]
pub enum Outcome {
    Supported,
    Exception(Exception),
    Failed(connection::Error),
}

#[derive(Debug)]
pub struct Probe {
    pub unit: u8,
    pub block: &'static RegisterBlock,
    pub outcome: Outcome,
}

impl Probe {
    pub fn is_supported(&self) -> bool {
        matches!(self.outcome, Outcome::Supported)
    }
}

/// Read every catalog block from each of `units`, yielding one [`Probe`] per attempt.
pub fn probe<'a, T: Transport>(
    endpoint: &'a Endpoint<T>,
    units: &'a [u8],
) -> impl Stream<Item = Probe> + Send + 'a {
    async_stream::stream! {
        for &unit in units {
            for block in CATALOG.blocks() {
                let plan = plan(block);
                let outcome = match endpoint.read_holding(unit, plan.address, plan.count).await {
                    Ok(response) => match response.exception() {
                        None => Outcome::Supported,
                        Some(exception) => Outcome::Exception(exception),
                    },
                    Err(e) => Outcome::Failed(e),
                };
                yield Probe { unit, block, outcome };
            }
        }
    }
}

/// Probe `units` and collect the blocks that were read successfully.
pub async fn discover<T: Transport>(endpoint: &Endpoint<T>, units: &[u8]) -> RegisterSet {
    let mut set = RegisterSet::default();
    let mut probes = std::pin::pin!(probe(endpoint, units));
    while let Some(probe) = probes.next().await {
        match &probe.outcome {
            Outcome::Supported => set.insert(probe.unit, probe.block),
            Outcome::Exception(exception) => debug!(
                message = "block not supported",
                unit = probe.unit,
                block = probe.block.name,
                %exception
            ),
            Outcome::Failed(error) => debug!(
                message = "block could not be read",
                unit = probe.unit,
                block = probe.block.name,
                error = (error as &dyn std::error::Error)
            ),
        }
    }
    info!(
        message = "discovery finished",
        units = set.len(),
        blocks = set.iter().count()
    );
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;

    #[test]
    fn candidates() {
        let units = candidate_units().collect::<Vec<_>>();
        assert_eq!(units.len(), 12 + 15 + 7 + 1 + 17 + 2 + 3);
        assert_eq!(units.first(), Some(&1));
        assert_eq!(units.last(), Some(&247));
        assert!(is_candidate_unit(100));
        assert!(is_candidate_unit(228));
        assert!(!is_candidate_unit(0));
        assert!(!is_candidate_unit(13));
        assert!(!is_candidate_unit(244));
    }

    #[tokio::test]
    async fn finds_only_answering_blocks() {
        let transport = MockTransport::new();
        transport.support(228, "system_registers");
        transport.support(228, "system_battery_registers");
        let endpoint = Endpoint::new(transport);
        let units = candidate_units().collect::<Vec<_>>();
        let set = discover(&endpoint, &units).await;
        assert_eq!(set.units().collect::<Vec<_>>(), [228]);
        let names = set.blocks(228).iter().map(|b| b.name).collect::<Vec<_>>();
        assert_eq!(names, ["system_registers", "system_battery_registers"]);
        assert_eq!(
            set.to_json().unwrap().replace(char::is_whitespace, ""),
            r#"{"228":["system_registers","system_battery_registers"]}"#
        );
    }

    #[tokio::test]
    async fn transport_failures_are_not_fatal() {
        let transport = MockTransport::new();
        transport.support(100, "system_registers");
        transport.support(225, "battery_registers");
        transport.fail_transport(100, "system_registers");
        let endpoint = Endpoint::new(transport);
        let probes = probe(&endpoint, &[100, 225]).collect::<Vec<_>>().await;
        assert_eq!(probes.len(), 2 * CATALOG.len());
        let failed = probes.iter().filter(|p| matches!(p.outcome, Outcome::Failed(_))).count();
        assert_eq!(failed, 1);
        let set = discover(&endpoint, &[100, 225]).await;
        assert!(!set.contains_unit(100));
        assert_eq!(set.blocks(225).len(), 1);
    }

    #[test]
    fn json_round_trip_keeps_catalog_order() {
        let set = RegisterSet::from_json(
            r#"{"100": ["system_battery_registers", "system_registers"], "225": ["battery_registers"]}"#,
        )
        .unwrap();
        let names = set.blocks(100).iter().map(|b| b.name).collect::<Vec<_>>();
        assert_eq!(names, ["system_registers", "system_battery_registers"]);
        let reloaded = RegisterSet::from_json(&set.to_json().unwrap()).unwrap();
        assert_eq!(reloaded, set);
    }

    #[test]
    fn json_rejects_unknown_names() {
        let unit = RegisterSet::from_json(r#"{"13": ["system_registers"]}"#).unwrap_err();
        assert!(matches!(unit, Error::UnknownUnit(u) if u == "13"));
        let unit = RegisterSet::from_json(r#"{"vebus": []}"#).unwrap_err();
        assert!(matches!(unit, Error::UnknownUnit(_)));
        let block = RegisterSet::from_json(r#"{"100": ["toaster_registers"]}"#).unwrap_err();
        assert!(matches!(block, Error::UnknownBlock(b) if b == "toaster_registers"));
        assert!(matches!(RegisterSet::from_json("[]"), Err(Error::Json(_))));
    }
}
