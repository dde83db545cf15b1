//! Permitted ranges for slider writes, derived from the installation's electrical limits.

use crate::registers::{EntityKind, PowerDomain, RegisterInfo, Unit};

/// Nominal voltages and current limits of the installation.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SystemHints {
    pub ac_voltage: f64,
    pub ac_current: f64,
    pub dc_voltage: f64,
    pub dc_current: f64,
}

impl Default for SystemHints {
    fn default() -> Self {
        Self { ac_voltage: 230.0, ac_current: 16.0, dc_voltage: 48.0, dc_current: 100.0 }
    }
}

impl SystemHints {
    fn for_domain(&self, domain: Option<PowerDomain>) -> (f64, f64) {
        match domain {
            Some(PowerDomain::Ac) => (self.ac_voltage, self.ac_current),
            Some(PowerDomain::Dc) | None => (self.dc_voltage, self.dc_current),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Bounds {
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Bounds of a slider register, or `None` for other kinds and units without a known range.
pub fn slider_bounds(info: &RegisterInfo, hints: &SystemHints) -> Option<Bounds> {
    let EntityKind::WriteSlider { domain, signed } = info.kind else {
        return None;
    };
    let (voltage, current) = hints.for_domain(domain);
    let symmetric = |limit: f64| if signed { (-limit, limit) } else { (0.0, limit) };
    let (min, max) = match info.unit {
        Unit::Percent => (0.0, 100.0),
        // Per-cell limits of a LiFePO4 pack, 3 cells per 12V.
        Unit::Volt => (hints.dc_voltage / 3.0 * 2.5, hints.dc_voltage / 3.0 * 3.65),
        Unit::Watt => symmetric((voltage * current / 100.0).round() * 100.0),
        Unit::Ampere => symmetric(current),
        _ => return None,
    };
    let (lowest, highest) = representable(info, signed);
    let (min, max) = (min.max(lowest), max.min(highest));
    let step = info.step.unwrap_or_else(|| default_step(max - min));
    Some(Bounds { min, max, step })
}

/// Display values that fit the single word a slider write transmits.
fn representable(info: &RegisterInfo, signed: bool) -> (f64, f64) {
    let (lowest, highest) = if signed || info.data_type.is_signed() {
        (f64::from(i16::MIN), f64::from(i16::MAX))
    } else {
        (0.0, f64::from(u16::MAX))
    };
    if info.scale == 0.0 {
        (lowest, highest)
    } else if info.scale < 0.0 {
        (highest / info.scale, lowest / info.scale)
    } else {
        (lowest / info.scale, highest / info.scale)
    }
}

fn default_step(span: f64) -> f64 {
    if span >= 3000.0 {
        100.0
    } else if span > 100.0 {
        10.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::CATALOG;

    fn bounds(name: &str, hints: &SystemHints) -> Option<Bounds> {
        slider_bounds(CATALOG.register(name).unwrap().1, hints)
    }

    #[test]
    fn ac_power_setpoint() {
        let hints = SystemHints { ac_voltage: 230.0, ac_current: 16.0, ..Default::default() };
        let b = bounds("vebus_L1_acpowersetpoint", &hints).unwrap();
        assert_eq!(b, Bounds { min: -3700.0, max: 3700.0, step: 100.0 });
        assert!(b.contains(-1500.0));
        assert!(!b.contains(3701.0));
    }

    #[test]
    fn unsigned_ac_power() {
        let hints = SystemHints { ac_voltage: 120.0, ac_current: 10.0, ..Default::default() };
        let b = bounds("vebus_L1_maxfeedinpower", &hints).unwrap();
        assert_eq!(b, Bounds { min: 0.0, max: 1200.0, step: 10.0 });
    }

    #[test]
    fn currents() {
        let hints = SystemHints { ac_current: 32.0, dc_current: 50.0, ..Default::default() };
        let ac = bounds("vebus_activein_currentlimit", &hints).unwrap();
        assert_eq!(ac, Bounds { min: 0.0, max: 32.0, step: 1.0 });
        let dc = bounds("settings_ess_maxchargecurrent", &hints).unwrap();
        assert_eq!(dc, Bounds { min: -50.0, max: 50.0, step: 1.0 });
    }

    #[test]
    fn percent_and_volt() {
        let hints = SystemHints { dc_voltage: 24.0, ..Default::default() };
        let soc = bounds("settings_ess_batterylife_minimumsoc", &hints).unwrap();
        assert_eq!(soc, Bounds { min: 0.0, max: 100.0, step: 1.0 });
        let volt = bounds("settings_systemsetup_maxchargevoltage", &hints).unwrap();
        assert_eq!(volt.min, 20.0);
        assert!((volt.max - 29.2).abs() < 1e-9);
        assert_eq!(volt.step, 0.1);
    }

    #[test]
    fn large_installations_are_limited_to_one_word() {
        let hints = SystemHints { ac_voltage: 230.0, ac_current: 200.0, ..Default::default() };
        let b = bounds("vebus_L1_acpowersetpoint", &hints).unwrap();
        assert_eq!(b, Bounds { min: -32768.0, max: 32767.0, step: 100.0 });
        assert!(!b.contains(40000.0));
        assert!(!b.contains(-40000.0));
        let b = bounds("vebus_L1_acpowersetpoint32", &hints).unwrap();
        assert_eq!((b.min, b.max), (-32768.0, 32767.0));
        // Scaled by 0.01, so the word holds up to 6553500 W.
        let b = bounds("vebus_L1_maxfeedinpower", &hints).unwrap();
        assert_eq!((b.min, b.max), (0.0, 46000.0));
    }

    #[test]
    fn non_sliders_have_no_bounds() {
        let hints = SystemHints::default();
        assert_eq!(bounds("vebus_mode", &hints), None);
        assert_eq!(bounds("battery_voltage", &hints), None);
    }
}
