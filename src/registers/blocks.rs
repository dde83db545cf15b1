//! Register blocks as documented for the GX Modbus-TCP interface.
//!
//! Every block is read with a single request and decoded in declaration order, so rows must
//! keep ascending addresses. Rows read as `address: type, scale, unit, kind, "name"`.

use super::enumerations::*;
use super::{DataType, EntityKind, Enumeration, PowerDomain, RegisterBlock, RegisterInfo, Unit};

// Convenience aliases for the nicely tabulated `register_block!` rows below.
const U16: DataType = DataType::U16;
const I16: DataType = DataType::I16;
const U32: DataType = DataType::U32;
const I32: DataType = DataType::I32;

const fn string(words: u16) -> DataType {
    DataType::String { words, read_bytes: words * 2 }
}

const R_: EntityKind = EntityKind::ReadNumeric;
const BOOL: EntityKind = EntityKind::ReadBool;
const SWITCH: EntityKind = EntityKind::WriteSwitch;
const BUTTON: EntityKind = EntityKind::WriteButton;
const ALARM: EntityKind = EntityKind::ReadText(&GENERIC_ALARM_LEDGER);

const AC: Option<PowerDomain> = Some(PowerDomain::Ac);
const DC: Option<PowerDomain> = Some(PowerDomain::Dc);
const ANY: Option<PowerDomain> = None;
const SIGNED: bool = true;
const UNSIGNED: bool = false;

const fn text(enumeration: &'static Enumeration) -> EntityKind {
    EntityKind::ReadText(enumeration)
}

const fn select(enumeration: &'static Enumeration) -> EntityKind {
    EntityKind::WriteSelect(enumeration)
}

const fn slider(domain: Option<PowerDomain>, signed: bool) -> EntityKind {
    EntityKind::WriteSlider { domain, signed }
}

macro_rules! register_block {
    ($ident:ident = $name:literal {
        $($address:literal: $ty:expr, $scale:expr, $unit:ident, $kind:expr, $reg:literal
            $(, step = $step:literal)?;)*
    }) => {
        pub(super) static $ident: RegisterBlock = RegisterBlock {
            name: $name,
            registers: &[$(RegisterInfo {
                name: $reg,
                address: $address,
                data_type: $ty,
                unit: Unit::$unit,
                scale: $scale as f64,
                kind: $kind,
                step: step!($($step)?),
            }),*],
        };
    };
}

macro_rules! step {
    () => {
        None
    };
    ($step:literal) => {
        Some($step as f64)
    };
}

pub(super) static ALL_BLOCKS: [&RegisterBlock; 42] = [
    &GAVAZI_GRID_REGISTERS,
    &VEBUS_REGISTERS,
    &BATTERY_REGISTERS,
    &BATTERY_DETAIL_REGISTERS,
    &SOLARCHARGER_REGISTERS,
    &SOLARCHARGER_TRACKER_VOLTAGE_REGISTERS,
    &SOLARCHARGER_TRACKER_REGISTERS,
    &PVINVERTER_REGISTERS,
    &MOTORDRIVE_REGISTERS,
    &CHARGER_REGISTERS,
    &SETTINGS_REGISTERS,
    &GPS_REGISTERS,
    &SETTINGS_ESS_REGISTERS,
    &TANK_REGISTERS,
    &INVERTER_OUTPUT_REGISTERS,
    &INVERTER_BATTERY_REGISTERS,
    &INVERTER_ALARM_REGISTERS,
    &INVERTER_INFO_REGISTERS,
    &INVERTER_ENERGY_REGISTERS,
    &INVERTER_TRACKER_REGISTERS,
    &INVERTER_TRACKER_STATISTICS_REGISTERS,
    &GENSET_REGISTERS,
    &TEMPERATURE_REGISTERS,
    &PULSEMETER_REGISTERS,
    &DIGITALINPUT_REGISTERS,
    &GENERATOR_REGISTERS,
    &METEO_REGISTERS,
    &EVCHARGER_PRODUCTID_REGISTERS,
    &EVCHARGER_REGISTERS,
    &ACLOAD_REGISTERS,
    &FUELCELL_REGISTERS,
    &ALTERNATOR_REGISTERS,
    &DCSOURCE_REGISTERS,
    &DCLOAD_REGISTERS,
    &DCSYSTEM_REGISTERS,
    &MULTI_REGISTERS,
    &SYSTEM_REGISTERS,
    &SYSTEM_BATTERY_REGISTERS,
    &SYSTEM_DC_REGISTERS,
    &SYSTEM_CHARGER_REGISTERS,
    &SYSTEM_POWER_REGISTERS,
    &SYSTEM_BUS_REGISTERS,
];

register_block!(GAVAZI_GRID_REGISTERS = "gavazi_grid_registers" {
    2600: I16, 1, Watt, R_, "grid_L1_power";
    2601: I16, 1, Watt, R_, "grid_L2_power";
    2602: I16, 1, Watt, R_, "grid_L3_power";
    2603: U16, 100, KiloWattHour, R_, "grid_L1_energy_forward";
    2604: U16, 100, KiloWattHour, R_, "grid_L2_energy_forward";
    2605: U16, 100, KiloWattHour, R_, "grid_L3_energy_forward";
    2606: U16, 100, KiloWattHour, R_, "grid_L1_energy_reverse";
    2607: U16, 100, KiloWattHour, R_, "grid_L2_energy_reverse";
    2608: U16, 100, KiloWattHour, R_, "grid_L3_energy_reverse";
    2609: string(7), 1, Empty, R_, "grid_serial";
    2616: U16, 10, Volt, R_, "grid_L1_voltage";
    2617: I16, 10, Ampere, R_, "grid_L1_current";
    2618: U16, 10, Volt, R_, "grid_L2_voltage";
    2619: I16, 10, Ampere, R_, "grid_L2_current";
    2620: U16, 10, Volt, R_, "grid_L3_voltage";
    2621: I16, 10, Ampere, R_, "grid_L3_current";
    2622: U32, 100, KiloWattHour, R_, "grid_L1_energy_forward_total";
    2624: U32, 100, KiloWattHour, R_, "grid_L1_energy_reverse_total";
    2626: U32, 100, KiloWattHour, R_, "grid_L2_energy_forward_total";
    2628: U32, 100, KiloWattHour, R_, "grid_L2_energy_reverse_total";
    2630: U32, 100, KiloWattHour, R_, "grid_L3_energy_forward_total";
    2632: U32, 100, KiloWattHour, R_, "grid_L3_energy_reverse_total";
    2634: U32, 100, KiloWattHour, R_, "grid_energy_forward_total";
    2636: U32, 100, KiloWattHour, R_, "grid_energy_reverse_total";
});

register_block!(VEBUS_REGISTERS = "vebus_registers" {
    3: U16, 10, Volt, R_, "vebus_activein_L1_voltage";
    4: U16, 10, Volt, R_, "vebus_activein_L2_voltage";
    5: U16, 10, Volt, R_, "vebus_activein_L3_voltage";
    6: I16, 10, Ampere, R_, "vebus_activein_L1_current";
    7: I16, 10, Ampere, R_, "vebus_activein_L2_current";
    8: I16, 10, Ampere, R_, "vebus_activein_L3_current";
    9: I16, 100, Hertz, R_, "vebus_activein_L1_frequency";
    10: I16, 100, Hertz, R_, "vebus_activein_L2_frequency";
    11: I16, 100, Hertz, R_, "vebus_activein_L3_frequency";
    12: I16, 0.1, Watt, R_, "vebus_activein_L1_power";
    13: I16, 0.1, Watt, R_, "vebus_activein_L2_power";
    14: I16, 0.1, Watt, R_, "vebus_activein_L3_power";
    15: U16, 10, Volt, R_, "vebus_out_L1_voltage";
    16: U16, 10, Volt, R_, "vebus_out_L2_voltage";
    17: U16, 10, Volt, R_, "vebus_out_L3_voltage";
    18: I16, 10, Ampere, R_, "vebus_out_L1_current";
    19: I16, 10, Ampere, R_, "vebus_out_L2_current";
    20: I16, 10, Ampere, R_, "vebus_out_L3_current";
    21: I16, 100, Hertz, R_, "vebus_out_L1_frequency";
    22: I16, 10, Ampere, slider(AC, UNSIGNED), "vebus_activein_currentlimit";
    23: I16, 0.1, Watt, R_, "vebus_out_L1_power";
    24: I16, 0.1, Watt, R_, "vebus_out_L2_power";
    25: I16, 0.1, Watt, R_, "vebus_out_L3_power";
    26: U16, 100, Volt, R_, "vebus_battery_voltage";
    27: I16, 10, Ampere, R_, "vebus_battery_current";
    28: U16, 1, Empty, R_, "vebus_numberofphases";
    29: U16, 1, Empty, text(&VEBUS_ACTIVEIN_ACTIVEINPUT), "vebus_activein_activeinput";
    30: U16, 10, Percent, slider(ANY, UNSIGNED), "vebus_soc";
    31: U16, 1, Empty, text(&GENERIC_CHARGER_STATE), "vebus_state";
    32: U16, 1, Empty, text(&VEBUS_ERROR), "vebus_error";
    33: U16, 1, Empty, select(&VEBUS_MODE), "vebus_mode";
    34: U16, 1, Empty, ALARM, "vebus_alarm_hightemperature";
    35: U16, 1, Empty, ALARM, "vebus_alarm_lowbattery";
    36: U16, 1, Empty, ALARM, "vebus_alarm_overload";
    37: I16, 1, Watt, slider(AC, SIGNED), "vebus_L1_acpowersetpoint";
    38: U16, 1, Empty, SWITCH, "vebus_disablecharge";
    39: U16, 1, Empty, SWITCH, "vebus_disablefeedin";
    40: I16, 1, Watt, slider(AC, SIGNED), "vebus_L2_acpowersetpoint";
    41: I16, 1, Watt, slider(AC, SIGNED), "vebus_L3_acpowersetpoint";
    42: U16, 1, Empty, ALARM, "vebus_alarm_temperaturesensor";
    43: U16, 1, Empty, ALARM, "vebus_alarm_voltagesensor";
    44: U16, 1, Empty, ALARM, "vebus_L1_alarm_hightemperature";
    45: U16, 1, Empty, ALARM, "vebus_L1_alarm_lowbattery";
    46: U16, 1, Empty, ALARM, "vebus_L1_alarm_overload";
    47: U16, 1, Empty, ALARM, "vebus_L1_alarm_ripple";
    48: U16, 1, Empty, ALARM, "vebus_L2_alarm_hightemperature";
    49: U16, 1, Empty, ALARM, "vebus_L2_alarm_lowbattery";
    50: U16, 1, Empty, ALARM, "vebus_L2_alarm_overload";
    51: U16, 1, Empty, ALARM, "vebus_L2_alarm_ripple";
    52: U16, 1, Empty, ALARM, "vebus_L3_alarm_hightemperature";
    53: U16, 1, Empty, ALARM, "vebus_L3_alarm_lowbattery";
    54: U16, 1, Empty, ALARM, "vebus_L3_alarm_overload";
    55: U16, 1, Empty, ALARM, "vebus_L3_alarm_ripple";
    56: U16, 1, Empty, SWITCH, "vebus_pvinverter_disable";
    57: U16, 1, Empty, BOOL, "vebus_bms_allowtocharge";
    58: U16, 1, Empty, BOOL, "vebus_bms_allowtodischarge";
    59: U16, 1, Empty, BOOL, "vebus_bms_bmsexpected";
    60: U16, 1, Empty, BOOL, "vebus_bms_error";
    61: I16, 10, Celsius, R_, "vebus_battery_temperature";
    62: U16, 1, Empty, BUTTON, "vebus_systemreset";
    63: U16, 1, Empty, ALARM, "vebus_alarm_phaserotation";
    64: U16, 1, Empty, ALARM, "vebus_alarm_gridlost";
    65: U16, 1, Empty, SWITCH, "vebus_donotfeedinovervoltage";
    66: U16, 0.01, Watt, slider(AC, UNSIGNED), "vebus_L1_maxfeedinpower";
    67: U16, 0.01, Watt, slider(AC, UNSIGNED), "vebus_L2_maxfeedinpower";
    68: U16, 0.01, Watt, slider(AC, UNSIGNED), "vebus_L3_maxfeedinpower";
    69: U16, 1, Empty, BOOL, "vebus_state_ignoreacin1";
    70: U16, 1, Empty, BOOL, "vebus_state_ignoreacin2";
    71: U16, 1, Empty, SWITCH, "vebus_targetpowerismaxfeedin";
    72: U16, 1, Empty, SWITCH, "vebus_fixsolaroffsetto100mv";
    73: U16, 1, Empty, BOOL, "vebus_sustain";
    74: U32, 100, KiloWattHour, R_, "vebus_energy_acin1_to_acout";
    76: U32, 100, KiloWattHour, R_, "vebus_energy_acin1_to_battery";
    78: U32, 100, KiloWattHour, R_, "vebus_energy_acin2_to_acout";
    80: U32, 100, KiloWattHour, R_, "vebus_energy_acin2_to_battery";
    82: U32, 100, KiloWattHour, R_, "vebus_energy_acout_to_acin1";
    84: U32, 100, KiloWattHour, R_, "vebus_energy_acout_to_acin2";
    86: U32, 100, KiloWattHour, R_, "vebus_energy_battery_to_acin1";
    88: U32, 100, KiloWattHour, R_, "vebus_energy_battery_to_acin2";
    90: U32, 100, KiloWattHour, R_, "vebus_energy_battery_to_acout";
    92: U32, 100, KiloWattHour, R_, "vebus_energy_acout_to_battery";
    94: U16, 1, Empty, BOOL, "vebus_lowcellvoltageimminent";
    95: U16, 1, Empty, text(&VEBUS_CHARGE_STATE), "vebus_charge_state";
    96: I32, 1, Watt, slider(AC, SIGNED), "vebus_L1_acpowersetpoint32";
    98: I32, 1, Watt, slider(AC, SIGNED), "vebus_L2_acpowersetpoint32";
    100: I32, 1, Watt, slider(AC, SIGNED), "vebus_L3_acpowersetpoint32";
    102: U16, 1, Empty, SWITCH, "vebus_preferrenewableenergy";
});

register_block!(BATTERY_REGISTERS = "battery_registers" {
    259: U16, 100, Volt, R_, "battery_voltage";
    260: U16, 100, Volt, R_, "battery_startervoltage";
    261: I16, 10, Ampere, R_, "battery_current";
    262: I16, 10, Celsius, R_, "battery_temperature";
    263: U16, 100, Volt, R_, "battery_midvoltage";
    264: U16, 100, Percent, R_, "battery_midvoltagedeviation";
    265: I16, -10, AmpereHour, R_, "battery_consumedamphours";
    266: U16, 10, Percent, R_, "battery_soc";
    267: U16, 1, Empty, ALARM, "battery_alarm";
    268: U16, 1, Empty, ALARM, "battery_alarm_lowvoltage";
    269: U16, 1, Empty, ALARM, "battery_alarm_highvoltage";
    270: U16, 1, Empty, ALARM, "battery_alarm_lowstartervoltage";
    271: U16, 1, Empty, ALARM, "battery_alarm_highstartervoltage";
    272: U16, 1, Empty, ALARM, "battery_alarm_lowsoc";
    273: U16, 1, Empty, ALARM, "battery_alarm_lowtemperature";
    274: U16, 1, Empty, ALARM, "battery_alarm_hightemperature";
    275: U16, 1, Empty, ALARM, "battery_alarm_midvoltage";
    276: U16, 1, Empty, ALARM, "battery_alarm_lowfusedvoltage";
    277: U16, 1, Empty, ALARM, "battery_alarm_highfusedvoltage";
    278: U16, 1, Empty, ALARM, "battery_alarm_fuseblown";
    279: U16, 1, Empty, ALARM, "battery_alarm_highinternaltemperature";
    280: U16, 1, Empty, BOOL, "battery_relay";
    281: I16, -10, AmpereHour, R_, "battery_deepestdischarge";
    282: I16, -10, AmpereHour, R_, "battery_lastdischarge";
    283: I16, -10, AmpereHour, R_, "battery_averagedischarge";
    284: U16, 1, Empty, R_, "battery_chargecycles";
    285: U16, 1, Empty, R_, "battery_fulldischarges";
    286: I16, -10, AmpereHour, R_, "battery_totalahdrawn";
    287: U16, 100, Volt, R_, "battery_history_minvoltage";
    288: U16, 100, Volt, R_, "battery_history_maxvoltage";
    289: U16, 0.01, Second, R_, "battery_history_timesincelastfullcharge";
    290: U16, 1, Empty, R_, "battery_history_automaticsyncs";
    291: U16, 1, Empty, R_, "battery_history_lowvoltagealarms";
    292: U16, 1, Empty, R_, "battery_history_highvoltagealarms";
    293: U16, 1, Empty, R_, "battery_history_lowstartervoltagealarms";
    294: U16, 1, Empty, R_, "battery_history_highstartervoltagealarms";
    295: U16, 100, Volt, R_, "battery_history_minstartervoltage";
    296: U16, 100, Volt, R_, "battery_history_maxstartervoltage";
    297: U16, 100, Volt, R_, "battery_history_minfusedvoltage";
    298: U16, 100, Volt, R_, "battery_history_maxfusedvoltage";
    299: U16, 1, Empty, R_, "battery_history_lowfusedvoltagealarms";
    300: U16, 1, Empty, R_, "battery_history_highfusedvoltagealarms";
    301: U16, 10, KiloWattHour, R_, "battery_history_dischargedenergy";
    302: U16, 10, KiloWattHour, R_, "battery_history_chargedenergy";
    303: U16, 0.01, Second, R_, "battery_timetogo";
    304: U16, 10, Percent, R_, "battery_soh";
    305: U16, 10, Volt, R_, "battery_info_maxchargevoltage";
    306: U16, 10, Volt, R_, "battery_info_batterylowvoltage";
    307: U16, 10, Ampere, R_, "battery_info_maxchargecurrent";
    308: U16, 10, Ampere, R_, "battery_info_maxdischargecurrent";
    309: U16, 10, AmpereHour, R_, "battery_capacity";
    310: I32, 1, Empty, R_, "battery_diagnostics_lasterror_1_time";
    312: I32, 1, Empty, R_, "battery_diagnostics_lasterror_2_time";
    314: I32, 1, Empty, R_, "battery_diagnostics_lasterror_3_time";
    316: I32, 1, Empty, R_, "battery_diagnostics_lasterror_4_time";
    318: I16, 10, Celsius, R_, "battery_system_mincelltemperature";
    319: I16, 10, Celsius, R_, "battery_system_maxcelltemperature";
    320: U16, 1, Empty, ALARM, "battery_alarm_highchargecurrent";
    321: U16, 1, Empty, ALARM, "battery_alarm_highdischargecurrent";
    322: U16, 1, Empty, ALARM, "battery_alarm_cellimbalance";
    323: U16, 1, Empty, ALARM, "battery_alarm_internalfailure";
    324: U16, 1, Empty, ALARM, "battery_alarm_highchargetemperature";
    325: U16, 1, Empty, ALARM, "battery_alarm_lowchargetemperature";
    326: U16, 1, Empty, ALARM, "battery_alarm_lowcellvoltage";
});

register_block!(BATTERY_DETAIL_REGISTERS = "battery_detail_registers" {
    1282: U16, 1, Empty, text(&BATTERY_STATE), "battery_state";
    1283: U16, 1, Empty, text(&BATTERY_ERROR), "battery_error";
    1284: U16, 1, Empty, BOOL, "battery_system_switch";
    1285: U16, 1, Empty, BOOL, "battery_balancing";
    1286: U16, 1, Empty, R_, "battery_system_numberofbatteries";
    1287: U16, 1, Empty, R_, "battery_system_batteriesparallel";
    1288: U16, 1, Empty, R_, "battery_system_batteriesseries";
    1289: U16, 1, Empty, R_, "battery_system_numberofcellsperbattery";
    1290: U16, 100, Volt, R_, "battery_system_mincellvoltage";
    1291: U16, 100, Volt, R_, "battery_system_maxcellvoltage";
    1292: U16, 1, Empty, R_, "battery_diagnostics_shutdownsdueerror";
    1293: U16, 1, Empty, text(&BATTERY_ERROR), "battery_diagnostics_lasterror_1";
    1294: U16, 1, Empty, text(&BATTERY_ERROR), "battery_diagnostics_lasterror_2";
    1295: U16, 1, Empty, text(&BATTERY_ERROR), "battery_diagnostics_lasterror_3";
    1296: U16, 1, Empty, text(&BATTERY_ERROR), "battery_diagnostics_lasterror_4";
    1297: U16, 1, Empty, BOOL, "battery_io_allowtocharge";
    1298: U16, 1, Empty, BOOL, "battery_io_allowtodischarge";
    1299: U16, 1, Empty, BOOL, "battery_io_externalrelay";
    1300: U16, 100, Volt, R_, "battery_history_minimumcellvoltage";
    1301: U16, 100, Volt, R_, "battery_history_maximumcellvoltage";
    1302: U16, 1, Empty, R_, "battery_system_numberofmodulesoffline";
    1303: U16, 1, Empty, R_, "battery_system_numberofmodulesonline";
    1304: U16, 1, Empty, R_, "battery_system_numberofmodulesblockingcharge";
    1305: U16, 1, Empty, R_, "battery_system_numberofmodulesblockingdischarge";
    1306: string(4), 1, Empty, R_, "battery_system_minvoltagecellid";
    1310: string(4), 1, Empty, R_, "battery_system_maxvoltagecellid";
    1314: string(4), 1, Empty, R_, "battery_system_mintemperaturecellid";
    1318: string(4), 1, Empty, R_, "battery_system_maxtemperaturecellid";
});

register_block!(SOLARCHARGER_REGISTERS = "solarcharger_registers" {
    771: U16, 100, Volt, R_, "solarcharger_battery_voltage";
    772: I16, 10, Ampere, R_, "solarcharger_battery_current";
    773: I16, 10, Celsius, R_, "solarcharger_battery_temperature";
    774: U16, 1, Empty, select(&SOLARCHARGER_MODE), "solarcharger_mode";
    775: U16, 1, Empty, text(&SOLARCHARGER_STATE), "solarcharger_state";
    776: U16, 100, Volt, R_, "solarcharger_pv_voltage";
    777: I16, 10, Ampere, R_, "solarcharger_pv_current";
    778: U16, 1, Empty, text(&SOLARCHARGER_EQUALIZATION_PENDING), "solarcharger_equalization_pending";
    779: U16, 10, Second, R_, "solarcharger_equalization_time_remaining";
    780: U16, 1, Empty, BOOL, "solarcharger_relay";
    781: U16, 1, Empty, ALARM, "solarcharger_alarm";
    782: U16, 1, Empty, ALARM, "solarcharger_alarm_lowvoltage";
    783: U16, 1, Empty, ALARM, "solarcharger_alarm_highvoltage";
    784: U16, 10, KiloWattHour, R_, "solarcharger_yield_today";
    785: U16, 1, Watt, R_, "solarcharger_maxpower_today";
    786: U16, 10, KiloWattHour, R_, "solarcharger_yield_yesterday";
    787: U16, 1, Watt, R_, "solarcharger_maxpower_yesterday";
    788: U16, 1, Empty, text(&GENERIC_CHARGER_ERRORCODE), "solarcharger_errorcode";
    789: U16, 10, Watt, R_, "solarcharger_yield_power";
    790: U16, 10, KiloWattHour, R_, "solarcharger_yield_user";
    791: U16, 1, Empty, text(&MPP_OPERATIONMODE), "solarcharger_mppoperationmode";
});

register_block!(SOLARCHARGER_TRACKER_VOLTAGE_REGISTERS = "solarcharger_tracker_voltage_registers" {
    3700: U16, 100, Volt, R_, "solarcharger_tracker_0_voltage";
    3701: U16, 100, Volt, R_, "solarcharger_tracker_1_voltage";
    3702: U16, 100, Volt, R_, "solarcharger_tracker_2_voltage";
    3703: U16, 100, Volt, R_, "solarcharger_tracker_3_voltage";
});

register_block!(SOLARCHARGER_TRACKER_REGISTERS = "solarcharger_tracker_registers" {
    3708: U16, 10, KiloWattHour, R_, "solarcharger_tracker_0_yield_today";
    3709: U16, 10, KiloWattHour, R_, "solarcharger_tracker_1_yield_today";
    3710: U16, 10, KiloWattHour, R_, "solarcharger_tracker_2_yield_today";
    3711: U16, 10, KiloWattHour, R_, "solarcharger_tracker_3_yield_today";
    3712: U16, 10, KiloWattHour, R_, "solarcharger_tracker_0_yield_yesterday";
    3713: U16, 10, KiloWattHour, R_, "solarcharger_tracker_1_yield_yesterday";
    3714: U16, 10, KiloWattHour, R_, "solarcharger_tracker_2_yield_yesterday";
    3715: U16, 10, KiloWattHour, R_, "solarcharger_tracker_3_yield_yesterday";
    3716: U16, 1, Watt, R_, "solarcharger_tracker_0_maxpower_today";
    3717: U16, 1, Watt, R_, "solarcharger_tracker_1_maxpower_today";
    3718: U16, 1, Watt, R_, "solarcharger_tracker_2_maxpower_today";
    3719: U16, 1, Watt, R_, "solarcharger_tracker_3_maxpower_today";
    3720: U16, 1, Watt, R_, "solarcharger_tracker_0_maxpower_yesterday";
    3721: U16, 1, Watt, R_, "solarcharger_tracker_1_maxpower_yesterday";
    3722: U16, 1, Watt, R_, "solarcharger_tracker_2_maxpower_yesterday";
    3723: U16, 1, Watt, R_, "solarcharger_tracker_3_maxpower_yesterday";
    3724: U16, 1, Watt, R_, "solarcharger_tracker_0_pv_power";
    3725: U16, 1, Watt, R_, "solarcharger_tracker_1_pv_power";
    3726: U16, 1, Watt, R_, "solarcharger_tracker_2_pv_power";
    3727: U16, 1, Watt, R_, "solarcharger_tracker_3_pv_power";
});

register_block!(PVINVERTER_REGISTERS = "pvinverter_registers" {
    1026: U16, 1, Empty, text(&PVINVERTER_POSITION), "pvinverter_position";
    1027: U16, 10, Volt, R_, "pvinverter_L1_voltage";
    1028: I16, 10, Ampere, R_, "pvinverter_L1_current";
    1029: U16, 1, Watt, R_, "pvinverter_L1_power";
    1030: U16, 100, KiloWattHour, R_, "pvinverter_L1_energy_forward";
    1031: U16, 10, Volt, R_, "pvinverter_L2_voltage";
    1032: I16, 10, Ampere, R_, "pvinverter_L2_current";
    1033: U16, 1, Watt, R_, "pvinverter_L2_power";
    1034: U16, 100, KiloWattHour, R_, "pvinverter_L2_energy_forward";
    1035: U16, 10, Volt, R_, "pvinverter_L3_voltage";
    1036: I16, 10, Ampere, R_, "pvinverter_L3_current";
    1037: U16, 1, Watt, R_, "pvinverter_L3_power";
    1038: U16, 100, KiloWattHour, R_, "pvinverter_L3_energy_forward";
    1039: string(7), 1, Empty, R_, "pvinverter_serial";
    1046: U32, 100, KiloWattHour, R_, "pvinverter_L1_energy_forward_total";
    1048: U32, 100, KiloWattHour, R_, "pvinverter_L2_energy_forward_total";
    1050: U32, 100, KiloWattHour, R_, "pvinverter_L3_energy_forward_total";
});

register_block!(MOTORDRIVE_REGISTERS = "motordrive_registers" {
    2048: I16, 1, Rpm, R_, "motordrive_rpm";
    2049: I16, 10, Celsius, R_, "motordrive_motor_temperature";
    2050: U16, 100, Volt, R_, "motordrive_voltage";
    2051: I16, 10, Ampere, R_, "motordrive_current";
    2052: I16, 10, Watt, R_, "motordrive_power";
    2053: I16, 10, Celsius, R_, "motordrive_controller_temperature";
});

register_block!(CHARGER_REGISTERS = "charger_registers" {
    2307: U16, 100, Volt, R_, "charger_voltage_output_1";
    2308: I16, 10, Ampere, R_, "charger_current_output_1";
    2309: I16, 10, Celsius, R_, "charger_temperature";
    2310: U16, 100, Volt, R_, "charger_voltage_output_2";
    2311: I16, 10, Ampere, R_, "charger_current_output_2";
    2312: U16, 100, Volt, R_, "charger_voltage_output_3";
    2313: I16, 10, Ampere, R_, "charger_current_output_3";
    2314: I16, 10, Ampere, R_, "charger_L1_current";
    2315: U32, 1, Watt, R_, "charger_L1_power";
    2317: I16, 10, Ampere, slider(AC, UNSIGNED), "charger_current_limit";
    2318: U16, 1, Empty, select(&CHARGER_MODE), "charger_mode";
    2319: U16, 1, Empty, text(&GENERIC_CHARGER_STATE), "charger_state";
    2320: U16, 1, Empty, text(&GENERIC_CHARGER_ERRORCODE), "charger_errorcode";
    2321: U16, 1, Empty, BOOL, "charger_relay";
    2322: U16, 1, Empty, ALARM, "charger_alarm_lowvoltage";
    2323: U16, 1, Empty, ALARM, "charger_alarm_highvoltage";
});

register_block!(SETTINGS_REGISTERS = "settings_registers" {
    2700: I16, 1, Watt, slider(AC, SIGNED), "settings_ess_acpowersetpoint";
    2701: U16, 1, Percent, slider(ANY, UNSIGNED), "settings_ess_maxchargepercentage", step = 1;
    2702: U16, 1, Percent, slider(ANY, UNSIGNED), "settings_ess_maxdischargepercentage", step = 1;
    2703: I16, 0.01, Watt, slider(AC, SIGNED), "settings_ess_acpowersetpoint2";
    2704: U16, 0.1, Watt, slider(AC, UNSIGNED), "settings_ess_maxdischargepower";
    2705: I16, 1, Ampere, slider(DC, SIGNED), "settings_ess_maxchargecurrent";
    2706: I16, 0.01, Watt, slider(AC, SIGNED), "settings_ess_maxfeedinpower";
    2707: I16, 1, Empty, SWITCH, "settings_ess_overvoltagefeedin";
    2708: I16, 1, Empty, SWITCH, "settings_ess_preventfeedback";
    2709: I16, 1, Empty, BOOL, "settings_ess_feedinpowerlimit";
    2710: U16, 10, Volt, slider(DC, UNSIGNED), "settings_systemsetup_maxchargevoltage", step = 0.1;
});

register_block!(GPS_REGISTERS = "gps_registers" {
    2800: I32, 10000000, Degree, R_, "gps_latitude";
    2802: I32, 10000000, Degree, R_, "gps_longitude";
    2804: U16, 100, Degree, R_, "gps_course";
    2805: U16, 100, MetrePerSecond, R_, "gps_speed";
    2806: U16, 1, Empty, BOOL, "gps_fix";
    2807: U16, 1, Empty, R_, "gps_numberofsatellites";
    2808: I32, 10, Metre, R_, "gps_altitude";
});

register_block!(SETTINGS_ESS_REGISTERS = "settings_ess_registers" {
    2900: U16, 1, Empty, text(&ESS_BATTERYLIFE_STATE), "settings_ess_batterylife_state";
    2901: U16, 10, Percent, slider(ANY, UNSIGNED), "settings_ess_batterylife_minimumsoc";
    2902: U16, 1, Empty, select(&ESS_MODE), "settings_ess_mode";
    2903: U16, 10, Percent, R_, "settings_ess_batterylife_soclimit";
});

register_block!(TANK_REGISTERS = "tank_registers" {
    3000: U16, 1, Empty, R_, "tank_productid";
    3001: U32, 10000, CubicMetre, R_, "tank_capacity";
    3003: U16, 1, Empty, text(&TANK_FLUIDTYPE), "tank_fluidtype";
    3004: U16, 10, Percent, R_, "tank_level";
    3005: U32, 10000, CubicMetre, R_, "tank_remaining";
    3007: U16, 1, Empty, text(&TANK_STATUS), "tank_status";
});

register_block!(INVERTER_OUTPUT_REGISTERS = "inverter_output_registers" {
    3100: I16, 10, Ampere, R_, "inverter_output_L1_current";
    3101: U16, 10, Volt, R_, "inverter_output_L1_voltage";
    3102: I16, 0.1, Watt, R_, "inverter_output_L1_power";
});

register_block!(INVERTER_BATTERY_REGISTERS = "inverter_battery_registers" {
    3105: U16, 100, Volt, R_, "inverter_battery_voltage";
    3106: I16, 10, Ampere, R_, "inverter_battery_current";
});

register_block!(INVERTER_ALARM_REGISTERS = "inverter_alarm_registers" {
    3110: U16, 1, Empty, ALARM, "inverter_alarm_hightemperature";
    3111: U16, 1, Empty, ALARM, "inverter_alarm_highbatteryvoltage";
    3112: U16, 1, Empty, ALARM, "inverter_alarm_highacoutvoltage";
    3113: U16, 1, Empty, ALARM, "inverter_alarm_lowtemperature";
    3114: U16, 1, Empty, ALARM, "inverter_alarm_lowbatteryvoltage";
    3115: U16, 1, Empty, ALARM, "inverter_alarm_lowacoutvoltage";
    3116: U16, 1, Empty, ALARM, "inverter_alarm_overload";
    3117: U16, 1, Empty, ALARM, "inverter_alarm_ripple";
});

register_block!(INVERTER_INFO_REGISTERS = "inverter_info_registers" {
    3125: U16, 0, Empty, R_, "inverter_info_firmwareversion";
    3126: U16, 1, Empty, select(&INVERTER_MODE), "inverter_info_mode";
    3127: U16, 1, Empty, R_, "inverter_info_productid";
    3128: U16, 1, Empty, text(&GENERIC_CHARGER_STATE), "inverter_info_state";
});

register_block!(INVERTER_ENERGY_REGISTERS = "inverter_energy_registers" {
    3130: U32, 100, KiloWattHour, R_, "inverter_energy_yield_user";
    3132: U32, 100, KiloWattHour, R_, "inverter_energy_yield_system";
});

register_block!(INVERTER_TRACKER_REGISTERS = "inverter_tracker_registers" {
    3134: U16, 10, Volt, R_, "inverter_tracker_pv_voltage";
    3135: U16, 1, Empty, text(&MPP_OPERATIONMODE), "inverter_tracker_operationmode";
    3136: U16, 10, Volt, R_, "inverter_tracker_0_voltage";
    3137: U16, 10, Volt, R_, "inverter_tracker_1_voltage";
    3138: U16, 10, Volt, R_, "inverter_tracker_2_voltage";
    3139: U16, 10, Volt, R_, "inverter_tracker_3_voltage";
});

register_block!(INVERTER_TRACKER_STATISTICS_REGISTERS = "inverter_tracker_statistics_registers" {
    3140: U16, 10, KiloWattHour, R_, "inverter_tracker_0_yield_today";
    3141: U16, 10, KiloWattHour, R_, "inverter_tracker_1_yield_today";
    3142: U16, 10, KiloWattHour, R_, "inverter_tracker_2_yield_today";
    3143: U16, 10, KiloWattHour, R_, "inverter_tracker_3_yield_today";
    3144: U16, 10, KiloWattHour, R_, "inverter_tracker_0_yield_yesterday";
    3145: U16, 10, KiloWattHour, R_, "inverter_tracker_1_yield_yesterday";
    3146: U16, 10, KiloWattHour, R_, "inverter_tracker_2_yield_yesterday";
    3147: U16, 10, KiloWattHour, R_, "inverter_tracker_3_yield_yesterday";
    3148: U16, 1, Watt, R_, "inverter_tracker_0_maxpower_today";
    3149: U16, 1, Watt, R_, "inverter_tracker_1_maxpower_today";
    3150: U16, 1, Watt, R_, "inverter_tracker_2_maxpower_today";
    3151: U16, 1, Watt, R_, "inverter_tracker_3_maxpower_today";
    3152: U16, 1, Watt, R_, "inverter_tracker_0_maxpower_yesterday";
    3153: U16, 1, Watt, R_, "inverter_tracker_1_maxpower_yesterday";
    3154: U16, 1, Watt, R_, "inverter_tracker_2_maxpower_yesterday";
    3155: U16, 1, Watt, R_, "inverter_tracker_3_maxpower_yesterday";
    3156: U16, 1, Watt, R_, "inverter_tracker_0_pv_power";
    3157: U16, 1, Watt, R_, "inverter_tracker_1_pv_power";
    3158: U16, 1, Watt, R_, "inverter_tracker_2_pv_power";
    3159: U16, 1, Watt, R_, "inverter_tracker_3_pv_power";
});

register_block!(GENSET_REGISTERS = "genset_registers" {
    3200: U16, 10, Volt, R_, "genset_L1_voltage";
    3201: U16, 10, Volt, R_, "genset_L2_voltage";
    3202: U16, 10, Volt, R_, "genset_L3_voltage";
    3203: I16, 10, Ampere, R_, "genset_L1_current";
    3204: I16, 10, Ampere, R_, "genset_L2_current";
    3205: I16, 10, Ampere, R_, "genset_L3_current";
    3206: I16, 1, Watt, R_, "genset_L1_power";
    3207: I16, 1, Watt, R_, "genset_L2_power";
    3208: I16, 1, Watt, R_, "genset_L3_power";
    3209: U16, 100, Hertz, R_, "genset_L1_frequency";
    3210: U16, 100, Hertz, R_, "genset_L2_frequency";
    3211: U16, 100, Hertz, R_, "genset_L3_frequency";
    3212: U16, 1, Empty, R_, "genset_productid";
    3213: U16, 1, Empty, text(&GENSET_STATUS), "genset_statuscode";
    3214: U16, 1, Empty, text(&GENSET_ERRORCODE), "genset_errorcode";
    3215: U16, 1, Empty, BOOL, "genset_autostart";
    3216: U16, 1, Percent, R_, "genset_engine_load";
    3217: U16, 1, Rpm, R_, "genset_engine_speed";
    3218: U16, 0.01, Second, R_, "genset_engine_operatinghours";
    3219: I16, 10, Celsius, R_, "genset_engine_coolanttemperature";
    3220: I16, 10, Celsius, R_, "genset_engine_windingtemperature";
    3221: I16, 10, Celsius, R_, "genset_engine_exhausttemperature";
    3222: U16, 100, Volt, R_, "genset_startervoltage";
    3223: U16, 1, Empty, SWITCH, "genset_start";
});

register_block!(TEMPERATURE_REGISTERS = "temperature_registers" {
    3300: U16, 1, Empty, R_, "temperature_productid";
    3301: U16, 100, Empty, R_, "temperature_scale";
    3302: I16, 100, Empty, R_, "temperature_offset";
    3303: U16, 1, Empty, text(&TEMPERATURE_TYPE), "temperature_type";
    3304: I16, 100, Celsius, R_, "temperature_temperature";
    3305: U16, 1, Empty, text(&TEMPERATURE_STATUS), "temperature_status";
    3306: U16, 10, Percent, R_, "temperature_humidity";
    3307: U16, 100, Volt, R_, "temperature_batteryvoltage";
    3308: U16, 1, HectoPascal, R_, "temperature_pressure";
});

register_block!(PULSEMETER_REGISTERS = "pulsemeter_registers" {
    3400: U32, 1, CubicMetre, R_, "pulsemeter_aggregate";
    3402: U32, 1, Empty, R_, "pulsemeter_count";
});

register_block!(DIGITALINPUT_REGISTERS = "digitalinput_registers" {
    3420: U32, 1, Empty, R_, "digitalinput_count";
    3422: U16, 1, Empty, text(&DIGITALINPUT_STATE), "digitalinput_state";
    3423: U16, 1, Empty, text(&DIGITALINPUT_ALARM), "digitalinput_alarm";
    3424: U16, 1, Empty, text(&DIGITALINPUT_TYPE), "digitalinput_type";
});

register_block!(GENERATOR_REGISTERS = "generator_registers" {
    3500: U16, 1, Empty, SWITCH, "generator_manualstart";
    3501: U16, 1, Empty, text(&GENERATOR_RUNNINGBYCONDITIONCODE), "generator_runningbyconditioncode";
    3502: U16, 1, Second, R_, "generator_runtime";
    3503: U16, 1, Empty, BOOL, "generator_quiethours";
    3504: U32, 1, Second, R_, "generator_runtime_total";
    3506: U16, 1, Empty, text(&GENERATOR_STATE), "generator_state";
    3507: U16, 1, Empty, text(&GENERATOR_ERROR), "generator_error";
    3508: U16, 1, Empty, ALARM, "generator_alarm_nogeneratoratacin";
    3509: U16, 1, Empty, SWITCH, "generator_autostartenabled";
});

register_block!(METEO_REGISTERS = "meteo_registers" {
    3600: U16, 10, WattPerSquareMetre, R_, "meteo_irradiance";
    3601: U16, 10, MetrePerSecond, R_, "meteo_windspeed";
    3602: I16, 10, Celsius, R_, "meteo_celltemperature";
    3603: I16, 10, Celsius, R_, "meteo_externaltemperature";
    3604: I16, 10, Celsius, R_, "meteo_externaltemperature2";
});

register_block!(EVCHARGER_PRODUCTID_REGISTERS = "evcharger_productid_registers" {
    3800: U16, 1, Empty, R_, "evcharger_productid";
    3802: U32, 0, Empty, R_, "evcharger_firmwareversion";
    3804: string(6), 1, Empty, R_, "evcharger_serial";
    3810: string(4), 1, Empty, R_, "evcharger_model";
});

register_block!(EVCHARGER_REGISTERS = "evcharger_registers" {
    3814: U16, 1, Ampere, slider(AC, UNSIGNED), "evcharger_maxcurrent";
    3815: U16, 1, Empty, select(&EVCHARGER_MODE), "evcharger_mode";
    3816: U32, 100, KiloWattHour, R_, "evcharger_energy_forward";
    3818: U16, 1, Watt, R_, "evcharger_L1_power";
    3819: U16, 1, Watt, R_, "evcharger_L2_power";
    3820: U16, 1, Watt, R_, "evcharger_L3_power";
    3821: U16, 1, Watt, R_, "evcharger_total_power";
    3822: U16, 0.01, Second, R_, "evcharger_chargingtime";
    3823: U16, 1, Ampere, R_, "evcharger_current";
    3824: U16, 1, Empty, text(&EVCHARGER_STATUS), "evcharger_status";
    3825: U16, 1, Ampere, slider(AC, UNSIGNED), "evcharger_setcurrent";
    3826: U16, 1, Empty, SWITCH, "evcharger_startstop";
    3827: U16, 1, Empty, text(&EVCHARGER_POSITION), "evcharger_position";
});

register_block!(ACLOAD_REGISTERS = "acload_registers" {
    3900: U16, 1, Watt, R_, "acload_L1_power";
    3901: U16, 1, Watt, R_, "acload_L2_power";
    3902: U16, 1, Watt, R_, "acload_L3_power";
    3903: string(7), 1, Empty, R_, "acload_serial";
    3910: U16, 10, Volt, R_, "acload_L1_voltage";
    3911: U16, 10, Ampere, R_, "acload_L1_current";
    3912: U16, 10, Volt, R_, "acload_L2_voltage";
    3913: U16, 10, Ampere, R_, "acload_L2_current";
    3914: U16, 10, Volt, R_, "acload_L3_voltage";
    3915: U16, 10, Ampere, R_, "acload_L3_current";
    3916: U32, 100, KiloWattHour, R_, "acload_L1_energy_forward";
    3918: U32, 100, KiloWattHour, R_, "acload_L2_energy_forward";
    3920: U32, 100, KiloWattHour, R_, "acload_L3_energy_forward";
});

register_block!(FUELCELL_REGISTERS = "fuelcell_registers" {
    4000: U16, 100, Volt, R_, "fuelcell_battery_voltage";
    4001: I16, 10, Ampere, R_, "fuelcell_battery_current";
    4002: U16, 100, Volt, R_, "fuelcell_starter_voltage";
    4003: I16, 10, Celsius, R_, "fuelcell_temperature";
    4004: U32, 100, KiloWattHour, R_, "fuelcell_history_energyout";
    4006: U16, 1, Empty, ALARM, "fuelcell_alarm_lowvoltage";
    4007: U16, 1, Empty, ALARM, "fuelcell_alarm_highvoltage";
    4008: U16, 1, Empty, ALARM, "fuelcell_alarm_lowstartervoltage";
    4009: U16, 1, Empty, ALARM, "fuelcell_alarm_highstartervoltage";
    4010: U16, 1, Empty, ALARM, "fuelcell_alarm_lowtemperature";
    4011: U16, 1, Empty, ALARM, "fuelcell_alarm_hightemperature";
});

register_block!(ALTERNATOR_REGISTERS = "alternator_registers" {
    4100: U16, 100, Volt, R_, "alternator_battery_voltage";
    4101: I16, 10, Ampere, R_, "alternator_battery_current";
    4102: U16, 100, Volt, R_, "alternator_startervoltage";
    4103: I16, 10, Celsius, R_, "alternator_temperature";
    4104: U32, 100, KiloWattHour, R_, "alternator_history_energyout";
    4106: U16, 1, Empty, ALARM, "alternator_alarm_lowvoltage";
    4107: U16, 1, Empty, ALARM, "alternator_alarm_highvoltage";
    4108: U16, 1, Empty, ALARM, "alternator_alarm_lowstartervoltage";
    4109: U16, 1, Empty, ALARM, "alternator_alarm_highstartervoltage";
    4110: U16, 1, Empty, ALARM, "alternator_alarm_lowtemperature";
    4111: U16, 1, Empty, ALARM, "alternator_alarm_hightemperature";
    4112: U16, 1, Empty, text(&GENERIC_CHARGER_STATE), "alternator_state";
    4113: U16, 1, Empty, text(&GENERIC_CHARGER_ERRORCODE), "alternator_errorcode";
    4114: U16, 1, Rpm, R_, "alternator_engine_speed";
    4115: U16, 1, Rpm, R_, "alternator_alternator_speed";
    4116: U16, 1, Percent, R_, "alternator_fielddrive";
});

register_block!(DCSOURCE_REGISTERS = "dcsource_registers" {
    4200: U16, 100, Volt, R_, "dcsource_battery_voltage";
    4201: I16, 10, Ampere, R_, "dcsource_battery_current";
    4202: U16, 100, Volt, R_, "dcsource_starter_voltage";
    4203: I16, 10, Celsius, R_, "dcsource_temperature";
    4204: U32, 100, KiloWattHour, R_, "dcsource_history_energyout";
    4206: U16, 1, Empty, ALARM, "dcsource_alarm_lowvoltage";
    4207: U16, 1, Empty, ALARM, "dcsource_alarm_highvoltage";
    4208: U16, 1, Empty, ALARM, "dcsource_alarm_lowstartervoltage";
    4209: U16, 1, Empty, ALARM, "dcsource_alarm_highstartervoltage";
    4210: U16, 1, Empty, ALARM, "dcsource_alarm_lowtemperature";
    4211: U16, 1, Empty, ALARM, "dcsource_alarm_hightemperature";
});

register_block!(DCLOAD_REGISTERS = "dcload_registers" {
    4300: U16, 100, Volt, R_, "dcload_battery_voltage";
    4301: I16, 10, Ampere, R_, "dcload_battery_current";
    4302: U16, 100, Volt, R_, "dcload_starter_voltage";
    4303: I16, 10, Celsius, R_, "dcload_temperature";
    4304: U32, 100, KiloWattHour, R_, "dcload_history_energyin";
    4306: U16, 1, Empty, ALARM, "dcload_alarm_lowvoltage";
    4307: U16, 1, Empty, ALARM, "dcload_alarm_highvoltage";
    4308: U16, 1, Empty, ALARM, "dcload_alarm_lowstartervoltage";
    4309: U16, 1, Empty, ALARM, "dcload_alarm_highstartervoltage";
    4310: U16, 1, Empty, ALARM, "dcload_alarm_lowtemperature";
    4311: U16, 1, Empty, ALARM, "dcload_alarm_hightemperature";
});

register_block!(DCSYSTEM_REGISTERS = "dcsystem_registers" {
    4400: U16, 100, Volt, R_, "dcsystem_battery_voltage";
    4401: I16, 10, Ampere, R_, "dcsystem_battery_current";
    4402: U16, 100, Volt, R_, "dcsystem_starter_voltage";
    4403: I16, 10, Celsius, R_, "dcsystem_temperature";
    4404: U32, 100, KiloWattHour, R_, "dcsystem_history_energyout";
    4406: U32, 100, KiloWattHour, R_, "dcsystem_history_energyin";
    4408: U16, 1, Empty, ALARM, "dcsystem_alarm_lowvoltage";
    4409: U16, 1, Empty, ALARM, "dcsystem_alarm_highvoltage";
    4410: U16, 1, Empty, ALARM, "dcsystem_alarm_lowstartervoltage";
    4411: U16, 1, Empty, ALARM, "dcsystem_alarm_highstartervoltage";
    4412: U16, 1, Empty, ALARM, "dcsystem_alarm_lowtemperature";
    4413: U16, 1, Empty, ALARM, "dcsystem_alarm_hightemperature";
});

register_block!(MULTI_REGISTERS = "multi_registers" {
    4500: U16, 10, Volt, R_, "multi_acin1_L1_voltage";
    4501: U16, 10, Volt, R_, "multi_acin1_L2_voltage";
    4502: U16, 10, Volt, R_, "multi_acin1_L3_voltage";
    4503: U16, 10, Ampere, R_, "multi_acin1_L1_current";
    4504: U16, 10, Ampere, R_, "multi_acin1_L2_current";
    4505: U16, 10, Ampere, R_, "multi_acin1_L3_current";
    4506: I16, 1, Watt, R_, "multi_acin1_L1_power";
    4507: I16, 1, Watt, R_, "multi_acin1_L2_power";
    4508: I16, 1, Watt, R_, "multi_acin1_L3_power";
    4509: U16, 100, Hertz, R_, "multi_acin1_frequency";
    4510: U16, 10, Volt, R_, "multi_acout_L1_voltage";
    4511: U16, 10, Volt, R_, "multi_acout_L2_voltage";
    4512: U16, 10, Volt, R_, "multi_acout_L3_voltage";
    4513: U16, 10, Ampere, R_, "multi_acout_L1_current";
    4514: U16, 10, Ampere, R_, "multi_acout_L2_current";
    4515: U16, 10, Ampere, R_, "multi_acout_L3_current";
    4516: I16, 1, Watt, R_, "multi_acout_L1_power";
    4517: I16, 1, Watt, R_, "multi_acout_L2_power";
    4518: I16, 1, Watt, R_, "multi_acout_L3_power";
    4519: U16, 100, Hertz, R_, "multi_acout_frequency";
    4520: U16, 1, Empty, text(&MULTI_INPUT_TYPE), "multi_acin1_type";
    4521: U16, 1, Empty, text(&MULTI_INPUT_TYPE), "multi_acin2_type";
    4522: U16, 10, Ampere, slider(AC, UNSIGNED), "multi_acin1_currentlimit";
    4523: U16, 10, Ampere, slider(AC, UNSIGNED), "multi_acin2_currentlimit";
    4524: U16, 1, Empty, R_, "multi_numberofphases";
    4525: U16, 1, Empty, text(&MULTI_ACTIVE_INPUT), "multi_activein_activeinput";
    4526: U16, 100, Volt, R_, "multi_battery_voltage";
    4527: I16, 10, Ampere, R_, "multi_battery_current";
    4528: I16, 10, Celsius, R_, "multi_battery_temperature";
    4529: U16, 10, Percent, R_, "multi_battery_soc";
    4530: U16, 1, Empty, text(&GENERIC_CHARGER_STATE), "multi_state";
    4531: U16, 1, Empty, select(&MULTI_MODE), "multi_mode";
    4532: U16, 1, Empty, ALARM, "multi_alarm_hightemperature";
    4533: U16, 1, Empty, ALARM, "multi_alarm_highvoltage";
    4534: U16, 1, Empty, ALARM, "multi_alarm_highvoltageacout";
    4535: U16, 1, Empty, ALARM, "multi_alarm_lowtemperature";
    4536: U16, 1, Empty, ALARM, "multi_alarm_lowvoltage";
    4537: U16, 1, Empty, ALARM, "multi_alarm_lowvoltageacout";
    4538: U16, 1, Empty, ALARM, "multi_alarm_overload";
    4539: U16, 1, Empty, ALARM, "multi_alarm_ripple";
    4540: U16, 1, Watt, R_, "multi_yield_pv_power";
    4541: U16, 10, KiloWattHour, R_, "multi_yield_user";
    4542: U16, 1, Empty, BOOL, "multi_relay";
    4543: U16, 1, Empty, text(&MPP_OPERATIONMODE), "multi_mppoperationmode";
    4544: U16, 10, Volt, R_, "multi_pv_voltage";
    4545: U16, 1, Empty, text(&GENERIC_CHARGER_ERRORCODE), "multi_errorcode";
    4546: U32, 100, KiloWattHour, R_, "multi_energy_acin1toacout";
    4548: U32, 100, KiloWattHour, R_, "multi_energy_acin1toinverter";
    4550: U32, 100, KiloWattHour, R_, "multi_energy_acin2toacout";
    4552: U32, 100, KiloWattHour, R_, "multi_energy_acin2toinverter";
    4554: U32, 100, KiloWattHour, R_, "multi_energy_acouttoacin1";
    4556: U32, 100, KiloWattHour, R_, "multi_energy_acouttoacin2";
    4558: U32, 100, KiloWattHour, R_, "multi_energy_invertertoacin1";
    4560: U32, 100, KiloWattHour, R_, "multi_energy_invertertoacin2";
    4562: U32, 100, KiloWattHour, R_, "multi_energy_invertertoacout";
    4564: U32, 100, KiloWattHour, R_, "multi_energy_acouttoinverter";
    4566: U32, 100, KiloWattHour, R_, "multi_energy_solartoacin1";
    4568: U32, 100, KiloWattHour, R_, "multi_energy_solartoacin2";
    4570: U32, 100, KiloWattHour, R_, "multi_energy_solartoacout";
    4572: U32, 100, KiloWattHour, R_, "multi_energy_solartobattery";
    4574: U16, 10, KiloWattHour, R_, "multi_history_yield_today";
    4575: U16, 1, Watt, R_, "multi_history_maxpower_today";
    4576: U16, 10, KiloWattHour, R_, "multi_history_yield_yesterday";
    4577: U16, 1, Watt, R_, "multi_history_maxpower_yesterday";
});

register_block!(SYSTEM_REGISTERS = "system_registers" {
    800: string(6), 1, Empty, R_, "system_serial";
    806: U16, 1, Empty, SWITCH, "system_relay_0";
    807: U16, 1, Empty, SWITCH, "system_relay_1";
    808: U16, 1, Watt, R_, "system_pvonoutput_L1";
    809: U16, 1, Watt, R_, "system_pvonoutput_L2";
    810: U16, 1, Watt, R_, "system_pvonoutput_L3";
    811: U16, 1, Watt, R_, "system_pvongrid_L1";
    812: U16, 1, Watt, R_, "system_pvongrid_L2";
    813: U16, 1, Watt, R_, "system_pvongrid_L3";
    814: U16, 1, Watt, R_, "system_pvongenset_L1";
    815: U16, 1, Watt, R_, "system_pvongenset_L2";
    816: U16, 1, Watt, R_, "system_pvongenset_L3";
    817: U16, 1, Watt, R_, "system_consumption_L1";
    818: U16, 1, Watt, R_, "system_consumption_L2";
    819: U16, 1, Watt, R_, "system_consumption_L3";
    820: I16, 1, Watt, R_, "system_grid_L1";
    821: I16, 1, Watt, R_, "system_grid_L2";
    822: I16, 1, Watt, R_, "system_grid_L3";
    823: I16, 1, Watt, R_, "system_genset_L1";
    824: I16, 1, Watt, R_, "system_genset_L2";
    825: I16, 1, Watt, R_, "system_genset_L3";
    826: I16, 1, Empty, text(&SYSTEM_INPUT_SOURCE), "system_input_source";
});

register_block!(SYSTEM_BATTERY_REGISTERS = "system_battery_registers" {
    840: U16, 10, Volt, R_, "system_battery_voltage";
    841: I16, 10, Ampere, R_, "system_battery_current";
    842: I16, 1, Watt, R_, "system_battery_power";
    843: U16, 1, Percent, R_, "system_battery_soc";
    844: U16, 1, Empty, text(&SYSTEM_BATTERY_STATE), "system_battery_state";
    845: U16, -10, AmpereHour, R_, "system_battery_amphours";
    846: U16, 0.01, Second, R_, "system_battery_timetogo";
});

register_block!(SYSTEM_DC_REGISTERS = "system_dc_registers" {
    850: U16, 1, Watt, R_, "system_dc_pv_power";
    851: I16, 10, Ampere, R_, "system_dc_pv_current";
});

register_block!(SYSTEM_CHARGER_REGISTERS = "system_charger_registers" {
    855: U16, 1, Watt, R_, "system_charger_power";
});

register_block!(SYSTEM_POWER_REGISTERS = "system_power_registers" {
    860: I16, 1, Watt, R_, "system_dc_system_power";
});

register_block!(SYSTEM_BUS_REGISTERS = "system_bus_registers" {
    865: I16, 10, Ampere, R_, "system_bus_charge_current";
    866: I16, 1, Watt, R_, "system_bus_charge_power";
});
