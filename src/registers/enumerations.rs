//! Code tables for textual and selectable registers.

use super::Enumeration;

macro_rules! enumerations {
    ($($ident:ident = $name:literal { $($member:ident = $code:literal),* $(,)? })*) => {
        $(
            pub static $ident: Enumeration = Enumeration {
                name: $name,
                members: &[$(($code, stringify!($member))),*],
            };
        )*
    };
}

enumerations! {
    GENERIC_ALARM_LEDGER = "generic_alarm_ledger" {
        OK = 0,
        WARNING = 1,
        ALARM = 2,
    }

    GENERIC_CHARGER_STATE = "generic_charger_state" {
        OFF = 0,
        LOW_POWER = 1,
        FAULT = 2,
        BULK = 3,
        ABSORPTION = 4,
        FLOAT = 5,
        STORAGE = 6,
        EQUALIZE = 7,
        PASSTHRU = 8,
        INVERTING = 9,
        POWER_ASSIST = 10,
        POWER_SUPPLY = 11,
        SUSTAIN = 244,
        WAKE_UP = 245,
        EXTERNAL_CONTROL = 252,
    }

    GENERIC_CHARGER_ERRORCODE = "generic_charger_errorcode" {
        NONE = 0,
        BATTERY_TEMPERATURE_HIGH = 1,
        BATTERY_VOLTAGE_HIGH = 2,
        BATTERY_TEMPERATURE_SENSOR_MISWIRED_PLUS = 3,
        BATTERY_TEMPERATURE_SENSOR_MISWIRED_MINUS = 4,
        BATTERY_TEMPERATURE_SENSOR_DISCONNECTED = 5,
        BATTERY_VOLTAGE_SENSE_MISWIRED_PLUS = 6,
        BATTERY_VOLTAGE_SENSE_MISWIRED_MINUS = 7,
        BATTERY_VOLTAGE_SENSE_DISCONNECTED = 8,
        BATTERY_VOLTAGE_WIRE_LOSSES_TOO_HIGH = 9,
        BATTERY_HIGH_RIPPLE_VOLTAGE = 11,
        BATTERY_LOW_TEMPERATURE = 14,
        CHARGER_TEMPERATURE_TOO_HIGH = 17,
        CHARGER_OVER_CURRENT = 18,
        CHARGER_CURRENT_REVERSED = 19,
        BULK_TIME_LIMIT_EXCEEDED = 20,
        CHARGER_CURRENT_SENSOR_ISSUE = 21,
        INTERNAL_TEMPERATURE_SENSOR_FAILURE = 22,
        FAN_FAILURE = 24,
        TERMINALS_OVERHEATED = 26,
        CHARGER_SHORT_CIRCUIT = 27,
        CONVERTER_ISSUE = 28,
        OVER_CHARGE_PROTECTION = 29,
        INPUT_VOLTAGE_TOO_HIGH = 33,
        INPUT_EXCESSIVE_CURRENT = 34,
        INPUT_SHUTDOWN = 38,
        INPUT_SHUTDOWN_DUPLICATE_1 = 39,
        INPUT_SHUTDOWN_DUPLICATE_2 = 40,
        INVERTER_SHUTDOWN = 41,
        INVERTER_SHUTDOWN_DUPLICATE_1 = 42,
        INVERTER_SHUTDOWN_DUPLICATE_2 = 43,
        INVERTER_OVERLOAD = 50,
        INVERTER_TEMPERATURE_TOO_HIGH = 51,
        INVERTER_PEAK_CURRENT = 52,
        INVERTER_OUTPUT_VOLTAGE = 53,
        INVERTER_OUTPUT_VOLTAGE_DUPLICATE_1 = 54,
        INVERTER_SELFTEST_FAILED = 55,
        INVERTER_AC_VOLTAGE_ON_OUTPUT = 56,
        INVERTER_OUTPUT_VOLTAGE_DUPLICATE_2 = 57,
        COMMUNICATION_ERROR = 65,
        INCOMPATIBLE_DEVICE = 66,
        BMS_CONNECTION_LOST = 67,
        NETWORK_MISCONFIGURED = 68,
        NETWORK_MISCONFIGURED_DUPLICATE_1 = 69,
        NETWORK_MISCONFIGURED_DUPLICATE_2 = 70,
        NETWORK_MISCONFIGURED_DUPLICATE_3 = 71,
        CPU_TEMPERATURE_TOO_HIGH = 114,
        CALIBRATION_LOST = 116,
        INVALID_FIRMWARE = 117,
        SETTINGS_LOST = 119,
        TESTER_FAIL = 121,
        INTERNAL_DC_VOLTAGE_ERROR = 200,
        INTERNAL_DC_VOLTAGE_ERROR_DUPLICATE_1 = 201,
        INTERNAL_GFCI_SENSOR_ERROR = 202,
        INTERNAL_SUPPLY_VOLTAGE_ERROR = 203,
        INTERNAL_SUPPLY_VOLTAGE_ERROR_DUPLICATE_1 = 205,
        INTERNAL_SUPPLY_VOLTAGE_ERROR_DUPLICATE_2 = 212,
        INTERNAL_SUPPLY_VOLTAGE_ERROR_DUPLICATE_3 = 215,
    }

    VEBUS_MODE = "vebus_mode" {
        CHARGER = 1,
        INVERTER = 2,
        ON = 3,
        OFF = 4,
    }

    VEBUS_ACTIVEIN_ACTIVEINPUT = "vebus_activein_activeinput" {
        AC_INPUT_1 = 0,
        AC_INPUT_2 = 1,
        DISCONNECTED = 240,
    }

    VEBUS_ERROR = "vebus_error" {
        OK = 0,
        EXTERNAL_PHASE_TRIGGERED_SWITCHOFF = 1,
        MK2_TYPE_MISMATCH = 2,
        DEVICE_COUNT_MISMATCH = 3,
        NO_OTHER_DEVICES = 4,
        AC_OUT_OVERVOLTAGE = 5,
        DDC_PROGRAM_ERROR = 6,
        VE_BUS_BMS_WITHOUT_ASSISTANT = 7,
        TIME_SYNC_MISMATCH = 10,
        CANNOT_TRANSMIT = 14,
        DONGLE_ABSENT = 16,
        MASTER_FAILOVER = 17,
        AC_OUT_OVERVOLTAGE_SLAVE_OFF = 18,
        CANNOT_BE_SLAVE = 22,
        SWITCH_OVER_PROTECTION = 24,
        FIRMWARE_INCOMPATIBILITY = 25,
        INTERNAL_ERROR = 26,
    }

    VEBUS_CHARGE_STATE = "vebus_charge_state" {
        INITIALIZING = 0,
        BULK = 1,
        ABSORPTION = 2,
        FLOAT = 3,
        STORAGE = 4,
        ABSORB_REPEAT = 5,
        FORCED_ABSORB = 6,
        EQUALIZE = 7,
        BULK_STOPPED = 8,
        UNKNOWN = 9,
    }

    ESS_BATTERYLIFE_STATE = "ess_batterylife_state" {
        BL_DISABLED_DUPLICATE_1 = 0,
        RESTARTING = 1,
        SELF_CONSUMPTION = 2,
        SELF_CONSUMPTION_DUPLICATE_1 = 3,
        SELF_CONSUMPTION_DUPLICATE_2 = 4,
        DISCHARGE_DISABLED = 5,
        FORCE_CHARGE = 6,
        SUSTAIN = 7,
        LOW_SOC_RECHARGE = 8,
        KEEP_BATTERIES_CHARGED = 9,
        BL_DISABLED = 10,
        BL_DISABLED_LOW_SOC = 11,
        BL_DISABLED_LOW_SOC_RECHARGE = 12,
    }

    ESS_MODE = "ess_mode" {
        SELF_CONSUMPTION_WITH_PHASE_COMPENSATION = 1,
        SELF_CONSUMPTION_WITHOUT_PHASE_COMPENSATION = 2,
        EXTERNAL_CONTROL = 3,
    }

    SYSTEM_INPUT_SOURCE = "system_input_source" {
        UNKNOWN = 0,
        GRID = 1,
        GENERATOR = 2,
        SHORE = 3,
        NOT_CONNECTED = 240,
    }

    SYSTEM_BATTERY_STATE = "system_battery_state" {
        IDLE = 0,
        CHARGING = 1,
        DISCHARGING = 2,
    }

    BATTERY_STATE = "battery_state" {
        WAIT_START = 0,
        BEFORE_BOOT = 1,
        BEFORE_BOOT_DELAY = 2,
        WAIT_BOOT = 3,
        INITIALIZING = 4,
        MEASURE_BATTERY_VOLTAGE = 5,
        CALCULATE_BATTERY_VOLTAGE = 6,
        WAIT_BUS_VOLTAGE = 7,
        WAIT_SHUNT = 8,
        RUNNING = 9,
        ERROR = 10,
        UNUSED = 11,
        SHUTDOWN = 12,
        SLAVE_UPDATING = 13,
        STANDBY = 14,
        GOING_TO_RUN = 15,
        PRE_CHARGING = 16,
        CONTACTOR_CHECK = 17,
    }

    BATTERY_ERROR = "battery_error" {
        NONE = 0,
        BATTERY_INIT_ERROR = 1,
        NO_BATTERIES_CONNECTED = 2,
        UNKNOWN_BATTERY_TYPE = 3,
        DIFFERENT_BATTERY_TYPE = 4,
        NUMBER_OF_BATTERIES_INCORRECT = 5,
        LYNX_SHUNT_NOT_FOUND = 6,
        BATTERY_MEASURE_ERROR = 7,
        INTERNAL_CALCULATION_ERROR = 8,
        BATTERIES_IN_SERIES_NOT_OK = 9,
        NUMBER_OF_BATTERIES_INCORRECT_DUPLICATE_1 = 10,
        HARDWARE_ERROR = 11,
        WATCHDOG_ERROR = 12,
        OVER_VOLTAGE = 13,
        UNDER_VOLTAGE = 14,
        OVER_TEMPERATURE = 15,
        UNDER_TEMPERATURE = 16,
        HARDWARE_FAULT = 17,
        STANDBY_SHUTDOWN = 18,
        PRE_CHARGE_CHARGE_ERROR = 19,
        SAFETY_CONTACTOR_CHECK_ERROR = 20,
        PRE_CHARGE_DISCHARGE_ERROR = 21,
        ADC_ERROR = 22,
        SLAVE_ERROR = 23,
        SLAVE_WARNING = 24,
        PRE_CHARGE_ERROR = 25,
        SAFETY_CONTACTOR_ERROR = 26,
        OVER_CURRENT = 27,
        SLAVE_UPDATE_FAILED = 28,
        SLAVE_UPDATE_UNAVAILABLE = 29,
        CALIBRATION_DATA_LOST = 30,
        SETTINGS_INVALID = 31,
        BMS_CABLE = 32,
        REFERENCE_FAILURE = 33,
        WRONG_SYSTEM_VOLTAGE = 34,
        PRE_CHARGE_TIMEOUT = 35,
    }

    SOLARCHARGER_MODE = "solarcharger_mode" {
        ON = 1,
        OFF = 4,
    }

    SOLARCHARGER_STATE = "solarcharger_state" {
        OFF = 0,
        FAULT = 2,
        BULK = 3,
        ABSORPTION = 4,
        FLOAT = 5,
        STORAGE = 6,
        EQUALIZE = 7,
        OTHER_HUB_1 = 11,
        WAKE_UP = 245,
        EXTERNAL_CONTROL = 252,
    }

    SOLARCHARGER_EQUALIZATION_PENDING = "solarcharger_equalization_pending" {
        NO = 0,
        YES = 1,
        ERROR = 2,
        UNAVAILABLE = 3,
    }

    MPP_OPERATIONMODE = "mpp_operationmode" {
        OFF = 0,
        LIMITED = 1,
        ACTIVE = 2,
        UNAVAILABLE = 255,
    }

    PVINVERTER_POSITION = "pvinverter_position" {
        AC_INPUT_1 = 0,
        AC_OUTPUT = 1,
        AC_INPUT_2 = 2,
    }

    CHARGER_MODE = "charger_mode" {
        OFF = 0,
        ON = 1,
        ERROR = 2,
        UNAVAILABLE = 3,
    }

    TANK_FLUIDTYPE = "tank_fluidtype" {
        FUEL = 0,
        FRESH_WATER = 1,
        WASTE_WATER = 2,
        LIVE_WELL = 3,
        OIL = 4,
        BLACK_WATER = 5,
        GASOLINE = 6,
        DIESEL = 7,
        LPG = 8,
        LNG = 9,
        HYDRAULIC_OIL = 10,
        RAW_WATER = 11,
    }

    TANK_STATUS = "tank_status" {
        OK = 0,
        DISCONNECTED = 1,
        SHORT_CIRCUITED = 2,
        REVERSE_POLARITY = 3,
        UNKNOWN = 4,
        ERROR = 5,
    }

    INVERTER_MODE = "inverter_mode" {
        ON = 2,
        OFF = 4,
        ECO = 5,
    }

    GENSET_STATUS = "genset_status" {
        STANDBY = 0,
        STARTUP_1 = 1,
        STARTUP_2 = 2,
        STARTUP_3 = 3,
        STARTUP_4 = 4,
        STARTUP_5 = 5,
        STARTUP_6 = 6,
        STARTUP_7 = 7,
        RUNNING = 8,
        STOPPING = 9,
        ERROR = 10,
    }

    GENSET_ERRORCODE = "genset_errorcode" {
        NONE = 0,
        AC_VOLTAGE_L1_TOO_LOW = 1,
        AC_FREQUENCY_L1_TOO_LOW = 2,
        AC_CURRENT_TOO_LOW = 3,
        AC_POWER_TOO_LOW = 4,
        EMERGENCY_STOP = 5,
        SERVO_CURRENT_TOO_LOW = 6,
        OIL_PRESSURE_TOO_LOW = 7,
        ENGINE_TEMPERATURE_TOO_LOW = 8,
        WINDING_TEMPERATURE_TOO_LOW = 9,
        EXHAUST_TEMPERATURE_TOO_LOW = 10,
        STARTER_CURRENT_TOO_LOW = 13,
        GLOW_CURRENT_TOO_LOW = 14,
        GLOW_CURRENT_TOO_LOW_DUPLICATE_1 = 15,
        FUEL_HOLDING_MAGNET_CURRENT_TOO_LOW = 16,
        STOP_SOLENOID_HOLD_COIL_CURRENT_TOO_LOW = 17,
        STOP_SOLENOID_PULL_COIL_CURRENT_TOO_LOW = 18,
        OPTIONAL_DC_OUT_CURRENT_TOO_LOW = 19,
        OUTPUT_5V_VOLTAGE_TOO_LOW = 20,
        BOOST_OUTPUT_CURRENT_TOO_LOW = 21,
        PANEL_SUPPLY_CURRENT_TOO_HIGH = 22,
        STARTER_BATTERY_VOLTAGE_TOO_LOW = 25,
        STARTUP_ABORTED_ROTATION = 26,
        STARTUP_ABORTED_RUNNING = 28,
        AC_VOLTAGE_L1_TOO_HIGH = 33,
        AC_FREQUENCY_L1_TOO_HIGH = 34,
        AC_CURRENT_TOO_HIGH = 35,
        AC_POWER_TOO_HIGH = 36,
        SERVO_CURRENT_TOO_HIGH = 38,
        OIL_PRESSURE_TOO_HIGH = 39,
        ENGINE_TEMPERATURE_TOO_HIGH = 40,
        WINDING_TEMPERATURE_TOO_HIGH = 41,
        EXHAUST_TEMPERATURE_TOO_HIGH = 42,
        STARTER_CURRENT_TOO_HIGH = 45,
        GLOW_CURRENT_TOO_HIGH = 46,
        GLOW_CURRENT_TOO_HIGH_DUPLICATE_1 = 47,
        STARTER_BATTERY_VOLTAGE_TOO_HIGH = 57,
        ROTATION_TOO_LOW = 58,
        ROTATION_TOO_HIGH = 59,
        POWER_CONTACTOR_ERROR = 65,
        ENGINE_START_FAILED = 66,
    }

    TEMPERATURE_TYPE = "temperature_type" {
        BATTERY = 0,
        FRIDGE = 1,
        GENERIC = 2,
        ROOM = 3,
        OUTDOOR = 4,
        WATER_HEATER = 5,
        FREEZER = 6,
    }

    TEMPERATURE_STATUS = "temperature_status" {
        OK = 0,
        DISCONNECTED = 1,
        SHORT_CIRCUITED = 2,
        REVERSE_POLARITY = 3,
        UNKNOWN = 4,
    }

    DIGITALINPUT_STATE = "digitalinput_state" {
        LOW = 0,
        HIGH = 1,
        OFF = 2,
        ON = 3,
        NO = 4,
        YES = 5,
        OPEN = 6,
        CLOSED = 7,
        ALARM = 8,
        OK = 9,
        RUNNING = 10,
        STOPPED = 11,
    }

    DIGITALINPUT_ALARM = "digitalinput_alarm" {
        OK = 0,
        ALARM = 2,
    }

    DIGITALINPUT_TYPE = "digitalinput_type" {
        DOOR = 2,
        BILGE_PUMP = 3,
        BILGE_ALARM = 4,
        BURGLAR_ALARM = 5,
        SMOKE_ALARM = 6,
        FIRE_ALARM = 7,
        CO2_ALARM = 8,
        GENERATOR = 9,
    }

    GENERATOR_RUNNINGBYCONDITIONCODE = "generator_runningbyconditioncode" {
        STOPPED = 0,
        MANUAL = 1,
        TEST_RUN = 2,
        LOSS_OF_COMMS = 3,
        SOC = 4,
        AC_LOAD = 5,
        BATTERY_CURRENT = 6,
        BATTERY_VOLTAGE = 7,
        INVERTER_TEMPERATURE = 8,
        INVERTER_OVERLOAD = 9,
        STOP_ON_AC1 = 10,
    }

    GENERATOR_STATE = "generator_state" {
        STOPPED = 0,
        RUNNING = 1,
        ERROR = 10,
    }

    GENERATOR_ERROR = "generator_error" {
        NONE = 0,
        REMOTE_DISABLED = 1,
        REMOTE_FAULT = 2,
    }

    EVCHARGER_MODE = "evcharger_mode" {
        MANUAL = 0,
        AUTO = 1,
        SCHEDULED = 2,
    }

    EVCHARGER_STATUS = "evcharger_status" {
        DISCONNECTED = 0,
        CONNECTED = 1,
        CHARGING = 2,
        CHARGED = 3,
        WAITING_FOR_SUN = 4,
        WAITING_FOR_RFID = 5,
        WAITING_FOR_START = 6,
        LOW_SOC = 7,
        GROUND_FAULT = 8,
        WELDED_CONTACTS = 9,
        CP_INPUT_SHORTED = 10,
        RESIDUAL_CURRENT_DETECTED = 11,
        UNDER_VOLTAGE_DETECTED = 12,
        OVERVOLTAGE_DETECTED = 13,
        OVERHEATING_DETECTED = 14,
    }

    EVCHARGER_POSITION = "evcharger_position" {
        AC_OUTPUT = 0,
        AC_INPUT = 1,
    }

    MULTI_MODE = "multi_mode" {
        CHARGER = 1,
        INVERTER = 2,
        ON = 3,
        OFF = 4,
    }

    MULTI_INPUT_TYPE = "multi_input_type" {
        UNUSED = 0,
        GRID = 1,
        GENSET = 2,
        SHORE = 3,
    }

    MULTI_ACTIVE_INPUT = "multi_active_input" {
        AC_INPUT_1 = 0,
        AC_INPUT_2 = 1,
        DISCONNECTED = 240,
    }
}
