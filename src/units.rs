//! Metric/imperial unit conversion.
//!
//! Stored numbers are always metric; conversion happens at the presentation
//! edge. Every [`UnitKind`] maps to a fixed imperial multiplier, a symbol and
//! a full name per system, held in one exhaustive [`EnumMap`]. No
//! default-fallthrough case exists, so a kind without table data won't
//! compile.
//!
//! Fuel consumption is the one "divider" kind: its imperial representation is
//! `multiplier / number` (L/100km → mpg), not `number * multiplier`.

use std::sync::LazyLock;

use derive_more::with_trait::IsVariant;
use enum_iterator::Sequence;
use enum_map::{Enum, EnumMap};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Physical quantity kinds the conversion table understands.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[derive(Serialize, Deserialize)]
#[derive(Sequence, Enum)]
pub enum UnitKind {
    Acceleration,
    AngularVelocity,
    Area,
    Density,
    Distance,
    DistanceAccurate,
    ElectricConsumption,
    Force,
    Frequency,
    FuelConsumption,
    Liquid,
    Power,
    Pressure,
    Size,
    SizeAccurate,
    Speed,
    Time,
    Torque,
    Velocity,
    Volume,
    Weight,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[derive(Serialize, Deserialize)]
#[derive(Sequence, Enum, IsVariant)]
pub enum UnitSystem {
    Metric,
    Imperial,
}

/// Per-kind table row: the imperial multiplier plus display strings for both
/// systems. Metric multipliers are always 1 (values are stored metric).
struct UnitSpec {
    imperial_multiplier: f32,
    divider: bool,
    metric_symbol: &'static str,
    imperial_symbol: &'static str,
    metric_name: &'static str,
    imperial_name: &'static str,
}

impl UnitSpec {
    const fn of(kind: UnitKind) -> UnitSpec {
        use UnitKind::*;
        match kind {
            Acceleration => UnitSpec {
                imperial_multiplier: 3.28084,
                divider: false,
                metric_symbol: "m/s²",
                imperial_symbol: "ft/s²",
                metric_name: "Meters per Second Squared",
                imperial_name: "Feet per Second Squared",
            },
            AngularVelocity => UnitSpec {
                imperial_multiplier: 1.0,
                divider: false,
                metric_symbol: "rad/s",
                imperial_symbol: "rad/s",
                metric_name: "Radians per Second",
                imperial_name: "Radians per Second",
            },
            Area => UnitSpec {
                imperial_multiplier: 10.7639,
                divider: false,
                metric_symbol: "m²",
                imperial_symbol: "ft²",
                metric_name: "Square Meter",
                imperial_name: "Square Feet",
            },
            Density => UnitSpec {
                imperial_multiplier: 0.06242796,
                divider: false,
                metric_symbol: "kg/m³",
                imperial_symbol: "lb/ft³",
                metric_name: "Kilogram per Cubic Meter",
                imperial_name: "Pound per Cubic Foot",
            },
            Distance => UnitSpec {
                imperial_multiplier: 3.28084,
                divider: false,
                metric_symbol: "m",
                imperial_symbol: "ft",
                metric_name: "Meter",
                imperial_name: "Feet",
            },
            DistanceAccurate => UnitSpec {
                imperial_multiplier: 3.28084,
                divider: false,
                metric_symbol: "m",
                imperial_symbol: "ft",
                metric_name: "Meter",
                imperial_name: "Feet",
            },
            ElectricConsumption => UnitSpec {
                imperial_multiplier: 1.0,
                divider: false,
                metric_symbol: "kW⋅h/100km",
                imperial_symbol: "kW⋅h/100m",
                metric_name: "Kilowatt Hour per 100 Kilometers",
                imperial_name: "Kilowatt Hour per 100 Miles",
            },
            Force => UnitSpec {
                imperial_multiplier: 0.2248089,
                divider: false,
                metric_symbol: "N",
                imperial_symbol: "lbf",
                metric_name: "Newton",
                imperial_name: "Pound-Force",
            },
            Frequency => UnitSpec {
                imperial_multiplier: 1.0,
                divider: false,
                metric_symbol: "rpm",
                imperial_symbol: "rpm",
                metric_name: "Revolutions per Minute",
                imperial_name: "Revolutions per Minute",
            },
            FuelConsumption => UnitSpec {
                imperial_multiplier: 235.2146,
                divider: true,
                metric_symbol: "L/100km",
                imperial_symbol: "mpg",
                metric_name: "Liters per 100 Kilometers",
                imperial_name: "Miles per Gallon",
            },
            Liquid => UnitSpec {
                imperial_multiplier: 0.2641721,
                divider: false,
                metric_symbol: "L",
                imperial_symbol: "gal",
                metric_name: "Liter",
                imperial_name: "Gallon",
            },
            Power => UnitSpec {
                imperial_multiplier: 1.341022,
                divider: false,
                metric_symbol: "kW",
                imperial_symbol: "hp",
                metric_name: "Kilowatt",
                imperial_name: "Horsepower",
            },
            Pressure => UnitSpec {
                imperial_multiplier: 14.50377,
                divider: false,
                metric_symbol: "bar",
                imperial_symbol: "psi",
                metric_name: "Bar",
                imperial_name: "Pound per Square Inch",
            },
            Size => UnitSpec {
                imperial_multiplier: 3.28084,
                divider: false,
                metric_symbol: "m",
                imperial_symbol: "ft",
                metric_name: "Meter",
                imperial_name: "Feet",
            },
            SizeAccurate => UnitSpec {
                imperial_multiplier: 39.37008,
                divider: false,
                metric_symbol: "cm",
                imperial_symbol: "in",
                metric_name: "Centimeter",
                imperial_name: "Inch",
            },
            Speed => UnitSpec {
                imperial_multiplier: 0.6213712,
                divider: false,
                metric_symbol: "km/h",
                imperial_symbol: "mph",
                metric_name: "Kilometers per Hour",
                imperial_name: "Miles per Hour",
            },
            Time => UnitSpec {
                imperial_multiplier: 1.0,
                divider: false,
                metric_symbol: "s",
                imperial_symbol: "s",
                metric_name: "Second",
                imperial_name: "Second",
            },
            Torque => UnitSpec {
                imperial_multiplier: 0.7375621,
                divider: false,
                metric_symbol: "N⋅m",
                imperial_symbol: "lb⋅ft",
                metric_name: "Newton Meter",
                imperial_name: "Pound-Feet",
            },
            Velocity => UnitSpec {
                imperial_multiplier: 3.28084,
                divider: false,
                metric_symbol: "m/s",
                imperial_symbol: "ft/s",
                metric_name: "Meters per Second",
                imperial_name: "Feet per Second",
            },
            Volume => UnitSpec {
                imperial_multiplier: 35.31466,
                divider: false,
                metric_symbol: "m³",
                imperial_symbol: "ft³",
                metric_name: "Cubic Meter",
                imperial_name: "Cubic Feet",
            },
            Weight => UnitSpec {
                imperial_multiplier: 2.204623,
                divider: false,
                metric_symbol: "kg",
                imperial_symbol: "lbs",
                metric_name: "Kilogram",
                imperial_name: "Pound",
            },
        }
    }
}

static TABLE: LazyLock<EnumMap<UnitKind, UnitSpec>> =
    LazyLock::new(|| EnumMap::from_fn(UnitSpec::of));

/// Factor applied to a stored (metric) number for display in `system`.
/// Metric is the identity; imperial uses the table constant.
pub fn multiplier(kind: UnitKind, system: UnitSystem) -> f32 {
    match system {
        UnitSystem::Metric => 1.0,
        UnitSystem::Imperial => TABLE[kind].imperial_multiplier,
    }
}

pub fn symbol(kind: UnitKind, system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => TABLE[kind].metric_symbol,
        UnitSystem::Imperial => TABLE[kind].imperial_symbol,
    }
}

pub fn full_name(kind: UnitKind, system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::Metric => TABLE[kind].metric_name,
        UnitSystem::Imperial => TABLE[kind].imperial_name,
    }
}

/// True for kinds whose imperial conversion is `multiplier / number` instead
/// of `number * multiplier`.
pub fn is_divider(kind: UnitKind) -> bool {
    TABLE[kind].divider
}

/// Rounds to `decimals` places: scale, round half away from zero, unscale.
pub fn round(number: f32, decimals: u32) -> f32 {
    let scale = 10f32.powi(decimals as i32);
    (number * scale).round() / scale
}

/// Formats a stored metric `number` as `"<value> <symbol>"` in `system`.
///
/// Infinite inputs short-circuit to the literal `"Infinity"`/`"-Infinity"`
/// with no unit suffix. Divider kinds invert the imperial conversion, see
/// [`is_divider`].
pub fn format_value(
    number: f32,
    kind: UnitKind,
    system: UnitSystem,
    precision: Option<u32>,
) -> String {
    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let factor = multiplier(kind, system);
    let converted = if is_divider(kind) && system.is_imperial() {
        factor / number
    } else {
        number * factor
    };
    let converted = match precision {
        Some(decimals) => round(converted, decimals),
        None => converted,
    };

    format!("{} {}", converted, symbol(kind, system))
}

/// Lenient inverse of [`format_value`]: splits on whitespace, keeps the
/// tokens that parse as numbers, reassembles and parses them. Anything
/// unparseable yields `0.0`; failures are silent by contract.
pub fn parse_value(text: &str) -> f32 {
    let digits = text
        .split_whitespace()
        .filter(|token| token.parse::<f32>().is_ok())
        .join("");
    digits.parse().unwrap_or(0.0)
}
