//! Model configuration: profile flags and PMT activity scaling.
//!
//! Callers construct a [`ModelConfig`] once and pass it by parameter into
//! the model builder; nothing in the core reads ambient or global state.
//! For callers that already hold a parsed flag mapping (option name ->
//! string value), [`ModelConfig::from_option_map`] accepts the flat map
//! directly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::source::{Location, Process};

/// Option names as they appear on the command line.
pub const OPT_LIGHT_SIM_WATER: &str = "--lightSimWater";
pub const OPT_LIGHT_SIM_WBLS: &str = "--lightSimWbLS";
pub const OPT_U238_PMT: &str = "--rU238_IP";
pub const OPT_TH232_PMT: &str = "--rT232_IP";
pub const OPT_K40_PMT: &str = "--rK40_IP";

/// Relative-to-baseline activity multipliers for the inner PMT assemblies.
///
/// Each factor scales only the PMT-location rate entries of its own process:
/// `u238` the 238U chain, `th232` the 232Th chain, `k40` the 40K background.
/// Read once per model build and applied exactly once; never accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PmtScaling {
    pub u238: f64,
    pub th232: f64,
    pub k40: f64,
}

impl Default for PmtScaling {
    fn default() -> Self {
        Self {
            u238: 1.0,
            th232: 1.0,
            k40: 1.0,
        }
    }
}

impl PmtScaling {
    /// Parse the three scaling levels from their string option values.
    ///
    /// Each must be a non-negative finite real; anything else is a
    /// configuration error reported before any table is constructed.
    pub fn parse(u238: &str, th232: &str, k40: &str) -> ConfigResult<Self> {
        Ok(Self {
            u238: parse_scale(OPT_U238_PMT, u238)?,
            th232: parse_scale(OPT_TH232_PMT, th232)?,
            k40: parse_scale(OPT_K40_PMT, k40)?,
        })
    }

    /// Multiplier for one (process, location) pair. 1.0 everywhere except
    /// the PMT entries of the three scaled processes.
    pub fn factor_for(&self, process: Process, location: Location) -> f64 {
        match (process, location) {
            (Process::U238Chain, Location::Pmt) => self.u238,
            (Process::Th232Chain, Location::Pmt) => self.th232,
            (Process::K40, Location::Pmt) => self.k40,
            _ => 1.0,
        }
    }
}

fn parse_scale(option: &str, raw: &str) -> ConfigResult<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| ConfigError::NotANumber {
        option: option.to_string(),
        value: raw.to_string(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::OutOfRange {
            option: option.to_string(),
            value,
        });
    }
    Ok(value)
}

/// Everything the model builder needs, read once at entry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Reduced Gd-water inventory requested.
    pub light_sim_water: bool,
    /// Reduced Gd-WbLS inventory requested.
    pub light_sim_wbls: bool,
    /// PMT activity scaling levels.
    pub pmt_scaling: PmtScaling,
}

impl ModelConfig {
    /// Build a config from a flat option-name -> value mapping, the shape an
    /// argument parser hands over. Missing boolean options default to false,
    /// missing scaling levels to `"1.0"`.
    pub fn from_option_map(options: &BTreeMap<String, String>) -> ConfigResult<Self> {
        let flag = |name: &str| {
            options
                .get(name)
                .is_some_and(|v| matches!(v.as_str(), "true" | "True" | "1"))
        };
        let scale = |name: &str| options.get(name).map(String::as_str).unwrap_or("1.0");

        Ok(Self {
            light_sim_water: flag(OPT_LIGHT_SIM_WATER),
            light_sim_wbls: flag(OPT_LIGHT_SIM_WBLS),
            pmt_scaling: PmtScaling::parse(
                scale(OPT_U238_PMT),
                scale(OPT_TH232_PMT),
                scale(OPT_K40_PMT),
            )?,
        })
    }
}
