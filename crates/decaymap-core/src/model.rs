//! Model assembly: profile selection, topology, rates — one immutable value.
//!
//! Construction is synchronous, stateless, and rebuilt from literals on
//! every call, so concurrent builds need no synchronization. Nothing here
//! mutates after return; downstream job and macro generators only read.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::config::ModelConfig;
use crate::error::ConfigResult;
use crate::profile::SimProfile;
use crate::rates::RateTable;
use crate::topology::Topology;

/// The complete background-rate model for one detector configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundModel {
    /// Which inventory was selected.
    pub profile: SimProfile,
    /// Active process/location/isotope topology.
    pub topology: Topology,
    /// Flat production-rate and batching table.
    pub rates: RateTable,
}

impl BackgroundModel {
    /// Build the model for the given configuration.
    ///
    /// Profile selection runs first; the topology and rate table are then
    /// built unconditionally, with the PMT scaling read once from the config.
    pub fn build(config: &ModelConfig) -> Self {
        let profile = SimProfile::select(config.light_sim_water, config.light_sim_wbls);
        let topology = Topology::for_profile(profile);
        let rates = RateTable::build(&config.pmt_scaling);

        debug!(
            "built {} background model: {} processes, {} rate entries",
            profile,
            topology.process_locations.len(),
            rates.len()
        );

        Self {
            profile,
            topology,
            rates,
        }
    }

    /// Build from a flat option-name -> value mapping.
    ///
    /// Fails on an unparseable or negative scaling level before any table
    /// is constructed.
    pub fn from_option_map(options: &BTreeMap<String, String>) -> ConfigResult<Self> {
        Ok(Self::build(&ModelConfig::from_option_map(options)?))
    }

    /// The process/location/isotope inventory as printable lines.
    pub fn inventory(&self) -> Vec<String> {
        self.topology.inventory()
    }

    /// Emit the inventory through the logger, one line per active pair.
    ///
    /// Optional observability hook; call after construction if wanted,
    /// typically for the full profile where some sources never trigger.
    pub fn log_inventory(&self) {
        for line in self.inventory() {
            log::info!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PmtScaling;
    use crate::rates::rate_key;

    #[test]
    fn build_is_deterministic() {
        let config = ModelConfig {
            light_sim_wbls: true,
            pmt_scaling: PmtScaling {
                u238: 1.7,
                th232: 0.3,
                k40: 2.0,
            },
            ..ModelConfig::default()
        };
        assert_eq!(BackgroundModel::build(&config), BackgroundModel::build(&config));
    }

    #[test]
    fn default_config_selects_full_profile() {
        let model = BackgroundModel::build(&ModelConfig::default());
        assert_eq!(model.profile, SimProfile::Full);
    }

    #[test]
    fn water_flag_wins_over_wbls() {
        let both = BackgroundModel::build(&ModelConfig {
            light_sim_water: true,
            light_sim_wbls: true,
            ..ModelConfig::default()
        });
        let water_only = BackgroundModel::build(&ModelConfig {
            light_sim_water: true,
            ..ModelConfig::default()
        });
        assert_eq!(both, water_only);
        assert_eq!(both.profile, SimProfile::ReducedWater);
    }

    #[test]
    fn every_reachable_triple_has_a_rate_entry() {
        for profile_config in [
            ModelConfig::default(),
            ModelConfig {
                light_sim_water: true,
                ..ModelConfig::default()
            },
            ModelConfig {
                light_sim_wbls: true,
                ..ModelConfig::default()
            },
        ] {
            let model = BackgroundModel::build(&profile_config);
            for (process, location, isotope) in model.topology.triples() {
                let key = rate_key(isotope, location, process);
                let entry = model
                    .rates
                    .get(&key)
                    .unwrap_or_else(|| panic!("no rate entry for {key}"));
                assert!(entry.events_per_sec >= 0.0);
                assert!(entry.events_per_job > 0);
            }
        }
    }

    #[test]
    fn from_option_map_propagates_config_errors() {
        let mut opts = BTreeMap::new();
        opts.insert(crate::config::OPT_U238_PMT.to_string(), "umpteen".to_string());
        assert!(BackgroundModel::from_option_map(&opts).is_err());
    }

    #[test]
    fn inventory_is_nonempty_for_all_profiles() {
        for (water, wbls) in [(false, false), (true, false), (false, true)] {
            let model = BackgroundModel::build(&ModelConfig {
                light_sim_water: water,
                light_sim_wbls: wbls,
                ..ModelConfig::default()
            });
            assert!(!model.inventory().is_empty());
        }
    }
}
