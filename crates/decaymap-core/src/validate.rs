//! Static-data consistency checks.
//!
//! The topology and rate table are hand-curated literals; a mismatch between
//! them is an authoring defect, not a runtime condition to recover from.
//! This module surfaces such defects so the datasets can be checked whenever
//! they are edited. A clean report is asserted by the test suite for every
//! profile.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::BackgroundModel;
use crate::profile::SimProfile;
use crate::rates::rate_key;
use crate::source::{Location, Process};

/// One authoring defect in the static datasets.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Defect {
    #[error("{process}: {location} listed for the process but absent from the chain map")]
    LocationNotInChainMap { process: Process, location: Location },

    #[error("{process}: {location} present in the chain map but not in the process list")]
    LocationNotInProcessList { process: Process, location: Location },

    #[error("{process}: listed in only one of the two topology mappings")]
    ProcessHalfMapped { process: Process },

    #[error("no rate entry for reachable source {key}")]
    MissingRateEntry { key: String },

    #[error("rate entry {key} unreachable from the full topology")]
    OrphanRateEntry { key: String },

    #[error("rate entry {key} has invalid rate {rate}")]
    InvalidRate { key: String, rate: f64 },

    #[error("rate entry {key} has zero events per job")]
    ZeroBatch { key: String },
}

/// Outcome of a consistency pass over one built model.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsistencyReport {
    pub defects: Vec<Defect>,
}

impl ConsistencyReport {
    pub fn is_clean(&self) -> bool {
        self.defects.is_empty()
    }
}

/// Check a built model for authoring defects.
///
/// Verifies that the two topology mappings agree per process, that every
/// reachable `(process, location, isotope)` triple has a rate entry, and
/// that all rates are finite and non-negative with positive batch sizes.
/// Orphaned rate entries are only flagged for the full profile; the table
/// is shared across profiles, so reduced topologies reach a subset of it
/// by design.
pub fn consistency_report(model: &BackgroundModel) -> ConsistencyReport {
    let mut defects = Vec::new();
    let topology = &model.topology;

    // The two mappings must carry the same process set.
    let chain_processes: BTreeSet<Process> = topology.chain_map.keys().copied().collect();
    let listed_processes: BTreeSet<Process> = topology.process_locations.keys().copied().collect();
    for &process in chain_processes.symmetric_difference(&listed_processes) {
        defects.push(Defect::ProcessHalfMapped { process });
    }

    // Per process, the location sets must match in both directions.
    for (&process, locations) in &topology.process_locations {
        let Some(mapped) = topology.chain_map.get(&process) else {
            continue; // already reported as half-mapped
        };
        let listed: BTreeSet<Location> = locations.iter().copied().collect();
        let mapped_set: BTreeSet<Location> = mapped.keys().copied().collect();
        for &location in listed.difference(&mapped_set) {
            defects.push(Defect::LocationNotInChainMap { process, location });
        }
        for &location in mapped_set.difference(&listed) {
            defects.push(Defect::LocationNotInProcessList { process, location });
        }
    }

    // Every reachable triple needs a rate entry.
    let mut reachable = BTreeSet::new();
    for (process, location, isotope) in topology.triples() {
        let key = rate_key(isotope, location, process);
        if model.rates.get(&key).is_none() {
            defects.push(Defect::MissingRateEntry { key: key.clone() });
        }
        reachable.insert(key);
    }

    // The full inventory reaches the whole table; anything left over is a
    // stale or misspelled row.
    if model.profile == SimProfile::Full {
        for (key, _) in model.rates.iter() {
            if !reachable.contains(key) {
                defects.push(Defect::OrphanRateEntry {
                    key: key.to_string(),
                });
            }
        }
    }

    // Value sanity over the whole table, reachable or not.
    for (key, entry) in model.rates.iter() {
        if !entry.events_per_sec.is_finite() || entry.events_per_sec < 0.0 {
            defects.push(Defect::InvalidRate {
                key: key.to_string(),
                rate: entry.events_per_sec,
            });
        }
        if entry.events_per_job == 0 {
            defects.push(Defect::ZeroBatch {
                key: key.to_string(),
            });
        }
    }

    ConsistencyReport { defects }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;
    use crate::topology::Topology;

    fn model_for(water: bool, wbls: bool) -> BackgroundModel {
        BackgroundModel::build(&ModelConfig {
            light_sim_water: water,
            light_sim_wbls: wbls,
            ..ModelConfig::default()
        })
    }

    #[test]
    fn full_profile_is_clean() {
        let report = consistency_report(&model_for(false, false));
        assert!(report.is_clean(), "defects: {:?}", report.defects);
    }

    #[test]
    fn reduced_water_is_clean() {
        let report = consistency_report(&model_for(true, false));
        assert!(report.is_clean(), "defects: {:?}", report.defects);
    }

    #[test]
    fn reduced_wbls_is_clean() {
        let report = consistency_report(&model_for(false, true));
        assert!(report.is_clean(), "defects: {:?}", report.defects);
    }

    #[test]
    fn detects_location_missing_from_chain_map() {
        let mut model = model_for(true, false);
        model
            .topology
            .process_locations
            .get_mut(&Process::Radiogenic)
            .unwrap()
            .push(Location::Rock1);

        let report = consistency_report(&model);
        assert!(report.defects.contains(&Defect::LocationNotInChainMap {
            process: Process::Radiogenic,
            location: Location::Rock1,
        }));
    }

    #[test]
    fn detects_location_missing_from_process_list() {
        let mut model = model_for(true, false);
        model
            .topology
            .chain_map
            .get_mut(&Process::Mn54)
            .unwrap()
            .insert(Location::Liner, vec!["54Mn"]);

        let report = consistency_report(&model);
        assert!(report.defects.contains(&Defect::LocationNotInProcessList {
            process: Process::Mn54,
            location: Location::Liner,
        }));
        // The liner carries no 54Mn assay row, so the reach check fires too.
        assert!(report
            .defects
            .contains(&Defect::MissingRateEntry {
                key: "54Mn_LINER_54Mn_NA".to_string()
            }));
    }

    #[test]
    fn detects_half_mapped_process() {
        let mut model = model_for(false, true);
        model.topology.process_locations.remove(&Process::Cs137);

        let report = consistency_report(&model);
        assert!(report.defects.contains(&Defect::ProcessHalfMapped {
            process: Process::Cs137,
        }));
    }

    #[test]
    fn detects_orphan_entries_against_full_topology() {
        // A reduced topology paired with the full-profile tag leaves most of
        // the shared table unreachable.
        let mut model = model_for(false, false);
        model.topology = Topology::for_profile(SimProfile::ReducedWater);

        let report = consistency_report(&model);
        assert!(report
            .defects
            .iter()
            .any(|d| matches!(d, Defect::OrphanRateEntry { key } if key == "40K_LINER_40K_NA")));
    }
}
