//! Decay-chain topology: which process sits where, emitting what.
//!
//! Two co-indexed mappings describe the active background inventory:
//!
//! - `chain_map`: process -> location -> ordered list of emitted isotopes
//! - `process_locations`: process -> locations active for that process
//!
//! For every process the location set must be identical on both sides; the
//! pair exists because downstream generators iterate `process_locations`
//! while analysis code indexes `chain_map` directly. The three profiles are
//! independent hand-curated datasets of this one schema, selected by
//! [`SimProfile`] — none is derived from another at runtime.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::profile::SimProfile;
use crate::source::{Isotope, Location, Process};

/// Full decay-chain daughter lists, in decay order.
const U238_FULL: &[Isotope] = &["234Pa", "214Pb", "214Bi", "210Bi", "210Tl"];
const TH232_FULL: &[Isotope] = &["228Ac", "212Pb", "212Bi", "208Tl"];
const U235_FULL: &[Isotope] = &["231Th", "223Fr", "211Pb", "211Bi", "207Tl"];

/// Cosmogenic spallation nuclides simulated in the target.
/// Spontaneous fission and the longer-lived spallation list are not included.
const SPALLATION: &[Isotope] = &["li 9", "n 17", "he 8"];

/// The active background inventory for one simulation profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topology {
    /// process -> location -> ordered isotope list.
    pub chain_map: BTreeMap<Process, BTreeMap<Location, Vec<Isotope>>>,
    /// process -> active locations, in curated (roughly activity-descending) order.
    pub process_locations: BTreeMap<Process, Vec<Location>>,
}

impl Topology {
    /// Build the topology for the given profile.
    pub fn for_profile(profile: SimProfile) -> Self {
        match profile {
            SimProfile::ReducedWater => reduced_water(),
            SimProfile::ReducedWbls => reduced_wbls(),
            SimProfile::Full => full(),
        }
    }

    /// Processes present in this topology.
    pub fn processes(&self) -> impl Iterator<Item = Process> + '_ {
        self.process_locations.keys().copied()
    }

    /// Every `(process, location, isotope)` triple reachable from the chain map.
    pub fn triples(&self) -> impl Iterator<Item = (Process, Location, Isotope)> + '_ {
        self.chain_map.iter().flat_map(|(&process, locations)| {
            locations.iter().flat_map(move |(&location, isotopes)| {
                isotopes
                    .iter()
                    .map(move |&isotope| (process, location, isotope))
            })
        })
    }

    /// Human-readable inventory, one line per active (process, location) pair.
    ///
    /// Follows the curated `process_locations` ordering within each process.
    pub fn inventory(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (process, locations) in &self.process_locations {
            for location in locations {
                let isotopes = self
                    .chain_map
                    .get(process)
                    .and_then(|m| m.get(location))
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                lines.push(format!("{process}: {location}: {isotopes:?}"));
            }
        }
        lines
    }
}

fn chain(entries: &[(Location, &[Isotope])]) -> BTreeMap<Location, Vec<Isotope>> {
    entries
        .iter()
        .map(|&(location, isotopes)| (location, isotopes.to_vec()))
        .collect()
}

/// Reduced inventory for Gd-water running in the 16 m detector.
///
/// Only decays with singles rates above 1e-3 Hz survive the cut
/// (fiducial rPMT - 0.5 m, n9 > 9); 210Tl is kept regardless because it can
/// decay with a coincident beta-neutron. Surviving members per component:
///
/// ```text
/// PMT            232Th: 208Tl, 212Bi, 228Ac;  238U: 210Tl, 214Bi, 234Pa;  40K
/// PSUP           232Th: 208Tl;                238U: 210Tl, 214Bi;         40K; 60Co; 54Mn
/// IBEAM          232Th: 208Tl;                238U: 210Tl
/// TANK           232Th: 208Tl;                238U: 210Tl, 214Bi;         40K; 60Co; 54Mn
/// GD-WATER       232Th: 208Tl;                238U: 210Tl, 214Bi, 234Pa
/// ROCK (inner)   232Th: 208Tl;                238U: 210Tl;                radiogenic neutrons
/// ENCAPSULATION  232Th: 208Tl;                238U: 210Tl, 214Bi;         40K; 60Co; 54Mn
/// ```
fn reduced_water() -> Topology {
    use Location::*;
    use Process::*;

    let chain_map = BTreeMap::from([
        (
            U238Chain,
            chain(&[
                (Liquid, &["210Tl", "214Bi", "234Pa"]),
                (Pmt, &["210Tl", "214Bi", "234Pa"]),
                (Tank, &["210Tl", "214Bi"]),
                (Ibeam, &["210Tl"]),
                (Rock2, &["210Tl"]),
                (Psup, &["210Tl", "214Bi"]),
                (Encap, &["210Tl", "214Bi"]),
            ]),
        ),
        (
            Th232Chain,
            chain(&[
                (Liquid, &["208Tl"]),
                (Psup, &["208Tl"]),
                (Pmt, &["208Tl", "212Bi", "228Ac"]),
                (Tank, &["208Tl"]),
                (Ibeam, &["208Tl"]),
                (Rock2, &["208Tl"]),
                (Encap, &["208Tl", "212Bi", "228Ac"]),
            ]),
        ),
        (
            K40,
            chain(&[
                (Pmt, &["40K"]),
                (Encap, &["40K"]),
                (Psup, &["40K"]),
                (Tank, &["40K"]),
            ]),
        ),
        (
            Co60,
            chain(&[
                (Psup, &["60Co"]),
                (Encap, &["60Co"]),
                (Tank, &["60Co"]),
            ]),
        ),
        (
            Mn54,
            chain(&[
                (Psup, &["54Mn"]),
                (Encap, &["54Mn"]),
                (Tank, &["54Mn"]),
            ]),
        ),
        (Radiogenic, chain(&[(Rock2, &["rock_neutrons"])])),
        (Singles, chain(&[(All, &["singles"])])),
        (Cosmogenic, chain(&[(Liquid, SPALLATION)])),
        (FastNeutrons, chain(&[(Rock2, &["fast_neutrons"])])),
        (Mono, chain(&[(Liquid, &["e-"])])),
    ]);

    let process_locations = BTreeMap::from([
        (U238Chain, vec![Pmt, Psup, Liquid, Tank, Ibeam, Rock2, Encap]),
        (Th232Chain, vec![Pmt, Psup, Liquid, Tank, Ibeam, Rock2, Encap]),
        (K40, vec![Pmt, Psup, Tank, Encap]),
        (Co60, vec![Psup, Tank, Encap]),
        (Mn54, vec![Psup, Tank, Encap]),
        (Radiogenic, vec![Rock2]),
        (Cosmogenic, vec![Liquid]),
        (Singles, vec![All]),
        (Mono, vec![Liquid]),
        (FastNeutrons, vec![Rock2]),
    ]);

    Topology {
        chain_map,
        process_locations,
    }
}

/// Reduced inventory for Gd-WbLS running in the 16 m detector.
///
/// Only decays with singles rates above 1e-3 Hz survive the cut
/// (fiducial rPMT - 0.5 m, n100 > 9); 210Tl is kept regardless because it
/// can decay with a coincident beta-neutron.
fn reduced_wbls() -> Topology {
    use Location::*;
    use Process::*;

    let chain_map = BTreeMap::from([
        (
            U238Chain,
            chain(&[
                (Liquid, U238_FULL),
                (Pmt, U238_FULL),
                (Tank, &["214Bi", "210Tl"]),
                (Rock2, &["214Bi", "210Tl"]),
                (Ibeam, &["214Bi", "210Tl"]),
                (Psup, &["234Pa", "214Pb", "214Bi", "210Tl"]),
            ]),
        ),
        (
            Th232Chain,
            chain(&[
                (Liquid, &["228Ac", "208Tl"]),
                (Pmt, &["228Ac", "212Bi", "208Tl"]),
                (Tank, &["228Ac", "212Pb", "208Tl"]),
                (Rock2, &["212Bi", "208Tl"]),
                (Ibeam, &["208Tl"]),
                (Psup, &["228Ac", "212Pb", "208Tl"]),
            ]),
        ),
        (
            U235Chain,
            chain(&[
                (Liquid, &["211Pb", "207Tl"]),
                (Psup, &["211Pb"]),
            ]),
        ),
        (
            K40,
            chain(&[
                (Liquid, &["40K"]),
                (Tank, &["40K"]),
                (Ibeam, &["40K"]),
                (Psup, &["40K"]),
                (Pmt, &["40K"]),
                (Rock2, &["40K"]),
            ]),
        ),
        (
            Co60,
            chain(&[
                (Psup, &["60Co"]),
                (Tank, &["60Co"]),
                (Ibeam, &["60Co"]),
            ]),
        ),
        (Cs137, chain(&[(Psup, &["137Cs"])])),
        (Singles, chain(&[(All, &["singles"])])),
        (Cosmogenic, chain(&[(Liquid, SPALLATION)])),
        (FastNeutrons, chain(&[(Rock2, &["fast_neutrons"])])),
        (Radiogenic, chain(&[(Rock2, &["rock_neutrons"])])),
        (Mono, chain(&[(Liquid, &["e-"])])),
    ]);

    let process_locations = BTreeMap::from([
        (U238Chain, vec![Pmt, Psup, Ibeam, Tank, Rock2, Liquid]),
        (Th232Chain, vec![Pmt, Psup, Ibeam, Tank, Rock2, Liquid]),
        (U235Chain, vec![Psup, Liquid]),
        (K40, vec![Liquid, Pmt, Psup, Ibeam, Tank, Rock2]),
        (Co60, vec![Tank, Psup, Ibeam]),
        (Cs137, vec![Psup]),
        (Cosmogenic, vec![Liquid]),
        (Singles, vec![All]),
        (Mono, vec![Liquid]),
        (Radiogenic, vec![Rock2]),
        (FastNeutrons, vec![Rock2]),
    ]);

    Topology {
        chain_map,
        process_locations,
    }
}

/// Full inventory: every catalogued decay in every component that carries it.
/// Some of these sources may never produce a trigger.
fn full() -> Topology {
    use Location::*;
    use Process::*;

    let all_components: &[Location] = &[Liquid, Pmt, Tank, Rock2, Ibeam, Psup, Encap, Liner];

    let chain_map = BTreeMap::from([
        (
            U238Chain,
            chain(
                &all_components
                    .iter()
                    .map(|&l| (l, U238_FULL))
                    .collect::<Vec<_>>(),
            ),
        ),
        (
            Th232Chain,
            chain(
                &all_components
                    .iter()
                    .map(|&l| (l, TH232_FULL))
                    .collect::<Vec<_>>(),
            ),
        ),
        (
            U235Chain,
            chain(
                &all_components
                    .iter()
                    .map(|&l| (l, U235_FULL))
                    .collect::<Vec<_>>(),
            ),
        ),
        (
            K40,
            chain(
                &all_components
                    .iter()
                    .map(|&l| (l, &["40K"] as &[Isotope]))
                    .collect::<Vec<_>>(),
            ),
        ),
        (
            Co60,
            chain(&[
                (Psup, &["60Co"]),
                (Tank, &["60Co"]),
                (Pmt, &["60Co"]),
                (Ibeam, &["60Co"]),
                (Encap, &["60Co"]),
                (Liner, &["60Co"]),
            ]),
        ),
        (
            Mn54,
            chain(&[
                (Psup, &["54Mn"]),
                (Tank, &["54Mn"]),
                (Encap, &["54Mn"]),
            ]),
        ),
        (
            Cs137,
            chain(&[
                (Psup, &["137Cs"]),
                (Tank, &["137Cs"]),
                (Ibeam, &["137Cs"]),
            ]),
        ),
        (Singles, chain(&[(All, &["singles"])])),
        (Cosmogenic, chain(&[(Liquid, SPALLATION)])),
        (
            FastNeutrons,
            chain(&[(Rock2, &["fast_neutrons"]), (Rock1, &["fast_neutrons"])]),
        ),
        (
            Radiogenic,
            chain(&[(Rock1, &["rock_neutrons"]), (Rock2, &["rock_neutrons"])]),
        ),
        (Mono, chain(&[(Liquid, &["e+", "e-", "gamma"])])),
    ]);

    let process_locations = BTreeMap::from([
        (U238Chain, vec![Pmt, Psup, Ibeam, Tank, Rock2, Liquid, Encap, Liner]),
        (Th232Chain, vec![Pmt, Psup, Ibeam, Tank, Rock2, Liquid, Encap, Liner]),
        (U235Chain, vec![Tank, Psup, Liquid, Ibeam, Pmt, Rock2, Encap, Liner]),
        (K40, vec![Liquid, Pmt, Psup, Ibeam, Tank, Rock2, Encap, Liner]),
        (Co60, vec![Tank, Psup, Ibeam, Pmt, Encap, Liner]),
        (Mn54, vec![Psup, Tank, Encap]),
        (Cs137, vec![Tank, Psup, Ibeam]),
        (Cosmogenic, vec![Liquid]),
        (Singles, vec![All]),
        (Mono, vec![Liquid]),
        (Radiogenic, vec![Rock2, Rock1]),
        (FastNeutrons, vec![Rock2, Rock1]),
    ]);

    Topology {
        chain_map,
        process_locations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn assert_consistent(topology: &Topology) {
        let chain_processes: BTreeSet<_> = topology.chain_map.keys().copied().collect();
        let listed_processes: BTreeSet<_> = topology.process_locations.keys().copied().collect();
        assert_eq!(chain_processes, listed_processes);

        for (process, locations) in &topology.process_locations {
            let listed: BTreeSet<_> = locations.iter().copied().collect();
            let mapped: BTreeSet<_> = topology.chain_map[process].keys().copied().collect();
            assert_eq!(listed, mapped, "location mismatch for {process}");
            // Curated lists must not carry duplicates either.
            assert_eq!(listed.len(), locations.len(), "duplicate location for {process}");
        }
    }

    #[test]
    fn reduced_water_is_consistent() {
        assert_consistent(&Topology::for_profile(SimProfile::ReducedWater));
    }

    #[test]
    fn reduced_wbls_is_consistent() {
        assert_consistent(&Topology::for_profile(SimProfile::ReducedWbls));
    }

    #[test]
    fn full_is_consistent() {
        assert_consistent(&Topology::for_profile(SimProfile::Full));
    }

    #[test]
    fn full_processes_superset_of_reduced() {
        let full: BTreeSet<_> = Topology::for_profile(SimProfile::Full)
            .processes()
            .collect();
        let water: BTreeSet<_> = Topology::for_profile(SimProfile::ReducedWater)
            .processes()
            .collect();
        let wbls: BTreeSet<_> = Topology::for_profile(SimProfile::ReducedWbls)
            .processes()
            .collect();

        assert!(full.is_superset(&water));
        assert!(full.is_superset(&wbls));
        // Strict: the full inventory carries chains the reduced ones drop.
        assert!(full.contains(&Process::U235Chain) && !water.contains(&Process::U235Chain));
        assert!(full.contains(&Process::Mn54) && !wbls.contains(&Process::Mn54));
    }

    #[test]
    fn full_includes_outer_rock_and_liner() {
        let full = Topology::for_profile(SimProfile::Full);
        assert!(full.process_locations[&Process::Radiogenic].contains(&Location::Rock1));
        assert!(full.process_locations[&Process::U238Chain].contains(&Location::Liner));

        let water = Topology::for_profile(SimProfile::ReducedWater);
        for locations in water.process_locations.values() {
            assert!(!locations.contains(&Location::Rock1));
            assert!(!locations.contains(&Location::Liner));
        }
    }

    #[test]
    fn chains_keep_decay_order() {
        let full = Topology::for_profile(SimProfile::Full);
        assert_eq!(
            full.chain_map[&Process::U238Chain][&Location::Pmt],
            vec!["234Pa", "214Pb", "214Bi", "210Bi", "210Tl"]
        );
        let wbls = Topology::for_profile(SimProfile::ReducedWbls);
        assert_eq!(
            wbls.chain_map[&Process::Th232Chain][&Location::Ibeam],
            vec!["208Tl"]
        );
    }

    #[test]
    fn inventory_covers_every_pair() {
        let full = Topology::for_profile(SimProfile::Full);
        let pairs: usize = full.process_locations.values().map(Vec::len).sum();
        let lines = full.inventory();
        assert_eq!(lines.len(), pairs);
        assert!(lines.iter().any(|l| l.starts_with("CHAIN_238U_NA: PMT:")));
        assert!(lines.iter().any(|l| l.contains("rock_neutrons")));
    }
}
