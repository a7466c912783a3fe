//! Per-source production rates and job batching.
//!
//! One flat table maps `<isotope>_<location>_<process>` to a production rate
//! (events per second) and the number of events grouped into one simulation
//! job. The baseline constants come from component radioassay measurements
//! and are not recomputed here; the only arithmetic at build time is the
//! PMT activity scaling from [`PmtScaling`], applied exactly once.
//!
//! Keys are opaque: isotope labels may themselves contain underscores
//! (`rock_neutrons`) so a key cannot be split back into its parts. Use the
//! topology to enumerate triples and [`rate_key`] to form the lookup key.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::PmtScaling;
use crate::source::Location::*;
use crate::source::Process::*;
use crate::source::{Isotope, Location, Process};

/// Production rate and batching for one background source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateEntry {
    /// Decays (or events) per second. Zero marks a structurally present but
    /// physically negligible source.
    pub events_per_sec: f64,
    /// Events grouped into one simulation job for this source.
    pub events_per_job: u32,
}

/// Build the rate-table key for a topology triple.
///
/// Isotope labels lose their spaces (`"li 9"` becomes `li9`), matching the
/// generator naming used in macro files.
pub fn rate_key(isotope: &str, location: Location, process: Process) -> String {
    format!("{}_{}_{}", isotope.replace(' ', ""), location, process)
}

// ---------------------------------------------------------------------------
// Baseline rates (events/s) and batch sizes, per source
// ---------------------------------------------------------------------------
//
// Columns: isotope, location, process, events/s, events per job.
//
// Chain daughters fed by a branch carry the branching fraction as part of
// the literal: 210Tl is reached in 0.02% of 238U-chain decays, the 232Th
// chain splits 0.64/0.36 between 212Bi and 208Tl, and in the 235U chain
// 223Fr carries a 1.38% and 211Bi a 0.27% branch.
//
// Batch sizes trade expected yield against job granularity: distant
// high-rate sources (rock shells) batch 1000 events per job, near-detector
// components 50, and rare or per-event samples run one event per job.
const BASE_RATES: &[(Isotope, Location, Process, f64, u32)] = &[
    // 40K
    ("40K", Liquid, K40, 1.20e-1, 50),
    ("40K", Pmt, K40, 3.48e+02, 50),
    ("40K", Ibeam, K40, 0.0, 50),
    ("40K", Psup, K40, 4.92e+00, 50),
    ("40K", Tank, K40, 9.70e+01, 50),
    ("40K", Rock2, K40, 2.23e+06, 1000),
    ("40K", Encap, K40, 3.87e+01, 50),
    ("40K", Liner, K40, 5.08e+00, 50),
    // 238U chain
    ("234Pa", Pmt, U238Chain, 1.07e+02, 50),
    ("214Pb", Pmt, U238Chain, 1.07e+02, 50),
    ("214Bi", Pmt, U238Chain, 1.07e+02, 50),
    ("210Bi", Pmt, U238Chain, 1.07e+02, 50),
    ("210Tl", Pmt, U238Chain, 1.07e+02 * 0.0002, 50),
    ("234Pa", Ibeam, U238Chain, 0.0, 1),
    ("214Pb", Ibeam, U238Chain, 0.0, 1),
    ("214Bi", Ibeam, U238Chain, 0.0, 1),
    ("210Bi", Ibeam, U238Chain, 0.0, 1),
    ("210Tl", Ibeam, U238Chain, 0.0 * 0.0002, 1),
    ("234Pa", Psup, U238Chain, 6.56e+00, 50),
    ("214Pb", Psup, U238Chain, 6.56e+00, 50),
    ("214Bi", Psup, U238Chain, 6.56e+00, 50),
    ("210Bi", Psup, U238Chain, 6.56e+00, 50),
    ("210Tl", Psup, U238Chain, 6.56e+00 * 0.0002, 50),
    ("234Pa", Tank, U238Chain, 3.20e+01, 50),
    ("214Pb", Tank, U238Chain, 3.20e+01, 50),
    ("214Bi", Tank, U238Chain, 3.20e+01, 50),
    ("210Bi", Tank, U238Chain, 3.20e+01, 50),
    ("210Tl", Tank, U238Chain, 3.20e+01 * 0.0002, 50),
    ("234Pa", Rock2, U238Chain, 3.24e+04, 1000),
    ("214Pb", Rock2, U238Chain, 3.24e+04, 1000),
    ("214Bi", Rock2, U238Chain, 3.24e+04, 1000),
    ("210Bi", Rock2, U238Chain, 3.24e+04, 1000),
    ("210Tl", Rock2, U238Chain, 3.24e+04 * 0.0002, 1000),
    ("234Pa", Liquid, U238Chain, 2.99e-2, 50),
    ("214Pb", Liquid, U238Chain, 2.99e-2, 50),
    ("214Bi", Liquid, U238Chain, 2.99e-2, 50),
    ("210Bi", Liquid, U238Chain, 2.99e-2, 50),
    ("210Tl", Liquid, U238Chain, 2.99e-2 * 0.0002, 50),
    ("234Pa", Encap, U238Chain, 1.92e+01, 50),
    ("214Pb", Encap, U238Chain, 1.92e+01, 50),
    ("214Bi", Encap, U238Chain, 1.92e+01, 50),
    ("210Bi", Encap, U238Chain, 1.92e+01, 50),
    ("210Tl", Encap, U238Chain, 1.92e+01 * 0.0002, 50),
    ("234Pa", Liner, U238Chain, 2.91e+00, 50),
    ("214Pb", Liner, U238Chain, 2.91e+00, 50),
    ("214Bi", Liner, U238Chain, 2.91e+00, 50),
    ("210Bi", Liner, U238Chain, 2.91e+00, 50),
    ("210Tl", Liner, U238Chain, 2.91e+00 * 0.0002, 50),
    // 232Th chain
    ("228Ac", Pmt, Th232Chain, 9.38e+01, 50),
    ("212Pb", Pmt, Th232Chain, 9.38e+01, 50),
    ("212Bi", Pmt, Th232Chain, 9.38e+01 * 0.64, 50),
    ("208Tl", Pmt, Th232Chain, 9.38e+01 * 0.36, 50),
    ("228Ac", Ibeam, Th232Chain, 0.0, 1),
    ("212Pb", Ibeam, Th232Chain, 0.0, 1),
    ("212Bi", Ibeam, Th232Chain, 0.0 * 0.64, 1),
    ("208Tl", Ibeam, Th232Chain, 0.0 * 0.36, 1),
    ("228Ac", Psup, Th232Chain, 5.64e-01, 50),
    ("212Pb", Psup, Th232Chain, 5.64e-01, 50),
    ("212Bi", Psup, Th232Chain, 5.64e-01 * 0.64, 50),
    ("208Tl", Psup, Th232Chain, 5.64e-01 * 0.36, 50),
    ("228Ac", Tank, Th232Chain, 2.50e+00, 50),
    ("212Pb", Tank, Th232Chain, 2.50e+00, 50),
    ("212Bi", Tank, Th232Chain, 2.50e+00 * 0.64, 50),
    ("208Tl", Tank, Th232Chain, 2.50e+00 * 0.36, 50),
    ("228Ac", Rock2, Th232Chain, 3.74e+04, 1000),
    ("212Pb", Rock2, Th232Chain, 3.74e+04, 1000),
    ("212Bi", Rock2, Th232Chain, 3.74e+04 * 0.64, 1000),
    ("208Tl", Rock2, Th232Chain, 3.74e+04 * 0.36, 1000),
    ("228Ac", Liquid, Th232Chain, 2.99e-03, 1),
    ("212Pb", Liquid, Th232Chain, 2.99e-03, 1),
    ("212Bi", Liquid, Th232Chain, 2.99e-03 * 0.64, 1),
    ("208Tl", Liquid, Th232Chain, 2.99e-03 * 0.36, 1),
    ("228Ac", Encap, Th232Chain, 8.39e+00, 50),
    ("212Pb", Encap, Th232Chain, 8.39e+00, 50),
    ("212Bi", Encap, Th232Chain, 8.39e+00 * 0.64, 50),
    ("208Tl", Encap, Th232Chain, 8.39e+00 * 0.36, 50),
    ("228Ac", Liner, Th232Chain, 1.99e-01, 50),
    ("212Pb", Liner, Th232Chain, 1.99e-01, 50),
    ("212Bi", Liner, Th232Chain, 1.99e-01 * 0.64, 50),
    ("208Tl", Liner, Th232Chain, 1.99e-01 * 0.36, 50),
    // 235U chain
    ("231Th", Ibeam, U235Chain, 0.0, 50),
    ("223Fr", Ibeam, U235Chain, 0.0 * 0.0138, 50),
    ("211Pb", Ibeam, U235Chain, 0.0, 50),
    ("211Bi", Ibeam, U235Chain, 0.0 * 0.00270, 50),
    ("207Tl", Ibeam, U235Chain, 0.0, 50),
    ("231Th", Psup, U235Chain, 3.02e-01, 50),
    ("223Fr", Psup, U235Chain, 3.02e-01 * 0.0138, 50),
    ("211Pb", Psup, U235Chain, 3.02e-01, 50),
    ("211Bi", Psup, U235Chain, 3.02e-01 * 0.00270, 50),
    ("207Tl", Psup, U235Chain, 3.02e-01, 50),
    ("231Th", Tank, U235Chain, 1.01e+00, 50),
    ("223Fr", Tank, U235Chain, 1.01e+00 * 0.0138, 50),
    ("211Pb", Tank, U235Chain, 1.01e+00, 50),
    ("211Bi", Tank, U235Chain, 1.01e+00 * 0.00270, 50),
    ("207Tl", Tank, U235Chain, 1.01e+00, 50),
    ("231Th", Liquid, U235Chain, 1.40e-03, 1),
    ("223Fr", Liquid, U235Chain, 1.40e-03 * 0.0138, 1),
    ("211Pb", Liquid, U235Chain, 1.40e-03, 1),
    ("211Bi", Liquid, U235Chain, 1.40e-03 * 0.00270, 1),
    ("207Tl", Liquid, U235Chain, 1.40e-03, 1),
    ("231Th", Pmt, U235Chain, 4.93e+00, 1),
    ("223Fr", Pmt, U235Chain, 4.93e+00 * 0.0138, 1),
    ("211Pb", Pmt, U235Chain, 4.93e+00, 1),
    ("211Bi", Pmt, U235Chain, 4.93e+00 * 0.00270, 1),
    ("207Tl", Pmt, U235Chain, 4.93e+00, 1),
    ("231Th", Liner, U235Chain, 1.34e-01, 1),
    ("223Fr", Liner, U235Chain, 1.34e-01 * 0.0138, 1),
    ("211Pb", Liner, U235Chain, 1.34e-01, 1),
    ("211Bi", Liner, U235Chain, 1.34e-01 * 0.00270, 1),
    ("207Tl", Liner, U235Chain, 1.34e-01, 1),
    ("231Th", Rock2, U235Chain, 1.49e+03, 1),
    ("223Fr", Rock2, U235Chain, 1.49e+03 * 0.0138, 1),
    ("211Pb", Rock2, U235Chain, 1.49e+03, 1),
    ("211Bi", Rock2, U235Chain, 1.49e+03 * 0.00270, 1),
    ("207Tl", Rock2, U235Chain, 1.49e+03, 1),
    ("231Th", Encap, U235Chain, 9.44e-01, 1),
    ("223Fr", Encap, U235Chain, 9.44e-01 * 0.0138, 1),
    ("211Pb", Encap, U235Chain, 9.44e-01, 1),
    ("211Bi", Encap, U235Chain, 9.44e-01 * 0.00270, 1),
    ("207Tl", Encap, U235Chain, 9.44e-01, 1),
    // 60Co
    ("60Co", Ibeam, Co60, 0.0, 50),
    ("60Co", Tank, Co60, 6.60e+01, 50),
    ("60Co", Psup, Co60, 6.14e+00, 50),
    ("60Co", Pmt, Co60, 5.49e+02, 50),
    ("60Co", Encap, Co60, 9.90e-01, 50),
    ("60Co", Liner, Co60, 3.52e-03, 50),
    // 54Mn
    ("54Mn", Tank, Mn54, 1.20e+01, 50),
    ("54Mn", Psup, Mn54, 1.29e+00, 50),
    ("54Mn", Encap, Mn54, 3.76e-01, 50),
    // 137Cs
    ("137Cs", Ibeam, Cs137, 0.0, 50),
    ("137Cs", Tank, Cs137, 0.0, 50),
    ("137Cs", Psup, Cs137, 0.0, 50),
    // Cosmogenic spallation
    ("li 9", Liquid, Cosmogenic, 2.357e-06, 1),
    ("n 17", Liquid, Cosmogenic, 1.441e-06, 1),
    ("he 8", Liquid, Cosmogenic, 8.986e-08, 1),
    // Combined singles sample
    ("singles", All, Singles, 996951.6168340801, 1),
    // Monoenergetic test particles
    ("e-", Liquid, Mono, 1.0, 1),
    ("e+", Liquid, Mono, 1.0, 1),
    ("gamma", Liquid, Mono, 1.0, 1),
    // Rock neutrons
    ("rock_neutrons", Rock2, Radiogenic, 6.58e-1, 1),
    ("rock_neutrons", Rock1, Radiogenic, 6.54, 1),
    ("fast_neutrons", Rock2, FastNeutrons, 8.26e-03, 1),
    ("fast_neutrons", Rock1, FastNeutrons, 8.21e-02, 1),
];

/// The flat key -> (rate, batch) table for every catalogued source.
///
/// The table is profile-independent: reduced-profile topologies simply reach
/// a subset of its keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RateTable {
    entries: BTreeMap<String, RateEntry>,
}

impl RateTable {
    /// Build the table, applying the PMT activity scaling exactly once.
    pub fn build(scaling: &PmtScaling) -> Self {
        let entries = BASE_RATES
            .iter()
            .map(|&(isotope, location, process, base_rate, events_per_job)| {
                let events_per_sec = base_rate * scaling.factor_for(process, location);
                (
                    rate_key(isotope, location, process),
                    RateEntry {
                        events_per_sec,
                        events_per_job,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Look up one entry by its opaque key.
    pub fn get(&self, key: &str) -> Option<&RateEntry> {
        self.entries.get(key)
    }

    /// Number of catalogued sources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RateEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> RateTable {
        RateTable::build(&PmtScaling::default())
    }

    #[test]
    fn key_strips_isotope_spaces() {
        assert_eq!(rate_key("li 9", Liquid, Cosmogenic), "li9_LIQUID_A_Z");
        assert_eq!(
            rate_key("rock_neutrons", Rock2, Radiogenic),
            "rock_neutrons_ROCK_2_RADIOGENIC"
        );
    }

    #[test]
    fn no_duplicate_rows() {
        assert_eq!(baseline().len(), BASE_RATES.len());
    }

    #[test]
    fn known_entries_match_assay_values() {
        let table = baseline();

        let rock_k40 = table.get("40K_ROCK_2_40K_NA").unwrap();
        assert_eq!(rock_k40.events_per_sec, 2.23e+06);
        assert_eq!(rock_k40.events_per_job, 1000);

        let singles = table.get("singles_ALL_singles").unwrap();
        assert_eq!(singles.events_per_sec, 996951.6168340801);
        assert_eq!(singles.events_per_job, 1);
    }

    #[test]
    fn branching_fractions_are_baked_in() {
        let table = baseline();
        let parent = table.get("228Ac_PMT_CHAIN_232Th_NA").unwrap();
        let bi212 = table.get("212Bi_PMT_CHAIN_232Th_NA").unwrap();
        let tl208 = table.get("208Tl_PMT_CHAIN_232Th_NA").unwrap();
        assert_eq!(bi212.events_per_sec, parent.events_per_sec * 0.64);
        assert_eq!(tl208.events_per_sec, parent.events_per_sec * 0.36);
    }

    #[test]
    fn u238_pmt_scaling_doubles_exactly_those_entries() {
        let baseline = baseline();
        let scaled = RateTable::build(&PmtScaling {
            u238: 2.0,
            ..PmtScaling::default()
        });

        let mut changed = Vec::new();
        for (key, entry) in scaled.iter() {
            let base = baseline.get(key).unwrap();
            assert_eq!(entry.events_per_job, base.events_per_job);
            if entry.events_per_sec != base.events_per_sec {
                assert_eq!(entry.events_per_sec, base.events_per_sec * 2.0);
                changed.push(key.to_string());
            }
        }

        // Every changed key is a 238U-chain PMT entry, one per daughter.
        for key in &changed {
            assert!(key.ends_with("_PMT_CHAIN_238U_NA"), "unexpected key {key}");
        }
        assert_eq!(changed.len(), 5);
    }

    #[test]
    fn th232_and_k40_scaling_touch_only_their_pmt_entries() {
        let baseline = baseline();
        let scaled = RateTable::build(&PmtScaling {
            th232: 3.0,
            k40: 0.5,
            ..PmtScaling::default()
        });

        for (key, entry) in scaled.iter() {
            let base = baseline.get(key).unwrap().events_per_sec;
            let expected = if key.ends_with("_PMT_CHAIN_232Th_NA") {
                base * 3.0
            } else if key == "40K_PMT_40K_NA" {
                base * 0.5
            } else {
                base
            };
            assert_eq!(entry.events_per_sec, expected, "key {key}");
        }
    }

    #[test]
    fn u235_pmt_entries_are_never_scaled() {
        let scaled = RateTable::build(&PmtScaling {
            u238: 7.0,
            th232: 7.0,
            k40: 7.0,
        });
        let base = baseline();
        for isotope in ["231Th", "223Fr", "211Pb", "211Bi", "207Tl"] {
            let key = rate_key(isotope, Pmt, U235Chain);
            assert_eq!(
                scaled.get(&key).unwrap().events_per_sec,
                base.get(&key).unwrap().events_per_sec
            );
        }
    }

    #[test]
    fn rates_non_negative_and_batches_positive() {
        for (key, entry) in baseline().iter() {
            assert!(
                entry.events_per_sec >= 0.0 && entry.events_per_sec.is_finite(),
                "bad rate for {key}"
            );
            assert!(entry.events_per_job > 0, "bad batch for {key}");
        }
    }

    #[test]
    fn zero_rate_sources_stay_in_the_table() {
        // Negligible sources keep an entry so topology lookups never miss.
        let table = baseline();
        assert_eq!(table.get("40K_IBEAM_40K_NA").unwrap().events_per_sec, 0.0);
        assert_eq!(table.get("137Cs_PSUP_137Cs_NA").unwrap().events_per_sec, 0.0);
    }
}
