//! Background source taxonomy: decay processes and detector locations.
//!
//! A background *source* is one decay (or physical) process occurring in one
//! detector sub-volume. Processes and locations are closed enumerations; the
//! emitted isotope/species is an open set of string labels (decay chains emit
//! a sequence of daughters, cosmogenics emit spallation nuclides, and the
//! calibration process emits bare particles such as `e-`).

use serde::{Deserialize, Serialize};

/// A radioactive-decay or physical background process.
///
/// Each variant carries a stable string key used in rate-table keys and in
/// exported data. The keys follow the RAT-PAC generator naming convention
/// (`CHAIN_238U_NA` etc.) and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Process {
    /// Uranium-238 decay chain.
    #[serde(rename = "CHAIN_238U_NA")]
    U238Chain,
    /// Thorium-232 decay chain.
    #[serde(rename = "CHAIN_232Th_NA")]
    Th232Chain,
    /// Uranium-235 decay chain.
    #[serde(rename = "CHAIN_235U_NA")]
    U235Chain,
    /// Potassium-40, a single-isotope background.
    #[serde(rename = "40K_NA")]
    K40,
    /// Cobalt-60 contamination in steel components.
    #[serde(rename = "60Co_NA")]
    Co60,
    /// Manganese-54 contamination in steel components.
    #[serde(rename = "54Mn_NA")]
    Mn54,
    /// Caesium-137 surface contamination.
    #[serde(rename = "137Cs_NA")]
    Cs137,
    /// Radiogenic neutrons from (alpha,n) reactions in the surrounding rock.
    #[serde(rename = "RADIOGENIC")]
    Radiogenic,
    /// Muon-induced fast neutrons from the rock overburden.
    #[serde(rename = "FASTNEUTRONS")]
    FastNeutrons,
    /// Cosmogenic spallation products (9Li, 17N, 8He) in the target.
    #[serde(rename = "A_Z")]
    Cosmogenic,
    /// Combined unaccompanied-trigger (singles) sample.
    #[serde(rename = "singles")]
    Singles,
    /// Monoenergetic test particles for detector response checks.
    #[serde(rename = "mono")]
    Mono,
}

impl Process {
    /// Stable string key as it appears in rate-table keys and macros.
    pub fn key(&self) -> &'static str {
        match self {
            Self::U238Chain => "CHAIN_238U_NA",
            Self::Th232Chain => "CHAIN_232Th_NA",
            Self::U235Chain => "CHAIN_235U_NA",
            Self::K40 => "40K_NA",
            Self::Co60 => "60Co_NA",
            Self::Mn54 => "54Mn_NA",
            Self::Cs137 => "137Cs_NA",
            Self::Radiogenic => "RADIOGENIC",
            Self::FastNeutrons => "FASTNEUTRONS",
            Self::Cosmogenic => "A_Z",
            Self::Singles => "singles",
            Self::Mono => "mono",
        }
    }
}

impl std::fmt::Display for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A detector sub-volume in which background sources sit.
///
/// The set of locations active for a process depends on the simulation
/// profile; the enumeration itself is the union over all profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Inner PMT assemblies (glass, dynode stack, base).
    #[serde(rename = "PMT")]
    Pmt,
    /// PMT support structure.
    #[serde(rename = "PSUP")]
    Psup,
    /// Gd-loaded water target.
    #[serde(rename = "LIQUID")]
    Liquid,
    /// Steel tank.
    #[serde(rename = "TANK")]
    Tank,
    /// Tank support I-beams.
    #[serde(rename = "IBEAM")]
    Ibeam,
    /// Outer rock shell of the cavern.
    #[serde(rename = "ROCK_1")]
    Rock1,
    /// Inner rock shell, closest to the tank.
    #[serde(rename = "ROCK_2")]
    Rock2,
    /// Source encapsulation hardware.
    #[serde(rename = "ENCAP")]
    Encap,
    /// Cavern liner.
    #[serde(rename = "LINER")]
    Liner,
    /// Whole detector (combined-sample bookkeeping only).
    #[serde(rename = "ALL")]
    All,
}

impl Location {
    /// Stable string key as it appears in rate-table keys and macros.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Pmt => "PMT",
            Self::Psup => "PSUP",
            Self::Liquid => "LIQUID",
            Self::Tank => "TANK",
            Self::Ibeam => "IBEAM",
            Self::Rock1 => "ROCK_1",
            Self::Rock2 => "ROCK_2",
            Self::Encap => "ENCAP",
            Self::Liner => "LINER",
            Self::All => "ALL",
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// An isotope or emitted species label (e.g. `"214Bi"`, `"rock_neutrons"`,
/// `"e-"`). Labels may contain spaces (`"li 9"`); rate-table keys strip them.
pub type Isotope = &'static str;
