//! # decaymap-core
//!
//! **Background-rate model builder for a simulated Gd-water antineutrino
//! detector.**
//!
//! `decaymap-core` maps every radioactive-decay process, the detector
//! component it sits in, and the isotopes it emits to a per-second
//! production rate and a per-job event batch. Job and macro generators
//! downstream read the model to decide which simulations to emit and how to
//! convert job counts back into detector live-time.
//!
//! ## Quick Start
//!
//! ```
//! use decaymap_core::{BackgroundModel, ModelConfig};
//!
//! // Full inventory, baseline PMT activity.
//! let model = BackgroundModel::build(&ModelConfig::default());
//!
//! let entry = model.rates.get("40K_ROCK_2_40K_NA").unwrap();
//! assert_eq!(entry.events_per_sec, 2.23e6);
//! assert_eq!(entry.events_per_job, 1000);
//!
//! // Enumerate everything the simulation should produce.
//! for (process, location, isotope) in model.topology.triples() {
//!     let _key = decaymap_core::rates::rate_key(isotope, location, process);
//! }
//! ```
//!
//! ## Architecture
//!
//! Config -> Profile selection -> Topology + RateTable -> immutable model
//!
//! The three simulation profiles (reduced-water, reduced-WbLS, full) are
//! independent hand-curated datasets sharing one schema; the rate table is a
//! single catalogue the reduced topologies reach a subset of. All rate
//! constants are prior radioassay results — nothing is simulated here. The
//! only runtime arithmetic is the relative PMT activity scaling, applied
//! exactly once during construction.

pub mod config;
pub mod error;
pub mod model;
pub mod profile;
pub mod rates;
pub mod source;
pub mod topology;
pub mod validate;

pub use config::{ModelConfig, PmtScaling};
pub use error::{ConfigError, ConfigResult};
pub use model::BackgroundModel;
pub use profile::SimProfile;
pub use rates::{RateEntry, RateTable, rate_key};
pub use source::{Isotope, Location, Process};
pub use topology::Topology;
pub use validate::{ConsistencyReport, Defect, consistency_report};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
