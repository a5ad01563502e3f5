#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod address;
pub mod asset_paths;
pub mod chains;
pub mod config;
pub mod discovery;
pub mod error;
pub mod fixers;
pub mod json_file;
pub mod logo;
pub mod models;
mod persist;
pub mod runner;
pub mod selection;

pub use asset_paths::RepoLayout;
pub use config::{Dimensions, FixerConfig, LogoLimits, ReconcilerConfig};
pub use discovery::{ChainArtifacts, discover_chains};
pub use error::{FixError, FixResult};
pub use fixers::{FileUpdateNotifier, Service, TracingNotifier};
pub use models::{ArtifactKind, AssetFile, AssetInfoDocument, ChainInfoDocument, FixOutcome};
pub use runner::{FixFailure, RunSummary, run_fixers};
pub use selection::{ChainInclusion, ChainSelection};
