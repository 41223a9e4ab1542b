//! Embeddable preflight pipeline for boostcheck.
//!
//! Provides a clap-free, I/O-abstracted entry point suitable for linking
//! into a host CLI or other process.
//!
//! # Port traits
//!
//! All I/O and user interaction is abstracted behind port traits:
//! - [`RepoView`] (from boostcheck-project) — read project files
//! - [`Confirmer`] / [`Notifier`] / [`ManifestWriter`] (from
//!   boostcheck-domain) — prompt, log, rewrite
//!
//! The [`adapters`] module provides default implementations.
//!
//! # Entry points
//!
//! - [`run_check`](pipeline::run_check) — recognize the project, then
//!   reconcile its declared framework version with the CLI's
//! - [`run_recognize`](pipeline::run_recognize) — project recognition only

pub mod adapters;
pub mod pipeline;
pub mod settings;

// Re-exports so embedders don't need the lower crates directly.
pub use boostcheck_domain::{CheckError, Confirmer, ManifestWriter, Notifier};
pub use boostcheck_project::{FsRepoView, RepoView};
pub use pipeline::{
    cli_version_from_invocation, run_check, run_recognize, CheckOutcome, PreflightError,
};
pub use settings::CheckSettings;
