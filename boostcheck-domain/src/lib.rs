//! Decision engine: reconcile the running CLI's version with the framework
//! version a project declares, and drive the upgrade conversation.
//!
//! This crate owns *what* the checker decides. It performs no I/O of its
//! own; everything user-facing or file-touching goes through the capability
//! ports in [`ports`], so the policy stays a pure function of two versions.

mod error;
mod policy;
mod ports;
mod upgrade;
mod user_agent;

pub use error::CheckError;
pub use policy::{evaluate, patch_drift_notice};
pub use ports::{Confirmer, ManifestWriter, Notifier};
pub use upgrade::resolve_upgrade;
pub use user_agent::cli_version_from_user_agent;
