//! Project recognition and manifest I/O for Booster projects.
//!
//! This crate owns *where* project facts come from: whether a directory is a
//! recognizable Booster project, and which framework version its
//! `package.json` declares. It does not decide version compatibility; that's
//! `boostcheck-domain`.

mod error;
mod manifest;
mod ports;
mod recognizer;
mod updater;

pub use error::NotABoosterProject;
pub use manifest::{
    declared_framework_version, load_build_config, load_package_manifest, BuildConfig,
    PackageManifest, BUILD_CONFIG_FILE, FRAMEWORK_CORE_PACKAGE, PACKAGE_MANIFEST_FILE,
};
pub use ports::{FsRepoView, RepoView};
pub use recognizer::{verify_project, STARTUP_MARKER};
pub use updater::update_framework_dependencies;
