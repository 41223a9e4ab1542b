//! Typed views of the two project manifests the checker consumes.
//!
//! Only the fields the checker needs are modeled; anything unexpected fails
//! fast at the call site and collapses into the recognition error there.

use crate::error::NotABoosterProject;
use crate::ports::RepoView;
use anyhow::Context;
use camino::Utf8Path;
use serde::Deserialize;
use std::collections::BTreeMap;

/// npm package id of the framework runtime every Booster project depends on.
pub const FRAMEWORK_CORE_PACKAGE: &str = "@boostercloud/framework-core";

pub const BUILD_CONFIG_FILE: &str = "tsconfig.json";
pub const PACKAGE_MANIFEST_FILE: &str = "package.json";

/// The slice of `tsconfig.json` the recognizer needs.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    #[serde(rename = "compilerOptions")]
    pub compiler_options: CompilerOptions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompilerOptions {
    /// Directory holding the project's entry sources, relative to the root.
    #[serde(rename = "rootDir")]
    pub root_dir: String,
}

/// The slice of `package.json` the checker needs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// The declared framework version, with a leading range indicator
    /// (`^` or `~`) stripped so it parses as a plain triple.
    pub fn framework_version(&self) -> anyhow::Result<&str> {
        let raw = self
            .dependencies
            .get(FRAMEWORK_CORE_PACKAGE)
            .with_context(|| {
                format!("{PACKAGE_MANIFEST_FILE} does not declare a dependency on {FRAMEWORK_CORE_PACKAGE}")
            })?;
        Ok(raw.trim_start_matches(['^', '~']))
    }
}

pub fn load_build_config(repo: &dyn RepoView) -> anyhow::Result<BuildConfig> {
    let contents = repo.read_to_string(Utf8Path::new(BUILD_CONFIG_FILE))?;
    serde_json::from_str(&contents).with_context(|| format!("parse {BUILD_CONFIG_FILE}"))
}

pub fn load_package_manifest(repo: &dyn RepoView) -> anyhow::Result<PackageManifest> {
    let contents = repo.read_to_string(Utf8Path::new(PACKAGE_MANIFEST_FILE))?;
    serde_json::from_str(&contents).with_context(|| format!("parse {PACKAGE_MANIFEST_FILE}"))
}

/// Read the framework version the project declares.
///
/// Any probing failure (unreadable or malformed `package.json`, missing
/// framework dependency) counts as a recognition failure, like the project
/// checks themselves.
pub fn declared_framework_version(repo: &dyn RepoView) -> Result<String, NotABoosterProject> {
    fn inner(repo: &dyn RepoView) -> anyhow::Result<String> {
        let manifest = load_package_manifest(repo)?;
        Ok(manifest.framework_version()?.to_string())
    }
    inner(repo).map_err(NotABoosterProject::from_cause)
}
