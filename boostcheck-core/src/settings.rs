//! Clap-free settings for the check pipeline.

use boostcheck_types::SemanticVersion;
use camino::Utf8PathBuf;

/// Settings for [`run_check`](crate::pipeline::run_check).
#[derive(Debug, Clone)]
pub struct CheckSettings {
    /// Candidate project root.
    pub project_dir: Utf8PathBuf,

    /// Version of the tool performing the check.
    pub cli_version: SemanticVersion,
}
