//! The preflight check pipeline.
//!
//! Control flow: project recognition (must pass) → manifest read + version
//! parse → compatibility policy → (for the upgradeable verdict only) the
//! interactive upgrade coordinator.

use crate::settings::CheckSettings;
use boostcheck_domain::{
    cli_version_from_user_agent, evaluate, patch_drift_notice, resolve_upgrade, CheckError,
    Confirmer, ManifestWriter, Notifier,
};
use boostcheck_project::{declared_framework_version, verify_project, NotABoosterProject, RepoView};
use boostcheck_types::report::Resolution;
use boostcheck_types::{CompatibilityVerdict, SemanticVersion};
use tracing::debug;

/// Pipeline failure. Exit code 2 = compatibility policy block, 1 = anything
/// else (recognition and runtime errors).
#[derive(Debug, thiserror::Error)]
pub enum PreflightError {
    #[error(transparent)]
    Project(#[from] NotABoosterProject),

    #[error(transparent)]
    Check(#[from] CheckError),

    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

impl PreflightError {
    /// True for outcomes of the compatibility policy itself, as opposed to
    /// recognition or runtime failures.
    pub fn is_policy_block(&self) -> bool {
        matches!(
            self,
            PreflightError::Check(
                CheckError::ToolTooOld { .. }
                    | CheckError::ToolTooNewBreaking { .. }
                    | CheckError::UserDeclinedUpgrade { .. }
            )
        )
    }

    /// The recommended process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        if self.is_policy_block() { 2 } else { 1 }
    }
}

/// Outcome of a successful check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub cli_version: SemanticVersion,
    pub project_version: SemanticVersion,
    pub resolution: Resolution,
}

/// Run project recognition only.
pub fn run_recognize(repo: &dyn RepoView) -> Result<(), PreflightError> {
    verify_project(repo)?;
    Ok(())
}

/// Run the full preflight: recognize the project, then reconcile its
/// declared framework version with the CLI's.
pub fn run_check(
    settings: &CheckSettings,
    repo: &dyn RepoView,
    confirmer: &dyn Confirmer,
    notifier: &dyn Notifier,
    writer: &dyn ManifestWriter,
) -> Result<CheckOutcome, PreflightError> {
    verify_project(repo)?;

    let declared = declared_framework_version(repo)?;
    let project_version: SemanticVersion =
        declared.parse().map_err(CheckError::MalformedVersion)?;
    let cli_version = settings.cli_version;
    debug!(%cli_version, %project_version, "comparing versions");

    let resolution = match evaluate(cli_version, project_version) {
        CompatibilityVerdict::Compatible => Resolution::UpToDate,
        CompatibilityVerdict::CompatibleWithWarning { cli, project } => {
            notifier.info(&patch_drift_notice(cli, project));
            Resolution::PatchDrift
        }
        CompatibilityVerdict::ToolTooOld { cli, project } => {
            return Err(CheckError::ToolTooOld { cli, project }.into());
        }
        CompatibilityVerdict::ProjectUpgradeable { cli, project } => {
            resolve_upgrade(cli, project, confirmer, writer, notifier)?;
            Resolution::DependenciesUpgraded
        }
        CompatibilityVerdict::ToolTooNewBreaking { cli, project } => {
            return Err(CheckError::ToolTooNewBreaking { cli, project }.into());
        }
    };

    Ok(CheckOutcome {
        cli_version,
        project_version,
        resolution,
    })
}

/// Convenience for hosts that hand over their invocation user agent instead
/// of a parsed version.
pub fn cli_version_from_invocation(
    user_agent: &str,
) -> Result<SemanticVersion, PreflightError> {
    cli_version_from_user_agent(user_agent)
        .map_err(|e| PreflightError::Check(CheckError::MalformedVersion(e)))
}
