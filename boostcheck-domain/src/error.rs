use boostcheck_types::{MalformedVersion, SemanticVersion};
use thiserror::Error;

/// Version-compatibility failures. All are terminal for the current command:
/// none reflect transient conditions, so nothing is retried.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The CLI is older than the project's framework, by a minor or a major
    /// deficit.
    #[error(
        "the Booster version of your project ({project}) is newer than your CLI version ({cli}). Please upgrade your @boostercloud/cli to the same version with npm install -g @boostercloud/cli@{project}"
    )]
    ToolTooOld {
        cli: SemanticVersion,
        project: SemanticVersion,
    },

    /// The CLI is at least a major version ahead of the project.
    #[error(
        "your CLI version ({cli}) is a major version ahead of the Booster version of your project ({project}). Please upgrade your project dependencies or install the same CLI version with npm install -g @boostercloud/cli@{project}"
    )]
    ToolTooNewBreaking {
        cli: SemanticVersion,
        project: SemanticVersion,
    },

    /// The user turned down the offered dependency upgrade.
    #[error(
        "the upgrade was declined. Please upgrade your project dependencies to Booster version {cli} before proceeding"
    )]
    UserDeclinedUpgrade {
        cli: SemanticVersion,
        project: SemanticVersion,
    },

    #[error(transparent)]
    MalformedVersion(#[from] MalformedVersion),

    /// A prompt or manifest-rewrite failure surfaced by one of the ports.
    #[error(transparent)]
    Port(#[from] anyhow::Error),
}
