use crate::version::SemanticVersion;

/// Outcome of comparing the running CLI version against the framework
/// version a project declares.
///
/// Created fresh per check; never persisted. Each variant carries the two
/// versions so the caller can render messages without re-reading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatibilityVerdict {
    /// Versions match exactly. Proceed.
    Compatible,

    /// Same major and minor, different patch (either direction). Proceed
    /// after an informational notice.
    CompatibleWithWarning {
        cli: SemanticVersion,
        project: SemanticVersion,
    },

    /// The CLI is older than the project's framework, whether by a minor or
    /// a major deficit. Blocked until the CLI itself is upgraded.
    ToolTooOld {
        cli: SemanticVersion,
        project: SemanticVersion,
    },

    /// The CLI is ahead within the same major. The project's dependencies
    /// may be upgraded after an interactive confirmation.
    ProjectUpgradeable {
        cli: SemanticVersion,
        project: SemanticVersion,
    },

    /// The CLI is at least a major version ahead. Blocked; a breaking
    /// boundary is never crossed unattended.
    ToolTooNewBreaking {
        cli: SemanticVersion,
        project: SemanticVersion,
    },
}
