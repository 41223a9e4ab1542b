use crate::version::SemanticVersion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Check report envelope, written when the caller asks for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Schema identifier, e.g. "boostcheck.report.v1".
    pub schema: String,

    pub tool: ToolInfo,

    #[serde(default)]
    pub run: RunInfo,

    /// Project root the check ran against.
    pub project_dir: String,

    pub cli_version: SemanticVersion,

    pub project_version: SemanticVersion,

    pub status: ReportStatus,

    pub resolution: Resolution,

    /// Informational messages emitted during the check, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

/// Overall status of a completed check. Failed checks never produce a
/// report; the command terminates with the failure instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Pass,
    Warn,
}

/// How the version comparison was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// CLI and project versions match exactly.
    UpToDate,
    /// Versions differ only in the patch component.
    PatchDrift,
    /// The project's dependencies were rewritten to the CLI version.
    DependenciesUpgraded,
}
