//! Capability ports for the interactive and side-effecting collaborators.
//!
//! The policy engine stays a pure function of two versions; prompting,
//! logging, and the manifest rewrite go through these traits so the whole
//! flow can be exercised in memory.

/// Asks the user a yes/no question and waits for the answer.
pub trait Confirmer {
    fn confirm(&self, question: &str) -> anyhow::Result<bool>;
}

/// Sink for informational messages. Fire-and-forget.
pub trait Notifier {
    fn info(&self, message: &str);
}

/// Rewrites the framework dependency entries in the project manifest.
pub trait ManifestWriter {
    fn set_framework_version(&self, version: &str) -> anyhow::Result<()>;
}
