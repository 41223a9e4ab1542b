//! Default port implementations.

use boostcheck_domain::{Confirmer, ManifestWriter, Notifier};
use boostcheck_project::update_framework_dependencies;
use camino::Utf8PathBuf;
use std::sync::Mutex;
use tracing::info;

/// Rewrites `package.json` in place via `boostcheck_project`.
#[derive(Debug, Clone)]
pub struct FsManifestWriter {
    project_dir: Utf8PathBuf,
}

impl FsManifestWriter {
    pub fn new(project_dir: Utf8PathBuf) -> Self {
        Self { project_dir }
    }
}

impl ManifestWriter for FsManifestWriter {
    fn set_framework_version(&self, version: &str) -> anyhow::Result<()> {
        update_framework_dependencies(&self.project_dir, version)
    }
}

/// Routes informational messages to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn info(&self, message: &str) {
        info!("{message}");
    }
}

/// Collects messages in memory, for embedding and testing.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("notifier lock poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn info(&self, message: &str) {
        self.messages
            .lock()
            .expect("notifier lock poisoned")
            .push(message.to_string());
    }
}

/// Answers every confirmation with a fixed decision, for non-interactive
/// runs and tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticConfirmer(pub bool);

impl Confirmer for StaticConfirmer {
    fn confirm(&self, _question: &str) -> anyhow::Result<bool> {
        Ok(self.0)
    }
}
