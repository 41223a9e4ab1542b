use crate::error::NotABoosterProject;
use crate::manifest::load_build_config;
use crate::ports::RepoView;
use anyhow::Context;
use camino::Utf8PathBuf;
use tracing::debug;

/// Literal call the entry file must contain for the directory to count as a
/// Booster application.
pub const STARTUP_MARKER: &str = "Booster.start(";

const ENTRY_FILE_NAME: &str = "index.ts";

/// Check that `repo` points at the root of a Booster project.
///
/// Every sub-failure (unreadable or malformed `tsconfig.json`, unresolvable
/// entry file, missing startup marker) collapses into
/// [`NotABoosterProject`]; callers never distinguish the causes.
pub fn verify_project(repo: &dyn RepoView) -> Result<(), NotABoosterProject> {
    recognize(repo).map_err(NotABoosterProject::from_cause)
}

fn recognize(repo: &dyn RepoView) -> anyhow::Result<()> {
    let config = load_build_config(repo)?;
    let entry = Utf8PathBuf::from(config.compiler_options.root_dir).join(ENTRY_FILE_NAME);
    debug!(entry = entry.as_str(), root = repo.root().as_str(), "checking project entry file");

    let contents = repo
        .read_to_string(&entry)
        .with_context(|| format!("read entry file {entry}"))?;
    if !contents.contains(STARTUP_MARKER) {
        anyhow::bail!(
            "the main application file does not start a Booster application. Verify you are in the right project"
        );
    }
    Ok(())
}
