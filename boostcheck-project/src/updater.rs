//! Rewrites the Booster dependency entries in a project's `package.json`.

use crate::manifest::PACKAGE_MANIFEST_FILE;
use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use tracing::debug;

/// npm scope shared by all Booster framework packages.
const FRAMEWORK_SCOPE: &str = "@boostercloud/";

const DEPENDENCY_TABLES: &[&str] = &["dependencies", "devDependencies"];

/// Point every `@boostercloud/*` entry in `package.json` at `version`.
///
/// Entries are written with a caret requirement (`^<version>`), the form
/// Booster project templates use. Foreign entries are left untouched. The
/// rewrite is a single read-modify-write of the whole document; there is no
/// partial state to roll back.
pub fn update_framework_dependencies(project_dir: &Utf8Path, version: &str) -> anyhow::Result<()> {
    let path = project_dir.join(PACKAGE_MANIFEST_FILE);
    let contents = fs::read_to_string(&path).with_context(|| format!("read {path}"))?;
    let mut doc: serde_json::Value =
        serde_json::from_str(&contents).with_context(|| format!("parse {path}"))?;

    let requirement = format!("^{version}");
    let mut updated = 0usize;
    for table in DEPENDENCY_TABLES {
        let Some(deps) = doc.get_mut(*table).and_then(|v| v.as_object_mut()) else {
            continue;
        };
        for (name, value) in deps.iter_mut() {
            if name.starts_with(FRAMEWORK_SCOPE) {
                *value = serde_json::Value::String(requirement.clone());
                updated += 1;
            }
        }
    }
    debug!(updated, version, "rewrote Booster dependency entries");

    let mut out =
        serde_json::to_string_pretty(&doc).with_context(|| format!("serialize {path}"))?;
    out.push('\n');
    fs::write(&path, out).with_context(|| format!("write {path}"))?;
    Ok(())
}
