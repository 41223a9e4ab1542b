use crate::error::CheckError;
use crate::ports::{Confirmer, ManifestWriter, Notifier};
use boostcheck_types::SemanticVersion;
use tracing::debug;

/// Drive the interactive consequence of a `ProjectUpgradeable` verdict.
///
/// On acceptance the manifest rewrite is delegated to `writer` with the
/// CLI's version; rewrite failures propagate unchanged. On refusal the check
/// fails with [`CheckError::UserDeclinedUpgrade`].
pub fn resolve_upgrade(
    cli: SemanticVersion,
    project: SemanticVersion,
    confirmer: &dyn Confirmer,
    writer: &dyn ManifestWriter,
    notifier: &dyn Notifier,
) -> Result<(), CheckError> {
    let question = format!(
        "Your CLI version ({cli}) is newer than the Booster version declared by this project ({project}). Update the project dependencies to {cli}?"
    );
    if !confirmer.confirm(&question)? {
        debug!(%cli, %project, "user declined the dependency upgrade");
        return Err(CheckError::UserDeclinedUpgrade { cli, project });
    }

    writer.set_framework_version(&cli.to_string())?;
    notifier.info(&format!(
        "package.json Booster dependencies have been updated to version {cli}"
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Answer(bool);

    impl Confirmer for Answer {
        fn confirm(&self, _question: &str) -> anyhow::Result<bool> {
            Ok(self.0)
        }
    }

    #[derive(Default)]
    struct Recorder {
        written: RefCell<Vec<String>>,
        notices: RefCell<Vec<String>>,
    }

    impl ManifestWriter for Recorder {
        fn set_framework_version(&self, version: &str) -> anyhow::Result<()> {
            self.written.borrow_mut().push(version.to_string());
            Ok(())
        }
    }

    impl Notifier for Recorder {
        fn info(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }
    }

    struct FailingWriter;

    impl ManifestWriter for FailingWriter {
        fn set_framework_version(&self, _version: &str) -> anyhow::Result<()> {
            anyhow::bail!("disk full")
        }
    }

    fn v(s: &str) -> SemanticVersion {
        s.parse().expect("test version")
    }

    #[test]
    fn acceptance_delegates_the_rewrite_and_notifies() {
        let recorder = Recorder::default();
        resolve_upgrade(v("1.12.2"), v("1.11.2"), &Answer(true), &recorder, &recorder)
            .expect("upgrade");
        assert_eq!(recorder.written.borrow().as_slice(), ["1.12.2"]);
        let notices = recorder.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].contains("updated to version 1.12.2"));
    }

    #[test]
    fn refusal_fails_without_touching_the_manifest() {
        let recorder = Recorder::default();
        let err = resolve_upgrade(v("1.12.2"), v("1.11.2"), &Answer(false), &recorder, &recorder)
            .unwrap_err();
        assert!(matches!(err, CheckError::UserDeclinedUpgrade { .. }));
        assert!(recorder.written.borrow().is_empty());
        assert!(recorder.notices.borrow().is_empty());
    }

    #[test]
    fn rewrite_failures_propagate() {
        let recorder = Recorder::default();
        let err = resolve_upgrade(
            v("1.12.2"),
            v("1.11.2"),
            &Answer(true),
            &FailingWriter,
            &recorder,
        )
        .unwrap_err();
        assert!(matches!(err, CheckError::Port(_)));
        assert!(err.to_string().contains("disk full"));
        assert!(recorder.notices.borrow().is_empty());
    }
}
