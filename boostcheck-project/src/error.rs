use thiserror::Error;

/// The single recognition failure: the directory is not (recognizably) the
/// root of a Booster project.
///
/// The underlying cause (missing file, malformed manifest, absent startup
/// marker) is folded into the message rather than exposed as a variant;
/// callers act the same way regardless of which step failed.
#[derive(Debug, Error)]
#[error(
    "there was an error when recognizing the application. Make sure you are in the root path of a Booster project:\n{cause}"
)]
pub struct NotABoosterProject {
    cause: String,
}

impl NotABoosterProject {
    pub(crate) fn from_cause(cause: anyhow::Error) -> Self {
        Self {
            cause: format!("{cause:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_keeps_the_cause_chain() {
        let cause = anyhow::anyhow!("no such file").context("read tsconfig.json");
        let err = NotABoosterProject::from_cause(cause);
        let message = err.to_string();
        assert!(message.contains("root path of a Booster project"));
        assert!(message.contains("read tsconfig.json"));
        assert!(message.contains("no such file"));
    }
}
