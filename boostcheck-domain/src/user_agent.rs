use boostcheck_types::{MalformedVersion, SemanticVersion};

/// Extract the CLI version from a user-agent-style invocation string of the
/// form `<package-id>/<version> <platform> <runtime>`, e.g.
/// `@boostercloud/cli/1.11.2 darwin-x64 node-v12.10.0`.
///
/// The version is the trailing slash-delimited segment of the first
/// whitespace-delimited token, so scoped and bare package ids both work.
pub fn cli_version_from_user_agent(
    user_agent: &str,
) -> Result<SemanticVersion, MalformedVersion> {
    let first_token = user_agent.split_whitespace().next().unwrap_or("");
    let version = first_token.rsplit('/').next().unwrap_or("");
    version.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_from_a_scoped_package_id() {
        let version =
            cli_version_from_user_agent("@boostercloud/cli/1.11.2 darwin-x64 node-v12.10.0")
                .expect("version");
        assert_eq!(version, SemanticVersion::new(1, 11, 2));
    }

    #[test]
    fn extracts_from_a_bare_package_id() {
        let version = cli_version_from_user_agent("cli/2.0.1 linux-x64 node-v16.3.0")
            .expect("version");
        assert_eq!(version, SemanticVersion::new(2, 0, 1));
    }

    #[test]
    fn rejects_a_two_component_version() {
        let err = cli_version_from_user_agent("@boostercloud/cli/1.11 darwin-x64 node-v12.10.0")
            .unwrap_err();
        assert!(matches!(err, MalformedVersion::WrongLength { .. }));
    }

    #[test]
    fn rejects_a_four_component_version() {
        let err =
            cli_version_from_user_agent("@boostercloud/cli/1.11.2.1 darwin-x64 node-v12.10.0")
                .unwrap_err();
        assert!(matches!(err, MalformedVersion::WrongLength { .. }));
    }

    #[test]
    fn rejects_an_empty_user_agent() {
        assert!(cli_version_from_user_agent("").is_err());
    }

    #[test]
    fn rejects_a_token_without_a_version() {
        assert!(cli_version_from_user_agent("not-a-user-agent").is_err());
    }
}
