use boostcheck_types::{CompatibilityVerdict, SemanticVersion};

/// Compare the running CLI version against the project's declared framework
/// version.
///
/// The branches are evaluated in order; the first match wins:
/// 1. equal → compatible
/// 2. patch-only drift, either direction → compatible with a notice
/// 3. CLI behind the project → blocked until the CLI is upgraded
/// 4. CLI ahead within the same major → the project may be upgraded after
///    confirmation
/// 5. CLI a major version ahead → blocked
pub fn evaluate(cli: SemanticVersion, project: SemanticVersion) -> CompatibilityVerdict {
    if cli == project {
        return CompatibilityVerdict::Compatible;
    }
    if cli.major == project.major && cli.minor == project.minor {
        return CompatibilityVerdict::CompatibleWithWarning { cli, project };
    }
    if cli < project {
        return CompatibilityVerdict::ToolTooOld { cli, project };
    }
    if cli.major == project.major {
        CompatibilityVerdict::ProjectUpgradeable { cli, project }
    } else {
        CompatibilityVerdict::ToolTooNewBreaking { cli, project }
    }
}

/// Notice emitted when the versions differ only in the 'fix' component.
pub fn patch_drift_notice(cli: SemanticVersion, project: SemanticVersion) -> String {
    format!(
        "WARNING: Project Booster version differs in the 'fix' section from CLI version. CLI version: {cli}. Project Booster version: {project}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn v(s: &str) -> SemanticVersion {
        s.parse().expect("test version")
    }

    #[test]
    fn equal_versions_are_compatible() {
        assert_eq!(
            evaluate(v("1.11.2"), v("1.11.2")),
            CompatibilityVerdict::Compatible
        );
    }

    #[test]
    fn patch_drift_warns_when_cli_is_ahead() {
        assert_eq!(
            evaluate(v("1.11.3"), v("1.11.2")),
            CompatibilityVerdict::CompatibleWithWarning {
                cli: v("1.11.3"),
                project: v("1.11.2"),
            }
        );
    }

    #[test]
    fn patch_drift_warns_when_cli_is_behind() {
        assert_eq!(
            evaluate(v("1.11.0"), v("1.11.2")),
            CompatibilityVerdict::CompatibleWithWarning {
                cli: v("1.11.0"),
                project: v("1.11.2"),
            }
        );
    }

    #[test]
    fn minor_deficit_blocks_the_tool() {
        assert_eq!(
            evaluate(v("1.10.2"), v("1.11.2")),
            CompatibilityVerdict::ToolTooOld {
                cli: v("1.10.2"),
                project: v("1.11.2"),
            }
        );
    }

    #[test]
    fn major_deficit_blocks_the_tool() {
        assert_eq!(
            evaluate(v("0.11.2"), v("1.11.2")),
            CompatibilityVerdict::ToolTooOld {
                cli: v("0.11.2"),
                project: v("1.11.2"),
            }
        );
    }

    #[test]
    fn minor_surplus_offers_a_project_upgrade() {
        assert_eq!(
            evaluate(v("1.12.2"), v("1.11.2")),
            CompatibilityVerdict::ProjectUpgradeable {
                cli: v("1.12.2"),
                project: v("1.11.2"),
            }
        );
    }

    #[test]
    fn major_surplus_blocks_without_an_offer() {
        assert_eq!(
            evaluate(v("2.11.2"), v("1.11.2")),
            CompatibilityVerdict::ToolTooNewBreaking {
                cli: v("2.11.2"),
                project: v("1.11.2"),
            }
        );
    }

    #[test]
    fn notice_names_both_versions() {
        let notice = patch_drift_notice(v("1.11.3"), v("1.11.2"));
        assert!(notice.contains("1.11.3"));
        assert!(notice.contains("1.11.2"));
        assert!(notice.contains("'fix' section"));
    }
}
