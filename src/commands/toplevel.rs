//! The qsv executable itself

plain_command!(
    /// Top-level `qsv` flags: command list, environment listing, updates and version
    Qsv
);

declare_params!(Qsv {
    list: flag,
    envlist: flag,
    update: flag,
    updatenow: flag,
    update_mcp_skills: flag,
    version: flag,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CommandKind, QsvCommand};

    #[test]
    fn test_top_level_flags() {
        let qsv = Qsv::new().version(true);
        assert_eq!(qsv.args(&[]), vec!["--version"]);
        assert_eq!(qsv.kind().subcommand(), "");

        let qsv = Qsv::new().update_mcp_skills(true).list(true);
        assert_eq!(qsv.args(&[]), vec!["--list", "--update-mcp-skills"]);
    }

    #[test]
    fn test_not_registered() {
        assert!(!crate::commands::all_command_kinds().contains(&CommandKind::Qsv));
    }
}
