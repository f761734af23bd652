#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_assemble_defaults() {
        let cli = Cli::try_parse_from(["sfcpack", "assemble"]).unwrap();

        match cli.command {
            Command::Assemble(args) => {
                assert_eq!(args.mode, None);
                assert!(!args.strict);
                assert!(!args.no_clean);
                assert_eq!(args.output, None);
            }
            _ => panic!("Expected Assemble command"),
        }
    }

    #[test]
    fn test_assemble_all_flags() {
        let cli = Cli::try_parse_from([
            "sfcpack",
            "assemble",
            "--mode",
            "prod",
            "--strict",
            "--no-clean",
            "--output",
            "configs.json",
        ])
        .unwrap();

        match cli.command {
            Command::Assemble(args) => {
                assert_eq!(args.mode.as_deref(), Some("prod"));
                assert!(args.strict);
                assert!(args.no_clean);
                assert_eq!(args.output, Some(PathBuf::from("configs.json")));
            }
            _ => panic!("Expected Assemble command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sfcpack",
            "check",
            "--verbose",
            "--config",
            "conf/sfcpack.json",
            "-C",
            "/work/widget",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("conf/sfcpack.json")));
        assert_eq!(cli.cwd, Some(PathBuf::from("/work/widget")));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["sfcpack", "-v", "-q", "clean"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_requires_request() {
        assert!(Cli::try_parse_from(["sfcpack", "resolve"]).is_err());

        let cli = Cli::try_parse_from(["sfcpack", "resolve", "vue", "--from", "src"]).unwrap();
        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.request, "vue");
                assert_eq!(args.from, Some(PathBuf::from("src")));
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
