//! Tests for CLI argument parsing and the assembly runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tamtam::io::cli::{AssemblyRunner, Cli};
    use tamtam::io::configuration::{DEFAULT_CRT_P, DEFAULT_CRT_Q, DEFAULT_SEED_SIZE};
    use tamtam::{AlgorithmError, Result};

    fn temp_dir() -> Result<tempfile::TempDir> {
        tempfile::tempdir()
            .map_err(|e| tamtam::io::error::file_system_error("tempdir", "create directory", e))
    }

    // Tests defaults describe the CRT demonstration
    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["tamtam"]);

        assert_eq!(cli.crt_p, DEFAULT_CRT_P);
        assert_eq!(cli.crt_q, DEFAULT_CRT_Q);
        assert_eq!(cli.size, DEFAULT_SEED_SIZE);
        assert_eq!(cli.threshold, 2);
        assert!(cli.input.is_none());
        assert!(cli.should_show_progress());
        assert!(cli.driver().directed());
    }

    // Tests every flag is parsed
    #[test]
    fn test_cli_arguments() {
        let cli = Cli::parse_from([
            "tamtam", "--crt-p", "3", "--crt-q", "5", "-s", "7", "-t", "1", "-u", "-m", "4", "-o",
            "a.json", "--png", "a.png", "--gif", "a.gif", "--scale", "8", "-q",
        ]);

        assert_eq!((cli.crt_p, cli.crt_q, cli.size, cli.threshold), (3, 5, 7, 1));
        assert!(cli.undirected);
        assert_eq!(cli.max_rounds, Some(4));
        assert_eq!(cli.scale, 8);
        assert!(!cli.should_show_progress());
        assert!(!cli.driver().directed());
        assert!(cli.gif.is_some());
    }

    // Tests a quiet run converges and writes every output
    #[test]
    fn test_run_writes_outputs() -> Result<()> {
        let dir = temp_dir()?;
        let json = dir.path().join("grown.json");
        let png = dir.path().join("grown.png");
        let gif = dir.path().join("grown.gif");
        let cli = Cli::parse_from([
            "tamtam",
            "--crt-p",
            "2",
            "--crt-q",
            "3",
            "-s",
            "3",
            "-q",
            "-o",
            &*json.to_string_lossy(),
            "--png",
            &*png.to_string_lossy(),
            "--gif",
            &*gif.to_string_lossy(),
        ]);

        let outcome = AssemblyRunner::new(cli).run()?;

        assert_eq!(outcome.assembly.size(), 15);
        assert!(outcome.summary.converged);
        assert!(json.exists());
        assert!(png.exists());
        assert!(gif.exists());
        Ok(())
    }

    // Tests a saved assembly is resumed through --input
    #[test]
    fn test_run_resumes_input() -> Result<()> {
        let dir = temp_dir()?;
        let json = dir.path().join("partial.json");
        let json_arg = json.to_string_lossy().into_owned();
        let first = Cli::parse_from(["tamtam", "-s", "5", "-m", "2", "-q", "-o", json_arg.as_str()]);
        let partial = AssemblyRunner::new(first).run()?;
        assert!(!partial.summary.converged);

        let second = Cli::parse_from(["tamtam", "-q", "-i", json_arg.as_str()]);
        let outcome = AssemblyRunner::new(second).run()?;

        assert!(outcome.summary.converged);
        // 5 x 5 grown region plus the 10 seed tiles
        assert_eq!(outcome.assembly.size(), 35);
        Ok(())
    }

    // Tests invalid CRT parameters abort the run
    #[test]
    fn test_run_rejects_invalid_tile_set() {
        let cli = Cli::parse_from(["tamtam", "--crt-p", "4", "--crt-q", "6", "-q"]);

        let result = AssemblyRunner::new(cli).run();

        assert!(matches!(result, Err(AlgorithmError::Configuration { .. })));
    }
}
