#[cfg(test)]
mod tests {
    use std::fs;
    use std::process::Command;

    use stargaze::output::TextOutput;
    use stargaze::Render;
    use tempfile::TempDir;

    fn stargaze() -> Command {
        Command::new(env!("CARGO_BIN_EXE_stargaze"))
    }

    const STARS_JSON: &str = r#"[
  {
    "full_name": "foo/bar",
    "stargazers": 42,
    "language": "Go",
    "url": "http://x",
    "starred_at": "2024-05-03T12:00:00Z"
  }
]"#;

    #[test]
    fn show_renders_summaries_from_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stars.json");
        fs::write(&path, STARS_JSON).unwrap();

        let output = stargaze()
            .args(["show", path.to_str().unwrap(), "--output", "text"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("foo/bar ★ :42 Go http://x"));
    }

    #[test]
    fn show_missing_file_reports_error_and_exits_with_status_one() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-stars.json");

        let output = stargaze()
            .args(["show", path.to_str().unwrap()])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Error:"));
        assert!(stderr.contains("Stars file not found"));
    }

    #[test]
    fn show_unknown_output_exits_with_status_one() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stars.json");
        fs::write(&path, "[]").unwrap();

        let output = stargaze()
            .args(["show", path.to_str().unwrap(), "--output", "json"])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Error:"));
        assert!(stderr.contains("Unknown output 'json'"));
    }

    #[test]
    fn outputs_lists_registered_backends() {
        let output = stargaze().arg("outputs").output().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("color"));
        assert!(stdout.contains("text"));
    }

    // Re-runs this one test in a child process so the exit can be
    // observed: the child takes the env-var branch, calls `fatal`,
    // and must report the text on stderr before exiting with 1.
    #[test]
    fn fatal_reports_through_error_then_exits_with_status_one() {
        if std::env::var_os("STARGAZE_FATAL_CHILD").is_some() {
            let mut renderer = TextOutput::new();
            renderer.fatal("giving up");
        }

        let exe = std::env::current_exe().unwrap();
        let output = Command::new(exe)
            .args([
                "tests::fatal_reports_through_error_then_exits_with_status_one",
                "--exact",
            ])
            .env("STARGAZE_FATAL_CHILD", "1")
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("giving up"));
    }
}
