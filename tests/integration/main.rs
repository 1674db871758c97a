//! Integration tests for nix-action

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    const RUNNER_VARS: &[&str] = &[
        "GITHUB_WORKFLOW_REF",
        "RUNNER_NAME",
        "RUNNER_OS",
        "RUNNER_ARCH",
        "GITHUB_JOB",
        "GITHUB_ENV",
        "GITHUB_OUTPUT",
        "GITHUB_ACTIONS",
        "RUNNER_DEBUG",
        "NIX_ACTION_SCRIPTS_DIR",
    ];

    /// Command isolated from the host runner and user config
    fn nix_action(config_dir: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("nix-action");
        for var in RUNNER_VARS {
            cmd.env_remove(var);
        }
        let config = config_dir.path().join("config.toml");
        if !config.exists() {
            fs::write(&config, "").unwrap();
        }
        cmd.env("NIX_ACTION_CONFIG", config);
        cmd
    }

    fn with_runner_env(cmd: &mut Command) -> &mut Command {
        cmd.env("GITHUB_WORKFLOW_REF", "abc")
            .env("RUNNER_NAME", "")
            .env("RUNNER_OS", "")
            .env("RUNNER_ARCH", "")
            .env("GITHUB_JOB", "build")
    }

    #[test]
    fn help_displays() {
        let dir = TempDir::new().unwrap();
        nix_action(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Nix CI action"));
    }

    #[test]
    fn version_displays() {
        let dir = TempDir::new().unwrap();
        nix_action(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("nix-action"));
    }

    #[test]
    fn cache_key_plain() {
        let dir = TempDir::new().unwrap();
        let mut cmd = nix_action(&dir);
        with_runner_env(&mut cmd)
            .arg("cache-key")
            .assert()
            .success()
            .stdout(
                "nix-cache-900150983cd24fb0d6963f7d28e17f72-d41d8cd98f00b204e9800998ecf8427e-build\n\
                 nix-cache-900150983cd24fb0d6963f7d28e17f72-d41d8cd98f00b204e9800998ecf8427e-\n\
                 nix-cache-900150983cd24fb0d6963f7d28e17f72-\n\
                 nix-cache-\n",
            );
    }

    #[test]
    fn cache_key_json() {
        let dir = TempDir::new().unwrap();
        let mut cmd = nix_action(&dir);
        let output = with_runner_env(&mut cmd)
            .args(["cache-key", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(json["primary"].as_str().unwrap().ends_with("-build"));
        assert_eq!(json["restore_keys"].as_array().unwrap().len(), 3);
        assert_eq!(json["paths"][0], "~/.cache/nix");
    }

    #[test]
    fn cache_key_writes_github_output() {
        let dir = TempDir::new().unwrap();
        let output_file = dir.path().join("github_output");
        let mut cmd = nix_action(&dir);
        with_runner_env(&mut cmd)
            .env("GITHUB_OUTPUT", &output_file)
            .args(["cache-key", "--github-output"])
            .assert()
            .success();

        let content = fs::read_to_string(&output_file).unwrap();
        assert!(content.contains("key<<ghadelimiter_"));
        assert!(content.contains("restore-keys<<ghadelimiter_"));
        assert!(content.contains("\nnix-cache-\n"));
        assert!(content.contains("paths<<ghadelimiter_"));
    }

    #[test]
    fn cache_key_github_output_requires_file() {
        let dir = TempDir::new().unwrap();
        nix_action(&dir)
            .args(["cache-key", "--github-output"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("GITHUB_OUTPUT"));
    }

    #[test]
    fn script_resolves_path() {
        let dir = TempDir::new().unwrap();
        nix_action(&dir)
            .args(["script", "configureAWS", "--scripts-dir", "/opt/scripts"])
            .assert()
            .success()
            .stdout("/opt/scripts/configure-aws.sh\n");
    }

    #[test]
    fn script_dir_from_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[scripts]\ndir = \"/srv/action/scripts\"\n",
        )
        .unwrap();
        nix_action(&dir)
            .args(["script", "restartNixDaemon"])
            .assert()
            .success()
            .stdout("/srv/action/scripts/restart-nix-daemon.sh\n");
    }

    #[test]
    fn script_lists_all() {
        let dir = TempDir::new().unwrap();
        nix_action(&dir)
            .args(["script", "--scripts-dir", "/opt/scripts"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("configurePostBuildHook")
                    .and(predicate::str::contains("/opt/scripts/push-new-nix-store-paths.sh")),
            );
    }

    #[test]
    fn script_unknown_fails() {
        let dir = TempDir::new().unwrap();
        nix_action(&dir)
            .args(["script", "doesNotExist"])
            .assert()
            .failure()
            .stderr(
                predicate::str::contains("Unknown script: doesNotExist")
                    .and(predicate::str::contains("Hint:")),
            );
    }

    #[test]
    fn script_unknown_annotates_under_actions() {
        let dir = TempDir::new().unwrap();
        nix_action(&dir)
            .env("GITHUB_ACTIONS", "true")
            .args(["script", "doesNotExist"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("::error::Unknown script: doesNotExist"));
    }

    #[test]
    fn export_input_uses_default() {
        let dir = TempDir::new().unwrap();
        nix_action(&dir)
            .env_remove("INPUT_MY-INPUT")
            .args(["export-input", "my-input=fallback"])
            .assert()
            .success()
            .stdout("INPUT_MY_INPUT=fallback\n");
    }

    #[test]
    fn export_input_writes_github_env() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join("github_env");
        nix_action(&dir)
            .env("GITHUB_ENV", &env_file)
            .env("INPUT_NIX_CONF", "experimental-features = nix-command")
            .args(["export-input", "nix_conf"])
            .assert()
            .success();

        let content = fs::read_to_string(&env_file).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert!(lines[0].starts_with("INPUT_NIX_CONF<<ghadelimiter_"));
        assert_eq!(lines[1], "experimental-features = nix-command");
    }

    #[test]
    fn export_input_debug_trace() {
        let dir = TempDir::new().unwrap();
        nix_action(&dir)
            .env_remove("INPUT_SSH-KEY")
            .args(["-vv", "export-input", "ssh-key"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Exporting variable INPUT_SSH_KEY to ''"));
    }

    #[test]
    fn runner_debug_enables_trace() {
        let dir = TempDir::new().unwrap();
        nix_action(&dir)
            .env("RUNNER_DEBUG", "1")
            .env_remove("INPUT_SSH-KEY")
            .args(["export-input", "ssh-key"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Exporting variable INPUT_SSH_KEY to ''"));
    }

    #[test]
    fn quiet_by_default() {
        let dir = TempDir::new().unwrap();
        nix_action(&dir)
            .env_remove("INPUT_SSH-KEY")
            .args(["export-input", "ssh-key"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Exporting variable").not());
    }

    #[test]
    fn json_log_format() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[general]\nlog_format = \"json\"\n",
        )
        .unwrap();
        nix_action(&dir)
            .env_remove("INPUT_SSH-KEY")
            .args(["-vv", "export-input", "ssh-key"])
            .assert()
            .success()
            .stderr(
                predicate::str::contains(r#""level":"DEBUG""#)
                    .and(predicate::str::contains("Exporting variable INPUT_SSH_KEY")),
            );
    }

    #[test]
    fn config_load_is_logged() {
        let dir = TempDir::new().unwrap();
        nix_action(&dir)
            .args(["-vv", "config", "path"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Loaded configuration from"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn missing_default_config_is_logged() {
        let dir = TempDir::new().unwrap();
        nix_action(&dir)
            .env_remove("NIX_ACTION_CONFIG")
            .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
            .args(["-vv", "config", "show"])
            .assert()
            .success()
            .stderr(predicate::str::contains("not found, using defaults"));
    }

    #[test]
    fn config_path() {
        let dir = TempDir::new().unwrap();
        nix_action(&dir)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let dir = TempDir::new().unwrap();
        nix_action(&dir)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[general]"));
    }

    #[test]
    fn missing_config_fails() {
        let dir = TempDir::new().unwrap();
        nix_action(&dir)
            .env("NIX_ACTION_CONFIG", dir.path().join("absent.toml"))
            .args(["config", "show"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Configuration file not found"));
    }

    #[test]
    fn package_keeps_scripts_dir() {
        let manifest =
            fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml")).unwrap();
        let manifest: toml::Value = toml::from_str(&manifest).unwrap();
        let exclude = manifest["package"]["exclude"].as_array().unwrap();
        assert!(!exclude.iter().any(|e| e.as_str() == Some("scripts/")));
    }
}
