#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub const SECRET: &str = "cli-test-secret";

/// Config used by most tests: one post field and one plain field.
pub const CONFIG: &str = r#"{
    "fields": {"color": {"template": "my-color", "palette": ["red", "blue"]}},
    "shortcodes": {
        "gallery": {
            "label": "Gallery",
            "attrs": [
                {"attr": "ids", "type": "post", "query": {"post_type": "attachment", "post_status": "any", "posts_per_page": 2}},
                {"attr": "tint", "type": "color"}
            ]
        }
    },
    "store": "posts"
}"#;

/// Write `contents` as `config.json` in `dir` and return its path.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, contents).unwrap();
    path
}

/// Run the CLI with an isolated HOME, the given config and the test secret.
pub fn run_cli(home: &Path, config: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shortcode-ui"));
    cmd.arg("--config").arg(config);
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("SHORTCODE_UI_SECRET", SECRET);
    cmd.env_remove("SHORTCODE_UI_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub fn run_cli_success(home: &Path, config: &Path, args: &[&str]) -> String {
    let output = run_cli(home, config, args);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Add a post and return its id.
pub fn add_post(home: &Path, config: &Path, args: &[&str]) -> u64 {
    let mut full = vec!["add-post"];
    full.extend_from_slice(args);
    let stdout = run_cli_success(home, config, &full);
    stdout.lines().next().unwrap().trim().parse().unwrap()
}
