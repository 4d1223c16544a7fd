//! Cross-process determinism for run and search reports.
//!
//! Spawns the `pancake_fixture` binary under several environment variants
//! and asserts all produce identical output, and that the output carries the
//! known answers.

use std::path::Path;
use std::process::Command;

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_pancake_fixture");

    let mut command = Command::new(bin);
    command.current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "pancake_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    for line in [
        "pancake_number_0=0",
        "pancake_number_1=0",
        "pancake_number_2=1",
        "pancake_number_3=3",
        "pancake_number_4=4",
        "pancake_number_5=5",
        "pancake_number_6=7",
        "witness=(1,3,2,5,4)",
        "counters=7260,28560,11085",
        "depth_histogram_6=1,5,20,79,199,281,133,2",
    ] {
        assert!(
            baseline.lines().any(|l| l == line),
            "baseline output missing {line}:\n{baseline}"
        );
    }
    for key in [
        "run_report_digest=sha256:",
        "eccentricity_run_report_digest=sha256:",
        "search_report_digest=sha256:",
    ] {
        assert!(
            baseline.lines().any(|l| l.starts_with(key)),
            "baseline output missing {key}"
        );
    }

    let tmp = std::env::temp_dir();
    let variants: [(&str, &[(&str, &str)]); 3] = [
        (tmp.to_str().expect("temp dir is UTF-8"), &[]),
        (root.as_str(), &[("LC_ALL", "C"), ("LANG", "C")]),
        (root.as_str(), &[("TZ", "Pacific/Chatham"), ("RUST_LOG", "debug")]),
    ];
    for (work_dir, overrides) in variants {
        let output = run_variant(work_dir, overrides);
        assert_eq!(
            output, baseline,
            "output differs under work_dir={work_dir}, overrides={overrides:?}"
        );
    }
}
