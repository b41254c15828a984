//! Cross-process determinism: the `search_fixture` binary prints a
//! byte-identical summary line on every invocation, regardless of
//! process-level state (cwd, locale, spurious env vars), and that line
//! matches the in-process rendering.

use std::path::Path;
use std::process::Command;

use lock_tests::fixtures::{reference_grid, reference_search, render_summary};

/// Resolve the path to the compiled binary.
///
/// `cargo test` puts test binaries in `target/debug/deps/` (or the profile
/// dir); the `search_fixture` binary lives one level up.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("search_fixture");
    path.to_string_lossy().to_string()
}

/// Run the binary with the given cwd and environment overrides.
/// Returns stdout as a string.
fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);

    // Clear locale-related env to establish baseline, then apply overrides.
    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

#[test]
fn crossproc_determinism_env_variants() {
    // Variant 1: baseline — cwd is workspace root, no locale overrides.
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);
    assert!(
        baseline.ends_with('\n') && baseline.lines().count() == 1,
        "fixture output should be a single summary line"
    );

    // Variant 2: same invocation again — byte-stable across runs.
    let repeat = run_variant(&root, &[]);
    assert_eq!(baseline, repeat, "output differs between identical runs");

    // Variant 3: different cwd.
    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    let variant_cwd = run_variant(alt_cwd, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    // Variant 4: different locale env.
    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    // Variant 5: spurious env vars that should not affect output.
    let variant_noise = run_variant(
        &root,
        &[
            ("WAYFARER_NOISE", "should_not_matter"),
            ("TZ", "America/New_York"),
            ("HOME", "/nonexistent"),
        ],
    );
    assert_eq!(
        baseline, variant_noise,
        "output differs with spurious env vars (WAYFARER_NOISE, TZ, HOME)"
    );
}

#[test]
fn crossproc_output_matches_in_process_summary() {
    let output = run_variant(&workspace_root(), &[]);

    let grid = reference_grid();
    let expected = render_summary(&reference_search(&grid));
    assert_eq!(
        output.trim_end_matches('\n'),
        expected,
        "fixture binary and in-process rendering disagree"
    );
}
