//! Common test utilities

use std::process::{Command, Output};

/// The full stdout the demo binary must produce on a clean run.
pub const TRANSCRIPT: &str = "Scott\n20\n1\nJill\n20\n(10, Jill, 20)\n10\n20\n";

/// Spawn the demo binary with the given environment overrides and collect its
/// output.
pub fn run_demo(envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_multiret"));
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to spawn multiret binary")
}
