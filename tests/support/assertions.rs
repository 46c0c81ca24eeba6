//! Assertion helpers shared across integration tests.

use std::process::Output;

/// Assert that a command succeeded, with stderr in the failure message.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Assert that a command failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "command unexpectedly succeeded: {}",
        String::from_utf8_lossy(&output.stdout)
    );
}

/// Assert that stdout contains a fragment.
pub fn assert_stdout_contains(output: &Output, fragment: &str) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(fragment),
        "stdout missing {:?}, got: {}",
        fragment,
        stdout
    );
}

/// Assert that stderr contains a fragment.
pub fn assert_stderr_contains(output: &Output, fragment: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(fragment),
        "stderr missing {:?}, got: {}",
        fragment,
        stderr
    );
}
