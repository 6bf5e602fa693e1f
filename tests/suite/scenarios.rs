//! End-to-end launch outcomes: runtime present/absent, module exit codes.

use crate::common::{
    LaunchOutput, LauncherRun, RUNTIME_MISSING_MESSAGE, Sandbox, launch_failure_message,
};

const MODULE: &str = "eventeditor.timeline";

fn run_with(sandbox: &Sandbox, module_exit: i32) -> (String, LaunchOutput) {
    let python = sandbox.fake_interpreter("python", module_exit);
    let output = LauncherRun::new(sandbox).interpreter(&python).output();
    (python.display().to_string(), output)
}

#[test]
fn runtime_present_and_clean_exit_is_silent_success() {
    let sandbox = Sandbox::new();
    let (_, output) = run_with(&sandbox, 0);

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stderr, "");
    assert_eq!(output.stdout, format!("timeline editor started: -m {MODULE}\n"));
}

#[test]
fn runtime_absent_reports_missing_runtime_without_starting_module() {
    let sandbox = Sandbox::new();
    let output = LauncherRun::new(&sandbox)
        .interpreter(&sandbox.missing_interpreter())
        .output();

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stderr, RUNTIME_MISSING_MESSAGE);
    assert!(!output.module_started());
    assert_eq!(output.stdout, "");
}

#[test]
fn failed_version_query_counts_as_missing_runtime() {
    let sandbox = Sandbox::new();
    let broken = sandbox.broken_interpreter("python");
    let output = LauncherRun::new(&sandbox).interpreter(&broken).output();

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stderr, RUNTIME_MISSING_MESSAGE);
    assert!(!output.module_started());
}

#[test]
fn module_failure_reports_dependency_manifest() {
    let sandbox = Sandbox::new();
    let (python, output) = run_with(&sandbox, 1);

    assert_eq!(output.code, Some(1));
    assert!(output.module_started());
    assert_eq!(
        output.stderr,
        launch_failure_message(MODULE, &python, "requirements.txt")
    );
}

#[test]
fn any_nonzero_module_exit_maps_to_status_one() {
    for module_exit in [2, 42, 255] {
        let sandbox = Sandbox::new();
        let (python, output) = run_with(&sandbox, module_exit);

        assert_eq!(output.code, Some(1), "module exit {module_exit}");
        assert_eq!(
            output.stderr,
            launch_failure_message(MODULE, &python, "requirements.txt")
        );
    }
}

#[test]
fn consecutive_runs_are_identical() {
    for module_exit in [0, 1] {
        let sandbox = Sandbox::new();
        let (_, first) = run_with(&sandbox, module_exit);
        let (_, second) = run_with(&sandbox, module_exit);
        assert_eq!(first, second);
    }

    let sandbox = Sandbox::new();
    let missing = sandbox.missing_interpreter();
    let first = LauncherRun::new(&sandbox).interpreter(&missing).output();
    let second = LauncherRun::new(&sandbox).interpreter(&missing).output();
    assert_eq!(first, second);
}

#[test]
fn failure_without_terminal_does_not_wait_for_enter() {
    let sandbox = Sandbox::new();
    let output = LauncherRun::new(&sandbox)
        .interpreter(&sandbox.missing_interpreter())
        .output();

    assert_eq!(output.code, Some(1));
    assert!(!output.stderr.contains("Press Enter"));
}

#[test]
fn command_line_arguments_are_not_forwarded() {
    let sandbox = Sandbox::new();
    let python = sandbox.fake_interpreter("python", 0);
    let output = LauncherRun::new(&sandbox)
        .interpreter(&python)
        .arg("--flag")
        .arg("file.bfevfl")
        .output();

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, format!("timeline editor started: -m {MODULE}\n"));
}

#[test]
fn interrupt_during_module_run_waits_for_module_exit() {
    let sandbox = Sandbox::new();
    let python = sandbox.interrupting_interpreter("python", 0);
    let output = LauncherRun::new(&sandbox).interpreter(&python).output();

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stderr, "");
    assert_eq!(output.stdout, format!("timeline editor started: -m {MODULE}\n"));
}

#[test]
fn interrupted_module_failure_is_still_reported() {
    let sandbox = Sandbox::new();
    let python = sandbox.interrupting_interpreter("python", 1);
    let output = LauncherRun::new(&sandbox).interpreter(&python).output();

    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.stderr,
        launch_failure_message(MODULE, &python.display().to_string(), "requirements.txt")
    );
}
