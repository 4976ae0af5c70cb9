use std::process::Command;

#[test]
fn test_help_lists_all_commands() {
    let bin = env!("CARGO_BIN_EXE_ansel");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["build", "deploy-site", "deploy", "doctor"] {
        assert!(
            stdout.contains(command),
            "help output should list '{}'; got:\n{}",
            command,
            stdout
        );
    }
}

#[test]
fn test_unknown_command_fails() {
    let bin = env!("CARGO_BIN_EXE_ansel");

    let output = Command::new(bin).arg("publish").output().unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_version_flag() {
    let bin = env!("CARGO_BIN_EXE_ansel");

    let output = Command::new(bin).arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ansel"));
}
