use std::process::Command;

#[test]
fn binary_prints_one_known_line() {
    let exe = env!("CARGO_BIN_EXE_flipgreet");
    for _ in 0..20 {
        let output = Command::new(exe).output().expect("flipgreet failed to run");
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(
            stdout == "first hi\n" || stdout == "second hi\n",
            "unexpected stdout: {stdout:?}"
        );
        assert!(output.stderr.is_empty());
    }
}

#[test]
fn binary_ignores_stray_arguments() {
    let exe = env!("CARGO_BIN_EXE_flipgreet");
    let output = Command::new(exe)
        .arg("ignored")
        .output()
        .expect("flipgreet failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout == "first hi\n" || stdout == "second hi\n");
}
