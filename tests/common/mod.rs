use assert_cmd::Command;

pub fn promptag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("promptag").unwrap();
    cmd.env_remove("PROMPTAG_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
