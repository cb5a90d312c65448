use assert_cmd::Command;

pub fn campus_cmd() -> Command {
    Command::cargo_bin("campus").unwrap()
}
