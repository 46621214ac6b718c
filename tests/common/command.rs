use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn file_a() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();

    println!("Done");
}
"#
    .to_string()
}

#[fixture]
pub fn file_b() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).expect("stdin");

    println!("Done");
}
"#
    .to_string()
}

#[fixture]
pub fn first_difference_output() -> String {
    "Line 2:\n    std::io::stdin().read_line(&mut s).unwrap();\n=======================================^\n    std::io::stdin().read_line(&mut s).expect(\"stdin\");\n"
        .to_string()
}

#[fixture]
pub fn workspace_dir_with_files(workspace_dir: TempDir, file_a: String, file_b: String) -> TempDir {
    write_file(FileSpec::new(workspace_dir.path().join("a.rs"), file_a));
    write_file(FileSpec::new(workspace_dir.path().join("b.rs"), file_b));

    workspace_dir
}

pub fn run_linediff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("linediff").expect("Failed to find linediff binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.env_remove("LINEDIFF_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
