//! Check command behavior over valid and broken artifact directories.

mod common;

use clap::Parser;
use cliffviz::cli::commands::check::{execute, CheckArgs};
use tempfile::tempdir;

fn parse_args<I, T>(args: I) -> CheckArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    CheckArgs::parse_from(args)
}

#[test]
fn accepts_complete_fixture() {
    let tmp = tempdir().unwrap();
    let data_dir = tmp.path().join("data");
    common::write_fixture(&data_dir, 10, 30);

    execute(parse_args([
        "cliffviz-check",
        "--data-dir",
        data_dir.to_str().unwrap(),
    ]))
    .expect("check should accept a complete fixture");
}

#[test]
fn rejects_empty_directory_naming_the_artifact() {
    let tmp = tempdir().unwrap();

    let err = execute(parse_args([
        "cliffviz-check",
        "--data-dir",
        tmp.path().to_str().unwrap(),
    ]))
    .expect_err("check must fail on an empty directory");

    assert!(format!("{err:#}").contains("Recompensas_Total.xlsx"));
}

#[test]
fn rejects_truncated_error_array() {
    let tmp = tempdir().unwrap();
    let data_dir = tmp.path().join("data");
    common::write_fixture(&data_dir, 10, 30);
    let path = data_dir.join("erro_sarsa.npy");
    let mut bytes = std::fs::read(&path).unwrap();
    bytes.truncate(bytes.len() - 7);
    std::fs::write(&path, bytes).unwrap();

    let err = execute(parse_args([
        "cliffviz-check",
        "--data-dir",
        data_dir.to_str().unwrap(),
    ]))
    .expect_err("check must fail on a truncated array");

    assert!(format!("{err:#}").contains("erro_sarsa.npy"));
}
