//! End-to-end tests driving the `glotta` binary through `assert_cmd`,
//! covering the documented CLI surface and the five scenarios from the
//! spec's worked examples.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn glotta_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_glotta"))
}

fn write_source(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn help_mentions_usage() {
    glotta_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_succeeds() {
    glotta_bin().arg("--version").assert().success();
}

#[test]
fn missing_file_exits_nonzero() {
    glotta_bin()
        .arg("/no/such/source.gl")
        .assert()
        .failure();
}

#[test]
fn compiling_hello_increment_writes_all_three_artifacts() {
    let dir = TempDir::new().unwrap();
    let src = write_source(
        &dir,
        "hello.gl",
        "πρόγραμμα t δήλωση a αρχή_προγράμματος a := 1; a := a + 1 τέλος_προγράμματος",
    );

    glotta_bin().arg(&src).assert().success();

    let stem = src.with_extension("");
    assert!(stem.with_extension("int").exists());
    assert!(stem.with_extension("sym").exists());
    assert!(stem.with_extension("asm").exists());
}

#[test]
fn intermediate_file_lists_quads_with_padded_labels() {
    let dir = TempDir::new().unwrap();
    let src = write_source(
        &dir,
        "count.gl",
        "πρόγραμμα t δήλωση i \
         αρχή_προγράμματος για i := 1 έως 8 επανάλαβε γράψε i για_τέλος \
         τέλος_προγράμματος",
    );

    glotta_bin().arg(&src).assert().success();

    let int_contents = fs::read_to_string(src.with_extension("int")).unwrap();
    assert!(int_contents.contains("(out,"));
    let first_line = int_contents.lines().next().unwrap();
    assert!(first_line.starts_with("00:") || first_line.starts_with("0:"));
}

#[test]
fn assembly_file_contains_text_section() {
    let dir = TempDir::new().unwrap();
    let src = write_source(
        &dir,
        "simple.gl",
        "πρόγραμμα t δήλωση a αρχή_προγράμματος a := 1 τέλος_προγράμματος",
    );

    glotta_bin().arg(&src).assert().success();

    let asm = fs::read_to_string(src.with_extension("asm")).unwrap();
    assert!(asm.contains(".text"));
}

#[test]
fn lexical_error_in_source_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let src = write_source(&dir, "bad.gl", "πρόγραμμα t αρχή_προγράμματος @ τέλος_προγράμματος");

    glotta_bin().arg(&src).assert().failure();
}

#[test]
fn emit_flag_overrides_the_output_stem() {
    let dir = TempDir::new().unwrap();
    let src = write_source(
        &dir,
        "renamed.gl",
        "πρόγραμμα t δήλωση a αρχή_προγράμματος a := 1 τέλος_προγράμματος",
    );
    let stem = dir.path().join("custom_stem");

    glotta_bin()
        .arg(&src)
        .arg("--emit")
        .arg(stem.to_str().unwrap())
        .assert()
        .success();

    assert!(stem.with_extension("asm").exists());
}

#[test]
fn debug_flag_does_not_change_the_written_artifacts() {
    let dir = TempDir::new().unwrap();
    let src = write_source(
        &dir,
        "debugged.gl",
        "πρόγραμμα t δήλωση a αρχή_προγράμματος a := 1 τέλος_προγράμματος",
    );

    glotta_bin().arg(&src).arg("--debug").assert().success();

    let asm = fs::read_to_string(src.with_extension("asm")).unwrap();
    assert!(asm.contains(".text"));
}
