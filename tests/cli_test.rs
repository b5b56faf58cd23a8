use std::fs;
use std::path::PathBuf;

use reclass::cli::args::Cli;
use reclass::cli::commands::execute_command;
use reclass::util::testing;
use rstest::rstest;
use tempfile::tempdir;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn cli_for(file_path: Option<PathBuf>) -> Cli {
    Cli {
        file_path,
        debug: 0,
        generator: None,
        info: false,
    }
}

#[rstest]
fn given_no_positional_when_executing_then_usage_is_not_an_error() {
    let cli = cli_for(None);
    assert!(execute_command(&cli).is_ok());
}

#[rstest]
fn given_nonexistent_path_when_executing_then_no_file_is_created() {
    let tempdir = tempdir().unwrap();
    let path = tempdir.path().join("missing.txt");
    let cli = cli_for(Some(path.clone()));

    assert!(execute_command(&cli).is_ok());
    assert!(!path.exists());
}

#[rstest]
fn given_existing_file_when_executing_then_file_is_rewritten() {
    let tempdir = tempdir().unwrap();
    let path = tempdir.path().join("classpath.txt");
    fs::write(&path, "[Application]\nh0\nh1\nmisc.jar\nlz4.jar\n").unwrap();
    let cli = cli_for(Some(path.clone()));

    execute_command(&cli).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[Application]\nh0\nh1\nlz4.jar\nmisc.jar\n"
    );
}
