use std::fs;
use std::path::PathBuf;

use tally_core::TallyError;
use tally_demos::common::load_csv;

fn write_log(name: &str, contents: &str) -> PathBuf {
    let file = format!("tally-demos-{}-{name}.csv", std::process::id());
    let path = std::env::temp_dir().join(file);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn quoted_actor_with_comma_is_one_field() {
    let path = write_log(
        "quoted",
        "1,2,2021-01-05 10:00:00,\"Smith, Anna\"\n\n2,3,2021-01-06 10:00:00,bob\n",
    );
    let events = load_csv(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].actor, "Smith, Anna");
    assert_eq!(events[0].quantity, 2);
    assert_eq!(events[0].timestamp.to_string(), "2021-01-05 10:00:00");
    assert_eq!(events[1].actor, "bob");
}

#[test]
fn short_row_reports_malformed_record() {
    let path = write_log("short", "1,2,2021-01-05 10:00:00,ana\n2,3,2021-01-06 10:00:00\n");
    let err = load_csv(&path).unwrap_err();
    fs::remove_file(&path).ok();

    let err = err.downcast::<TallyError>().unwrap();
    assert_eq!(*err, TallyError::malformed_record(1, 3));
}

#[test]
fn missing_file_is_an_error() {
    let path = std::env::temp_dir().join("tally-demos-does-not-exist.csv");
    assert!(load_csv(path).is_err());
}
