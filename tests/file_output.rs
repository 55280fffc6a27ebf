use levlog::{Error, FileOutput, Header, Level, Logger, Sink};
use std::fs;
use tempfile::TempDir;

fn quiet_logger() -> Logger {
    Logger::builder().header(Header::NONE).build()
}

#[test]
fn configure_creates_directories_and_empty_file() {
    let tmp_dir = TempDir::new().unwrap();
    let dir = tmp_dir.path().join("tmp").join("log_test");
    let logger = quiet_logger();

    logger.configure(&dir, "out.log").unwrap();

    let path = dir.join("out.log");
    assert!(dir.is_dir());
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    assert!(logger.to_file());
    assert_eq!(logger.path(), Some(path.clone()));

    logger.set_level("info");
    logger.info("one line");
    assert_eq!(fs::read_to_string(&path).unwrap(), "[INFO] one line\n");
}

#[test]
fn configure_appends_to_existing_file() {
    let tmp_dir = TempDir::new().unwrap();
    let dir = tmp_dir.path().join("logs");
    let path = dir.join("app.log");

    let first = quiet_logger();
    first.configure(&dir, "app.log").unwrap();
    first.warning("first");
    drop(first);

    let second = quiet_logger();
    second.configure(&dir, "app.log").unwrap();
    second.error("second");

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "[WARNING] first\n[ERROR] second\n");
}

#[test]
fn open_or_create_reports_append() {
    let tmp_dir = TempDir::new().unwrap();
    let created = FileOutput::open_or_create(tmp_dir.path(), "a.log").unwrap();
    assert!(!created.appended());
    drop(created);

    let reopened = FileOutput::open_or_create(tmp_dir.path(), "a.log").unwrap();
    assert!(reopened.appended());
    assert_eq!(reopened.path(), tmp_dir.path().join("a.log"));
}

#[test]
fn configure_path_splits_directory_and_file() {
    let tmp_dir = TempDir::new().unwrap();
    let combined = tmp_dir.path().join("a").join("b").join("c.log");
    let logger = quiet_logger();

    logger.configure_path(combined.to_str().unwrap()).unwrap();
    assert!(tmp_dir.path().join("a").join("b").is_dir());

    logger.error("boom");
    assert_eq!(fs::read_to_string(&combined).unwrap(), "[ERROR] boom\n");
}

#[test]
fn configure_path_needs_a_file_name() {
    let logger = quiet_logger();
    let err = logger.configure_path("logs/").unwrap_err();
    assert!(matches!(err, Error::InvalidPath(_)));
    assert_eq!(logger.sink(), Sink::Stdout);
}

#[test]
fn set_file_creation_truncates_and_keeps_sink() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("fresh.log");
    fs::write(&path, "stale content\n").unwrap();

    let logger = quiet_logger();
    logger.set_file_creation(tmp_dir.path(), "fresh.log").unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    assert!(logger.has_file());
    assert!(!logger.to_file());
    assert_eq!(logger.path(), Some(path.clone()));

    logger.set_sink_mode(true).unwrap();
    logger.info("now in file");
    assert_eq!(fs::read_to_string(&path).unwrap(), "[INFO] now in file\n");
}

#[test]
fn set_file_creation_builds_nested_directories() {
    let tmp_dir = TempDir::new().unwrap();
    let dir = tmp_dir.path().join("x").join("y").join("z");
    let logger = quiet_logger();

    logger.set_file_creation(&dir, "n.log").unwrap();
    assert!(dir.join("n.log").is_file());
}

#[test]
fn file_mode_without_file_fails_fast() {
    let logger = quiet_logger();
    let err = logger.set_sink_mode(true).unwrap_err();
    assert!(matches!(err, Error::NoLogFile));
    assert!(!logger.to_file());
    assert_eq!(logger.sink(), Sink::Stdout);
}

#[test]
fn stdout_sink_leaves_file_untouched() {
    let tmp_dir = TempDir::new().unwrap();
    let logger = quiet_logger();
    logger.configure(tmp_dir.path(), "quiet.log").unwrap();
    logger.set_sink_mode(false).unwrap();

    logger.info("to stdout");

    let path = tmp_dir.path().join("quiet.log");
    assert_eq!(fs::read_to_string(&path).unwrap(), "");

    logger.set_sink_mode(true).unwrap();
    logger.info("back to file");
    assert_eq!(fs::read_to_string(&path).unwrap(), "[INFO] back to file\n");
}

#[test]
fn filtered_messages_do_not_touch_file() {
    let tmp_dir = TempDir::new().unwrap();
    let logger = quiet_logger();
    logger.configure(tmp_dir.path(), "levels.log").unwrap();
    logger.set_level("error");

    logger.debug("d");
    logger.infof(format_args!("i {}", 1));
    logger.warning("w");
    logger.errorf(format_args!("e {}", 2));

    let content = fs::read_to_string(tmp_dir.path().join("levels.log")).unwrap();
    assert_eq!(content, "[ERROR] e 2\n");
    assert_eq!(logger.level(), Level::Error);
}

#[test]
fn directory_blocked_by_file() {
    let tmp_dir = TempDir::new().unwrap();
    let blocker = tmp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let logger = quiet_logger();

    let err = logger.configure(blocker.join("sub"), "x.log").unwrap_err();
    assert!(matches!(err, Error::DirectoryCreation { .. }), "{err}");
    assert_eq!(logger.sink(), Sink::Stdout);
    assert_eq!(logger.path(), None);

    let err = logger
        .set_file_creation(blocker.join("sub"), "x.log")
        .unwrap_err();
    assert!(matches!(err, Error::DirectoryCreation { .. }), "{err}");
    assert!(!logger.has_file());
}

#[test]
fn file_name_taken_by_directory() {
    let tmp_dir = TempDir::new().unwrap();
    fs::create_dir(tmp_dir.path().join("taken.log")).unwrap();
    let logger = quiet_logger();

    let err = logger.configure(tmp_dir.path(), "taken.log").unwrap_err();
    assert!(matches!(err, Error::FileCreation { .. }), "{err}");
    assert!(err.to_string().contains("taken.log"));
}

#[test]
fn reconfigure_moves_to_new_file() {
    let tmp_dir = TempDir::new().unwrap();
    let logger = quiet_logger();
    logger.configure(tmp_dir.path(), "one.log").unwrap();
    logger.info("1");
    logger.configure(tmp_dir.path(), "two.log").unwrap();
    logger.info("2");

    assert_eq!(
        fs::read_to_string(tmp_dir.path().join("one.log")).unwrap(),
        "[INFO] 1\n"
    );
    assert_eq!(
        fs::read_to_string(tmp_dir.path().join("two.log")).unwrap(),
        "[INFO] 2\n"
    );
}

#[test]
fn set_path_only_records() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("never").join("made.log");
    let logger = quiet_logger();

    logger.set_path(&path);

    assert_eq!(logger.path(), Some(path.clone()));
    assert!(!path.exists());
    assert!(!logger.to_file());
}
