//! Diagnostics go to stderr; these only check that enabling them changes nothing else.

use levlog::{Header, Level, Logger, internal};
use std::fs;
use tempfile::TempDir;

#[test]
fn diagnostics_do_not_disturb_file_setup() {
    internal::init(Level::Debug);
    internal::init(Level::Error);

    let tmp_dir = TempDir::new().unwrap();
    let logger = Logger::builder().header(Header::NONE).build();
    logger.configure(tmp_dir.path().join("d"), "diag.log").unwrap();
    assert!(logger.set_sink_mode(false).is_ok());
    assert!(logger.set_sink_mode(true).is_ok());

    logger.info("kept clean");
    assert_eq!(
        fs::read_to_string(tmp_dir.path().join("d").join("diag.log")).unwrap(),
        "[INFO] kept clean\n"
    );
}
