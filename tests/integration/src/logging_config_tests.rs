//! Logging and configuration tests
//!
//! Subscriber installation is process-global, so everything that touches it
//! lives in a single test.

use filterline_core::{logging, Config, CoreError, LogFormat};
use filterline_stream::{CharSink, FilterWriter};

#[test]
fn test_init_from_config_once() {
    let config = Config::from_toml_str(
        r#"
        [logging]
        level = "debug"
        format = "json"
        "#,
    )
    .unwrap();
    assert_eq!(config.logging.format, LogFormat::Json);

    // Another test in this binary may have installed a subscriber first
    match logging::init_with(&config.logging) {
        Ok(()) => {
            let second = logging::init_with(&config.logging);
            assert!(matches!(second, Err(CoreError::Logging(_))));
        }
        Err(err) => assert!(matches!(err, CoreError::Logging(_))),
    }

    let mut writer = FilterWriter::new(String::new());
    writer.write_str("logged").unwrap();
    writer.flush().unwrap();
    tracing::info!(written = writer.get_ref().len(), "filtered write complete");
}
