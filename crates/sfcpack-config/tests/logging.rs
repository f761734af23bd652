//! Checks on what assembly reports through `tracing`.

use sfcpack_config::{assemble_from_env, base_configuration, project_overrides, Mode, ProjectSettings};
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn captured<T>(f: impl FnOnce() -> T) -> (T, String) {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture.contents())
}

#[test]
fn unknown_mode_warns_and_yields_nothing() {
    let settings = ProjectSettings::default();
    let base = base_configuration(&settings, Mode::Development).unwrap();
    let overrides = project_overrides(&settings);

    let (configs, logs) = captured(|| assemble_from_env(Some("staging"), &base, &overrides));

    assert!(configs.is_empty());
    assert!(logs.contains("WARN"), "logs: {logs}");
    assert!(logs.contains("unrecognized build mode"), "logs: {logs}");
    assert!(logs.contains("staging"), "logs: {logs}");
}

#[test]
fn unset_mode_warns_and_yields_nothing() {
    let settings = ProjectSettings::default();
    let base = base_configuration(&settings, Mode::Development).unwrap();

    let (configs, logs) = captured(|| assemble_from_env(None, &base, &project_overrides(&settings)));

    assert!(configs.is_empty());
    assert!(logs.contains("<unset>"), "logs: {logs}");
}

#[test]
fn known_mode_is_silent_at_warn_level() {
    let settings = ProjectSettings::default();
    let base = base_configuration(&settings, Mode::ProductionLibrary).unwrap();

    let (configs, logs) =
        captured(|| assemble_from_env(Some("prod"), &base, &project_overrides(&settings)));

    assert_eq!(configs.len(), 2);
    assert!(logs.is_empty(), "logs: {logs}");
}
