use std::sync::{Mutex, Once};

use log::{Level, Log, Metadata, Record};
use nfcdev::tag::st25tb::identify;

struct Capture;

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static CAPTURE: Capture = Capture;
static INIT: Once = Once::new();

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.args().to_string().starts_with("st25tb:") {
            if let Ok(mut records) = RECORDS.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }
    }

    fn flush(&self) {}
}

fn install() {
    INIT.call_once(|| {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
    });
}

fn level_of(needle: &str) -> Option<Level> {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .find(|(_, text)| text.contains(needle))
        .map(|(level, _)| *level)
}

#[test]
fn unknown_manufacturer_and_model_are_warnings() {
    install();
    identify([0xD0, 0x7E, 0x1B, 0, 0, 0, 0, 0]);
    identify([0xD0, 0x02, 0xFE, 0, 0, 0, 0, 0]);
    assert_eq!(level_of("unknown manufacturer 0x7e"), Some(Level::Warn));
    assert_eq!(
        level_of("unknown model 0xfe for manufacturer 0x02"),
        Some(Level::Warn)
    );
}
