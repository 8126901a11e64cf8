//! Log output of the board-file.
//!
//! The crate logs through the `log` facade with [`PR_FMT`] as target. Hosts without a
//! logger of their own can install [`ConsoleLogger`] with [`init`] and give it a
//! [`Console`] to write to.

use core::fmt::{self, Write};
use log::{Log, Metadata, Record, SetLoggerError};
use crate::base::sync::spin_lock::SpinLock;


/// Log target of every record emitted by this crate.
pub const PR_FMT: &str = "xiaomi-mipad2";

/// A text sink, e.g. a serial port or the host kernel's log buffer.
pub trait Console: Sync {
    fn write_str(&self, s: &str);
}

struct ConsoleWriter<'a>(&'a dyn Console);

impl Write for ConsoleWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_str(s);
        Ok(())
    }
}

/// Install [`ConsoleLogger`] writing to `console`.
pub fn init(console: &'static dyn Console) -> Result<(), SetLoggerError> {
    *CONSOLE_LOGGER.console.lock() = Some(console);
    match log::set_logger(&CONSOLE_LOGGER) {
        Ok(_) => {
            log::set_max_level(log::LevelFilter::Trace);
            Ok(())
        }
        Err(e) => {
            console.write_str("Init set logger failed!\n");
            Err(e)
        }
    }
}

pub struct ConsoleLogger {
    console: SpinLock<Option<&'static dyn Console>>,
}

impl ConsoleLogger {
    const fn new() -> Self {
        Self {
            console: SpinLock::new(None),
        }
    }

    fn format(record: &Record, out: &mut dyn Write) -> fmt::Result {
        if record.level() < log::Level::Info {
            writeln!(out, "[{}][{}:{}]: {}: {}",
                record.level(),
                record.file().unwrap_or("<NONE>"),
                record.line().unwrap_or_default(),
                record.target(),
                record.args())
        } else {
            writeln!(out, "[{}]: {}: {}", record.level(), record.target(), record.args())
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::Level::Trace
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Don't hold the lock while writing: the console may log itself.
        let console = *self.console.lock();
        if let Some(console) = console {
            // `ConsoleWriter` never fails.
            let _ = Self::format(record, &mut ConsoleWriter(console));
        }
    }

    fn flush(&self) {}
}

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger::new();


#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use std::sync::Mutex;

    struct Capture(Mutex<String>);

    impl Console for Capture {
        fn write_str(&self, s: &str) {
            self.0.lock().unwrap().push_str(s);
        }
    }

    static CAPTURE: Capture = Capture(Mutex::new(String::new()));

    #[test]
    fn format_by_level() {
        let mut out = String::new();
        ConsoleLogger::format(&Record::builder()
            .level(log::Level::Error)
            .target(PR_FMT)
            .file(Some("board.rs"))
            .line(Some(7))
            .args(format_args!("Error could not get {} handle", "\\_SB_.PCI0.I2C1"))
            .build(), &mut out).unwrap();
        assert_eq!(out, "[ERROR][board.rs:7]: xiaomi-mipad2: Error could not get \\_SB_.PCI0.I2C1 handle\n");

        out.clear();
        ConsoleLogger::format(&Record::builder()
            .level(log::Level::Info)
            .target(PR_FMT)
            .args(format_args!("instantiated {}", "ktd2026"))
            .build(), &mut out).unwrap();
        assert_eq!(out, "[INFO]: xiaomi-mipad2: instantiated ktd2026\n");
    }

    #[test]
    fn console_writer_never_fails() {
        struct Sink;

        impl Console for Sink {
            fn write_str(&self, _s: &str) {}
        }

        static SINK: Sink = Sink;
        let record = Record::builder()
            .level(log::Level::Warn)
            .target(PR_FMT)
            .build();
        assert!(ConsoleLogger::format(&record, &mut ConsoleWriter(&SINK)).is_ok());
        assert!(write!(ConsoleWriter(&SINK), "{}", "text").is_ok());
    }

    #[test]
    fn installed_logger_writes_to_console() {
        init(&CAPTURE).unwrap();
        warn!(target: PR_FMT, "bring-up {}", "message");
        let text = CAPTURE.0.lock().unwrap().clone();
        assert!(text.contains("xiaomi-mipad2: bring-up message"), "{}", text);
        assert!(init(&CAPTURE).is_err());
    }
}
