//! `log` backend that writes to the browser console.
//!
//! The console logger only exists in wasm builds; native callers install their own logger.

use log::LevelFilter;

#[cfg(target_arch = "wasm32")]
pub use console::{init, ConsoleLogger};

/// Parse a level name as accepted by `RUST_LOG`-style settings. Unknown names fall back
/// to `Warn`.
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Warn)
}

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console, js_name = log)]
        fn console_log(s: &str);

        #[wasm_bindgen(js_namespace = console, js_name = warn)]
        fn console_warn(s: &str);

        #[wasm_bindgen(js_namespace = console, js_name = error)]
        fn console_error(s: &str);
    }

    pub struct ConsoleLogger;

    static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
            match record.level() {
                Level::Error => console_error(&line),
                Level::Warn => console_warn(&line),
                _ => console_log(&line),
            }
        }

        fn flush(&self) {}
    }

    /// Install the console logger. Returns false if a logger was already installed.
    pub fn init(level: LevelFilter) -> bool {
        match log::set_logger(&LOGGER) {
            Ok(()) => {
                log::set_max_level(level);
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" TRACE "), LevelFilter::Trace);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("loud"), LevelFilter::Warn);
    }
}
