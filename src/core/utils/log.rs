//! Console logging
//!
//! In the browser: `console.log` / `console.warn` / `console.error` via web-sys.
//! Native builds (tests, headless runs) write the same lines to stderr,
//! since web-sys imports cannot be called outside wasm32.
//!
//! Usage:
//! ```rust
//! use bowling_engine::engine_log;
//!
//! let pins = 10;
//! engine_log!("level built: {} pins", pins);
//! ```

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

#[doc(hidden)]
pub fn write(level: Level, message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let line = format!("🎳 {}", message);
        let value = wasm_bindgen::JsValue::from_str(&line);
        match level {
            Level::Info => web_sys::console::log_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Error => web_sys::console::error_1(&value),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[bowling:{}] {}", level.tag(), message);
    }
}

/// Informational message
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {
        $crate::core::utils::log::write($crate::core::utils::log::Level::Info, &format!($($arg)*))
    };
}

/// Recoverable problem (asset fallback, skipped body)
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::log::write($crate::core::utils::log::Level::Warn, &format!($($arg)*))
    };
}

/// Rejected input (bad config JSON)
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {
        $crate::core::utils::log::write($crate::core::utils::log::Level::Error, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::Level;

    #[test]
    fn level_tags() {
        assert_eq!(Level::Info.tag(), "info");
        assert_eq!(Level::Warn.tag(), "warn");
        assert_eq!(Level::Error.tag(), "error");
    }

    #[test]
    fn macros_format_arguments() {
        engine_log!("pins={}", 10);
        engine_warn!("model {} missing", "pin");
        engine_error!("bad config: {}", "eof");
    }
}
