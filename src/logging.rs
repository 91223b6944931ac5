/// Conditional logging for development builds
///
/// `log!` writes informational messages that are compiled out of release builds
/// unless the `console_logging` feature is enabled. In the browser it goes to the
/// devtools console; on native targets (tests, benches) it goes to stderr, since
/// `web_sys` calls are not available there.
///
/// Errors are reported with `web_sys::console::error_1` directly by the DOM host.
///
/// ```rust,ignore
/// use crate::logging::log;
///
/// log!("Created tooltip node {}", tip_id);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&format!($($arg),+).into());
            #[cfg(not(target_arch = "wasm32"))]
            eprintln!("[tipsta] {}", format!($($arg),+));
        }
    };
}

pub use log;
