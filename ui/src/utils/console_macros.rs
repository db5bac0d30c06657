/// Browser console logging for component code.
///
/// Each line is prefixed with `js_sys::Date::now()` so console output lines up
/// with network timings in devtools. These call into the JS console and must
/// only run inside the page; library code logs through `tracing` instead.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_line {
    ($fmt:expr) => {
        format!("[{}] [registration] {}", js_sys::Date::now(), $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        format!("[{}] [registration] {}", js_sys::Date::now(), format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($t:tt)*) => {
        gloo_console::info!($crate::__console_line!($($t)*))
    };
}

#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        gloo_console::log!($crate::__console_line!($($t)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($t:tt)*) => {
        gloo_console::warn!($crate::__console_line!($($t)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($($t:tt)*) => {
        gloo_console::error!($crate::__console_line!($($t)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($t:tt)*) => {
        gloo_console::debug!($crate::__console_line!($($t)*))
    };
}
