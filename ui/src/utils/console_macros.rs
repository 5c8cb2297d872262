/// Browser console logging with a millisecond timestamp prefix.
/// Formatting happens in Rust so only a plain string crosses into JS.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_stamped {
    ($level:ident, $($arg:tt)+) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)+)))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)+) => { $crate::__console_stamped!(info, $($arg)+) };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)+) => { $crate::__console_stamped!(warn, $($arg)+) };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)+) => { $crate::__console_stamped!(error, $($arg)+) };
}
