//! Browser console logging; compiled out on native targets

macro_rules! console_log {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!($($t)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format!($($t)*);
    }};
}

macro_rules! console_warn {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&format!($($t)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format!($($t)*);
    }};
}
