//! Write macros for `String` targets, where formatting can't fail.

#[macro_export]
macro_rules! write {
    ($dst:expr, $($arg:tt)*) => {{
        let _ = std::write!($dst, $($arg)*);
    }};
}

#[macro_export]
macro_rules! writeln {
    ($dst:expr $(,)?) => {{
        let _ = std::writeln!($dst);
    }};
    ($dst:expr, $($arg:tt)*) => {{
        let _ = std::writeln!($dst, $($arg)*);
    }};
}
