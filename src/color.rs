extern crate termcolor;

use termcolor::{Color, ColorSpec, WriteColor};

macro_rules! get_version {
    ($file:expr) => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " ",
            include_str!(concat!(env!("OUT_DIR"), "/", $file))
        )
    };
}

#[allow(unused_must_use)]
pub fn set_fg<W: WriteColor>(out: &mut W, color: Color) {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_intense(true));
}
#[allow(unused_must_use)]
pub fn reset_fg<W: WriteColor>(out: &mut W) {
    out.set_color(ColorSpec::new().set_fg(None).set_intense(true));
}

/// Right-aligned colored tag, then the message. Write errors are dropped:
/// callers are `#[allow(unused_must_use)]`.
macro_rules! write_color {
    ($dest:expr, $color:expr, $typ:expr, $($arg:tt)*) => {{
        $crate::color::set_fg($dest, $color);
        write!($dest, "{:>9}: ", $typ);
        $crate::color::reset_fg($dest);
        writeln!($dest, $($arg)*);
    }};
}

macro_rules! write_error {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Red, $typ, $($arg)*)
    };
}

macro_rules! write_warn {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Yellow, $typ, $($arg)*)
    };
}

macro_rules! write_info {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Blue, $typ, $($arg)*)
    };
}

macro_rules! write_ok {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Green, $typ, $($arg)*)
    };
}
