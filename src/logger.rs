use std::fmt::Display;

/// Wraps `x` in the ANSI escape sequence `y`, e.g. `"32;1"` for bold green.
pub fn ansi<T: Display, U: Display>(x: T, y: U) -> String {
    format!("\x1b[{y}m{x}\x1b[0m")
}

pub fn heading<T: Display>(x: T) -> String {
    ansi(x, "34;1")
}

pub fn pass<T: Display>(x: T) -> String {
    ansi(x, 32)
}

pub fn fail<T: Display>(x: T) -> String {
    ansi(x, 31)
}
