//! Shared helpers for writing command parameters.

use std::fmt::{self, Write};

/// Whether a final parameter must be written in trailing (`:`) form.
pub fn needs_colon_prefix(s: &str) -> bool {
    s.is_empty() || s.contains(' ') || s.starts_with(':')
}

/// Write `cmd` followed by `args`, using trailing form for the last
/// argument only when it needs it.
pub fn write_cmd(f: &mut fmt::Formatter<'_>, cmd: &str, args: &[&str]) -> fmt::Result {
    f.write_str(cmd)?;
    write_args_with_trailing(f, args.iter().copied())
}

/// Write `cmd` followed by `args`, always putting the last argument in
/// trailing form (`:text`).
pub fn write_cmd_freeform(f: &mut fmt::Formatter<'_>, cmd: &str, args: &[&str]) -> fmt::Result {
    f.write_str(cmd)?;
    match args.split_last() {
        Some((suffix, middle)) => {
            for arg in middle {
                f.write_char(' ')?;
                f.write_str(arg)?;
            }
            f.write_str(" :")?;
            f.write_str(suffix)
        }
        None => Ok(()),
    }
}

/// Write space-separated arguments; the last gets a colon when needed.
pub fn write_args_with_trailing<'a, I>(f: &mut fmt::Formatter<'_>, args: I) -> fmt::Result
where
    I: Iterator<Item = &'a str> + ExactSizeIterator,
{
    let len = args.len();
    for (i, arg) in args.enumerate() {
        f.write_char(' ')?;
        if i == len - 1 && needs_colon_prefix(arg) {
            f.write_char(':')?;
        }
        f.write_str(arg)?;
    }
    Ok(())
}
