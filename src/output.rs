//! JSON output

use serde::Serialize;

use crate::error::Result;

/// Render a value as pretty-printed JSON
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Print a value as pretty-printed JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", to_pretty_json(value)?);
    Ok(())
}
