//! Output helpers shared across commands.

use serde::Serialize;

use crate::Result;

/// Render `value` as pretty JSON or as text lines.
pub fn render<T, F>(value: &T, as_json: bool, lines: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> Vec<String>,
{
    if as_json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(lines(value).join("\n"))
    }
}

/// Print rendered output, skipping empty text.
pub fn emit<T, F>(value: &T, as_json: bool, lines: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> Vec<String>,
{
    let out = render(value, as_json, lines)?;
    if !out.is_empty() {
        println!("{}", out); // tarpaulin::skip - console output
    }
    Ok(())
}

/// `12.34`, or `-` when a value is absent.
pub fn fmt_points(points: Option<f64>) -> String {
    points.map_or_else(|| "-".to_string(), |p| format!("{:.2}", p))
}
