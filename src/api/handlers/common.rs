use crate::{Error, Result};
use tracing::warn;

/// Parse a required non-negative integer query parameter.
pub fn parse_count(name: &str, raw: Option<&str>) -> Result<usize> {
    let raw = raw.ok_or_else(|| {
        warn!("Missing query parameter: {}", name);
        Error::InvalidParameter(format!("missing `{}`", name))
    })?;

    raw.parse::<usize>().map_err(|e| {
        warn!("Invalid value for {}: {:?} ({})", name, raw, e);
        Error::InvalidParameter(format!("`{}` must be a non-negative integer, got {:?}", name, raw))
    })
}
