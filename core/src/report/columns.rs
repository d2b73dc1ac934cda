//! Multi-column listing of service keys.

use std::fmt::{self, Write};

use ciphr_common::target::HostPortKey;

/// Every cell is left-justified, padded or truncated to this many characters.
pub const FIELD_WIDTH: usize = 24;

/// 1 column up to 10 keys, 2 up to 30, 3 beyond that.
pub fn column_count(keys: usize) -> usize {
    match keys {
        0..=10 => 1,
        11..=30 => 2,
        _ => 3,
    }
}

/// Writes `keys` left-to-right, top-to-bottom. Every row ends with a newline.
pub fn write_columns<W: Write>(out: &mut W, keys: &[HostPortKey]) -> fmt::Result {
    let columns = column_count(keys.len());

    for (idx, key) in keys.iter().enumerate() {
        write!(out, "{:<width$.width$}", key.as_str(), width = FIELD_WIDTH)?;
        if (idx + 1) % columns == 0 {
            out.write_char('\n')?;
        }
    }
    if keys.len() % columns != 0 {
        out.write_char('\n')?;
    }
    Ok(())
}
