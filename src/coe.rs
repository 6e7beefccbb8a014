use crate::error::{MatmultError, Result};
use std::fs;
use std::path::Path;

pub const RADIX_HEADER: &str = "memory_initialization_radix=16;";
pub const VECTOR_HEADER: &str = "memory_initialization_vector=";

// The decoder skips any line containing this substring, matching on presence
// rather than full-line equality. Tightening this to a full-line match would
// reject files that other .coe emitters produce.
const HEADER_MARKER: &str = "memory_initialization";

/// Field width of one encoded value, in hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldWidth {
    /// 8-bit values, rendered as 2 hex digits.
    Byte,
    /// 16-bit values, rendered as 4 hex digits.
    Word,
}

impl FieldWidth {
    pub fn hex_digits(self) -> usize {
        match self {
            FieldWidth::Byte => 2,
            FieldWidth::Word => 4,
        }
    }

    pub fn max_value(self) -> u64 {
        match self {
            FieldWidth::Byte => 0xFF,
            FieldWidth::Word => 0xFFFF,
        }
    }
}

/// Serialize `values` into the memory-initialization text format: the two
/// header lines, then one value per line as uppercase zero-padded hex,
/// comma-terminated except for the final value, which ends in a semicolon.
///
/// Returns [`MatmultError::ValueOutOfRange`] if a value does not fit in the
/// declared field width.
pub fn encode<V: Copy + Into<u64>>(values: &[V], width: FieldWidth) -> Result<String> {
    let digits = width.hex_digits();
    let mut out = String::with_capacity(
        RADIX_HEADER.len() + VECTOR_HEADER.len() + 2 + values.len() * (digits + 2),
    );
    out.push_str(RADIX_HEADER);
    out.push('\n');
    out.push_str(VECTOR_HEADER);
    out.push('\n');

    for (i, &v) in values.iter().enumerate() {
        let value = v.into();
        if value > width.max_value() {
            return Err(MatmultError::ValueOutOfRange { value, digits });
        }
        let terminator = if i + 1 < values.len() { ',' } else { ';' };
        out.push_str(&format!("{value:0digits$X}{terminator}\n"));
    }

    Ok(out)
}

/// Parse memory-initialization text back into values, preserving file order.
///
/// Lines are trimmed; empty lines and header lines are skipped; at most one
/// trailing comma and then at most one trailing semicolon are stripped before
/// the remainder is parsed as base 16.
pub fn decode(text: &str) -> Result<Vec<u64>> {
    let mut values = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.contains(HEADER_MARKER) {
            continue;
        }
        let token = line.strip_suffix(',').unwrap_or(line);
        let token = token.strip_suffix(';').unwrap_or(token);
        if token.is_empty() {
            continue;
        }
        let value =
            u64::from_str_radix(token, 16).map_err(|_| MatmultError::InvalidHexToken {
                line: index + 1,
                token: token.to_string(),
            })?;
        values.push(value);
    }

    Ok(values)
}

/// Write the encoding of `values` to `path`, replacing any existing file.
pub fn write_coe<V, P>(path: P, values: &[V], width: FieldWidth) -> Result<()>
where
    V: Copy + Into<u64>,
    P: AsRef<Path>,
{
    fs::write(path, encode(values, width)?)?;
    Ok(())
}

/// Read and decode the file at `path`.
pub fn read_coe<P: AsRef<Path>>(path: P) -> Result<Vec<u64>> {
    let text = fs::read_to_string(path.as_ref()).map_err(|source| MatmultError::FileRead {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    decode(&text)
}
