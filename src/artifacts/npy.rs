//! Minimal reader for the NumPy `.npy` array format.
//!
//! The estimation-error artifacts are one-dimensional real arrays written
//! by `numpy.save`. Only the subset of the format those files can use is
//! supported: version 1.x–3.x headers, C order, one dimension, and
//! little-endian float or integer element types (integers are widened to
//! `f64`). Anything else is reported as a malformed artifact.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

const MAGIC: &[u8] = b"\x93NUMPY";

/// Element types accepted in error artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dtype {
    F8,
    F4,
    I8,
    I4,
}

impl Dtype {
    fn parse(descr: &str) -> Option<Dtype> {
        match descr {
            "<f8" => Some(Dtype::F8),
            "<f4" => Some(Dtype::F4),
            "<i8" => Some(Dtype::I8),
            "<i4" => Some(Dtype::I4),
            _ => None,
        }
    }

    fn size(self) -> usize {
        match self {
            Dtype::F8 | Dtype::I8 => 8,
            Dtype::F4 | Dtype::I4 => 4,
        }
    }

    fn decode(self, chunk: &[u8]) -> f64 {
        match self {
            Dtype::F8 => f64::from_le_bytes(chunk.try_into().expect("8-byte chunk")),
            Dtype::F4 => f64::from(f32::from_le_bytes(chunk.try_into().expect("4-byte chunk"))),
            Dtype::I8 => i64::from_le_bytes(chunk.try_into().expect("8-byte chunk")) as f64,
            Dtype::I4 => f64::from(i32::from_le_bytes(chunk.try_into().expect("4-byte chunk"))),
        }
    }
}

/// Read a 1-D array of reals from a `.npy` file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, and
/// [`Error::MalformedArtifact`] if the contents are not a supported
/// one-dimensional numeric array.
pub fn read_1d(path: &Path) -> Result<Vec<f64>> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let bytes = fs::read(path).map_err(|e| Error::io(format!("read {}", path.display()), e))?;
    parse_1d(&bytes).map_err(|reason| Error::malformed(filename, reason))
}

fn parse_1d(bytes: &[u8]) -> std::result::Result<Vec<f64>, String> {
    if bytes.len() < 8 || &bytes[..6] != MAGIC {
        return Err("missing NumPy magic header".to_string());
    }
    let major = bytes[6];
    let (header_len, header_start): (usize, usize) = match major {
        1 => {
            if bytes.len() < 10 {
                return Err("truncated version 1 header".to_string());
            }
            let len = u16::from_le_bytes([bytes[8], bytes[9]]) as usize;
            (len, 10)
        }
        2 | 3 => {
            if bytes.len() < 12 {
                return Err(format!("truncated version {major} header"));
            }
            let len = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]) as usize;
            (len, 12)
        }
        other => return Err(format!("unsupported format version {other}")),
    };

    let header_end = header_start
        .checked_add(header_len)
        .filter(|&end| end <= bytes.len())
        .ok_or_else(|| "header extends past end of file".to_string())?;
    let header = std::str::from_utf8(&bytes[header_start..header_end])
        .map_err(|_| "header is not valid UTF-8".to_string())?;

    let descr = quoted_field(header, "descr")?;
    let dtype = Dtype::parse(&descr)
        .ok_or_else(|| format!("unsupported element type '{descr}' (expected little-endian reals)"))?;

    if bare_field(header, "fortran_order")? != "False" {
        return Err("Fortran-ordered arrays are not supported".to_string());
    }

    let shape = bare_field(header, "shape")?;
    let len = parse_1d_shape(&shape)?;

    let data = &bytes[header_end..];
    let expected = len * dtype.size();
    if data.len() != expected {
        return Err(format!(
            "expected {expected} data bytes for shape ({len},), got {}",
            data.len()
        ));
    }

    let mut values = Vec::with_capacity(len);
    for chunk in data.chunks_exact(dtype.size()) {
        values.push(dtype.decode(chunk));
    }
    Ok(values)
}

/// Extract a `'key': 'value'` entry from the header dict.
fn quoted_field(header: &str, key: &str) -> std::result::Result<String, String> {
    let rest = field_value(header, key)?;
    let rest = rest.strip_prefix('\'').ok_or_else(|| {
        format!("expected quoted value for '{key}'")
    })?;
    let end = rest
        .find('\'')
        .ok_or_else(|| format!("unterminated value for '{key}'"))?;
    Ok(rest[..end].to_string())
}

/// Extract an unquoted entry (`False`, `(500,)`) from the header dict.
fn bare_field(header: &str, key: &str) -> std::result::Result<String, String> {
    let rest = field_value(header, key)?;
    if rest.starts_with('(') {
        let close = rest
            .find(')')
            .ok_or_else(|| format!("unterminated tuple for '{key}'"))?;
        return Ok(rest[..=close].to_string());
    }
    let end = rest.find([',', '}']).unwrap_or(rest.len());
    Ok(rest[..end].trim().to_string())
}

fn field_value<'a>(header: &'a str, key: &str) -> std::result::Result<&'a str, String> {
    let marker = format!("'{key}':");
    let start = header
        .find(&marker)
        .ok_or_else(|| format!("header is missing '{key}'"))?;
    Ok(header[start + marker.len()..].trim_start())
}

fn parse_1d_shape(shape: &str) -> std::result::Result<usize, String> {
    let inner = shape
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| format!("invalid shape '{shape}'"))?;
    let dims: Vec<&str> = inner
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .collect();
    if dims.len() != 1 {
        return Err(format!(
            "expected a 1-D array, got shape ({})",
            dims.join(", ")
        ));
    }
    dims[0]
        .parse::<usize>()
        .map_err(|_| format!("invalid dimension '{}'", dims[0]))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serialize a 1-D f64 array the way `numpy.save` does.
    fn npy_bytes(values: &[f64]) -> Vec<u8> {
        let mut header = format!(
            "{{'descr': '<f8', 'fortran_order': False, 'shape': ({},), }}",
            values.len()
        );
        while (10 + header.len() + 1) % 64 != 0 {
            header.push(' ');
        }
        header.push('\n');

        let mut bytes = Vec::new();
        bytes.extend_from_slice(MAGIC);
        bytes.extend_from_slice(&[1, 0]);
        bytes.extend_from_slice(&(header.len() as u16).to_le_bytes());
        bytes.extend_from_slice(header.as_bytes());
        for value in values {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn parses_f8_array() {
        let values = vec![0.5, -13.0, 2.25];
        assert_eq!(parse_1d(&npy_bytes(&values)).unwrap(), values);
    }

    #[test]
    fn parses_empty_array() {
        assert_eq!(parse_1d(&npy_bytes(&[])).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn parses_f4_array() {
        let header = "{'descr': '<f4', 'fortran_order': False, 'shape': (2,), }          \n";
        let mut bytes = Vec::new();
        bytes.extend_from_slice(MAGIC);
        bytes.extend_from_slice(&[1, 0]);
        bytes.extend_from_slice(&(header.len() as u16).to_le_bytes());
        bytes.extend_from_slice(header.as_bytes());
        bytes.extend_from_slice(&1.5f32.to_le_bytes());
        bytes.extend_from_slice(&(-2.0f32).to_le_bytes());
        assert_eq!(parse_1d(&bytes).unwrap(), vec![1.5, -2.0]);
    }

    #[test]
    fn rejects_bad_magic() {
        let err = parse_1d(b"not an npy file").unwrap_err();
        assert!(err.contains("magic"));
    }

    #[test]
    fn rejects_fortran_order() {
        let mut bytes = npy_bytes(&[1.0]);
        let pos = bytes.windows(5).position(|w| w == b"False").unwrap();
        bytes[pos..pos + 5].copy_from_slice(b"True ");
        let err = parse_1d(&bytes).unwrap_err();
        assert!(err.contains("Fortran"));
    }

    #[test]
    fn rejects_two_dimensional_shape() {
        let mut header =
            "{'descr': '<f8', 'fortran_order': False, 'shape': (2, 2), }".to_string();
        while (10 + header.len() + 1) % 64 != 0 {
            header.push(' ');
        }
        header.push('\n');
        let mut bytes = Vec::new();
        bytes.extend_from_slice(MAGIC);
        bytes.extend_from_slice(&[1, 0]);
        bytes.extend_from_slice(&(header.len() as u16).to_le_bytes());
        bytes.extend_from_slice(header.as_bytes());
        bytes.extend_from_slice(&[0u8; 32]);
        let err = parse_1d(&bytes).unwrap_err();
        assert!(err.contains("1-D"), "unexpected error: {err}");
    }

    #[test]
    fn rejects_truncated_data() {
        let mut bytes = npy_bytes(&[1.0, 2.0]);
        bytes.truncate(bytes.len() - 4);
        let err = parse_1d(&bytes).unwrap_err();
        assert!(err.contains("data bytes"), "unexpected error: {err}");
    }

    #[test]
    fn rejects_big_endian_dtype() {
        let mut bytes = npy_bytes(&[1.0]);
        let pos = bytes.windows(3).position(|w| w == b"<f8").unwrap();
        bytes[pos] = b'>';
        let err = parse_1d(&bytes).unwrap_err();
        assert!(err.contains("element type"), "unexpected error: {err}");
    }
}
