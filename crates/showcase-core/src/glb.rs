//! Binary glTF container header.
//!
//! Only the 12-byte header is inspected here; chunk parsing belongs to the
//! mesh loader.

use crate::error::{Result, ShowcaseError};

pub const GLB_MAGIC: u32 = 0x4654_6C67; // "glTF" little-endian
pub const GLB_VERSION: u32 = 2;
pub const GLB_HEADER_LEN: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlbHeader {
    pub version: u32,
    pub length: u32,
}

#[inline]
fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Check that `bytes` start with a version 2 GLB header whose declared length
/// fits the buffer.
pub fn parse_header(path: &str, bytes: &[u8]) -> Result<GlbHeader> {
    let invalid = |reason: String| ShowcaseError::InvalidGlb {
        path: path.to_string(),
        reason,
    };
    if bytes.len() < GLB_HEADER_LEN {
        return Err(invalid(format!("{} bytes is shorter than the header", bytes.len())));
    }
    let magic = read_u32_le(bytes, 0);
    if magic != GLB_MAGIC {
        return Err(invalid(format!("bad magic {magic:#010x}")));
    }
    let version = read_u32_le(bytes, 4);
    if version != GLB_VERSION {
        return Err(invalid(format!("unsupported version {version}")));
    }
    let length = read_u32_le(bytes, 8);
    if (length as usize) < GLB_HEADER_LEN || length as usize > bytes.len() {
        return Err(invalid(format!(
            "declared length {length} does not fit {} bytes",
            bytes.len()
        )));
    }
    Ok(GlbHeader { version, length })
}
