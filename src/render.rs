//! Text rendering of dump records. Nothing in here does I/O.

use super::{Error, PacketKind};
use std::fmt;

/// Bytes per output line of a multi-byte record.
pub const BYTES_PER_LINE: usize = 25;

/// Body of a multi-byte record, written straight into the formatter.
///
/// Every byte is written as ` XX`, and a `\n    ` goes in front of the 0th,
/// 25th, 50th... byte of the run.
pub struct HexBytes<'a>(pub &'a [u8]);

impl<'a> fmt::Display for HexBytes<'a> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i % BYTES_PER_LINE == 0 {
                fmt.write_str("\n    ")?;
            }
            write!(fmt, " {:02X}", b)?;
        }
        Ok(())
    }
}

/// Returns `buffer[start..start + count]`, or `InvalidArgument` if any part
/// of that range is outside the buffer.
pub fn checked_range(buffer: &[u8], start: usize, count: usize) -> Result<&[u8], Error> {
    start
        .checked_add(count)
        .and_then(|end| buffer.get(start..end))
        .ok_or(Error::InvalidArgument {
            start,
            count,
            len: buffer.len(),
        })
}

pub fn byte_record(label: &str, value: u8) -> String {
    format!("  [{}] [1]\n     {:02X}\n", label, value)
}

pub fn bytes_record(label: &str, bytes: &[u8]) -> String {
    format!("  [{}] [{}]{}\n", label, bytes.len(), HexBytes(bytes))
}

pub fn size_line(kind: PacketKind, count: usize) -> String {
    format!("[{} Packet Data Size] : {}\n", kind, count)
}
