use super::render::{byte_record, bytes_record, checked_range, size_line};
use super::{DebugFlag, Error, PacketKind, PacketReport};
use log::{debug, trace};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Writes hex dump records of packet buffers to `W`.
///
/// `log_byte` and `log_bytes` only write while the logger's `DebugFlag` is
/// enabled. The packet dumps (`log_send`, `log_recv`, `log_trap`,
/// `log_packet`) and `log_report` always write.
///
/// Each record is rendered in full before the writer is locked, and is
/// written and flushed under a single lock, so records from different threads
/// never interleave.
pub struct HexDumpLogger<W> {
    writer: Mutex<W>,
    flag: Arc<DebugFlag>,
}

impl HexDumpLogger<io::Stdout> {
    /// Logger on standard output, gated by the process-wide flag.
    pub fn stdout() -> Self {
        HexDumpLogger::new(io::stdout(), DebugFlag::global())
    }
}

impl<W: Write> HexDumpLogger<W> {
    pub fn new(writer: W, flag: Arc<DebugFlag>) -> Self {
        HexDumpLogger {
            writer: Mutex::new(writer),
            flag,
        }
    }

    pub fn flag(&self) -> &Arc<DebugFlag> {
        &self.flag
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    pub fn log_byte(&self, label: &str, value: u8) -> Result<(), Error> {
        if !self.flag.is_enabled() {
            return Ok(());
        }
        self.emit(&byte_record(label, value))
    }

    pub fn log_bytes(
        &self,
        label: &str,
        buffer: &[u8],
        start: usize,
        count: usize,
    ) -> Result<(), Error> {
        self.dump(label, buffer, start, count, false)
    }

    pub fn log_bytes_unconditional(
        &self,
        label: &str,
        buffer: &[u8],
        start: usize,
        count: usize,
    ) -> Result<(), Error> {
        self.dump(label, buffer, start, count, true)
    }

    pub fn log_send(&self, buffer: &[u8], count: usize) -> Result<(), Error> {
        self.log_packet(PacketKind::Send, buffer, count)
    }

    pub fn log_recv(&self, buffer: &[u8], count: usize) -> Result<(), Error> {
        self.log_packet(PacketKind::Recv, buffer, count)
    }

    pub fn log_trap(&self, buffer: &[u8], count: usize) -> Result<(), Error> {
        self.log_packet(PacketKind::Trap, buffer, count)
    }

    /// Size announcement followed by a dump of the first `count` bytes,
    /// written as one record.
    pub fn log_packet(&self, kind: PacketKind, buffer: &[u8], count: usize) -> Result<(), Error> {
        let bytes = checked_range(buffer, 0, count)?;
        trace!("Dumping {} packet of {} bytes", kind, count);
        let mut record = size_line(kind, count);
        record.push_str(&bytes_record(kind.data_label(), bytes));
        self.emit(&record)
    }

    pub fn log_report(&self, report: &PacketReport) -> Result<(), Error> {
        if !report.success {
            debug!(
                "{} command {:?} failed for DCU {}",
                report.kind, report.cmd, report.modem.dcu_id
            );
        }
        self.emit(&report.render())
    }

    fn dump(
        &self,
        label: &str,
        buffer: &[u8],
        start: usize,
        count: usize,
        always: bool,
    ) -> Result<(), Error> {
        if !always && !self.flag.is_enabled() {
            return Ok(());
        }
        let bytes = checked_range(buffer, start, count)?;
        self.emit(&bytes_record(label, bytes))
    }

    fn emit(&self, record: &str) -> Result<(), Error> {
        let mut writer = self.writer.lock();
        writer.write_all(record.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
