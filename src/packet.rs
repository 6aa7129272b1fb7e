use super::Error;
use chrono::{DateTime, Local};
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

/// Direction a dumped packet travelled in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PacketKind {
    Send,
    Recv,
    Trap,
}

impl PacketKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PacketKind::Send => "Send",
            PacketKind::Recv => "Recv",
            PacketKind::Trap => "Trap",
        }
    }

    /// Label of the hex dump record, e.g. "Send Packet Data".
    pub fn data_label(self) -> &'static str {
        match self {
            PacketKind::Send => "Send Packet Data",
            PacketKind::Recv => "Recv Packet Data",
            PacketKind::Trap => "Trap Packet Data",
        }
    }
}

impl fmt::Display for PacketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PacketKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "send" => Ok(PacketKind::Send),
            "recv" | "receive" => Ok(PacketKind::Recv),
            "trap" => Ok(PacketKind::Trap),
            _ => Err(Error::UnknownPacketKind(s.to_string())),
        }
    }
}

/// 8 byte device identifier: a 3 letter manufacturer code followed by a
/// 5 byte serial number.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SystemTitle([u8; 8]);

impl SystemTitle {
    #[inline]
    pub const fn new(bytes: [u8; 8]) -> Self {
        SystemTitle(bytes)
    }

    pub fn manufacturer(&self) -> &[u8] {
        &self.0[..3]
    }

    pub fn serial(&self) -> &[u8] {
        &self.0[3..]
    }
}

impl<'a> std::convert::TryFrom<&'a [u8]> for SystemTitle {
    type Error = Error;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 8 {
            return Err(Error::InvalidSystemTitle(bytes.len()));
        }
        let mut title = [0; 8];
        title.copy_from_slice(bytes);
        Ok(SystemTitle(title))
    }
}

impl fmt::Display for SystemTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.manufacturer() {
            write!(f, "{}", b as char)?;
        }
        f.write_str(&hex::encode_upper(self.serial()))
    }
}

/// Identity of the modem a reported packet was exchanged with.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModemInfo {
    pub dcu_id: String,
    pub system_title: SystemTitle,
    pub fep_key: String,
    pub ip: Ipv6Addr,
}

/// Outcome of a single command, written with `HexDumpLogger::log_report`.
///
/// A successful report is a single line. A failed one also carries the modem
/// details and a dump of the whole packet.
#[derive(Clone, Debug)]
pub struct PacketReport {
    pub kind: String,
    pub cmd: char,
    pub success: bool,
    pub modem: ModemInfo,
    pub packet: Vec<u8>,
    pub time: DateTime<Local>,
}

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.9f";
const RULE_WIDTH: usize = 82;
const TITLE_INDENT: usize = 39;

impl PacketReport {
    /// Report stamped with the current local time.
    pub fn new(
        kind: impl Into<String>,
        modem: ModemInfo,
        cmd: char,
        success: bool,
        packet: Vec<u8>,
    ) -> Self {
        PacketReport {
            kind: kind.into(),
            cmd,
            success,
            modem,
            packet,
            time: Local::now(),
        }
    }

    pub fn formatted_time(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }

    pub(crate) fn render(&self) -> String {
        let time = self.formatted_time();
        if self.success {
            return format!(
                "[{kind} Packet] {kind} Success CMD: {cmd} / Time : {time}\n",
                kind = self.kind,
                cmd = self.cmd,
                time = time
            );
        }

        let mut out = String::new();
        out.push_str(&"=".repeat(RULE_WIDTH));
        out.push('\n');
        out.push_str(&" ".repeat(TITLE_INDENT));
        out.push_str(&self.kind);
        out.push('\n');
        out.push_str(&render_modem_info(&self.modem));
        out.push_str(&format!(
            "[{kind} Packet] {kind} CMD : {cmd} / Time : {time}\n",
            kind = self.kind,
            cmd = self.cmd,
            time = time
        ));
        out.push_str(&format!(
            "[{} Packet Data Size] : {} / Time : {}\n",
            self.kind,
            self.packet.len(),
            time
        ));
        out.push_str(&super::render::bytes_record(
            &format!("{} Packet Data", self.kind),
            &self.packet,
        ));
        out
    }
}

fn render_modem_info(modem: &ModemInfo) -> String {
    format!(
        "[Modem INFO]\n  - DCU ID         : {}\n  - Modem SysT     : {}\n  - Modem FEP Key  : {}\n  - Modem IP       : {}\n",
        modem.dcu_id, modem.system_title, modem.fep_key, modem.ip
    )
}

#[cfg(test)]
mod test_packet {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::convert::TryFrom;

    fn modem() -> ModemInfo {
        ModemInfo {
            dcu_id: String::from("DCU-0042"),
            system_title: SystemTitle::new([b'A', b'B', b'C', 0x12, 0x34, 0x56, 0x78, 0x9a]),
            fep_key: String::from("fep-key"),
            ip: "fd01:100:1:0:0:0:8745:1107".parse().unwrap(),
        }
    }

    fn report(success: bool) -> PacketReport {
        PacketReport {
            kind: String::from("Response"),
            cmd: 'R',
            success,
            modem: modem(),
            packet: vec![0x01, 0xff],
            time: Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 6).unwrap() + Duration::nanoseconds(7),
        }
    }

    #[test]
    fn kind_from_str() {
        assert_eq!("SEND".parse::<PacketKind>().unwrap(), PacketKind::Send);
        assert_eq!("receive".parse::<PacketKind>().unwrap(), PacketKind::Recv);
        assert_eq!("Trap".parse::<PacketKind>().unwrap(), PacketKind::Trap);
        assert!(matches!(
            "ack".parse::<PacketKind>(),
            Err(Error::UnknownPacketKind(ref s)) if s == "ack"
        ));
    }

    #[test]
    fn kind_labels() {
        assert_eq!(PacketKind::Recv.to_string(), "Recv");
        assert_eq!(PacketKind::Recv.data_label(), "Recv Packet Data");
    }

    #[test]
    fn system_title_display() {
        assert_eq!(modem().system_title.to_string(), "ABC123456789A");
    }

    #[test]
    fn system_title_length() {
        assert!(SystemTitle::try_from(&[0u8; 8][..]).is_ok());
        assert!(matches!(
            SystemTitle::try_from(&[0u8; 7][..]),
            Err(Error::InvalidSystemTitle(7))
        ));
    }

    #[test]
    fn successful_report() {
        assert_eq!(
            report(true).render(),
            "[Response Packet] Response Success CMD: R / Time : 2024-03-09 14:05:06.000000007\n"
        );
    }

    #[test]
    fn failed_report() {
        let rendered = report(false).render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "=".repeat(82));
        assert_eq!(lines[1], format!("{}Response", " ".repeat(39)));
        assert_eq!(lines[2], "[Modem INFO]");
        assert_eq!(lines[3], "  - DCU ID         : DCU-0042");
        assert_eq!(lines[4], "  - Modem SysT     : ABC123456789A");
        assert_eq!(lines[5], "  - Modem FEP Key  : fep-key");
        assert_eq!(lines[6], "  - Modem IP       : fd01:100:1::8745:1107");
        assert_eq!(
            lines[7],
            "[Response Packet] Response CMD : R / Time : 2024-03-09 14:05:06.000000007"
        );
        assert_eq!(
            lines[8],
            "[Response Packet Data Size] : 2 / Time : 2024-03-09 14:05:06.000000007"
        );
        assert_eq!(lines[9], "  [Response Packet Data] [2]");
        assert_eq!(lines[10], "     01 FF");
        assert_eq!(lines.len(), 11);
    }
}
