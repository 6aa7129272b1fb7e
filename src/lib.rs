//! Hex dump logging for raw packet buffers.
//!
//! [`HexDumpLogger`] renders borrowed byte buffers as rows of uppercase hex
//! pairs, labelled by what the bytes are (sent, received or trapped packets,
//! or any caller-chosen label). Debug dumps are gated by a shared
//! [`DebugFlag`]; packet dumps and reports are always written.

mod config;
mod errors;
mod flag;
mod logger;
mod packet;
pub mod render;

pub use self::config::{Config, ENV_PREFIX};
pub use self::errors::Error;
pub use self::flag::DebugFlag;
pub use self::logger::HexDumpLogger;
pub use self::packet::{ModemInfo, PacketKind, PacketReport, SystemTitle};
