use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid Argument: bytes {start}..{start}+{count} out of range for buffer of {len}")]
    InvalidArgument {
        start: usize,
        count: usize,
        len: usize,
    },
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),
    #[error("Config Error: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("Invalid Hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Unknown Packet Kind: {0}")]
    UnknownPacketKind(String),
    #[error("Invalid System Title: expected 8 bytes, found {0}")]
    InvalidSystemTitle(usize),
}
