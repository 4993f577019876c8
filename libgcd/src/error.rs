use std::fmt;

#[derive(Debug)]
pub enum Error {
    IO(std::io::Error),
    OutOfBound,
    SizeMismatch,
    InvalidLayout(&'static str),
    InvalidKeySchedule(&'static str),
    InvalidGameCode,
    InvalidLoadAddress { address: u32 },
    NoLoadSegment,
    Elf(String),
    InvalidWramConfig(String),
    KeyImport(String),
    Signing(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IO(e) => write!(f, "I/O error: {}", e),
            Error::OutOfBound => write!(f, "access out of bound"),
            Error::SizeMismatch => write!(f, "buffer length is not a multiple of the block size"),
            Error::InvalidLayout(s) => write!(f, "invalid image layout: {}", s),
            Error::InvalidKeySchedule(s) => write!(f, "invalid key schedule: {}", s),
            Error::InvalidGameCode => write!(f, "invalid game code, should be 4 characters"),
            Error::InvalidLoadAddress { address } => write!(
                f,
                "binary at 0x{:08X} cannot be loaded to main memory, use TWL WRAM instead",
                address
            ),
            Error::NoLoadSegment => write!(f, "binary has no loadable segment"),
            Error::Elf(s) => write!(f, "malformed ELF file: {}", s),
            Error::InvalidWramConfig(s) => write!(f, "invalid WRAM configuration: {}", s),
            Error::KeyImport(s) => write!(f, "failed to import RSA private key: {}", s),
            Error::Signing(s) => write!(f, "failed to sign: {}", s),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Error::IO(e) = self {
            Some(e)
        } else {
            None
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::IO(e)
    }
}

pub(crate) fn make_error<T>(e: Error) -> Result<T, Error> {
    log::debug!("Error thrown: {}", e);
    Err(e)
}
