use crate::elf::Segment;
use crate::error::*;
use crate::header::PayloadInfo;
use crate::misc::align_up;
use crate::payload_cipher;
use sha1::{Digest, Sha1};
use std::fmt;

/// Binaries loaded below this address would land in main memory, which isn't available yet.
pub const MIN_LOAD_ADDRESS: u32 = 0x0300_0000;
pub const PAYLOAD_ALIGN: usize = 512;
pub const SHA1_LEN: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadKind {
    Arm9,
    Arm7,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadKind::Arm9 => write!(f, "ARM9"),
            PayloadKind::Arm7 => write!(f, "ARM7"),
        }
    }
}

/// A validated, not yet encrypted binary.
pub struct PayloadSource {
    kind: PayloadKind,
    load_address: u32,
    data: Vec<u8>,
}

impl PayloadSource {
    pub fn new(kind: PayloadKind, load_address: u32, data: Vec<u8>) -> Result<PayloadSource, Error> {
        if load_address < MIN_LOAD_ADDRESS {
            return make_error(Error::InvalidLoadAddress {
                address: load_address,
            });
        }
        if u32::try_from(align_up(data.len(), PAYLOAD_ALIGN)).is_err() {
            return make_error(Error::InvalidLayout("binary too large"));
        }
        Ok(PayloadSource {
            kind,
            load_address,
            data,
        })
    }

    /// Concatenates all segments; the first one decides the load address.
    pub fn from_segments(kind: PayloadKind, segments: &[Segment]) -> Result<PayloadSource, Error> {
        let load_address = match segments.first() {
            Some(segment) => segment.physical_address,
            None => return make_error(Error::NoLoadSegment),
        };
        let data = segments
            .iter()
            .flat_map(|segment| segment.data.iter().cloned())
            .collect();
        PayloadSource::new(kind, load_address, data)
    }

    pub fn kind(&self) -> PayloadKind {
        self.kind
    }

    pub fn load_address(&self) -> u32 {
        self.load_address
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Hashes the unpadded bytes, pads them to a multiple of 512 and encrypts them.
    pub fn encrypt(self, key_y: &[u8; 16]) -> Result<Payload, Error> {
        let mut sha1 = [0; SHA1_LEN];
        sha1.copy_from_slice(&Sha1::digest(&self.data));

        let size = self.data.len() as u32;
        let mut data = self.data;
        data.resize(align_up(data.len(), PAYLOAD_ALIGN), 0);
        let padded_size = data.len() as u32;
        payload_cipher::encrypt(&mut data, key_y)?;

        log::info!(
            "{} binary: {} bytes ({} padded), loaded at 0x{:08X}",
            self.kind,
            size,
            padded_size,
            self.load_address
        );

        Ok(Payload {
            kind: self.kind,
            size,
            padded_size,
            load_address: self.load_address,
            sha1,
            encrypted: data,
        })
    }
}

/// An encrypted ARM9 or ARM7 binary ready to be placed in the image.
pub struct Payload {
    kind: PayloadKind,
    size: u32,
    padded_size: u32,
    load_address: u32,
    sha1: [u8; SHA1_LEN],
    encrypted: Vec<u8>,
}

impl Payload {
    pub fn kind(&self) -> PayloadKind {
        self.kind
    }

    /// Length of the binary before padding.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn padded_size(&self) -> u32 {
        self.padded_size
    }

    pub fn load_address(&self) -> u32 {
        self.load_address
    }

    /// SHA-1 of the binary, without padding.
    pub fn sha1(&self) -> &[u8; SHA1_LEN] {
        &self.sha1
    }

    pub fn encrypted(&self) -> &[u8] {
        &self.encrypted
    }

    pub fn into_encrypted(self) -> Vec<u8> {
        self.encrypted
    }

    /// Header entry for this payload placed at `rom_offset`.
    pub fn info(&self, rom_offset: u32) -> PayloadInfo {
        PayloadInfo {
            rom_offset,
            size: self.size,
            load_address: self.load_address,
            padded_size: self.padded_size,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::elf::Segment;
    use crate::payload::*;
    use crate::payload_cipher;

    #[test]
    fn load_address_check() {
        assert!(matches!(
            PayloadSource::new(PayloadKind::Arm9, 0x02FF_FFFF, vec![0; 4]),
            Err(Error::InvalidLoadAddress {
                address: 0x02FF_FFFF
            })
        ));
        assert!(PayloadSource::new(PayloadKind::Arm7, 0x0200_0000, vec![0; 4]).is_err());
        assert!(PayloadSource::new(PayloadKind::Arm9, MIN_LOAD_ADDRESS, vec![0; 4]).is_ok());
    }

    #[test]
    fn segments() {
        assert!(PayloadSource::from_segments(PayloadKind::Arm9, &[]).is_err());

        let segments = [
            Segment {
                physical_address: 0x037F_8000,
                data: vec![1, 2, 3],
            },
            Segment {
                physical_address: 0x0300_0000,
                data: vec![4, 5],
            },
        ];
        let source = PayloadSource::from_segments(PayloadKind::Arm7, &segments).unwrap();
        assert_eq!(source.kind(), PayloadKind::Arm7);
        assert_eq!(source.load_address(), 0x037F_8000);
        assert_eq!(source.len(), 5);
    }

    #[test]
    fn padding_and_hash() {
        let data: Vec<u8> = (0..700).map(|i| i as u8).collect();
        let source = PayloadSource::new(PayloadKind::Arm9, 0x0300_0000, data.clone()).unwrap();
        let payload = source.encrypt(&[0; 16]).unwrap();
        assert_eq!(payload.size(), 700);
        assert_eq!(payload.padded_size(), 1024);
        assert_eq!(payload.encrypted().len(), 1024);
        assert_eq!(&payload.sha1()[..], &Sha1::digest(&data)[..]);

        let mut plain = payload.encrypted().to_vec();
        payload_cipher::decrypt(&mut plain, &[0; 16]).unwrap();
        assert_eq!(&plain[0..700], &data[..]);
        assert!(plain[700..].iter().all(|b| *b == 0));

        let info = payload.info(0x4000);
        assert_eq!(info.rom_offset, 0x4000);
        assert_eq!(info.size, 700);
        assert_eq!(info.load_address, 0x0300_0000);
        assert_eq!(info.padded_size, 1024);
    }

    #[test]
    fn aligned_is_not_padded() {
        let source = PayloadSource::new(PayloadKind::Arm9, 0x0300_0000, vec![0; 512]).unwrap();
        let payload = source.encrypt(&[0; 16]).unwrap();
        assert_eq!(payload.padded_size(), 512);
    }
}
