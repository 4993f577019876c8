use crate::payload::SHA1_LEN;
use crate::signature::SIGNATURE_SIGNED_LEN;
use crate::wram::*;
use bitflags::bitflags;
use byte_struct::*;
use sha1::{Digest, Sha1};

pub const HEADER_LEN: usize = 0x200;

/// Byte range covered by the signature, excluded from the header hash.
pub const HEADER_SIGNATURE_OFFSET: usize = 0x100;
pub const HEADER_WRAM_CONFIG_OFFSET: usize = 0x180;

pub const DEFAULT_ROM_CONTROL: u32 = 0x0041_6657;
pub const DEFAULT_ROM_CONTROL_SECURE: u32 = 0x0818_08F8;
pub const DEFAULT_SECURE_AREA_DELAY: u16 = 3454;

/// Location and size of one binary inside the image.
#[derive(ByteStruct, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[byte_struct_le]
pub struct PayloadInfo {
    pub rom_offset: u32,
    pub size: u32,
    pub load_address: u32,
    pub padded_size: u32,
}

#[derive(ByteStruct)]
#[byte_struct_le]
struct HeaderLayout {
    padding0: [u8; 12],
    game_code: u32,
    padding1: [u8; 16],
    arm9: PayloadInfo,
    arm7: PayloadInfo,
    padding2: [u8; 32],
    rom_control: u32,
    rom_control_secure: u32,
    padding3: [u8; 6],
    secure_area_delay: u16,
    padding4: [u8; 32],
    nitro_rom_region_end: u16,
    twl_rom_region_start: u16,
    padding5: [[u8; 16]; 6],
    padding6: [u8; 11],
    flags: u8,
    signature: [[u8; 16]; 8],
    wram_config: WramConfigLayout,
    padding7: [[u8; 16]; 5],
}

bitflags! {
    /// Boot flags stored in the last byte before the signature.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GcdHeaderFlags: u8 {
        const ARM9_COMPRESSED = 1 << 0;
        const ARM7_COMPRESSED = 1 << 1;
        /// Cleared to start the ARM9 at 67 MHz
        const ARM9_SPEED_134MHZ = 1 << 2;
    }
}

/// The 0x200-byte header at the start of the image.
#[derive(Clone, Debug, PartialEq)]
pub struct GcdHeader {
    pub game_code: u32,
    pub arm9: PayloadInfo,
    pub arm7: PayloadInfo,
    pub rom_control: u32,
    pub rom_control_secure: u32,
    pub secure_area_delay: u16,
    pub nitro_rom_region_end: u16,
    pub twl_rom_region_start: u16,
    pub flags: GcdHeaderFlags,
    pub signature: [u8; SIGNATURE_SIGNED_LEN],
    pub wram_config: WramConfig,
}

impl Default for GcdHeader {
    fn default() -> Self {
        GcdHeader {
            game_code: 0,
            arm9: PayloadInfo::default(),
            arm7: PayloadInfo::default(),
            rom_control: DEFAULT_ROM_CONTROL,
            rom_control_secure: DEFAULT_ROM_CONTROL_SECURE,
            secure_area_delay: DEFAULT_SECURE_AREA_DELAY,
            nitro_rom_region_end: 0,
            twl_rom_region_start: 0,
            flags: GcdHeaderFlags::ARM9_SPEED_134MHZ,
            signature: [0; SIGNATURE_SIGNED_LEN],
            wram_config: WramConfig::default(),
        }
    }
}

impl GcdHeader {
    fn to_layout(&self) -> HeaderLayout {
        let mut signature = [[0; 16]; 8];
        for (row, chunk) in signature
            .iter_mut()
            .zip(self.signature.chunks_exact(16))
        {
            row.copy_from_slice(chunk);
        }

        HeaderLayout {
            padding0: [0; 12],
            game_code: self.game_code,
            padding1: [0; 16],
            arm9: self.arm9,
            arm7: self.arm7,
            padding2: [0; 32],
            rom_control: self.rom_control,
            rom_control_secure: self.rom_control_secure,
            padding3: [0; 6],
            secure_area_delay: self.secure_area_delay,
            padding4: [0; 32],
            nitro_rom_region_end: self.nitro_rom_region_end,
            twl_rom_region_start: self.twl_rom_region_start,
            padding5: [[0; 16]; 6],
            padding6: [0; 11],
            flags: self.flags.bits(),
            signature,
            wram_config: self.wram_config.to_layout(),
            padding7: [[0; 16]; 5],
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0; HEADER_LEN];
        self.to_layout().write_bytes(&mut bytes);
        bytes
    }

    /// Hash signed by the signature block. Covers everything but the signature itself.
    pub fn sha1_hash(&self) -> [u8; SHA1_LEN] {
        header_sha1(&self.to_bytes())
    }
}

/// Hashes [0, 0x100) followed by [0x180, 0x200) of a serialized header.
pub fn header_sha1(header: &[u8; HEADER_LEN]) -> [u8; SHA1_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(&header[..HEADER_SIGNATURE_OFFSET]);
    hasher.update(&header[HEADER_WRAM_CONFIG_OFFSET..]);
    let mut hash = [0; SHA1_LEN];
    hash.copy_from_slice(&hasher.finalize());
    hash
}
