pub mod blowfish;
pub mod elf;
pub mod error;
pub mod header;
pub mod key_engine;
pub mod key_table;
mod memory_file;
mod misc;
pub mod payload;
pub mod payload_cipher;
mod random_access_file;
pub mod rom;
pub mod signature;
pub mod wram;
pub mod wram_json;

use elf::Segment;
use error::*;
use header::*;
use payload::*;
use rom::*;
use signature::*;
use wram::WramConfig;

/// Converts a four-character game code into the little-endian word stored in the header.
pub fn parse_game_code(game_code: &str) -> Result<u32, Error> {
    if !game_code.is_ascii() {
        return make_error(Error::InvalidGameCode);
    }
    match <[u8; 4]>::try_from(game_code.as_bytes()) {
        Ok(bytes) => Ok(u32::from_le_bytes(bytes)),
        Err(_) => make_error(Error::InvalidGameCode),
    }
}

/// Collects everything needed to produce a signed GCD image.
pub struct GcdBuilder {
    game_code: String,
    key_y: [u8; AES_KEY_Y_LEN],
    arm9: Vec<Segment>,
    arm7: Vec<Segment>,
    wram_config: WramConfig,
    arm9_speed_67mhz: bool,
    rom_control: u32,
    rom_control_secure: u32,
    secure_area_delay: u16,
}

impl GcdBuilder {
    pub fn new(
        game_code: &str,
        arm9: Vec<Segment>,
        arm7: Vec<Segment>,
        wram_config: WramConfig,
    ) -> GcdBuilder {
        GcdBuilder {
            game_code: game_code.to_owned(),
            key_y: [0; AES_KEY_Y_LEN],
            arm9,
            arm7,
            wram_config,
            arm9_speed_67mhz: false,
            rom_control: DEFAULT_ROM_CONTROL,
            rom_control_secure: DEFAULT_ROM_CONTROL_SECURE,
            secure_area_delay: DEFAULT_SECURE_AREA_DELAY,
        }
    }

    /// Takes the binaries from the loadable segments of two ELF files.
    pub fn from_elf(
        game_code: &str,
        arm9_elf: &[u8],
        arm7_elf: &[u8],
        wram_config: WramConfig,
    ) -> Result<GcdBuilder, Error> {
        let arm9 = elf::load_segments(arm9_elf)?;
        let arm7 = elf::load_segments(arm7_elf)?;
        Ok(GcdBuilder::new(game_code, arm9, arm7, wram_config))
    }

    /// Any key works. The default all-zero key makes the output reproducible.
    pub fn with_key_y(mut self, key_y: [u8; AES_KEY_Y_LEN]) -> GcdBuilder {
        self.key_y = key_y;
        self
    }

    pub fn with_arm9_speed_67mhz(mut self, arm9_speed_67mhz: bool) -> GcdBuilder {
        self.arm9_speed_67mhz = arm9_speed_67mhz;
        self
    }

    pub fn with_rom_control(mut self, rom_control: u32, rom_control_secure: u32) -> GcdBuilder {
        self.rom_control = rom_control;
        self.rom_control_secure = rom_control_secure;
        self
    }

    pub fn with_secure_area_delay(mut self, secure_area_delay: u16) -> GcdBuilder {
        self.secure_area_delay = secure_area_delay;
        self
    }

    pub fn build(&self, signer: &dyn Signer) -> Result<GcdRom, Error> {
        let game_code = parse_game_code(&self.game_code)?;
        let arm9 = PayloadSource::from_segments(PayloadKind::Arm9, &self.arm9)?;
        let arm7 = PayloadSource::from_segments(PayloadKind::Arm7, &self.arm7)?;

        let arm9 = arm9.encrypt(&self.key_y)?;
        let arm7 = arm7.encrypt(&self.key_y)?;

        let arm9_offset = PAYLOAD_OFFSET as u32;
        let arm7_offset = match arm9_offset.checked_add(arm9.padded_size()) {
            Some(offset) => offset,
            None => return make_error(Error::InvalidLayout("ARM9 binary too large")),
        };
        log::debug!(
            "ARM9 at 0x{:X}, ARM7 at 0x{:X}",
            arm9_offset,
            arm7_offset
        );

        let mut flags = GcdHeaderFlags::empty();
        flags.set(GcdHeaderFlags::ARM9_SPEED_134MHZ, !self.arm9_speed_67mhz);

        let mut header = GcdHeader {
            game_code,
            arm9: arm9.info(arm9_offset),
            arm7: arm7.info(arm7_offset),
            rom_control: self.rom_control,
            rom_control_secure: self.rom_control_secure,
            secure_area_delay: self.secure_area_delay,
            nitro_rom_region_end: 0,
            twl_rom_region_start: 0,
            flags,
            wram_config: self.wram_config.clone(),
            ..GcdHeader::default()
        };

        let signature = GcdSignature {
            aes_key_y: self.key_y,
            header_sha1: header.sha1_hash(),
            arm9_sha1: *arm9.sha1(),
            arm7_sha1: *arm7.sha1(),
        };
        header.signature = signature.sign(signer)?;

        Ok(GcdRom {
            header,
            encrypted_arm9: arm9.into_encrypted(),
            encrypted_arm7: arm7.into_encrypted(),
        })
    }
}

#[cfg(test)]
mod test {
    use crate::*;

    #[test]
    fn game_code() {
        assert_eq!(parse_game_code("TEST").unwrap(), 0x5453_4554);
        assert_eq!(parse_game_code("####").unwrap(), 0x2323_2323);
        assert!(parse_game_code("TES").is_err());
        assert!(parse_game_code("TESTS").is_err());
        assert!(parse_game_code("TÉST").is_err());
    }
}
