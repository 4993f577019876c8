use crate::blowfish::KEY_TABLE_LEN;
use crate::error::*;
use crate::header::*;
use crate::key_table::transformed_key_table;
use crate::memory_file::MemoryFile;
use crate::random_access_file::*;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const P_TABLE_OFFSET: usize = 0x1600;
pub const S_BOXES_OFFSET: usize = 0x1C00;
pub const TEST_PATTERN_OFFSET: usize = 0x3000;
pub const PAYLOAD_OFFSET: usize = 0x4000;

const P_TABLE_LEN: usize = 0x48;

const TEST_PATTERN_RUN_LEN: usize = 0x200;
const TEST_PATTERN_LEN: usize = TEST_PATTERN_RUN_LEN * 8 - 1;

/// Writes the card bus test patterns stored at 0x3000.
///
/// The final 0xAA run is one byte short, so the region ends at 0x3FFE.
fn write_test_patterns(f: &dyn RandomAccessFile, pos: usize) -> Result<(), Error> {
    if pos + TEST_PATTERN_LEN > f.len() {
        return make_error(Error::OutOfBound);
    }

    let mut ramps = vec![0xFF, 0x00, 0xFF, 0x00, 0xAA, 0x55, 0xAA, 0x55];
    ramps.extend((8..TEST_PATTERN_RUN_LEN).map(|i| (i & 0xFF) as u8));
    ramps.extend((0..TEST_PATTERN_RUN_LEN).map(|i| 0xFF - (i & 0xFF) as u8));
    f.write(pos, &ramps)?;

    let mut pos = pos + ramps.len();
    for value in &[0x00, 0xFF, 0x0F, 0xF0, 0x55] {
        fill(f, pos, TEST_PATTERN_RUN_LEN, *value)?;
        pos += TEST_PATTERN_RUN_LEN;
    }
    fill(f, pos, TEST_PATTERN_RUN_LEN - 1, 0xAA)
}

/// A complete GCD image.
pub struct GcdRom {
    pub header: GcdHeader,
    pub encrypted_arm9: Vec<u8>,
    pub encrypted_arm7: Vec<u8>,
}

impl GcdRom {
    fn payload_end(info: &PayloadInfo, data: &[u8]) -> Result<usize, Error> {
        if data.len() != info.padded_size as usize {
            return make_error(Error::InvalidLayout("payload length differs from padded size"));
        }
        if (info.rom_offset as usize) < PAYLOAD_OFFSET {
            return make_error(Error::InvalidLayout("payload overlaps the header area"));
        }
        Ok(info.rom_offset as usize + data.len())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let arm9_end = GcdRom::payload_end(&self.header.arm9, &self.encrypted_arm9)?;
        let arm7_end = GcdRom::payload_end(&self.header.arm7, &self.encrypted_arm7)?;
        let len = arm9_end.max(arm7_end);

        let image = MemoryFile::zeroed(len);
        image.write(0, &self.header.to_bytes())?;

        let key_table = transformed_key_table(self.header.game_code)?;
        image.write(P_TABLE_OFFSET, &key_table[0..P_TABLE_LEN])?;
        image.write(S_BOXES_OFFSET, &key_table[P_TABLE_LEN..KEY_TABLE_LEN])?;

        write_test_patterns(&image, TEST_PATTERN_OFFSET)?;

        image.write(self.header.arm9.rom_offset as usize, &self.encrypted_arm9)?;
        image.write(self.header.arm7.rom_offset as usize, &self.encrypted_arm7)?;

        log::info!("GCD image: {} bytes", len);
        Ok(image.into_inner())
    }

    pub fn write<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(&self.to_bytes()?)?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the image to a new file at `path`.
    ///
    /// The image is assembled before the file is created, so a layout error leaves nothing behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let bytes = self.to_bytes()?;
        let mut writer = BufWriter::new(std::fs::File::create(path)?);
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }
}
