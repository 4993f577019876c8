use crate::error::*;

pub const BLOCK_LEN: usize = 8;
pub const KEY_TABLE_LEN: usize = 0x1048;
pub const P_TABLE_ENTRY_COUNT: usize = 18;
pub const S_BOX_COUNT: usize = 4;
pub const S_BOX_ENTRY_COUNT: usize = 256;

const ROUNDS: usize = 16;
const S_BOX_OFFSET: usize = P_TABLE_ENTRY_COUNT * 4;

/// The permutation table and substitution boxes driving `Blowfish`.
#[derive(Clone)]
pub struct KeySchedule {
    p_table: [u32; P_TABLE_ENTRY_COUNT],
    s_boxes: [[u32; S_BOX_ENTRY_COUNT]; S_BOX_COUNT],
}

fn read_words(bytes: &[u8], out: &mut [u32]) {
    for (word, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

impl KeySchedule {
    pub fn new(p_table: &[u32], s_boxes: &[&[u32]]) -> Result<KeySchedule, Error> {
        if p_table.len() != P_TABLE_ENTRY_COUNT {
            return make_error(Error::InvalidKeySchedule("p table should have 18 entries"));
        }
        if s_boxes.len() != S_BOX_COUNT {
            return make_error(Error::InvalidKeySchedule("there should be 4 s boxes"));
        }
        if s_boxes.iter().any(|s_box| s_box.len() != S_BOX_ENTRY_COUNT) {
            return make_error(Error::InvalidKeySchedule("s boxes should have 256 entries"));
        }

        let mut schedule = KeySchedule {
            p_table: [0; P_TABLE_ENTRY_COUNT],
            s_boxes: [[0; S_BOX_ENTRY_COUNT]; S_BOX_COUNT],
        };
        schedule.p_table.copy_from_slice(p_table);
        for (dst, src) in schedule.s_boxes.iter_mut().zip(s_boxes) {
            dst.copy_from_slice(src);
        }
        Ok(schedule)
    }

    /// Slices a raw key table: 18 little-endian P words followed by the four s boxes.
    pub fn from_bytes(key_table: &[u8]) -> Result<KeySchedule, Error> {
        if key_table.len() < KEY_TABLE_LEN {
            return make_error(Error::InvalidKeySchedule("key table is too short"));
        }

        let mut schedule = KeySchedule {
            p_table: [0; P_TABLE_ENTRY_COUNT],
            s_boxes: [[0; S_BOX_ENTRY_COUNT]; S_BOX_COUNT],
        };
        read_words(&key_table[0..S_BOX_OFFSET], &mut schedule.p_table);
        for (i, s_box) in schedule.s_boxes.iter_mut().enumerate() {
            let begin = S_BOX_OFFSET + i * S_BOX_ENTRY_COUNT * 4;
            read_words(&key_table[begin..begin + S_BOX_ENTRY_COUNT * 4], s_box);
        }
        Ok(schedule)
    }

    pub fn p_table(&self) -> &[u32; P_TABLE_ENTRY_COUNT] {
        &self.p_table
    }

    pub fn s_boxes(&self) -> &[[u32; S_BOX_ENTRY_COUNT]; S_BOX_COUNT] {
        &self.s_boxes
    }
}

/// The Blowfish variant used by the DS card protocol.
///
/// The key schedule is used as-is; there is no key expansion step.
/// Blocks are read from and written to buffers as little-endian `u64`.
pub struct Blowfish {
    schedule: KeySchedule,
}

impl Blowfish {
    pub fn new(schedule: KeySchedule) -> Blowfish {
        Blowfish { schedule }
    }

    pub fn from_key_table(key_table: &[u8]) -> Result<Blowfish, Error> {
        Ok(Blowfish::new(KeySchedule::from_bytes(key_table)?))
    }

    fn round(&self, i: usize, x: u32, y: u32) -> (u32, u32) {
        let s = &self.schedule.s_boxes;
        let z = self.schedule.p_table[i] ^ x;
        let a = s[0][(z >> 24) as usize & 0xFF];
        let b = s[1][(z >> 16) as usize & 0xFF];
        let c = s[2][(z >> 8) as usize & 0xFF];
        let d = s[3][z as usize & 0xFF];
        (d.wrapping_add(c ^ b.wrapping_add(a)) ^ y, z)
    }

    pub fn encrypt_block(&self, value: u64) -> u64 {
        let mut y = value as u32;
        let mut x = (value >> 32) as u32;
        for i in 0..ROUNDS {
            let (new_x, new_y) = self.round(i, x, y);
            x = new_x;
            y = new_y;
        }
        let p = &self.schedule.p_table;
        u64::from(x ^ p[16]) | u64::from(y ^ p[17]) << 32
    }

    pub fn decrypt_block(&self, value: u64) -> u64 {
        let mut y = value as u32;
        let mut x = (value >> 32) as u32;
        for i in (2..=ROUNDS + 1).rev() {
            let (new_x, new_y) = self.round(i, x, y);
            x = new_x;
            y = new_y;
        }
        let p = &self.schedule.p_table;
        u64::from(x ^ p[1]) | u64::from(y ^ p[0]) << 32
    }

    /// Encrypts `data` in place. The length must be a multiple of 8.
    pub fn encrypt(&self, data: &mut [u8]) -> Result<(), Error> {
        if data.len() % BLOCK_LEN != 0 {
            return make_error(Error::SizeMismatch);
        }
        for block in data.chunks_exact_mut(BLOCK_LEN) {
            let mut value = [0; BLOCK_LEN];
            value.copy_from_slice(block);
            let value = self.encrypt_block(u64::from_le_bytes(value));
            block.copy_from_slice(&value.to_le_bytes());
        }
        Ok(())
    }

    /// Decrypts `data` in place. The length must be a multiple of 8.
    pub fn decrypt(&self, data: &mut [u8]) -> Result<(), Error> {
        if data.len() % BLOCK_LEN != 0 {
            return make_error(Error::SizeMismatch);
        }
        for block in data.chunks_exact_mut(BLOCK_LEN) {
            let mut value = [0; BLOCK_LEN];
            value.copy_from_slice(block);
            let value = self.decrypt_block(u64::from_le_bytes(value));
            block.copy_from_slice(&value.to_le_bytes());
        }
        Ok(())
    }

    /// Decrypts `src` into the front of `dst`, which must be at least as long as `src`.
    pub fn decrypt_to(&self, src: &[u8], dst: &mut [u8]) -> Result<(), Error> {
        if src.len() % BLOCK_LEN != 0 || dst.len() < src.len() {
            return make_error(Error::SizeMismatch);
        }
        dst[0..src.len()].copy_from_slice(src);
        self.decrypt(&mut dst[0..src.len()])
    }
}
