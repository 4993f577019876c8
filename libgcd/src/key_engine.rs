//! Emulates the DSi AES key scrambler engine.

const SCRAMBLER: u128 = 0xFFFE_FB4E_2959_0258_2A68_0F5F_1A4F_3E79;
const SCRAMBLER_ROL: u32 = 42;

/// Key X used for the ARM9/ARM7 binaries of a GCD image: "Nintendo DS\0" followed by 01 23 21 00.
pub const GCD_KEY_X: [u8; 16] = [
    0x4E, 0x69, 0x6E, 0x74, 0x65, 0x6E, 0x64, 0x6F, 0x20, 0x44, 0x53, 0x00, 0x01, 0x23, 0x21, 0x00,
];

pub fn scramble(x: u128, y: u128) -> u128 {
    (x ^ y).wrapping_add(SCRAMBLER).rotate_left(SCRAMBLER_ROL)
}

/// Same as `scramble`, with keys stored as little-endian bytes.
pub fn scramble_bytes(x: [u8; 16], y: [u8; 16]) -> [u8; 16] {
    scramble(u128::from_le_bytes(x), u128::from_le_bytes(y)).to_le_bytes()
}
