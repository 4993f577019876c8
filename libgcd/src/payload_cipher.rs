use crate::error::*;
use crate::key_engine::*;
use crate::misc::swap_blocks;
use aes::Aes128;
use ctr::cipher::generic_array::GenericArray;
use ctr::cipher::{KeyIvInit, StreamCipher};

pub const AES_BLOCK_SIZE: usize = 16;

type Aes128Ctr = ctr::Ctr128BE<Aes128>;

/// Builds the counter for a payload of `len` bytes: len, -len, !len, 0 as little-endian words.
fn make_ctr(len: u32) -> [u8; 16] {
    let mut ctr = [0; 16];
    ctr[0..4].copy_from_slice(&len.to_le_bytes());
    ctr[4..8].copy_from_slice(&len.wrapping_neg().to_le_bytes());
    ctr[8..12].copy_from_slice(&(!len).to_le_bytes());
    ctr
}

/// Encrypts an ARM9/ARM7 binary in place with AES-128-CTR the way the DSi AES engine sees it.
///
/// The engine works on byte-reversed 16-byte blocks, so the data is swapped
/// before and after the CTR pass, and the key and counter are reversed.
/// `data.len()` must be a multiple of 16.
pub fn encrypt(data: &mut [u8], key_y: &[u8; 16]) -> Result<(), Error> {
    if data.len() % AES_BLOCK_SIZE != 0 {
        return make_error(Error::SizeMismatch);
    }
    let len = match u32::try_from(data.len()) {
        Ok(len) => len,
        Err(_) => return make_error(Error::SizeMismatch),
    };

    let mut key = scramble_bytes(GCD_KEY_X, *key_y);
    key.reverse();
    let mut ctr = make_ctr(len);
    ctr.reverse();

    swap_blocks(data, AES_BLOCK_SIZE);
    let mut aes = Aes128Ctr::new(GenericArray::from_slice(&key), GenericArray::from_slice(&ctr));
    aes.apply_keystream(data);
    swap_blocks(data, AES_BLOCK_SIZE);
    Ok(())
}

/// Reverses `encrypt`. The transform is an involution, so this is the same operation.
pub fn decrypt(data: &mut [u8], key_y: &[u8; 16]) -> Result<(), Error> {
    encrypt(data, key_y)
}

#[cfg(test)]
mod test {
    use crate::payload_cipher::*;
    use rand::prelude::*;
    use sha1::{Digest, Sha1};

    #[test]
    fn ctr_layout() {
        let ctr = make_ctr(0x200);
        assert_eq!(
            ctr,
            [
                0x00, 0x02, 0x00, 0x00, 0x00, 0xFE, 0xFF, 0xFF, 0xFF, 0xFD, 0xFF, 0xFF, 0x00, 0x00,
                0x00, 0x00
            ]
        );
    }

    #[test]
    fn known_answer() {
        let mut data = [0; 32];
        encrypt(&mut data, &[0; 16]).unwrap();
        assert_eq!(
            data,
            [
                0x8D, 0xC3, 0xD1, 0x1E, 0xE7, 0xAA, 0xBE, 0x87, 0x1A, 0xA8, 0x38, 0x69, 0xE4, 0x16,
                0x38, 0xA7, 0x0D, 0x53, 0x9B, 0x05, 0x75, 0x55, 0x3B, 0x05, 0x9C, 0x34, 0xBE, 0xA5,
                0x78, 0x04, 0x48, 0x89
            ]
        );

        let mut data = vec![0; 512];
        encrypt(&mut data, &[0; 16]).unwrap();
        assert_eq!(
            Sha1::digest(&data)[..],
            [
                0x1E, 0xEB, 0xD1, 0x2C, 0xD3, 0x67, 0x5D, 0x7E, 0x8B, 0x18, 0x67, 0x4B, 0xA2, 0x31,
                0x98, 0x88, 0x56, 0xDD, 0x8E, 0xF2
            ]
        );
    }

    #[test]
    fn round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..10 {
            let len = rng.gen_range(0..200) * AES_BLOCK_SIZE;
            let plain: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let key_y: [u8; 16] = rng.gen();

            let mut data = plain.clone();
            encrypt(&mut data, &key_y).unwrap();
            if len != 0 {
                assert_ne!(data, plain);
            }
            decrypt(&mut data, &key_y).unwrap();
            assert_eq!(data, plain);
        }
    }

    #[test]
    fn key_y_matters() {
        let mut a = [0; 64];
        let mut b = [0; 64];
        encrypt(&mut a, &[0; 16]).unwrap();
        encrypt(&mut b, &[1; 16]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn unaligned() {
        let mut data = [0; 17];
        assert!(encrypt(&mut data, &[0; 16]).is_err());
    }
}
