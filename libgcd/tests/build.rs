use libgcd::elf::Segment;
use libgcd::error::Error;
use libgcd::header::*;
use libgcd::payload_cipher;
use libgcd::signature::*;
use libgcd::wram_json::parse_wram_config;
use libgcd::GcdBuilder;
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha1::{Digest, Sha1};
use std::io::Read;

const WRAM_JSON: &str = r#"{
    "wramA": {
        "arm9": { "start": "0x03000000", "length": "0x40000", "slots": "all" },
        "blocks": [ {}, { "slot": 1 }, { "slot": 2 }, { "slot": 3 } ]
    },
    "wramB": {
        "arm7": { "start": "0x03740000", "length": "0x40000", "slots": "all" },
        "blocks": [
            { "master": "arm7" }, { "master": "arm7", "slot": 1 },
            { "master": "arm7", "slot": 2 }, { "master": "arm7", "slot": 3 },
            { "master": "arm7", "slot": 4 }, { "master": "arm7", "slot": 5 },
            { "master": "arm7", "slot": 6 }, { "master": "arm7", "slot": 7 }
        ]
    },
    "wramC": {
        "blocks": [ {}, {}, {}, {}, {}, {}, {}, {} ]
    },
    "ntrWram": [ "arm9", "arm9" ],
    "vramC": 0,
    "vramD": 0
}"#;

struct SimpleSigner {}
impl Signer for SimpleSigner {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, Error> {
        let mut signed = data.to_vec();
        signed.resize(SIGNATURE_SIGNED_LEN, 0);
        Ok(signed)
    }
}

fn arm9_segments() -> Vec<Segment> {
    vec![
        Segment {
            physical_address: 0x0300_0000,
            data: (0..0x300).map(|i| i as u8).collect(),
        },
        Segment {
            physical_address: 0x0300_0300,
            data: vec![0xE1; 0x40],
        },
    ]
}

fn arm7_segments() -> Vec<Segment> {
    vec![Segment {
        physical_address: 0x037F_8000,
        data: vec![0x12; 0x200],
    }]
}

fn builder() -> GcdBuilder {
    GcdBuilder::new(
        "TEST",
        arm9_segments(),
        arm7_segments(),
        parse_wram_config(WRAM_JSON).unwrap(),
    )
}

#[test]
fn build_test_title() {
    let rom = builder().build(&SimpleSigner {}).unwrap();
    let bytes = rom.to_bytes().unwrap();

    assert_eq!(&bytes[0x0C..0x10], b"TEST");
    assert_eq!(rom.header.arm9.rom_offset, 0x4000);
    assert_eq!(rom.header.arm9.size, 0x340);
    assert_eq!(rom.header.arm9.padded_size, 0x400);
    assert_eq!(rom.header.arm9.load_address, 0x0300_0000);
    assert_eq!(rom.header.arm7.rom_offset, 0x4400);
    assert_eq!(rom.header.arm7.size, 0x200);
    assert_eq!(rom.header.arm7.padded_size, 0x200);
    assert_eq!(rom.header.arm7.load_address, 0x037F_8000);
    assert_eq!(bytes[0xFF], GcdHeaderFlags::ARM9_SPEED_134MHZ.bits());
    assert_eq!(bytes.len(), 0x4600);

    let mut header = [0; HEADER_LEN];
    header.copy_from_slice(&bytes[0..HEADER_LEN]);
    let signature = &bytes[0x100..0x100 + SIGNATURE_LEN];
    assert_eq!(&signature[0..0x10], &[0; 16]);
    assert_eq!(&signature[0x10..0x24], &header_sha1(&header)[..]);

    let mut arm9 = bytes[0x4000..0x4400].to_vec();
    payload_cipher::decrypt(&mut arm9, &[0; 16]).unwrap();
    let mut expected: Vec<u8> = (0..0x300).map(|i| i as u8).collect();
    expected.extend_from_slice(&[0xE1; 0x40]);
    assert_eq!(&arm9[0..0x340], &expected[..]);
    assert_eq!(&signature[0x24..0x38], &Sha1::digest(&expected)[..]);

    let mut arm7 = bytes[0x4400..].to_vec();
    payload_cipher::decrypt(&mut arm7, &[0; 16]).unwrap();
    assert_eq!(arm7, vec![0x12; 0x200]);

    // WRAM A mapped for ARM9 over its whole range
    assert_eq!(bytes[0x180], 0x80);
    assert_eq!(bytes[0x181], 0x84);
    assert_eq!(&bytes[0x194..0x198], &0x0040_3000u32.to_le_bytes());
}

#[test]
fn build_is_reproducible() {
    let a = builder().build(&SimpleSigner {}).unwrap().to_bytes().unwrap();
    let b = builder().build(&SimpleSigner {}).unwrap().to_bytes().unwrap();
    assert_eq!(a, b);

    let c = builder()
        .with_key_y([0x42; 16])
        .build(&SimpleSigner {})
        .unwrap()
        .to_bytes()
        .unwrap();
    assert_ne!(a[0x4000..], c[0x4000..]);
    assert_eq!(&c[0x100..0x110], &[0x42; 16]);
}

#[test]
fn options() {
    let rom = builder()
        .with_arm9_speed_67mhz(true)
        .with_rom_control(0x1234_5678, 0x9ABC_DEF0)
        .with_secure_area_delay(100)
        .build(&SimpleSigner {})
        .unwrap();
    let bytes = rom.to_bytes().unwrap();
    assert_eq!(bytes[0xFF], 0);
    assert_eq!(&bytes[0x60..0x64], &0x1234_5678u32.to_le_bytes());
    assert_eq!(&bytes[0x64..0x68], &0x9ABC_DEF0u32.to_le_bytes());
    assert_eq!(&bytes[0x6E..0x70], &100u16.to_le_bytes());
}

#[test]
fn rejects_bad_input() {
    let wram = parse_wram_config(WRAM_JSON).unwrap();

    let bad_code = GcdBuilder::new("TES", arm9_segments(), arm7_segments(), wram.clone());
    assert!(matches!(
        bad_code.build(&SimpleSigner {}),
        Err(Error::InvalidGameCode)
    ));

    let mut main_memory = arm7_segments();
    main_memory[0].physical_address = 0x0238_0000;
    let bad_arm7 = GcdBuilder::new("TEST", arm9_segments(), main_memory, wram.clone());
    assert!(matches!(
        bad_arm7.build(&SimpleSigner {}),
        Err(Error::InvalidLoadAddress {
            address: 0x0238_0000
        })
    ));

    let empty = GcdBuilder::new("TEST", vec![], arm7_segments(), wram);
    assert!(matches!(
        empty.build(&SimpleSigner {}),
        Err(Error::NoLoadSegment)
    ));
}

#[test]
fn rsa_signed_file() {
    let key = RsaPrivateKey::new(&mut rand::thread_rng(), 1024).unwrap();
    let der = key.to_pkcs1_der().unwrap();
    let signer = RsaSigner::from_der(der.as_bytes()).unwrap();

    let rom = builder().build(&signer).unwrap();
    let mut file = tempfile::tempfile().unwrap();
    rom.write(&mut file).unwrap();

    use std::io::{Seek, SeekFrom};
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut bytes = vec![];
    file.read_to_end(&mut bytes).unwrap();
    assert_eq!(bytes, rom.to_bytes().unwrap());

    let signature = GcdSignature {
        aes_key_y: [0; 16],
        header_sha1: rom.header.sha1_hash(),
        arm9_sha1: sha1(&arm9_segments().concat_data()),
        arm7_sha1: sha1(&arm7_segments().concat_data()),
    };
    key.to_public_key()
        .verify(
            Pkcs1v15Sign::new_unprefixed(),
            &signature.to_bytes(),
            &bytes[0x100..0x180],
        )
        .unwrap();
}

fn sha1(data: &[u8]) -> [u8; 20] {
    let mut hash = [0; 20];
    hash.copy_from_slice(&Sha1::digest(data));
    hash
}

trait ConcatData {
    fn concat_data(&self) -> Vec<u8>;
}

impl ConcatData for Vec<Segment> {
    fn concat_data(&self) -> Vec<u8> {
        self.iter().flat_map(|s| s.data.iter().cloned()).collect()
    }
}

#[test]
fn elf_input() {
    let mut elf = vec![0x7F, b'E', b'L', b'F', 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    for half in &[2u16, 40] {
        elf.extend_from_slice(&half.to_le_bytes());
    }
    for word in &[1u32, 0x0300_0000, 52, 0, 0] {
        elf.extend_from_slice(&word.to_le_bytes());
    }
    for half in &[52u16, 32, 1, 40, 0, 0] {
        elf.extend_from_slice(&half.to_le_bytes());
    }
    for word in &[1u32, 84, 0x0300_0000, 0x0300_0000, 16, 16, 7, 4] {
        elf.extend_from_slice(&word.to_le_bytes());
    }
    elf.extend_from_slice(&[0xAB; 16]);

    let rom = GcdBuilder::from_elf("####", &elf, &elf, parse_wram_config(WRAM_JSON).unwrap())
        .unwrap()
        .build(&SimpleSigner {})
        .unwrap();
    assert_eq!(rom.header.game_code, 0x2323_2323);
    assert_eq!(rom.header.arm9.size, 16);
    assert_eq!(rom.header.arm9.padded_size, 512);
    assert_eq!(rom.header.arm7.rom_offset, 0x4200);

    assert!(GcdBuilder::from_elf("####", &[0; 8], &elf, parse_wram_config(WRAM_JSON).unwrap()).is_err());
}
