use crate::error::*;
use goblin::elf::program_header::PT_LOAD;
use goblin::elf::Elf;

/// A loadable segment of an executable: where it goes and what goes there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub physical_address: u32,
    pub data: Vec<u8>,
}

fn elf_error<T>(message: &str) -> Result<T, Error> {
    make_error(Error::Elf(message.to_owned()))
}

/// Extracts the `PT_LOAD` segments that carry file data, in program header order.
pub fn load_segments(elf_data: &[u8]) -> Result<Vec<Segment>, Error> {
    let elf = match Elf::parse(elf_data) {
        Ok(elf) => elf,
        Err(e) => return elf_error(&e.to_string()),
    };

    let mut segments = vec![];
    for header in elf.program_headers.iter() {
        if header.p_type != PT_LOAD || header.p_filesz == 0 {
            continue;
        }

        let begin = usize::try_from(header.p_offset).ok();
        let len = usize::try_from(header.p_filesz).ok();
        let data = match (begin, len) {
            (Some(begin), Some(len)) => begin
                .checked_add(len)
                .and_then(|end| elf_data.get(begin..end)),
            _ => None,
        };
        let data = match data {
            Some(data) => data,
            None => return elf_error("segment data out of range"),
        };

        let physical_address = match u32::try_from(header.p_paddr) {
            Ok(address) => address,
            Err(_) => return elf_error("segment address out of range"),
        };

        segments.push(Segment {
            physical_address,
            data: data.to_vec(),
        });
    }

    log::debug!("found {} loadable segments", segments.len());
    Ok(segments)
}

#[cfg(test)]
pub(crate) mod test {
    use crate::elf::*;

    const PT_NOTE: u32 = 4;

    /// Builds a little-endian ARM ELF32 file with the given (type, physical address, data) segments.
    pub(crate) fn build_elf32(segments: &[(u32, u32, &[u8])]) -> Vec<u8> {
        let ph_offset = 52;
        let data_offset = ph_offset + 32 * segments.len();
        let mut elf = vec![0x7F, b'E', b'L', b'F', 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        elf.extend_from_slice(&2u16.to_le_bytes()); // e_type
        elf.extend_from_slice(&40u16.to_le_bytes()); // e_machine
        elf.extend_from_slice(&1u32.to_le_bytes()); // e_version
        elf.extend_from_slice(&segments.first().map_or(0, |s| s.1).to_le_bytes()); // e_entry
        elf.extend_from_slice(&(ph_offset as u32).to_le_bytes()); // e_phoff
        elf.extend_from_slice(&0u32.to_le_bytes()); // e_shoff
        elf.extend_from_slice(&0u32.to_le_bytes()); // e_flags
        elf.extend_from_slice(&52u16.to_le_bytes()); // e_ehsize
        elf.extend_from_slice(&32u16.to_le_bytes()); // e_phentsize
        elf.extend_from_slice(&(segments.len() as u16).to_le_bytes()); // e_phnum
        elf.extend_from_slice(&40u16.to_le_bytes()); // e_shentsize
        elf.extend_from_slice(&0u16.to_le_bytes()); // e_shnum
        elf.extend_from_slice(&0u16.to_le_bytes()); // e_shstrndx
        assert_eq!(elf.len(), ph_offset);

        let mut offset = data_offset;
        for (p_type, address, data) in segments {
            let len = data.len() as u32;
            for field in &[*p_type, offset as u32, *address, *address, len, len, 7, 4] {
                elf.extend_from_slice(&field.to_le_bytes());
            }
            offset += data.len();
        }
        for (_, _, data) in segments {
            elf.extend_from_slice(data);
        }
        elf
    }

    #[test]
    fn load_segments_in_order() {
        let elf = build_elf32(&[
            (PT_LOAD, 0x0300_0000, &[1u8, 2, 3][..]),
            (PT_NOTE, 0x0200_0000, &[9u8, 9][..]),
            (PT_LOAD, 0x0300_1000, &[0u8; 0][..]),
            (PT_LOAD, 0x0300_2000, &[4u8, 5][..]),
        ]);
        let segments = load_segments(&elf).unwrap();
        assert_eq!(
            segments,
            vec![
                Segment {
                    physical_address: 0x0300_0000,
                    data: vec![1, 2, 3]
                },
                Segment {
                    physical_address: 0x0300_2000,
                    data: vec![4, 5]
                },
            ]
        );
    }

    #[test]
    fn truncated() {
        let mut elf = build_elf32(&[(PT_LOAD, 0x0300_0000, &[1u8, 2, 3, 4][..])]);
        elf.truncate(elf.len() - 2);
        assert!(load_segments(&elf).is_err());
    }

    #[test]
    fn not_elf() {
        assert!(load_segments(&[0; 64]).is_err());
    }
}
