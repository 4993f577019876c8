pub fn align_up(value: usize, align: usize) -> usize {
    value + (align - value % align) % align
}

/// Reverses the byte order inside every `block_len` sized chunk of `data`.
pub fn swap_blocks(data: &mut [u8], block_len: usize) {
    for block in data.chunks_exact_mut(block_len) {
        block.reverse();
    }
}

#[cfg(test)]
mod test {
    use crate::misc::*;

    #[test]
    fn align() {
        assert_eq!(align_up(0, 512), 0);
        assert_eq!(align_up(1, 512), 512);
        assert_eq!(align_up(512, 512), 512);
        assert_eq!(align_up(513, 512), 1024);
    }

    #[test]
    fn swap() {
        let mut data: Vec<u8> = (0..32).collect();
        swap_blocks(&mut data, 16);
        assert_eq!(data[0], 15);
        assert_eq!(data[15], 0);
        assert_eq!(data[16], 31);
        assert_eq!(data[31], 16);
        swap_blocks(&mut data, 16);
        assert_eq!(data, (0..32).collect::<Vec<u8>>());
    }
}
