//! Initial WRAM/VRAM configuration applied by the boot ROM before starting a GCD image.

use crate::error::*;
use byte_struct::*;

pub const WRAM_START_ADDRESS: u32 = 0x0300_0000;
pub const WRAM_END_ADDRESS: u32 = 0x0400_0000;
pub const WRAM_A_BLOCK_COUNT: usize = 4;
pub const WRAM_BC_BLOCK_COUNT: usize = 8;

/// Master of a block in one of the TWL WRAM banks.
pub trait BlockMaster: Copy + Default {
    /// Mask applied to the master field when packed.
    const MASTER_MASK: u8;
    /// Number of slots a block can be mapped to.
    const SLOT_COUNT: u8;
    fn bits(self) -> u8;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WramAMaster {
    #[default]
    Arm9 = 0,
    Arm7 = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WramBMaster {
    #[default]
    Arm9 = 0,
    Arm7 = 1,
    DspCode = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WramCMaster {
    #[default]
    Arm9 = 0,
    Arm7 = 1,
    DspData = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NtrWramMaster {
    #[default]
    Arm9 = 0,
    Arm7 = 1,
}

impl BlockMaster for WramAMaster {
    const MASTER_MASK: u8 = 1;
    const SLOT_COUNT: u8 = WRAM_A_BLOCK_COUNT as u8;
    fn bits(self) -> u8 {
        self as u8
    }
}

impl BlockMaster for WramBMaster {
    const MASTER_MASK: u8 = 3;
    const SLOT_COUNT: u8 = WRAM_BC_BLOCK_COUNT as u8;
    fn bits(self) -> u8 {
        self as u8
    }
}

impl BlockMaster for WramCMaster {
    const MASTER_MASK: u8 = 3;
    const SLOT_COUNT: u8 = WRAM_BC_BLOCK_COUNT as u8;
    fn bits(self) -> u8 {
        self as u8
    }
}

/// Which processor owns a WRAM block and at which slot it appears.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BlockMapping<M: BlockMaster> {
    master: M,
    slot: u8,
    enable: bool,
}

pub type WramABlockMapping = BlockMapping<WramAMaster>;
pub type WramBBlockMapping = BlockMapping<WramBMaster>;
pub type WramCBlockMapping = BlockMapping<WramCMaster>;

impl<M: BlockMaster> BlockMapping<M> {
    pub fn new(master: M, slot: u8, enable: bool) -> Result<BlockMapping<M>, Error> {
        if slot >= M::SLOT_COUNT {
            return make_error(Error::InvalidWramConfig(format!(
                "invalid slot {} for block mapping",
                slot
            )));
        }
        Ok(BlockMapping {
            master,
            slot,
            enable,
        })
    }

    pub fn master(&self) -> M {
        self.master
    }

    pub fn slot(&self) -> u8 {
        self.slot
    }

    pub fn enable(&self) -> bool {
        self.enable
    }

    pub fn to_byte(&self) -> u8 {
        let slot_mask = M::SLOT_COUNT - 1;
        (self.master.bits() & M::MASTER_MASK)
            | (self.slot & slot_mask) << 2
            | if self.enable { 0x80 } else { 0 }
    }
}

/// Set of slots mirrored in a WRAM region mapping, along with the granularity of the bank.
pub trait MappedSlots: Copy + Default {
    /// log2 of the region granularity.
    const UNIT_SHIFT: u32;
    const START_SHIFT: u32;
    const END_SHIFT: u32;
    fn bits(self) -> u32;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WramAMappedSlots {
    /// 64 KiB mirrors
    #[default]
    Slot0 = 0,
    /// 128 KiB mirrors
    Slot01 = 2,
    /// 256 KiB mirrors
    All = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WramBCMappedSlots {
    /// 32 KiB mirrors
    #[default]
    Slot0 = 0,
    /// 64 KiB mirrors
    Slot01 = 1,
    /// 128 KiB mirrors
    Slot0123 = 2,
    /// 256 KiB mirrors
    All = 3,
}

impl MappedSlots for WramAMappedSlots {
    const UNIT_SHIFT: u32 = 16;
    const START_SHIFT: u32 = 4;
    const END_SHIFT: u32 = 20;
    fn bits(self) -> u32 {
        self as u32
    }
}

impl MappedSlots for WramBCMappedSlots {
    const UNIT_SHIFT: u32 = 15;
    const START_SHIFT: u32 = 3;
    const END_SHIFT: u32 = 19;
    fn bits(self) -> u32 {
        self as u32
    }
}

/// Address range where a WRAM bank appears for one processor.
///
/// Start and end are kept as offsets from `WRAM_START_ADDRESS` in units of
/// the bank granularity (64 KiB for WRAM A, 32 KiB for WRAM B and C).
/// The default value is the unmapped state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RegionMapping<S: MappedSlots> {
    start_offset: u32,
    end_offset: u32,
    mapped_slots: S,
}

pub type WramAMapping = RegionMapping<WramAMappedSlots>;
pub type WramBCMapping = RegionMapping<WramBCMappedSlots>;

impl<S: MappedSlots> RegionMapping<S> {
    pub fn new(start_address: u32, length: u32, mapped_slots: S) -> Result<RegionMapping<S>, Error> {
        let unit_mask = (1 << S::UNIT_SHIFT) - 1;
        if start_address < WRAM_START_ADDRESS {
            return make_error(Error::InvalidWramConfig(format!(
                "start address (0x{:08X}) must be at least 0x{:08X}",
                start_address, WRAM_START_ADDRESS
            )));
        }
        if start_address & unit_mask != 0 {
            return make_error(Error::InvalidWramConfig(format!(
                "start address must be a multiple of {} kB",
                1 << (S::UNIT_SHIFT - 10)
            )));
        }
        if length & unit_mask != 0 {
            return make_error(Error::InvalidWramConfig(format!(
                "length must be a multiple of {} kB",
                1 << (S::UNIT_SHIFT - 10)
            )));
        }
        let end_address = match start_address.checked_add(length) {
            Some(end) if end <= WRAM_END_ADDRESS => end,
            _ => {
                return make_error(Error::InvalidWramConfig(format!(
                    "length is too large, end address must be at most 0x{:08X}",
                    WRAM_END_ADDRESS
                )))
            }
        };

        Ok(RegionMapping {
            start_offset: (start_address - WRAM_START_ADDRESS) >> S::UNIT_SHIFT,
            end_offset: (end_address - WRAM_START_ADDRESS) >> S::UNIT_SHIFT,
            mapped_slots,
        })
    }

    pub fn unmapped() -> RegionMapping<S> {
        RegionMapping::default()
    }

    pub fn start_address(&self) -> u32 {
        WRAM_START_ADDRESS + (self.start_offset << S::UNIT_SHIFT)
    }

    pub fn end_address(&self) -> u32 {
        WRAM_START_ADDRESS + (self.end_offset << S::UNIT_SHIFT)
    }

    pub fn mapped_slots(&self) -> S {
        self.mapped_slots
    }

    pub fn to_word(&self) -> u32 {
        self.start_offset << S::START_SHIFT
            | self.mapped_slots.bits() << 12
            | self.end_offset << S::END_SHIFT
    }
}

/// Packed form of `WramConfig` as stored at header offset 0x180.
#[derive(ByteStruct, Clone, Debug, PartialEq)]
#[byte_struct_le]
pub struct WramConfigLayout {
    pub wram_a_blocks: [u8; 4],
    pub wram_b_blocks: [u8; 8],
    pub wram_c_blocks: [u8; 8],
    pub arm9_wram_a: u32,
    pub arm9_wram_b: u32,
    pub arm9_wram_c: u32,
    pub arm7_wram_a: u32,
    pub arm7_wram_b: u32,
    pub arm7_wram_c: u32,
    pub wram_a_locks: u8,
    pub wram_b_locks: u8,
    pub wram_c_locks: u8,
    pub ntr_wram_vram: u8,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct WramConfig {
    pub wram_a_blocks: [WramABlockMapping; WRAM_A_BLOCK_COUNT],
    pub wram_b_blocks: [WramBBlockMapping; WRAM_BC_BLOCK_COUNT],
    pub wram_c_blocks: [WramCBlockMapping; WRAM_BC_BLOCK_COUNT],
    pub arm9_wram_a: WramAMapping,
    pub arm9_wram_b: WramBCMapping,
    pub arm9_wram_c: WramBCMapping,
    pub arm7_wram_a: WramAMapping,
    pub arm7_wram_b: WramBCMapping,
    pub arm7_wram_c: WramBCMapping,
    pub wram_a_locked: [bool; WRAM_A_BLOCK_COUNT],
    pub wram_b_locked: [bool; WRAM_BC_BLOCK_COUNT],
    pub wram_c_locked: [bool; WRAM_BC_BLOCK_COUNT],
    pub ntr_wram: [NtrWramMaster; 2],
    pub vram_c: u8,
    pub vram_d: u8,
}

fn lock_mask(locks: &[bool]) -> u8 {
    locks
        .iter()
        .enumerate()
        .filter(|(_, locked)| **locked)
        .fold(0, |mask, (i, _)| mask | 1 << i)
}

fn block_bytes<M: BlockMaster, const N: usize>(blocks: &[BlockMapping<M>; N]) -> [u8; N] {
    let mut bytes = [0; N];
    for (byte, block) in bytes.iter_mut().zip(blocks.iter()) {
        *byte = block.to_byte();
    }
    bytes
}

impl WramConfig {
    pub fn to_layout(&self) -> WramConfigLayout {
        WramConfigLayout {
            wram_a_blocks: block_bytes(&self.wram_a_blocks),
            wram_b_blocks: block_bytes(&self.wram_b_blocks),
            wram_c_blocks: block_bytes(&self.wram_c_blocks),
            arm9_wram_a: self.arm9_wram_a.to_word(),
            arm9_wram_b: self.arm9_wram_b.to_word(),
            arm9_wram_c: self.arm9_wram_c.to_word(),
            arm7_wram_a: self.arm7_wram_a.to_word(),
            arm7_wram_b: self.arm7_wram_b.to_word(),
            arm7_wram_c: self.arm7_wram_c.to_word(),
            wram_a_locks: lock_mask(&self.wram_a_locked),
            wram_b_locks: lock_mask(&self.wram_b_locked),
            wram_c_locks: lock_mask(&self.wram_c_locked),
            ntr_wram_vram: (self.ntr_wram[0] as u8 & 1)
                | (self.ntr_wram[1] as u8 & 1) << 1
                | (self.vram_c & 7) << 2
                | (self.vram_d & 7) << 5,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::wram::*;

    #[test]
    fn struct_size() {
        assert_eq!(WramConfigLayout::BYTE_LEN, 0x30);
    }

    #[test]
    fn block_mapping() {
        assert_eq!(
            WramABlockMapping::new(WramAMaster::Arm7, 3, true)
                .unwrap()
                .to_byte(),
            0x8D
        );
        assert_eq!(
            WramBBlockMapping::new(WramBMaster::DspCode, 7, true)
                .unwrap()
                .to_byte(),
            0x9E
        );
        assert_eq!(
            WramCBlockMapping::new(WramCMaster::Arm7, 2, false)
                .unwrap()
                .to_byte(),
            0x09
        );
        assert!(WramABlockMapping::new(WramAMaster::Arm9, 4, true).is_err());
        assert!(WramBBlockMapping::new(WramBMaster::Arm9, 8, true).is_err());
    }

    #[test]
    fn region_mapping() {
        let a = WramAMapping::new(0x0300_0000, 0x4_0000, WramAMappedSlots::All).unwrap();
        assert_eq!(a.start_address(), 0x0300_0000);
        assert_eq!(a.end_address(), 0x0304_0000);
        assert_eq!(a.to_word(), 4 << 20 | 3 << 12);

        let b = WramBCMapping::new(0x0374_0000, 0x4_0000, WramBCMappedSlots::Slot0123).unwrap();
        assert_eq!(b.end_address(), 0x0378_0000);
        assert_eq!(b.to_word(), 0xE8 << 3 | 2 << 12 | 0xF0 << 19);

        assert_eq!(WramAMapping::unmapped().to_word(), 0);
        assert_eq!(WramAMapping::unmapped().start_address(), WRAM_START_ADDRESS);

        assert!(WramAMapping::new(0x02FF_0000, 0x1_0000, WramAMappedSlots::Slot0).is_err());
        assert!(WramAMapping::new(0x0300_8000, 0x1_0000, WramAMappedSlots::Slot0).is_err());
        assert!(WramAMapping::new(0x0300_0000, 0x8000, WramAMappedSlots::Slot0).is_err());
        assert!(WramBCMapping::new(0x0300_8000, 0x8000, WramBCMappedSlots::Slot0).is_ok());
        assert!(WramBCMapping::new(0x03FF_8000, 0x1_0000, WramBCMappedSlots::Slot0).is_err());
        assert!(WramBCMapping::new(0x03FF_8000, 0x8000, WramBCMappedSlots::Slot0).is_ok());
        assert!(WramBCMapping::new(0x0300_0000, 0xFFFF_8000, WramBCMappedSlots::Slot0).is_err());
    }

    #[test]
    fn layout() {
        let mut config = WramConfig::default();
        config.wram_a_blocks[1] = WramABlockMapping::new(WramAMaster::Arm7, 1, true).unwrap();
        config.wram_c_blocks[7] = WramCBlockMapping::new(WramCMaster::DspData, 7, true).unwrap();
        config.arm7_wram_a =
            WramAMapping::new(0x0300_0000, 0x1_0000, WramAMappedSlots::Slot0).unwrap();
        config.wram_a_locked = [true, false, false, true];
        config.wram_c_locked[7] = true;
        config.ntr_wram = [NtrWramMaster::Arm7, NtrWramMaster::Arm9];
        config.vram_c = 7;
        config.vram_d = 1;

        let layout = config.to_layout();
        assert_eq!(layout.wram_a_blocks, [0, 0x85, 0, 0]);
        assert_eq!(layout.wram_c_blocks[7], 0x9E);
        assert_eq!(layout.arm7_wram_a, 1 << 20);
        assert_eq!(layout.wram_a_locks, 0b1001);
        assert_eq!(layout.wram_b_locks, 0);
        assert_eq!(layout.wram_c_locks, 0x80);
        assert_eq!(layout.ntr_wram_vram, 1 | 7 << 2 | 1 << 5);

        let mut bytes = [0; 0x30];
        layout.write_bytes(&mut bytes);
        assert_eq!(bytes[1], 0x85);
        assert_eq!(bytes[0x13], 0x9E);
        assert_eq!(bytes[0x20..0x24], [0, 0, 0x10, 0]);
        assert_eq!(bytes[0x2C], 0b1001);
        assert_eq!(bytes[0x2E], 0x80);
        assert_eq!(bytes[0x2F], 1 | 7 << 2 | 1 << 5);
    }
}
