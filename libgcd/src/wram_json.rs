//! Reads `WramConfig` from its JSON description.
//!
//! ```json
//! {
//!     "wramA": {
//!         "arm9": { "start": "0x03000000", "length": "0x40000", "slots": "all" },
//!         "blocks": [ { "master": "arm9", "slot": 0, "enabled": true, "locked": false }, ... ]
//!     },
//!     "wramB": { ... },
//!     "wramC": { ... },
//!     "ntrWram": [ "arm9", "arm7" ],
//!     "vramC": 0,
//!     "vramD": 0
//! }
//! ```
//!
//! A bank without an `arm9` or `arm7` entry is unmapped for that processor.

use crate::error::*;
use crate::wram::*;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonWramConfig {
    wram_a: JsonWramBank,
    wram_b: JsonWramBank,
    wram_c: JsonWramBank,
    ntr_wram: Vec<String>,
    vram_c: u8,
    vram_d: u8,
}

#[derive(Deserialize)]
struct JsonWramBank {
    arm9: Option<JsonWramMapping>,
    arm7: Option<JsonWramMapping>,
    blocks: Vec<JsonBlockMapping>,
}

#[derive(Deserialize)]
#[serde(default)]
struct JsonWramMapping {
    start: String,
    length: String,
    slots: String,
}

impl Default for JsonWramMapping {
    fn default() -> Self {
        JsonWramMapping {
            start: "0x03000000".to_owned(),
            length: "0".to_owned(),
            slots: "0".to_owned(),
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct JsonBlockMapping {
    master: String,
    slot: u32,
    enabled: bool,
    locked: bool,
}

impl Default for JsonBlockMapping {
    fn default() -> Self {
        JsonBlockMapping {
            master: "arm9".to_owned(),
            slot: 0,
            enabled: true,
            locked: false,
        }
    }
}

fn invalid<T>(message: &str) -> Result<T, Error> {
    make_error(Error::InvalidWramConfig(message.to_owned()))
}

/// Parses "0x"-prefixed hexadecimal or plain decimal numbers.
fn parse_number(s: &str) -> Result<u32, Error> {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse::<u32>()
    };
    match parsed {
        Ok(value) => Ok(value),
        Err(_) => invalid("invalid start address or length specified"),
    }
}

trait ParseMaster: Sized {
    fn parse_master(master: &str) -> Result<Self, Error>;
}

impl ParseMaster for WramAMaster {
    fn parse_master(master: &str) -> Result<Self, Error> {
        match master {
            "arm9" => Ok(WramAMaster::Arm9),
            "arm7" => Ok(WramAMaster::Arm7),
            _ => invalid("invalid master specified for wram A block mapping"),
        }
    }
}

impl ParseMaster for WramBMaster {
    fn parse_master(master: &str) -> Result<Self, Error> {
        match master {
            "arm9" => Ok(WramBMaster::Arm9),
            "arm7" => Ok(WramBMaster::Arm7),
            "dsp" => Ok(WramBMaster::DspCode),
            _ => invalid("invalid master specified for wram B block mapping"),
        }
    }
}

impl ParseMaster for WramCMaster {
    fn parse_master(master: &str) -> Result<Self, Error> {
        match master {
            "arm9" => Ok(WramCMaster::Arm9),
            "arm7" => Ok(WramCMaster::Arm7),
            "dsp" => Ok(WramCMaster::DspData),
            _ => invalid("invalid master specified for wram C block mapping"),
        }
    }
}

trait ParseSlots: Sized {
    fn parse_slots(slots: &str) -> Result<Self, Error>;
}

impl ParseSlots for WramAMappedSlots {
    fn parse_slots(slots: &str) -> Result<Self, Error> {
        match slots {
            "0" => Ok(WramAMappedSlots::Slot0),
            "01" => Ok(WramAMappedSlots::Slot01),
            "0123" | "all" => Ok(WramAMappedSlots::All),
            _ => invalid("invalid value specified for wram A 'slots'"),
        }
    }
}

impl ParseSlots for WramBCMappedSlots {
    fn parse_slots(slots: &str) -> Result<Self, Error> {
        match slots {
            "0" => Ok(WramBCMappedSlots::Slot0),
            "01" => Ok(WramBCMappedSlots::Slot01),
            "0123" => Ok(WramBCMappedSlots::Slot0123),
            "01234567" | "all" => Ok(WramBCMappedSlots::All),
            _ => invalid("invalid value specified for wram B or C 'slots'"),
        }
    }
}

fn parse_mapping<S: MappedSlots + ParseSlots>(
    mapping: &Option<JsonWramMapping>,
) -> Result<RegionMapping<S>, Error> {
    match mapping {
        Some(mapping) => RegionMapping::new(
            parse_number(&mapping.start)?,
            parse_number(&mapping.length)?,
            S::parse_slots(&mapping.slots)?,
        ),
        None => Ok(RegionMapping::unmapped()),
    }
}

fn parse_blocks<M: BlockMaster + ParseMaster, const N: usize>(
    bank: &JsonWramBank,
    name: &str,
    blocks: &mut [BlockMapping<M>; N],
    locked: &mut [bool; N],
) -> Result<(), Error> {
    if bank.blocks.len() != N {
        return make_error(Error::InvalidWramConfig(format!(
            "wram {} 'blocks' array should have exactly {} items",
            name, N
        )));
    }
    for (i, block) in bank.blocks.iter().enumerate() {
        if block.slot >= N as u32 {
            return make_error(Error::InvalidWramConfig(format!(
                "invalid slot specified for wram {} block mapping",
                name
            )));
        }
        blocks[i] = BlockMapping::new(M::parse_master(&block.master)?, block.slot as u8, block.enabled)?;
        locked[i] = block.locked;
    }
    Ok(())
}

fn parse_ntr_master(master: &str) -> Result<NtrWramMaster, Error> {
    match master {
        "arm9" => Ok(NtrWramMaster::Arm9),
        "arm7" => Ok(NtrWramMaster::Arm7),
        _ => invalid("invalid master specified for ntr wram mapping"),
    }
}

pub fn parse_wram_config(json: &str) -> Result<WramConfig, Error> {
    let json: JsonWramConfig = match serde_json::from_str(json) {
        Ok(json) => json,
        Err(e) => return make_error(Error::InvalidWramConfig(e.to_string())),
    };

    let mut config = WramConfig {
        arm9_wram_a: parse_mapping(&json.wram_a.arm9)?,
        arm7_wram_a: parse_mapping(&json.wram_a.arm7)?,
        arm9_wram_b: parse_mapping(&json.wram_b.arm9)?,
        arm7_wram_b: parse_mapping(&json.wram_b.arm7)?,
        arm9_wram_c: parse_mapping(&json.wram_c.arm9)?,
        arm7_wram_c: parse_mapping(&json.wram_c.arm7)?,
        vram_c: json.vram_c,
        vram_d: json.vram_d,
        ..WramConfig::default()
    };

    parse_blocks(
        &json.wram_a,
        "A",
        &mut config.wram_a_blocks,
        &mut config.wram_a_locked,
    )?;
    parse_blocks(
        &json.wram_b,
        "B",
        &mut config.wram_b_blocks,
        &mut config.wram_b_locked,
    )?;
    parse_blocks(
        &json.wram_c,
        "C",
        &mut config.wram_c_blocks,
        &mut config.wram_c_locked,
    )?;

    if json.ntr_wram.len() != 2 {
        return invalid("'ntrWram' array should have exactly 2 items");
    }
    config.ntr_wram = [
        parse_ntr_master(&json.ntr_wram[0])?,
        parse_ntr_master(&json.ntr_wram[1])?,
    ];

    Ok(config)
}
