use getopts::Options;
use libgcd::error::*;
use libgcd::signature::{RsaSigner, AES_KEY_Y_LEN};
use libgcd::wram_json::parse_wram_config;
use libgcd::GcdBuilder;
use log::*;

const DEFAULT_GAME_CODE: &str = "####";

fn usage(program: &str, opts: Options) {
    let brief = format!(
        "Usage: {} --arm9 ARM9_ELF --arm7 ARM7_ELF --wram WRAM_JSON --rsakey KEY_DER [options] OUTPUT",
        program
    );
    print!("{}", opts.usage(&brief));
}

fn parse_key_y(hex: &str) -> Option<[u8; AES_KEY_Y_LEN]> {
    if hex.len() != AES_KEY_Y_LEN * 2 || !hex.is_ascii() {
        return None;
    }
    let mut key_y = [0; AES_KEY_Y_LEN];
    for (i, byte) in key_y.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
    }
    Some(key_y)
}

struct Arguments {
    arm9: String,
    arm7: String,
    wram: String,
    rsa_key: String,
    game_code: String,
    arm9_speed_67mhz: bool,
    key_y: [u8; AES_KEY_Y_LEN],
    output: String,
}

fn run(args: &Arguments) -> Result<(), Error> {
    let arm9_elf = std::fs::read(&args.arm9)?;
    let arm7_elf = std::fs::read(&args.arm7)?;
    let wram_config = parse_wram_config(&std::fs::read_to_string(&args.wram)?)?;
    let signer = RsaSigner::from_der(&std::fs::read(&args.rsa_key)?)?;

    let rom = GcdBuilder::from_elf(&args.game_code, &arm9_elf, &arm7_elf, wram_config)?
        .with_key_y(args.key_y)
        .with_arm9_speed_67mhz(args.arm9_speed_67mhz)
        .build(&signer)?;

    rom.save(&args.output)?;
    info!("Written {}", args.output);
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("", "arm9", "ARM9 ELF file path", "FILE");
    opts.optopt("", "arm7", "ARM7 ELF file path", "FILE");
    opts.optopt("", "wram", "initial WRAM configuration JSON file path", "FILE");
    opts.optopt("", "rsakey", "GCD RSA private key DER file path", "FILE");
    opts.optopt("", "gamecode", "game code to use (default ####)", "CODE");
    opts.optflag(
        "",
        "arm9-67-mhz",
        "start the ARM9 at 67 MHz instead of 134 MHz",
    );
    opts.optopt(
        "",
        "key-y",
        "AES key Y for the binaries as 32 hex digits (default all zero)",
        "HEX",
    );
    opts.optflagmulti("v", "verbose", "increase log verbosity");
    opts.optflag("q", "quiet", "silence all log output");
    opts.optflag("h", "help", "print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            println!("{}", f);
            usage(&program, opts);
            std::process::exit(1);
        }
    };

    if matches.opt_present("h") {
        usage(&program, opts);
        return;
    }

    if let Err(e) = stderrlog::new()
        .module(module_path!())
        .module("libgcd")
        .verbosity(2 + matches.opt_count("v"))
        .quiet(matches.opt_present("q"))
        .init()
    {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let key_y = match matches.opt_str("key-y") {
        None => [0; AES_KEY_Y_LEN],
        Some(hex) => match parse_key_y(&hex) {
            Some(key_y) => key_y,
            None => {
                error!("--key-y must be {} hex digits", AES_KEY_Y_LEN * 2);
                std::process::exit(1);
            }
        },
    };

    let (arm9, arm7, wram, rsa_key) = match (
        matches.opt_str("arm9"),
        matches.opt_str("arm7"),
        matches.opt_str("wram"),
        matches.opt_str("rsakey"),
    ) {
        (Some(arm9), Some(arm7), Some(wram), Some(rsa_key)) => (arm9, arm7, wram, rsa_key),
        _ => {
            println!("--arm9, --arm7, --wram and --rsakey are required");
            usage(&program, opts);
            std::process::exit(1);
        }
    };

    if matches.free.len() != 1 {
        println!("Expected exactly one output path");
        usage(&program, opts);
        std::process::exit(1);
    }

    let arguments = Arguments {
        arm9,
        arm7,
        wram,
        rsa_key,
        game_code: matches
            .opt_str("gamecode")
            .unwrap_or_else(|| DEFAULT_GAME_CODE.to_owned()),
        arm9_speed_67mhz: matches.opt_present("arm9-67-mhz"),
        key_y,
        output: matches.free[0].clone(),
    };

    if let Err(e) = run(&arguments) {
        error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod test {
    use crate::*;

    #[test]
    fn key_y() {
        assert_eq!(parse_key_y("00000000000000000000000000000000"), Some([0; 16]));
        assert_eq!(
            parse_key_y("000102030405060708090a0B0c0D0e0F"),
            Some([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15])
        );
        assert_eq!(parse_key_y("0001"), None);
        assert_eq!(parse_key_y("zz000000000000000000000000000000"), None);
    }
}
