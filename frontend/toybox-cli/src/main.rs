use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::fs;
use std::path::{Path, PathBuf};
use toybox_core::protection;
use toybox_core::{
    CommandHeader, CommandOutcome, HandshakePort, ProtectionSource, SettingsEeprom, ToyboxGame,
    ToyboxHost, ToyboxMcu,
};

// 64KB of 68000-visible shared RAM
const SHARED_RAM_WORDS: usize = 0x8000;

#[derive(Parser)]
#[command(about = "Kaneko Toybox MCU tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decrypt a data ROM and write the plaintext image
    Decrypt {
        #[command(flatten)]
        rom: RomArgs,

        /// Output file path
        #[arg(short = 'o', long)]
        output_path: PathBuf,
    },
    /// Print the protection descriptor table of a data ROM
    Descriptors {
        #[command(flatten)]
        rom: RomArgs,
    },
    /// Run a single MCU command against a blank shared RAM
    Run(RunArgs),
}

#[derive(Args)]
struct RomArgs {
    /// Encrypted data ROM file path
    #[arg(short = 'f', long)]
    file_path: PathBuf,

    /// Game, selects the decryption table and protection behavior
    #[arg(short = 'g', long, value_enum, default_value_t)]
    game: ToyboxGame,
}

#[derive(Args)]
struct RunArgs {
    #[command(flatten)]
    rom: RomArgs,

    /// Command opcode, e.g. 0x0400
    #[arg(long, value_parser = parse_u16)]
    opcode: u16,

    /// Destination byte offset in shared RAM
    #[arg(long, value_parser = parse_u16, default_value = "0x0100")]
    dest: u16,

    /// Command parameter (protection sub-command)
    #[arg(long, value_parser = parse_u16, default_value = "0")]
    param: u16,

    /// DIP switch value returned by the read DSW command
    #[arg(long, value_parser = parse_u16, default_value = "0xFFFF")]
    dip_switches: u16,

    /// Settings file, loaded if present and written back if the command changed it
    #[arg(long)]
    settings_path: Option<PathBuf>,

    /// Order in which the four command ports are written
    #[arg(long, value_delimiter = ',', default_value = "0,1,2,3")]
    handshake_order: Vec<usize>,

    /// Start of the shared RAM hex dump (byte address); defaults to the destination offset
    #[arg(long, value_parser = parse_u16)]
    dump_start: Option<u16>,

    /// Length of the shared RAM hex dump in bytes
    #[arg(long, value_parser = parse_u16, default_value = "0x80")]
    dump_len: u16,
}

fn parse_u16(s: &str) -> Result<u16, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|err| format!("invalid number '{s}': {err}"))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Decrypt { rom, output_path } => decrypt(&rom, &output_path),
        Command::Descriptors { rom } => print_descriptors(&rom),
        Command::Run(args) => run(&args),
    }
}

fn load_mcu(rom: &RomArgs) -> anyhow::Result<ToyboxMcu> {
    let raw = fs::read(&rom.file_path)
        .with_context(|| format!("Failed to read data ROM from '{}'", rom.file_path.display()))?;

    let config = rom.game.config();
    log::info!("Loaded data ROM for {}", rom.game);
    log::info!("Config:\n{config}");

    let mcu = ToyboxMcu::new(&raw, config)?;
    Ok(mcu)
}

fn decrypt(rom: &RomArgs, output_path: &Path) -> anyhow::Result<()> {
    let mcu = load_mcu(rom)?;
    fs::write(output_path, mcu.data_rom()).with_context(|| {
        format!("Failed to write decrypted data ROM to '{}'", output_path.display())
    })?;

    log::info!("Wrote decrypted data ROM to '{}'", output_path.display());

    Ok(())
}

fn print_descriptors(rom: &RomArgs) -> anyhow::Result<()> {
    let mcu = load_mcu(rom)?;

    println!("sub  unused start  length extra");
    for (subcommand, descriptor) in protection::descriptors(mcu.data_rom()).enumerate() {
        println!(
            "{subcommand:02X}   {:04X}   {:04X}   {:04X}   {:04X}",
            descriptor.unused, descriptor.source_start, descriptor.length, descriptor.extra
        );
    }

    Ok(())
}

fn run(args: &RunArgs) -> anyhow::Result<()> {
    let mut mcu = load_mcu(&args.rom)?;

    let handshake_order = args
        .handshake_order
        .iter()
        .map(|&i| HandshakePort::from_index(i).ok_or_else(|| anyhow!("Invalid command port {i}")))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let initial_save = match &args.settings_path {
        Some(path) if path.exists() => Some(
            fs::read(path)
                .with_context(|| format!("Failed to read settings from '{}'", path.display()))?,
        ),
        _ => None,
    };
    let mut settings = SettingsEeprom::new(initial_save.as_deref());

    let mut shared_ram = vec![0_u16; SHARED_RAM_WORDS];
    let header = CommandHeader { opcode: args.opcode, dest_offset: args.dest, param: args.param };
    header.write_to(&mut shared_ram);

    let mut host = ToyboxHost::new(&mut shared_ram, &mut settings, &args.dip_switches);
    let mut outcome = None;
    for port in handshake_order {
        if let Some(result) = mcu.write_port(port, 0xFFFF, 0xFFFF, &mut host) {
            outcome = Some(result);
        }
    }

    match outcome {
        Some(outcome) => println!("Command {header}: {}", describe(outcome)),
        None => println!("Handshake incomplete, ports are {:04X?}", mcu.handshake_ports()),
    }

    hex_dump(&shared_ram, args.dump_start.unwrap_or(args.dest), args.dump_len);

    if let Some(path) = args.settings_path.as_ref().filter(|_| settings.is_dirty()) {
        fs::write(path, settings.to_bytes())
            .with_context(|| format!("Failed to write settings to '{}'", path.display()))?;
        settings.clear_dirty();

        log::info!("Saved settings to '{}'", path.display());
    }

    Ok(())
}

fn describe(outcome: CommandOutcome) -> String {
    match outcome {
        CommandOutcome::SettingsLoaded => "loaded settings into shared RAM".into(),
        CommandOutcome::SettingsSaved => "saved settings from shared RAM".into(),
        CommandOutcome::FactorySettings { restored: true } => "restored factory settings".into(),
        CommandOutcome::FactorySettings { restored: false } => {
            "factory settings not supported for this game".into()
        }
        CommandOutcome::DipSwitchesRead(value) => format!("read DIP switches {value:04X}"),
        CommandOutcome::ProtectionData(ProtectionSource::Hardcoded { len_words }) => {
            format!("wrote {len_words} hardcoded words")
        }
        CommandOutcome::ProtectionData(ProtectionSource::Descriptor(descriptor)) => format!(
            "copied {:04X} bytes from data ROM offset {:04X}",
            descriptor.length, descriptor.source_start
        ),
        CommandOutcome::Unknown(_) => "unknown command, nothing done".into(),
    }
}

fn hex_dump(shared_ram: &[u16], start: u16, len: u16) {
    let start = usize::from(start & !0xF);
    let end = (start + usize::from(len)).min(2 * shared_ram.len());

    for line_addr in (start..end).step_by(16) {
        let bytes: Vec<_> = shared_ram[line_addr / 2..(line_addr + 16).min(end) / 2]
            .iter()
            .flat_map(|word| word.to_be_bytes())
            .map(|byte| format!("{byte:02X}"))
            .collect();
        println!("{line_addr:04X}: {}", bytes.join(" "));
    }
}
