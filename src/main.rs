use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use nesd_rom::{disassembler::InterruptVectors, NesRom, TraceOrder};

const LOG_CONFIG_FILE: &str = "log4rs.yaml";

// -------------------------------------------------------------------------------------------------

/// Disassembles the program ROM of an NROM (mapper 0) iNES cartridge by tracing its control flow
/// from the interrupt vectors.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// iNES ROM image.
    rom: PathBuf,

    /// Write the listing to FILE instead of standard output.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the cartridge header instead of disassembling.
    #[arg(long)]
    info: bool,

    /// Order in which discovered entry points are traced.
    #[arg(long, value_enum, default_value_t = Order::Fifo)]
    order: Order,

    /// More log output on standard error; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Order {
    Fifo,
    Lifo,
}

// -------------------------------------------------------------------------------------------------

impl From<Order> for TraceOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Fifo => TraceOrder::Fifo,
            Order::Lifo => TraceOrder::Lifo,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Failed to initialize log4rs: {e:#}");
    }

    if let Err(e) = run(&cli) {
        eprintln!("{e:#}");
        process::exit(-1);
    }
}

fn init_logging(verbosity: u8) -> Result<()> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
        if verbosity > 0 {
            log::warn!("Log levels come from {LOG_CONFIG_FILE}, ignoring -v");
        }
        return Ok(());
    }

    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l:<5} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let rom = NesRom::from_file(&cli.rom).with_context(|| format!("Cannot load {}", cli.rom.display()))?;

    let text = if cli.info {
        rom_info(&rom)
    } else {
        log::info!("Disassembling");
        rom.disassemble(cli.order.into())
    };

    match &cli.output {
        Some(path) => {
            log::info!("Writing listing to {}", path.display());
            fs::write(path, text).with_context(|| format!("Cannot write {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes()).context("Cannot write to standard output")?;
            stdout.flush().context("Cannot write to standard output")?;
        }
    }
    Ok(())
}

fn rom_info(rom: &NesRom) -> String {
    let vectors = InterruptVectors::read_from(&rom.memory);
    let mut info = rom.header.info();
    info.push(("PRG ROM base", format!("${:04X}", rom.memory.base())));
    info.extend(vectors.iter().map(|(vector, addr)| (vector.name(), format!("${addr:04X}"))));
    info.into_iter().map(|(name, value)| format!("{name}: {value}\n")).collect()
}
