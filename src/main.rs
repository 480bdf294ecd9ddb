use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use tracing::{error, info};

use irscope::capture::{read_rigol_csv, render_packet, write_packet};
use irscope::decoder::{DecoderConfig, decode};
use irscope::utils::consts::LOG_LEVEL;
use irscope::utils::logging::init_logging;

#[derive(Parser)]
#[command(author, version, about = "Extracts IR packets from Rigol CSV captures.")]
struct Cli {
    /// Capture file to process.
    file: PathBuf,

    /// Binary output to file.
    #[arg(short, long)]
    outfile: Option<PathBuf>,

    /// Print extra information to stdout.
    #[arg(short, long)]
    verbose: bool,

    /// Assign '1' symbol to short pulses (defaults to short == '0').
    #[arg(short, long)]
    reverse: bool,

    /// Toggle bit order inside each packed byte.
    #[arg(short, long)]
    endian: bool,

    /// Voltage threshold for active pulses.
    #[arg(long)]
    v_high: Option<f64>,

    /// Voltage threshold for the idle preamble gap.
    #[arg(long)]
    v_low: Option<f64>,

    /// JSON threshold profile; flags override its values.
    #[arg(long)]
    profile: Option<PathBuf>,
}

fn print_banner() {
    println!("irscope - IR remote capture decoder");
    println!("===================================");
    println!();
}

fn build_config(cli: &Cli) -> DecoderConfig {
    let mut config = match &cli.profile {
        Some(path) => match DecoderConfig::from_profile(path) {
            Ok(config) => config,
            Err(err) => {
                error!("failed to load profile {}: {}", path.display(), err);
                exit(1);
            }
        },
        None => DecoderConfig::default(),
    };

    if let Some(v_high) = cli.v_high {
        config.v_high = v_high;
    }
    if let Some(v_low) = cli.v_low {
        config.v_low = v_low;
    }
    if cli.reverse {
        config.reverse = true;
    }
    if cli.endian {
        config.invert_bit_order = true;
    }
    config
}

fn main() {
    let cli = Cli::parse();
    init_logging(if cli.verbose { "debug" } else { LOG_LEVEL });
    print_banner();

    let config = build_config(&cli);

    info!("opening capture {}", cli.file.display());
    let samples = match read_rigol_csv(&cli.file) {
        Ok(samples) => samples,
        Err(err) => {
            error!("{}", err);
            exit(1);
        }
    };

    let packet = match decode(&samples, &config) {
        Ok(packet) => packet,
        Err(err) => {
            error!("decoding failed: {}", err);
            exit(1);
        }
    };

    if let Some(path) = &cli.outfile {
        if let Err(err) = write_packet(path, &packet) {
            error!("failed to write {}: {}", path.display(), err);
            exit(1);
        }
        info!("wrote {} bytes to {}", packet.len(), path.display());
    }

    if cli.verbose && !packet.is_empty() {
        println!("{}", render_packet(&packet));
    }

    info!("done");
}
