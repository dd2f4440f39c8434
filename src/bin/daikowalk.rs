use anyhow::Result;
use clap::Parser;
use ircodec::dump::b64_multi_repeated;
use ircodec::protocol::daiko::{Channel, DaikoLights};
use tracing_subscriber::EnvFilter;


/// Enumerate every Daiko lights command on both channels.
///
/// Emits one B64_multi line per command, for verification against the
/// external IR decoder.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print frames as hex instead of B64_multi lines
    #[arg(long)]
    hex: bool,
}


fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    for channel in [Channel::One, Channel::Two] {
        walk(&DaikoLights::new(channel), args.hex);
    }

    Ok(())
}

fn walk(lights: &DaikoLights, hex: bool) {
    let mut emit = |command: Vec<u8>| {
        if hex {
            println!("{command:02x?}");
        } else {
            println!("{}", b64_multi_repeated(&command));
        }
    };

    emit(lights.off());
    emit(lights.toggle());
    emit(lights.white());
    emit(lights.full());
    emit(lights.warm());

    for intensity in 1..=10 {
        emit(lights.night_light(intensity));
    }

    for warmth in 1..=11 {
        for brightness in 1..=11 {
            emit(lights.on(warmth, brightness));
        }
    }
}
