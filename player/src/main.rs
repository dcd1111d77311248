mod app;
mod input;
mod logging;
mod render;
mod terminal;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use gifterm_core::animation::Animation;
use gifterm_core::color::MapperKind;
use gifterm_core::decode::decode_gif;
use gifterm_core::driver::Driver;
use gifterm_core::render::RenderMode;

use crate::app::{Player, Settings};
use crate::terminal::{CrosstermEvents, Terminal};

#[derive(Parser)]
#[command(name = "gifterm", about = "Play animated GIFs in the terminal")]
struct Cli {
    /// Path or http(s) URL of a .gif file
    input: String,

    /// Map colors to the grayscale ramp instead of the 256-color cube
    #[arg(long)]
    gray: bool,

    /// One pixel per cell instead of two stacked pixels per cell
    #[arg(long)]
    lo_res: bool,

    /// Milliseconds between frames
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Keep the previous frame under transparent pixels instead of clearing
    #[arg(long)]
    retain: bool,

    /// Start even if the terminal does not advertise 256 colors
    #[arg(long)]
    force_color: bool,

    /// Write logs to this file (the screen belongs to the animation)
    #[arg(long)]
    log_file: Option<std::path::PathBuf>,

    /// More logging (-v info, -vv debug). Without --log-file, logs go to
    /// stderr only before and after playback
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let reader = input::open_input(&cli.input)?;
    let frames = decode_gif(reader).with_context(|| format!("failed to decode {}", cli.input))?;
    if frames.is_empty() {
        warn!("{} has no frames, nothing will be drawn", cli.input);
    }
    info!(frames = frames.len(), "decoded {}", cli.input);

    let kind = if cli.gray {
        MapperKind::Grayscale
    } else {
        MapperKind::RgbCube
    };
    let animation = Animation::new(frames, kind.mapper());
    let settings = Settings {
        render_mode: if cli.lo_res {
            RenderMode::Standard
        } else {
            RenderMode::HiRes
        },
        output_mode: kind.output_mode(),
        clear: !cli.retain,
    };

    let terminal = Terminal::enter(cli.force_color)?;
    let mut player = Player::new(animation, terminal, settings);
    let driver = Driver::new(Duration::from_millis(cli.tick_ms));
    let result = driver.run(&mut player, &mut CrosstermEvents);

    // restore the terminal before any error is printed
    drop(player);
    let ctl = result?;
    info!(ticks = ctl.ticks(), "playback finished");

    Ok(())
}
