use std::fs::File;
use std::io::{self, Sink, Stderr};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::fmt::writer::{EitherWriter, MakeWriter};
use tracing_subscriber::EnvFilter;

/// Set while the alternate screen is shown; stderr output would land on
/// top of the animation.
static SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

pub fn set_screen_active(active: bool) {
    SCREEN_ACTIVE.store(active, Ordering::SeqCst);
}

/// Stderr, except while the screen belongs to the animation.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrOffScreen;

impl<'a> MakeWriter<'a> for StderrOffScreen {
    type Writer = EitherWriter<Stderr, Sink>;

    fn make_writer(&'a self) -> Self::Writer {
        if SCREEN_ACTIVE.load(Ordering::SeqCst) {
            EitherWriter::B(io::sink())
        } else {
            EitherWriter::A(io::stderr())
        }
    }
}

/// Install the global subscriber. `verbose` 0 is warn, 1 info, 2+ debug;
/// `RUST_LOG` directives are honored on top.
pub fn init(verbose: u8, log_file: Option<&Path>) -> anyhow::Result<()> {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_ansi(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(StderrOffScreen).init(),
    }
    Ok(())
}
