use std::io::{self, BufWriter, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::{cursor, style, terminal};
use tracing::{debug, info};

use gifterm_core::color::OutputMode;
use gifterm_core::driver::EventSource;
use gifterm_core::error::SetupError;
use gifterm_core::grid::CellGrid;

use crate::logging;
use crate::render::render_grid;

/// What the player needs from a screen.
pub trait Screen {
    /// Current size in cells (columns, rows).
    fn size(&self) -> io::Result<(u16, u16)>;
    fn set_output_mode(&mut self, mode: OutputMode) -> Result<(), SetupError>;
    fn present(&mut self, grid: &CellGrid) -> io::Result<()>;
}

/// Raw-mode, alternate-screen session on stdout. Restored on drop.
pub struct Terminal {
    out: BufWriter<Stdout>,
    mode: OutputMode,
    skip_color_check: bool,
    render_buf: Vec<u8>,
    last_size: Option<(usize, usize)>,
}

impl Terminal {
    pub fn enter(skip_color_check: bool) -> Result<Self, SetupError> {
        // Set up panic hook for terminal cleanup
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            cleanup_terminal();
            original_hook(info);
        }));

        terminal::enable_raw_mode()?;
        let mut out = BufWriter::with_capacity(256 * 1024, io::stdout());
        enter_alternate_screen(&mut out, || {
            let _ = terminal::disable_raw_mode();
        })?;
        logging::set_screen_active(true);
        debug!("entered alternate screen");

        Ok(Self {
            out,
            mode: OutputMode::Palette256,
            skip_color_check,
            render_buf: Vec::with_capacity(256 * 1024),
            last_size: None,
        })
    }
}

impl Screen for Terminal {
    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn set_output_mode(&mut self, mode: OutputMode) -> Result<(), SetupError> {
        let colors = style::available_color_count();
        if colors < 256 && !self.skip_color_check {
            return Err(SetupError::UnsupportedColorMode { mode, colors });
        }
        info!(%mode, colors, "output mode set");
        self.mode = mode;
        Ok(())
    }

    fn present(&mut self, grid: &CellGrid) -> io::Result<()> {
        let size = (grid.width(), grid.height());
        if self.last_size != Some(size) {
            // stale content outside the new grid would otherwise linger
            self.out.write_all(b"\x1b[0m\x1b[2J")?;
            self.last_size = Some(size);
        }
        render_grid(grid, self.mode, &mut self.render_buf);
        self.out.write_all(&self.render_buf)?;
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = crossterm::execute!(
            self.out,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        logging::set_screen_active(false);
        debug!("terminal restored");
    }
}

/// Switch to the alternate screen and hide the cursor. If that fails,
/// `undo` runs so raw mode is not left behind without a `Terminal` to drop.
fn enter_alternate_screen<W: Write>(out: &mut W, undo: impl FnOnce()) -> io::Result<()> {
    let result = crossterm::execute!(out, terminal::EnterAlternateScreen, cursor::Hide);
    if result.is_err() {
        undo();
    }
    result
}

fn cleanup_terminal() {
    let _ = std::io::stdout().write_all(b"\x1b[0m\x1b[?25h\x1b[?1049l");
    let _ = std::io::stdout().flush();
    let _ = terminal::disable_raw_mode();
}

/// Keyboard and resize events from crossterm.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    type Event = Event;

    fn poll(&mut self, timeout: Duration) -> anyhow::Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}
