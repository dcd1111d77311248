use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use gifterm_core::animation::Animation;
use gifterm_core::color::OutputMode;
use gifterm_core::driver::{Handler, LoopControl};
use gifterm_core::grid::CellGrid;
use gifterm_core::render::RenderMode;

use crate::terminal::Screen;

#[derive(Clone, Copy, Debug)]
pub struct Settings {
    pub render_mode: RenderMode,
    pub output_mode: OutputMode,
    /// Blank the grid before painting each frame.
    pub clear: bool,
}

/// Plays an animation on a screen, one frame per tick, until a quit key.
pub struct Player<S> {
    animation: Animation,
    screen: S,
    grid: CellGrid,
    settings: Settings,
}

impl<S: Screen> Player<S> {
    pub fn new(animation: Animation, screen: S, settings: Settings) -> Self {
        Self {
            animation,
            screen,
            grid: CellGrid::default(),
            settings,
        }
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl<S: Screen> Handler for Player<S> {
    type Event = Event;

    fn init(&mut self, _ctl: &mut LoopControl) -> anyhow::Result<()> {
        self.screen.set_output_mode(self.settings.output_mode)?;
        info!(
            frames = self.animation.frames().len(),
            render_mode = ?self.settings.render_mode,
            "playback started"
        );
        Ok(())
    }

    fn tick(&mut self, _ctl: &mut LoopControl) -> anyhow::Result<()> {
        // size can change between ticks, never cache it
        let (cols, rows) = self.screen.size()?;
        self.grid.resize(cols as usize, rows as usize);

        self.animation
            .paint(&mut self.grid, self.settings.render_mode, self.settings.clear);
        self.screen.present(&self.grid)?;
        self.animation.advance();
        Ok(())
    }

    fn event(&mut self, ctl: &mut LoopControl, event: Event) -> anyhow::Result<()> {
        match event {
            Event::Key(key) if is_quit_key(&key) => {
                debug!(ticks = ctl.ticks(), "quit requested");
                ctl.quit();
            }
            Event::Resize(cols, rows) => debug!(cols, rows, "terminal resized"),
            _ => {}
        }
        Ok(())
    }
}
