use crate::command::Command;
use crate::game::{Game, Tick};
use crossterm::event::{poll, read, Event};
use log::{debug, info};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

/// The run loop: draws the game, feeds it input, and advances it on schedule
/// until the user quits
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    next_tick: Option<Instant>,
    ticks: u64,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>) -> App<R> {
        App {
            game,
            next_tick: None,
            ticks: 0,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| frame.render_widget(&self.game, frame.area()))?;
            self.process_input()?;
        }
        info!("Quitting after {} ticks", self.ticks);
        Ok(())
    }

    /// Wait for input until the next tick is due.  If input arrives first,
    /// handle it; otherwise, advance the game.
    fn process_input(&mut self) -> io::Result<()> {
        let period = self.game.tick_period();
        let when = *self
            .next_tick
            .get_or_insert_with(|| Instant::now() + period);
        let wait = when.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            self.advance();
            self.next_tick = None;
        } else {
            self.handle_event(read()?);
        }
        Ok(())
    }

    fn advance(&mut self) {
        self.ticks += 1;
        let outcome = self.game.tick();
        if outcome != Tick::Alive {
            debug!("Tick {}: {outcome:?}", self.ticks);
        }
    }
}

impl<R> App<R> {
    fn handle_event(&mut self, event: Event) {
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        if let Some(direction) = cmd.direction() {
            self.game.turn(direction);
            return;
        }
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Faster => self.game.faster(),
            Command::Slower => self.game.slower(),
            Command::Up | Command::Down | Command::Left | Command::Right => (),
        }
    }
}
