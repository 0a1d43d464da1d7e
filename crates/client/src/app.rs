//! Command loop tying input, engine and renderer together.

use std::io::{BufRead, Write};

use anyhow::Result;
use game_content::ContentFactory;
use game_core::{CommandOutcome, GameSession};

use crate::input::{self, HELP, InputAction};
use crate::render::{describe_event, render_frame};

/// Whether the loop keeps reading commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    session: GameSession,
    factory: ContentFactory,
    map_name: String,
    max_idle_frames: u32,
    color: bool,
}

impl App {
    pub fn new(
        session: GameSession,
        factory: ContentFactory,
        map_name: impl Into<String>,
        max_idle_frames: u32,
    ) -> Self {
        Self {
            session,
            factory,
            map_name: map_name.into(),
            max_idle_frames,
            color: false,
        }
    }

    /// Paints the board with terrain colours.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Reads commands until `quit`, end of input, or the player's death.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        self.settle()?;
        self.present(&mut output)?;

        for line in input.lines() {
            let line = line?;
            let action = match input::parse_line(&line) {
                Ok(action) => action,
                Err(error) => {
                    writeln!(output, "{error}")?;
                    continue;
                }
            };
            if self.apply(action, &mut output)? == Flow::Quit {
                break;
            }
            if !self.player_alive() {
                self.present(&mut output)?;
                writeln!(output, "You died.")?;
                break;
            }
            self.present(&mut output)?;
        }

        tracing::info!("client loop finished");
        Ok(())
    }

    /// Applies one parsed input line, then drives frames until settled.
    pub fn apply<W: Write>(&mut self, action: InputAction, output: &mut W) -> Result<Flow> {
        match action {
            InputAction::Quit => return Ok(Flow::Quit),
            InputAction::None => {}
            InputAction::Help => writeln!(output, "{HELP}")?,
            InputAction::Submit(command) => {
                let outcome = self.session.engine().handle_command(command)?;
                tracing::debug!(?command, ?outcome, "command handled");
                if let CommandOutcome::Ignored(reason) = outcome {
                    writeln!(output, "ignored: {reason}")?;
                }
            }
            InputAction::SetTerrain { position, terrain } => {
                let state = self.session.state_mut();
                if terrain.is_solid() && state.map.occupant_at(position).is_some() {
                    writeln!(output, "{position} is occupied")?;
                } else if state.map.set_terrain(position, terrain) {
                    if let Some(player) = state.player().map(|player| player.id) {
                        state.refresh_movepool(player);
                    }
                    tracing::info!(%position, %terrain, "terrain edited");
                } else {
                    writeln!(output, "{position} is outside the map")?;
                }
            }
            InputAction::Save(name) => {
                let name = name.as_deref().unwrap_or(&self.map_name);
                let path = self.factory.save_map(name, &self.session.state().map)?;
                writeln!(output, "saved {}", path.display())?;
            }
        }
        self.settle()?;
        Ok(Flow::Continue)
    }

    fn settle(&mut self) -> Result<()> {
        if !self.player_alive() {
            return Ok(());
        }
        let budget = self.max_idle_frames;
        let frames = self.session.engine().run_until_settled(budget)?;
        if frames == budget {
            tracing::warn!(frames, "frame budget exhausted before the player's turn");
        }
        Ok(())
    }

    fn player_alive(&self) -> bool {
        self.session
            .state()
            .player()
            .is_some_and(|player| player.is_alive())
    }

    fn present<W: Write>(&mut self, output: &mut W) -> Result<()> {
        let events = self.session.drain_events();
        for event in &events {
            writeln!(output, "{}", describe_event(self.session.state(), event))?;
        }
        write!(output, "{}", render_frame(self.session.state(), self.color))?;
        output.flush()?;
        Ok(())
    }
}
