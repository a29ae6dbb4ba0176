//! Terminal presentation layer. Reads session state, never mutates it.

pub mod flappy_scene;
pub mod layout;

use crate::session::Session;
use flappy_scene::{render_flappy, SceneInfo};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Something that can show the current session each frame.
pub trait Renderer {
    fn render<R: Rng>(&mut self, session: &Session<R>) -> io::Result<()>;
}

/// ratatui renderer over any backend.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(backend: B) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
        })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render<R: Rng>(&mut self, session: &Session<R>) -> io::Result<()> {
        let info = SceneInfo {
            config: session.config(),
            best_score: session.best_score(),
            last_crash: session.last_crash(),
        };
        let state = session.current_state();
        self.terminal.draw(|frame| {
            let area = frame.size();
            render_flappy(frame, area, state, &info);
        })?;
        Ok(())
    }
}
