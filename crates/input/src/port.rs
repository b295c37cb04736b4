//! Input sources for hosts.
//!
//! A host asks its [`InputPort`] for the next event, waiting at most until the
//! frame deadline. The engine itself never listens for input.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(GameAction),
    Quit,
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
}

pub trait InputPort {
    /// Wait up to `timeout` for the next event.
    ///
    /// `Ok(None)` means nothing relevant arrived in time.
    fn poll(&mut self, timeout: Duration) -> Result<Option<InputEvent>>;
}

/// Live keyboard input through crossterm.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputPort for TerminalInput {
    fn poll(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        if !event::poll(timeout).map_err(|e| anyhow!("input: poll failed: {e}"))? {
            return Ok(None);
        }

        match event::read().map_err(|e| anyhow!("input: read failed: {e}"))? {
            // Auto-repeat behaves like repeated presses; releases carry no action.
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    return Ok(Some(InputEvent::Quit));
                }
                Ok(handle_key_event(key).map(InputEvent::Action))
            }
            Event::Resize(w, h) => Ok(Some(InputEvent::Resize(w, h))),
            _ => Ok(None),
        }
    }
}

/// Queue of prepared events, for tests and automation.
///
/// Never blocks: an empty queue answers `None` immediately.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Convenience constructor from plain actions.
    pub fn from_actions(actions: impl IntoIterator<Item = GameAction>) -> Self {
        Self::new(actions.into_iter().map(InputEvent::Action))
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputPort for ScriptedInput {
    fn poll(&mut self, _timeout: Duration) -> Result<Option<InputEvent>> {
        Ok(self.events.pop_front())
    }
}

impl<P: InputPort + ?Sized> InputPort for Box<P> {
    fn poll(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        (**self).poll(timeout)
    }
}
