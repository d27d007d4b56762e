//! Keyboard → game command mapping.
//!
//! Terminal events arrive on a channel fed by a dedicated reader thread, so
//! the frame loop never blocks on I/O. Only two keys steer the game; a few
//! more end the program. Everything else is dropped.

use std::sync::mpsc::{Receiver, TryRecvError};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Quit,
}

impl Command {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            Command::Quit => None,
        }
    }
}

pub fn map_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Map a full terminal event. Releases are ignored so a tap is one step.
pub fn map_event(event: &Event) -> Option<Command> {
    match event {
        Event::Key(KeyEvent { kind: KeyEventKind::Release, .. }) => None,
        Event::Key(KeyEvent { code: KeyCode::Char('c'), modifiers, .. })
            if modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(Command::Quit)
        }
        Event::Key(KeyEvent { code, .. }) => map_key(*code),
        _ => None,
    }
}

pub trait InputSource {
    /// Commands that arrived since the previous call, oldest first.
    fn poll(&mut self) -> Vec<Command>;

    /// True once no more input can arrive.
    fn is_closed(&self) -> bool {
        false
    }
}

/// Drains terminal events from the reader thread's channel.
pub struct ChannelInput {
    rx: Receiver<Event>,
    disconnected: bool,
}

impl ChannelInput {
    pub fn new(rx: Receiver<Event>) -> Self {
        Self { rx, disconnected: false }
    }
}

impl InputSource for ChannelInput {
    fn poll(&mut self) -> Vec<Command> {
        let mut commands = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => commands.extend(map_event(&event)),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.disconnected = true;
                    break;
                }
            }
        }
        commands
    }

    fn is_closed(&self) -> bool {
        self.disconnected
    }
}
