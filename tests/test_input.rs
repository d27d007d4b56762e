use std::sync::mpsc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use lane_dodge::entities::Direction;
use lane_dodge::input::{map_event, map_key, ChannelInput, Command, InputSource};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn arrows_map_to_moves() {
    assert_eq!(map_key(KeyCode::Left), Some(Command::MoveLeft));
    assert_eq!(map_key(KeyCode::Right), Some(Command::MoveRight));
    assert_eq!(Command::MoveLeft.direction(), Some(Direction::Left));
    assert_eq!(Command::MoveRight.direction(), Some(Direction::Right));
    assert_eq!(Command::Quit.direction(), None);
}

#[test]
fn quit_keys() {
    assert_eq!(map_key(KeyCode::Char('q')), Some(Command::Quit));
    assert_eq!(map_key(KeyCode::Char('Q')), Some(Command::Quit));
    assert_eq!(map_key(KeyCode::Esc), Some(Command::Quit));
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(map_event(&ctrl_c), Some(Command::Quit));
}

#[test]
fn unmapped_keys_are_ignored() {
    for code in [KeyCode::Up, KeyCode::Down, KeyCode::Char('a'), KeyCode::Char(' '), KeyCode::Enter] {
        assert_eq!(map_key(code), None);
    }
    assert_eq!(map_event(&press(KeyCode::Char('c'))), None);
    assert_eq!(map_event(&Event::FocusGained), None);
}

#[test]
fn key_release_is_ignored() {
    let release = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Left,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    assert_eq!(map_event(&release), None);
}

#[test]
fn channel_input_drains_in_order() {
    let (tx, rx) = mpsc::channel();
    let mut input = ChannelInput::new(rx);
    tx.send(press(KeyCode::Left)).unwrap();
    tx.send(press(KeyCode::Char('x'))).unwrap();
    tx.send(press(KeyCode::Right)).unwrap();

    assert_eq!(input.poll(), vec![Command::MoveLeft, Command::MoveRight]);
    assert!(input.poll().is_empty());
    assert!(!input.is_closed());
}

#[test]
fn channel_input_reports_disconnect() {
    let (tx, rx) = mpsc::channel();
    let mut input = ChannelInput::new(rx);
    tx.send(press(KeyCode::Right)).unwrap();
    drop(tx);

    assert_eq!(input.poll(), vec![Command::MoveRight]);
    assert!(input.is_closed());
}
