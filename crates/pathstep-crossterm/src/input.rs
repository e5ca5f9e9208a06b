//! Translating terminal events into visualizer commands.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use pathstep_core::{CellType, Point};

/// Wheel delta reported for one notch, matching a browser's `deltaY`.
pub const WHEEL_NOTCH: f64 = 100.0;

/// Something the user asked for.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Quit,
    /// Start or pause the run.
    Toggle,
    /// Advance by one step.
    Step,
    Faster,
    Slower,
    CycleAlgorithm,
    SelectTool(CellType),
    /// Paint the selected tool at a screen position.
    Draw(Point),
    /// Wheel movement; positive shrinks the grid.
    Zoom(f64),
    Randomize,
    /// The terminal changed size.
    Resize(Point),
}

/// Map a crossterm [`Event`] to a [`Command`].
pub fn translate(ev: &Event) -> Option<Command> {
    match ev {
        Event::Key(key) => translate_key(key),
        Event::Mouse(me) => translate_mouse(me),
        Event::Resize(w, h) => Some(Command::Resize(Point::new(i32::from(*w), i32::from(*h)))),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Command::Quit);
    }
    let cmd = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char(' ') | KeyCode::Enter => Command::Toggle,
        KeyCode::Char('n') | KeyCode::Char('.') => Command::Step,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => Command::Faster,
        KeyCode::Char('-') | KeyCode::Left => Command::Slower,
        KeyCode::Char('a') | KeyCode::Tab => Command::CycleAlgorithm,
        KeyCode::Char('r') => Command::Randomize,
        KeyCode::Char(']') => Command::Zoom(-WHEEL_NOTCH),
        KeyCode::Char('[') => Command::Zoom(WHEEL_NOTCH),
        KeyCode::Char(c @ '1'..='4') => {
            let i = c as usize - '1' as usize;
            Command::SelectTool(CellType::DRAWABLE[i])
        }
        _ => return None,
    };
    Some(cmd)
}

fn translate_mouse(me: &MouseEvent) -> Option<Command> {
    let pos = Point::new(i32::from(me.column), i32::from(me.row));
    match me.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            Some(Command::Draw(pos))
        }
        MouseEventKind::ScrollUp => Some(Command::Zoom(-WHEEL_NOTCH)),
        MouseEventKind::ScrollDown => Some(Command::Zoom(WHEEL_NOTCH)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys() {
        assert_eq!(translate(&key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(translate(&key(KeyCode::Char(' '))), Some(Command::Toggle));
        assert_eq!(translate(&key(KeyCode::Char('n'))), Some(Command::Step));
        assert_eq!(translate(&key(KeyCode::Tab)), Some(Command::CycleAlgorithm));
        assert_eq!(
            translate(&key(KeyCode::Char('2'))),
            Some(Command::SelectTool(CellType::Wall))
        );
        assert_eq!(
            translate(&key(KeyCode::Char('4'))),
            Some(Command::SelectTool(CellType::End))
        );
        assert_eq!(translate(&key(KeyCode::Char('5'))), None);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(&ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn mouse_events() {
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(Command::Draw(Point::new(7, 3)))
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Drag(MouseButton::Left))),
            Some(Command::Draw(Point::new(7, 3)))
        );
        assert_eq!(translate(&mouse(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(
            translate(&mouse(MouseEventKind::ScrollDown)),
            Some(Command::Zoom(WHEEL_NOTCH))
        );
    }

    #[test]
    fn resize() {
        assert_eq!(
            translate(&Event::Resize(80, 24)),
            Some(Command::Resize(Point::new(80, 24)))
        );
    }
}
