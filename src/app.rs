use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::content::{Category, ContentBank};
use crate::controller::SessionController;
use crate::timer::TickToken;
use crate::ui::view::TerminalView;

/// Terminal shell around the controller: maps keys onto the text field and
/// the controller's inbound calls.
#[derive(Debug)]
pub struct App {
    pub controller: SessionController<TerminalView>,
    pub should_quit: bool,
}

impl App {
    pub fn new(bank: ContentBank, mode: Category) -> Self {
        Self {
            controller: SessionController::new(bank, TerminalView::default(), mode),
            should_quit: false,
        }
    }

    pub fn view(&self) -> &TerminalView {
        self.controller.presenter()
    }

    pub fn mode(&self) -> Category {
        self.controller.mode()
    }

    pub fn tick_token(&self) -> Option<TickToken> {
        self.controller.tick_token()
    }

    pub fn on_tick(&mut self, token: TickToken) {
        self.controller.notify_tick(token);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if is_control_chord(key.modifiers) => self.should_quit = true,
            KeyCode::Tab => self.controller.notify_restart_requested(),
            KeyCode::Left => {
                let mode = self.mode().previous();
                self.controller.notify_mode_changed(mode);
            }
            KeyCode::Right => {
                let mode = self.mode().next();
                self.controller.notify_mode_changed(mode);
            }
            KeyCode::Char(c) if !is_control_chord(key.modifiers) => self.edit(|input| input.push(c)),
            KeyCode::Enter => self.edit(|input| input.push('\n')),
            KeyCode::Backspace => self.edit(|input| {
                input.pop();
            }),
            _ => {}
        }
    }

    // a disabled field takes no edits at all
    fn edit(&mut self, f: impl FnOnce(&mut String)) {
        if self.view().locked {
            return;
        }
        let view = self.controller.presenter_mut();
        f(&mut view.input);
        let buffer = view.input.clone();
        self.controller.notify_input_changed(&buffer);
    }
}

// AltGr arrives as CONTROL | ALT on Windows and still composes a character
fn is_control_chord(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}
