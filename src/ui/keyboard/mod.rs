//! Keyboard-Shortcuts für den Dokumentbereich.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;
use crate::shared::NAVIGATION_JUMP;

/// Zustand, von dem die Shortcuts abhängen.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct KeyboardContext {
    /// Eine Entity ist per Klick selektiert
    pub has_selection: bool,
    /// Eine Typ-Auswahl ist offen (Navigation gesperrt)
    pub label_pending: bool,
    /// Scroll-Schritt für Pfeil hoch/runter
    pub scroll_step: f32,
}

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, context: KeyboardContext) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Ctrl+O (Öffnen), Ctrl+S (Speichern), Ctrl+Shift+S (Speichern unter), Escape
    let (key_o_pressed, key_s_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::OpenFileRequested);
    }

    if modifiers.command && key_s_pressed {
        if modifiers.shift {
            events.push(AppIntent::SaveAsRequested);
        } else {
            events.push(AppIntent::SaveRequested);
        }
    }

    if key_escape_pressed {
        events.push(AppIntent::CancelRequested);
    }

    // Ohne Modifier nur, wenn kein Textfeld den Fokus hat
    let text_focused = ui.ctx().memory(|m| m.focused().is_some());
    if text_focused || context.label_pending {
        return events;
    }

    let (key_del_pressed, key_left, key_right, key_home, key_end) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            i.key_pressed(egui::Key::ArrowLeft),
            i.key_pressed(egui::Key::ArrowRight),
            i.key_pressed(egui::Key::Home),
            i.key_pressed(egui::Key::End),
        )
    });
    let (key_up, key_down, key_page_up, key_page_down) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::ArrowUp),
            i.key_pressed(egui::Key::ArrowDown),
            i.key_pressed(egui::Key::PageUp),
            i.key_pressed(egui::Key::PageDown),
        )
    });

    if key_del_pressed && context.has_selection {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    // Dokument-Navigation: Pfeil = ±1, Ctrl+Pfeil = ±NAVIGATION_JUMP
    let step = if modifiers.command { NAVIGATION_JUMP } else { 1 };
    if key_left {
        events.push(AppIntent::JumpDocumentsRequested { delta: -step });
    }
    if key_right {
        events.push(AppIntent::JumpDocumentsRequested { delta: step });
    }
    if key_home {
        events.push(AppIntent::FirstDocumentRequested);
    }
    if key_end {
        events.push(AppIntent::LastDocumentRequested);
    }

    // Scrollen innerhalb des Dokuments
    if key_up {
        events.push(AppIntent::ScrollRequested {
            delta: -context.scroll_step,
        });
    }
    if key_down {
        events.push(AppIntent::ScrollRequested {
            delta: context.scroll_step,
        });
    }
    if key_page_up {
        events.push(AppIntent::PageScrollRequested { pages: -1.0 });
    }
    if key_page_down {
        events.push(AppIntent::PageScrollRequested { pages: 1.0 });
    }

    events
}
