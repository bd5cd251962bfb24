use super::TimelineApp;
use crate::services::timeline::KeyCommand;

impl TimelineApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let (commands, previous, next, today, clear) = ctx.input(|i| {
            let plain = !i.modifiers.ctrl && !i.modifiers.command;
            let mut commands = Vec::new();
            if plain && i.key_pressed(egui::Key::ArrowLeft) {
                commands.push(KeyCommand::PanLeft);
            }
            if plain && i.key_pressed(egui::Key::ArrowRight) {
                commands.push(KeyCommand::PanRight);
            }
            if i.key_pressed(egui::Key::Home) {
                commands.push(KeyCommand::Start);
            }
            if i.key_pressed(egui::Key::End) {
                commands.push(KeyCommand::End);
            }

            (
                commands,
                i.modifiers.ctrl && i.key_pressed(egui::Key::ArrowLeft),
                i.modifiers.ctrl && i.key_pressed(egui::Key::ArrowRight),
                i.modifiers.ctrl && i.key_pressed(egui::Key::T),
                i.key_pressed(egui::Key::Escape),
            )
        });

        for command in commands {
            self.engine.on_key(command);
        }

        if previous {
            self.navigate_previous();
        }
        if next {
            self.navigate_next();
        }
        if today {
            self.jump_to_today();
        }
        if clear {
            self.active_index = None;
        }
    }
}
