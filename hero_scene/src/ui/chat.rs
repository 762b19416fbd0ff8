//! Chat panel: launcher toggle, message log, input row. Messages travel
//! through the `ChatChannel`; replies are drained back each frame.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::chat::{ChatChannel, NETWORK_ERROR_REPLY};

const GREETING: &str =
    "Hi! I'm the portfolio AI assistant. Ask me about skills, projects, or experience.";
const THINKING: &str = "Thinking…";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChatRole {
    User,
    Bot,
}

#[derive(Clone, Debug)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
}

/// Panel state: visibility, draft input, message log, and whether a reply
/// is pending (the input is disabled while waiting).
#[derive(Resource, Default)]
pub struct ChatPanelState {
    pub open: bool,
    pub draft: String,
    pub log: Vec<ChatEntry>,
    pub waiting: bool,
}

impl ChatPanelState {
    /// Opens or closes the panel; the greeting appears on first open.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open && self.log.is_empty() {
            self.log.push(ChatEntry {
                role: ChatRole::Bot,
                text: GREETING.to_string(),
            });
        }
    }

    /// Appends the user message and the thinking placeholder, returning the
    /// trimmed message to send. Empty drafts and pending replies are no-ops.
    pub fn submit(&mut self) -> Option<String> {
        if self.waiting {
            return None;
        }
        let message = self.draft.trim().to_string();
        if message.is_empty() {
            return None;
        }
        self.draft.clear();
        self.log.push(ChatEntry {
            role: ChatRole::User,
            text: message.clone(),
        });
        self.log.push(ChatEntry {
            role: ChatRole::Bot,
            text: THINKING.to_string(),
        });
        self.waiting = true;
        Some(message)
    }

    /// Replaces the thinking placeholder with the received reply.
    pub fn receive(&mut self, reply: String) {
        self.waiting = false;
        if let Some(last) = self.log.last_mut() {
            if last.role == ChatRole::Bot && last.text == THINKING {
                last.text = reply;
                return;
            }
        }
        self.log.push(ChatEntry {
            role: ChatRole::Bot,
            text: reply,
        });
    }
}

pub fn chat_plugin(app: &mut App) {
    app.init_resource::<ChatPanelState>()
        .add_systems(Update, (drain_replies_system, chat_panel_system).chain());
}

fn drain_replies_system(channel: Option<Res<ChatChannel>>, mut state: ResMut<ChatPanelState>) {
    let Some(channel) = channel else {
        return;
    };
    while let Ok(reply) = channel.incoming.try_recv() {
        state.receive(reply);
    }
}

fn chat_panel_system(
    mut contexts: EguiContexts,
    mut state: ResMut<ChatPanelState>,
    channel: Option<Res<ChatChannel>>,
) {
    let ctx = contexts.ctx_mut();

    egui::Window::new("chat-launcher")
        .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(panel_frame())
        .show(ctx, |ui| {
            let label = if state.open { "Close" } else { "AI Assistant" };
            if ui.button(label).clicked() {
                state.toggle();
            }
        });

    if !state.open {
        return;
    }

    egui::Window::new("Portfolio AI Assistant")
        .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -52.0])
        .resizable(false)
        .collapsible(false)
        .default_width(300.0)
        .frame(panel_frame())
        .show(ctx, |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);

            egui::ScrollArea::vertical()
                .max_height(220.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in &state.log {
                        let (prefix, color) = match entry.role {
                            ChatRole::User => ("you", egui::Color32::from_rgb(200, 220, 240)),
                            ChatRole::Bot => ("bot", egui::Color32::from_rgb(100, 220, 180)),
                        };
                        ui.label(
                            egui::RichText::new(format!("{prefix}  {}", entry.text)).color(color),
                        );
                        ui.add_space(2.0);
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let input = ui.add_enabled(
                    !state.waiting,
                    egui::TextEdit::singleline(&mut state.draft)
                        .hint_text("Ask about projects, skills, or AI..."),
                );
                let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let clicked = ui
                    .add_enabled(!state.waiting, egui::Button::new("Send"))
                    .clicked();

                if submitted || clicked {
                    if let Some(message) = state.submit() {
                        send_message(&mut state, channel.as_deref(), message);
                    }
                }
            });
        });
}

fn panel_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 220))
        .inner_margin(egui::Margin::same(10))
        .corner_radius(egui::CornerRadius::same(6))
}

/// Hands the message to the worker; a closed or full channel collapses to
/// the generic network failure reply, matching the transport path.
fn send_message(state: &mut ChatPanelState, channel: Option<&ChatChannel>, message: String) {
    match channel {
        Some(channel) if channel.outgoing.try_send(message).is_ok() => {}
        _ => state.receive(NETWORK_ERROR_REPLY.to_string()),
    }
}
