mod chat;
mod hud;

pub use chat::chat_plugin;
pub use hud::{hud_plugin, hud_tick_system, HudState};
