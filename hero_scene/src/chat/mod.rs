mod client;
mod model;

use crossbeam_channel::{Receiver, Sender};
use url::Url;

pub use client::ChatClient;
pub use model::{
    ChatRequest, ChatResponse, EMPTY_RESPONSE_REPLY, INVALID_RESPONSE_REPLY, NETWORK_ERROR_REPLY,
};

/// Configuration for spawning a chat transport.
#[derive(Clone, Debug)]
pub struct ChatConfig {
    pub endpoint: Url,
}

/// Interface for chat transports.
pub trait ChatTransport: Send + 'static {
    fn spawn(config: ChatConfig) -> ChatChannel;
}

/// Bevy resource holding both sides of the chat worker's channels.
/// The panel pushes outgoing messages and drains incoming replies each frame.
#[derive(bevy::prelude::Resource)]
pub struct ChatChannel {
    pub outgoing: Sender<String>,
    pub incoming: Receiver<String>,
}

/// Create the chat channel and spawn the HTTP worker on a dedicated thread.
pub fn init_chat_channel(config: ChatConfig) -> ChatChannel {
    ChatClient::spawn(config)
}
