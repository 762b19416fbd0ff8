//! Chat endpoint client: dedicated thread + reqwest → reply strings.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use url::Url;

use crate::chat::model::{ChatRequest, ChatResponse, INVALID_RESPONSE_REPLY, NETWORK_ERROR_REPLY};
use crate::chat::{ChatChannel, ChatConfig, ChatTransport};

/// HTTP chat transport posting `{"message": ...}` to the configured
/// endpoint and decoding `{"reply": ...}` / `{"error": ...}` bodies.
pub struct ChatClient;

impl ChatTransport for ChatClient {
    fn spawn(config: ChatConfig) -> ChatChannel {
        let (outgoing_tx, outgoing_rx) = crossbeam_channel::bounded::<String>(16);
        let (incoming_tx, incoming_rx) = crossbeam_channel::bounded::<String>(16);

        thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(err) => {
                    eprintln!("synapse: failed to build tokio runtime: {err}");
                    return;
                }
            };
            rt.block_on(client_loop(config.endpoint, outgoing_rx, incoming_tx));
        });

        ChatChannel {
            outgoing: outgoing_tx,
            incoming: incoming_rx,
        }
    }
}

async fn client_loop(endpoint: Url, outgoing: Receiver<String>, incoming: Sender<String>) {
    let client = reqwest::Client::new();
    while let Ok(message) = outgoing.recv() {
        let reply = send_message(&client, endpoint.clone(), message).await;
        if incoming.send(reply).is_err() {
            return;
        }
    }
}

/// One request/response exchange. Every failure mode collapses into a
/// user-visible fallback string; nothing is retried or escalated.
async fn send_message(client: &reqwest::Client, endpoint: Url, message: String) -> String {
    let response = match client
        .post(endpoint)
        .json(&ChatRequest { message })
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => {
            eprintln!("synapse: chat request failed: {err}");
            return NETWORK_ERROR_REPLY.to_string();
        }
    };

    match response.json::<ChatResponse>().await {
        Ok(body) => body.into_display_text(),
        Err(err) => {
            eprintln!("synapse: chat response was not valid JSON: {err}");
            INVALID_RESPONSE_REPLY.to_string()
        }
    }
}
