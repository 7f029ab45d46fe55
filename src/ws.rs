use axum::{
    extract::{
        State,
        ws::{Message, Utf8Bytes, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::client_message::handle_client_message;
use crate::enums::client_message::ClientMessage;
use crate::enums::server_event::ServerEvent;
use crate::states::app_state::AppState;
use crate::states::quiz_state::QuizState;

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(stream: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = stream.split();
    let (tx, mut rx) = mpsc::channel::<ServerEvent>(state.event_buffer);

    info!("quiz session opened");

    // task: send this session's events to its client
    let send_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let json = match serde_json::to_string(&event) {
                Ok(j) => j,
                Err(_) => continue,
            };
            if sender
                .send(Message::Text(Utf8Bytes::from(json)))
                .await
                .is_err()
            {
                break;
            }
        }
    });

    // task: receive client messages; the session lives and dies here
    let mut session = QuizState::new(state.catalog.clone());
    let recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            if let Message::Text(text) = msg {
                match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(parsed) => handle_client_message(parsed, &mut session, &tx).await,
                    Err(err) => debug!(%err, "ignoring unparseable frame"),
                }
            }
        }
        session.phase()
    });

    let (_, last_phase) = tokio::join!(send_task, recv_task);
    if let Ok(phase) = last_phase {
        info!(%phase, "quiz session closed");
    }
}
