use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::enums::client_message::ClientMessage;
use crate::enums::server_event::ServerEvent;
use crate::error::QuizError;
use crate::states::quiz_state::{Phase, QuizState};

/// Apply one client message to the connection's session and push the
/// resulting events. A rejected operation produces an `error` event followed
/// by the unchanged view.
pub async fn handle_client_message(
    msg: ClientMessage,
    session: &mut QuizState,
    tx: &mpsc::Sender<ServerEvent>,
) {
    debug!(?msg, phase = %session.phase(), "client message");

    let outcome = match msg {
        ClientMessage::Join => Ok(()),
        ClientMessage::Start => session.start(),
        ClientMessage::Answer { label } => session.answer(&label),
        ClientMessage::Previous => session.previous(),
        ClientMessage::Reset => {
            session.reset();
            Ok(())
        }
    };

    if let Err(err) = outcome {
        warn!(kind = err.kind(), %err, "rejected client message");
        let _ = tx.send(error_event(&err)).await;
    }

    for event in snapshot_events(session) {
        if tx.send(event).await.is_err() {
            break;
        }
    }
}

/// Events describing the session as it stands: the view, plus the results
/// once the quiz is complete.
pub fn snapshot_events(session: &QuizState) -> Vec<ServerEvent> {
    let mut events = vec![ServerEvent::View {
        phase: session.phase(),
        question_index: session.current_index(),
        question_count: session.catalog().question_count(),
        progress: session.progress(),
        question: session.current_question().cloned(),
        selected: session.current_answer().cloned(),
    }];

    if session.phase() == Phase::Complete {
        let summary = session.summary();
        match session.catalog().profile_definition(summary.dominant.as_str()) {
            Ok(profile) => events.push(ServerEvent::Results {
                profile: profile.clone(),
                summary,
            }),
            Err(err) => events.push(error_event(&err)),
        }
    }

    events
}

fn error_event(err: &QuizError) -> ServerEvent {
    ServerEvent::Error {
        kind: err.kind().to_string(),
        message: err.to_string(),
    }
}
