use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// Ask for the current view without changing anything.
    #[serde(rename = "join")]
    Join,

    #[serde(rename = "start")]
    Start,

    #[serde(rename = "answer")]
    Answer { label: String },

    #[serde(rename = "previous")]
    Previous,

    #[serde(rename = "reset")]
    Reset,
}
