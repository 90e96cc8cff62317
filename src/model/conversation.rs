//! Conversation types: static transcripts with contacts.

use serde::{Deserialize, Serialize};

/// A thread with one contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub status: Presence,
    pub last_message: String,

    /// In the order they were sent.
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub text: String,

    /// Display string, not a parsed time (`11:45 AM`, `Yesterday`).
    pub timestamp: String,

    /// Written by the local user.
    pub is_me: bool,
}
