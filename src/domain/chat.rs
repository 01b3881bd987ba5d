//! Chat session types for the symptom triage conversation.
//!
//! A session owns its append-only history; isolating sessions from each
//! other is the caller's concern, clearing happens by dropping the session.

use serde::{Deserialize, Serialize};

/// Who produced a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    User,
    Bot,
}

/// One utterance in a triage conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Who spoke
    pub speaker: Speaker,

    /// What was said
    pub text: String,

    /// When the turn was recorded
    pub at: chrono::DateTime<chrono::Utc>,
}

impl ChatTurn {
    /// Record a turn at the current time.
    #[must_use]
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            at: chrono::Utc::now(),
        }
    }
}

/// One user's triage conversation: an identifier plus ordered turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    /// Unique session identifier (local only, never transmitted)
    pub id: String,

    /// When the session was opened
    pub started_at: chrono::DateTime<chrono::Utc>,

    turns: Vec<ChatTurn>,
}

impl ChatSession {
    /// Open a new session with a random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: uuid_v4(),
            started_at: chrono::Utc::now(),
            turns: Vec::new(),
        }
    }

    /// Append a user turn.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(ChatTurn::new(Speaker::User, text));
    }

    /// Append a bot turn.
    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.turns.push(ChatTurn::new(Speaker::Bot, text));
    }

    /// All turns in the order they were recorded.
    #[must_use]
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Number of recorded turns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether no turn has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a simple UUID v4 (random) using CSPRNG.
///
/// Uses ChaCha20Rng seeded from OS entropy to ensure cryptographic randomness
/// on all platforms. This prevents session id prediction.
fn uuid_v4() -> String {
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_entropy();
    let bytes: [u8; 16] = rng.gen();

    format!(
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3],
        bytes[4], bytes[5],
        (bytes[6] & 0x0f) | 0x40, bytes[7],
        (bytes[8] & 0x3f) | 0x80, bytes[9],
        bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15]
    )
}
