//! Server-side home for the state the news page used to keep per tab: the
//! article the reader currently has open and the Q&A history attached to it.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::ai::client::GenerationError;
use crate::models::news::{NewsItem, QaExchange};

/// Shown in place of an answer when the generation call fails, so every
/// submitted question still produces exactly one exchange.
pub const FALLBACK_ANSWER: &str =
    "Sorry, I couldn't answer that question right now. Please try again.";

/// Idle sessions are dropped after this long.
const SESSION_TTL_MINS: i64 = 60;

#[derive(Default)]
pub struct ReaderSession {
    selected: Option<NewsItem>,
    qa_history: Vec<QaExchange>,
}

impl ReaderSession {
    /// Make `item` the open article. Any Q&A belonged to the previous
    /// article, so the history resets.
    pub fn select_article(&mut self, item: NewsItem) {
        self.selected = Some(item);
        self.qa_history.clear();
    }

    pub fn selected(&self) -> Option<&NewsItem> {
        self.selected.as_ref()
    }

    pub fn history(&self) -> &[QaExchange] {
        &self.qa_history
    }

    /// Append one exchange for `question`, substituting the apologetic
    /// fallback when generation failed rather than dropping the turn.
    pub fn record_exchange(
        &mut self,
        question: &str,
        result: Result<String, GenerationError>,
    ) -> QaExchange {
        let answer = match result {
            Ok(answer) => answer,
            Err(_) => FALLBACK_ANSWER.to_string(),
        };
        let exchange = QaExchange {
            question: question.trim().to_string(),
            answer,
            timestamp: Utc::now(),
        };
        self.qa_history.push(exchange.clone());
        exchange
    }
}

struct SessionSlot {
    session: Arc<Mutex<ReaderSession>>,
    last_seen: DateTime<Utc>,
}

/// Reader sessions keyed by the browser's session id. Each session sits
/// behind its own mutex; handlers use `try_lock` so a second request while a
/// generation is in flight is refused instead of queued.
#[derive(Default)]
pub struct ReaderSessionStore {
    sessions: DashMap<String, SessionSlot>,
}

impl ReaderSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self, id: &str) -> Arc<Mutex<ReaderSession>> {
        self.prune_idle();
        let mut slot = self
            .sessions
            .entry(id.to_string())
            .or_insert_with(|| SessionSlot {
                session: Arc::new(Mutex::new(ReaderSession::default())),
                last_seen: Utc::now(),
            });
        slot.last_seen = Utc::now();
        slot.session.clone()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    fn prune_idle(&self) {
        let cutoff = Utc::now() - Duration::minutes(SESSION_TTL_MINS);
        self.sessions.retain(|_, slot| slot.last_seen > cutoff);
    }
}
