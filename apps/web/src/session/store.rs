use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::session::Session;

struct Entry {
    session: Session,
    last_seen: Instant,
}

/// In-memory sessions keyed by the cookie id. Lost on restart.
/// A session idle for longer than the ttl is dropped.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Entry>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::default(),
            ttl,
        }
    }

    /// The stored session, or a fresh one for an unknown or expired id.
    pub async fn load(&self, id: &str) -> Session {
        let mut sessions = self.inner.write().await;
        let now = Instant::now();
        self.evict_if_idle(&mut sessions, id, now);
        match sessions.get_mut(id) {
            Some(entry) => {
                entry.last_seen = now;
                entry.session.clone()
            }
            None => Session::default(),
        }
    }

    /// Applies `f` to the session under the write lock. Last write wins.
    pub async fn update<R>(&self, id: &str, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut sessions = self.inner.write().await;
        let now = Instant::now();
        self.evict_if_idle(&mut sessions, id, now);
        let entry = sessions.entry(id.to_string()).or_insert_with(|| Entry {
            session: Session::default(),
            last_seen: now,
        });
        entry.last_seen = now;
        f(&mut entry.session)
    }

    pub async fn remove(&self, id: &str) {
        self.inner.write().await.remove(id);
    }

    /// Drops every idle session and returns how many went.
    pub async fn purge_idle(&self) -> usize {
        let mut sessions = self.inner.write().await;
        let now = Instant::now();
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.ttl);
        before - sessions.len()
    }

    pub async fn active_count(&self) -> usize {
        self.inner.read().await.len()
    }

    fn evict_if_idle(&self, sessions: &mut HashMap<String, Entry>, id: &str, now: Instant) {
        if sessions
            .get(id)
            .is_some_and(|entry| now.duration_since(entry.last_seen) >= self.ttl)
        {
            sessions.remove(id);
        }
    }
}
