// In-memory attempt storage, keyed by the token carried in the attempt cookie

use std::{collections::HashMap, sync::Arc, time::Duration};

use tokio::{sync::Mutex, time::Instant};
use ulid::Ulid;

use crate::{
    names,
    services::{Attempt, QuizError},
};

struct Entry {
    attempt: Attempt,
    touched: Instant,
}

impl Entry {
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.touched) >= ttl
    }
}

/// Attempts idle for longer than `ttl` are dropped, matching the cookie lifetime.
#[derive(Clone)]
pub struct AttemptStore {
    attempts: Arc<Mutex<HashMap<String, Entry>>>,
    ttl: Duration,
}

impl Default for AttemptStore {
    fn default() -> Self {
        Self::with_ttl(Duration::from_secs(names::ATTEMPT_MAX_AGE_SECS))
    }
}

impl AttemptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            attempts: Arc::default(),
            ttl,
        }
    }

    /// Stores `attempt` under a fresh token and returns the token. Expired
    /// attempts are swept first.
    pub async fn insert(&self, attempt: Attempt) -> String {
        let token = Ulid::new().to_string();
        let quiz_id = attempt.quiz().id;
        let now = Instant::now();

        let mut attempts = self.attempts.lock().await;
        let before = attempts.len();
        attempts.retain(|_, entry| !entry.is_expired(now, self.ttl));
        let swept = before - attempts.len();
        attempts.insert(
            token.clone(),
            Entry {
                attempt,
                touched: now,
            },
        );
        drop(attempts);

        if swept > 0 {
            tracing::debug!("swept {swept} expired attempts");
        }
        tracing::info!("attempt started for quiz={quiz_id}");
        token
    }

    /// Runs `f` against the attempt behind `token`, refreshing its lifetime.
    pub async fn with<T>(
        &self,
        token: &str,
        f: impl FnOnce(&mut Attempt) -> Result<T, QuizError>,
    ) -> Result<T, QuizError> {
        let now = Instant::now();
        let mut attempts = self.attempts.lock().await;

        if attempts
            .get(token)
            .is_some_and(|entry| entry.is_expired(now, self.ttl))
        {
            attempts.remove(token);
            tracing::info!("attempt expired");
            return Err(QuizError::SessionExpired);
        }

        let entry = attempts.get_mut(token).ok_or(QuizError::SessionExpired)?;
        entry.touched = now;
        f(&mut entry.attempt)
    }

    pub async fn remove(&self, token: &str) -> Option<Attempt> {
        self.attempts
            .lock()
            .await
            .remove(token)
            .map(|entry| entry.attempt)
    }

    pub async fn len(&self) -> usize {
        self.attempts.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::models::{Question, Quiz};

    fn attempt() -> Attempt {
        let quiz = Quiz {
            id: 1,
            title: "Store".to_string(),
            description: String::new(),
            questions: vec![Question {
                id: 1,
                question: "Q".to_string(),
                options: vec!["a".to_string(), "b".to_string()],
                correct_answer: "a".to_string(),
            }],
        };
        Attempt::start(&quiz, &mut StdRng::seed_from_u64(0)).unwrap()
    }

    #[tokio::test]
    async fn insert_then_access_by_token() {
        let store = AttemptStore::new();
        let token = store.insert(attempt()).await;

        let index = store
            .with(&token, |attempt| Ok(attempt.current_index()))
            .await
            .unwrap();
        assert_eq!(index, 0);
    }

    #[tokio::test]
    async fn unknown_token_is_session_expired() {
        let store = AttemptStore::new();
        let res = store.with("missing", |_| Ok(())).await;
        assert_eq!(res, Err(QuizError::SessionExpired));
    }

    #[tokio::test]
    async fn mutations_persist_between_calls() {
        let store = AttemptStore::new();
        let token = store.insert(attempt()).await;

        store
            .with(&token, |attempt| attempt.record_answer(1, "A"))
            .await
            .unwrap();
        let answered = store
            .with(&token, |attempt| Ok(attempt.answers().len()))
            .await
            .unwrap();
        assert_eq!(answered, 1);
    }

    #[tokio::test]
    async fn remove_drops_attempt() {
        let store = AttemptStore::new();
        let token = store.insert(attempt()).await;
        let other = store.insert(attempt()).await;
        assert_ne!(token, other);
        assert_eq!(store.len().await, 2);

        assert!(store.remove(&token).await.is_some());
        assert!(store.remove(&token).await.is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn idle_attempt_expires_and_is_dropped() {
        let store = AttemptStore::with_ttl(Duration::from_secs(60));
        let token = store.insert(attempt()).await;

        tokio::time::advance(Duration::from_secs(61)).await;

        let res = store.with(&token, |_| Ok(())).await;
        assert_eq!(res, Err(QuizError::SessionExpired));
        assert!(store.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn access_keeps_attempt_alive() {
        let store = AttemptStore::with_ttl(Duration::from_secs(60));
        let token = store.insert(attempt()).await;

        tokio::time::advance(Duration::from_secs(40)).await;
        store.with(&token, |_| Ok(())).await.unwrap();
        tokio::time::advance(Duration::from_secs(40)).await;

        assert!(store.with(&token, |_| Ok(())).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn insert_sweeps_abandoned_attempts() {
        let store = AttemptStore::with_ttl(Duration::from_secs(60));
        for _ in 0..50 {
            store.insert(attempt()).await;
        }
        assert_eq!(store.len().await, 50);

        tokio::time::advance(Duration::from_secs(61)).await;
        let fresh = store.insert(attempt()).await;

        assert_eq!(store.len().await, 1);
        assert!(store.with(&fresh, |_| Ok(())).await.is_ok());
    }

    #[test]
    fn default_lifetime_matches_cookie() {
        assert_eq!(
            AttemptStore::default().ttl,
            Duration::from_secs(names::ATTEMPT_MAX_AGE_SECS)
        );
    }
}
