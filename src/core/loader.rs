//! Topic content loading with per-session memoization.
//!
//! The loader sits between the views and a [`ContentSource`]. The topics
//! index is fetched once; topic documents are fetched on first use and
//! kept for the rest of the session, keyed by id.
//!
//! All state lives in `RefCell`s: the app runs on the browser's single
//! event loop, and no borrow is held across an `.await`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{ContentTrust, TOPICS_INDEX_PATH, topic_path};
use crate::core::error::{ContentError, FetchError, LoadError};
use crate::models::{Topic, TopicsIndex};

/// Somewhere content documents can be fetched from, by relative path.
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}

/// Check that a topic id is a plain file stem: ASCII letters, digits,
/// `-` and `_`. Anything else could leave the data directory or change
/// the fetched URL.
pub fn validate_topic_id(id: &str) -> Result<(), ContentError> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(ContentError::InvalidTopicId(id.to_string()))
    }
}

/// Memoizing loader for the topics index and topic documents.
///
/// Concurrent [`load_topic`](Self::load_topic) calls for the same id are
/// not merged: each one fetches, and whichever finishes last overwrites
/// an equal cache entry.
pub struct ContentLoader<S> {
    source: S,
    trust: ContentTrust,
    index: RefCell<Option<Arc<TopicsIndex>>>,
    topics: RefCell<HashMap<String, Arc<Topic>>>,
}

impl<S: ContentSource> ContentLoader<S> {
    pub fn new(source: S, trust: ContentTrust) -> Self {
        Self {
            source,
            trust,
            index: RefCell::new(None),
            topics: RefCell::new(HashMap::new()),
        }
    }

    /// The topics index, if it has been loaded.
    pub fn index(&self) -> Option<Arc<TopicsIndex>> {
        self.index.borrow().clone()
    }

    /// A topic that is already in the cache.
    pub fn cached_topic(&self, id: &str) -> Option<Arc<Topic>> {
        self.topics.borrow().get(id).cloned()
    }

    /// Fetch the topics index, once per session.
    ///
    /// On failure the error is logged and the index stays unset.
    pub async fn load_index(&self) -> Result<Arc<TopicsIndex>, LoadError> {
        if let Some(index) = self.index() {
            return Ok(index);
        }

        match self.fetch_index().await {
            Ok(index) => {
                if index.is_empty() {
                    tracing::warn!(path = TOPICS_INDEX_PATH, "topics index is empty");
                }
                tracing::info!(topics = index.len(), "topics index loaded");
                let index = Arc::new(index);
                *self.index.borrow_mut() = Some(index.clone());
                Ok(index)
            }
            Err(err) => {
                tracing::error!(path = TOPICS_INDEX_PATH, error = %err, "failed to load topics index");
                Err(err)
            }
        }
    }

    /// Return a topic, fetching and caching it on first use.
    ///
    /// Failures are logged and returned; nothing is cached for them.
    pub async fn load_topic(&self, id: &str) -> Result<Arc<Topic>, LoadError> {
        if let Some(topic) = self.cached_topic(id) {
            tracing::debug!(topic = id, "topic served from cache");
            return Ok(topic);
        }

        match self.fetch_topic(id).await {
            Ok(topic) => {
                tracing::info!(topic = id, questions = topic.quiz.len(), "topic loaded");
                let topic = Arc::new(topic);
                self.topics
                    .borrow_mut()
                    .insert(id.to_string(), topic.clone());
                Ok(topic)
            }
            Err(err) => {
                tracing::error!(topic = id, error = %err, "failed to load topic");
                Err(err)
            }
        }
    }

    async fn fetch_index(&self) -> Result<TopicsIndex, LoadError> {
        let text = self.source.fetch_text(TOPICS_INDEX_PATH).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn fetch_topic(&self, id: &str) -> Result<Topic, LoadError> {
        validate_topic_id(id)?;

        let text = self.source.fetch_text(&topic_path(id)).await?;
        let mut topic: Topic = serde_json::from_str(&text)?;
        if topic.id.is_empty() {
            topic.id = id.to_string();
        }
        topic.validate()?;

        Ok(topic.with_trust(self.trust))
    }
}
