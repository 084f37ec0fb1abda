//! A catalog whose replies are scripted per (title, page), for driving the
//! session through arbitrary response orderings.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bookverse_catalog::{CatalogClient, CatalogError, Result, SearchQuery};
use bookverse_types::{BookRecord, SearchPage};
use tokio::sync::{Notify, oneshot};

enum Reply {
    Ready(Result<SearchPage>),
    Gated(oneshot::Receiver<Result<SearchPage>>),
}

#[derive(Default)]
pub struct ScriptedCatalog {
    replies: Mutex<HashMap<(String, u32), Reply>>,
    requests: Mutex<Vec<SearchQuery>>,
    served: Notify,
}

impl ScriptedCatalog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answer the next request for `title`/`page` immediately.
    pub fn reply(&self, title: &str, page: u32, result: Result<SearchPage>) {
        self.replies
            .lock()
            .unwrap()
            .insert((title.to_string(), page), Reply::Ready(result));
    }

    /// Hold the next request for `title`/`page` until the returned sender fires.
    pub fn gate(&self, title: &str, page: u32) -> oneshot::Sender<Result<SearchPage>> {
        let (tx, rx) = oneshot::channel();
        self.replies
            .lock()
            .unwrap()
            .insert((title.to_string(), page), Reply::Gated(rx));
        tx
    }

    pub fn requests(&self) -> Vec<SearchQuery> {
        self.requests.lock().unwrap().clone()
    }

    /// Resolves once a request has returned its reply.
    pub async fn wait_served(&self) {
        self.served.notified().await;
    }
}

#[async_trait]
impl CatalogClient for ScriptedCatalog {
    async fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        self.requests.lock().unwrap().push(query.clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .remove(&(query.title().to_string(), query.page()));

        let result = match reply {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Gated(rx)) => match rx.await {
                Ok(result) => result,
                Err(_) => Err(CatalogError::Status { status: 599 }),
            },
            None => Ok(SearchPage::default()),
        };

        self.served.notify_one();
        result
    }
}

/// A page of `count` records keyed `/works/{prefix}{n}`.
pub fn page_of(prefix: &str, count: usize, num_found: u64) -> SearchPage {
    SearchPage {
        docs: (0..count)
            .map(|n| {
                BookRecord::new(
                    format!("/works/{}{}", prefix, n),
                    format!("{} {}", prefix, n),
                )
            })
            .collect(),
        num_found,
    }
}

pub fn keys(records: &[BookRecord]) -> Vec<String> {
    records.iter().map(|record| record.key.clone()).collect()
}
