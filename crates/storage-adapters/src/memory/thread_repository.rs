use std::sync::Arc;

use async_trait::async_trait;
use domains::{
    AddThread, AddedThread, DetailThread, DomainError, IdGenerator, Result, ThreadRepository,
};

use super::store::{MemoryStore, ThreadRecord};
use crate::now_iso;

pub struct InMemoryThreadRepository {
    store: Arc<MemoryStore>,
    id_generator: Arc<dyn IdGenerator>,
}

impl InMemoryThreadRepository {
    pub fn new(store: Arc<MemoryStore>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { store, id_generator }
    }
}

#[async_trait]
impl ThreadRepository for InMemoryThreadRepository {
    #[tracing::instrument(skip_all, fields(owner = %thread.owner))]
    async fn add_thread(&self, thread: AddThread) -> Result<AddedThread> {
        if !self.store.users.contains_key(&thread.owner) {
            return Err(super::foreign_key_violation("threads", "threads_owner_fkey"));
        }

        let record = ThreadRecord {
            id: format!("thread-{}", self.id_generator.generate()),
            title: thread.title,
            body: thread.body,
            created_at: now_iso(),
            owner: thread.owner,
        };
        let added = AddedThread {
            id: record.id.clone(),
            title: record.title.clone(),
            owner: record.owner.clone(),
        };
        self.store.threads.insert(record.id.clone(), record);

        Ok(added)
    }

    #[tracing::instrument(skip(self))]
    async fn check_availability_thread(&self, id: &str) -> Result<()> {
        if self.store.threads.contains_key(id) {
            Ok(())
        } else {
            Err(DomainError::not_found("Thread tidak ditemukan"))
        }
    }

    #[tracing::instrument(skip(self))]
    async fn get_detail_thread(&self, id: &str) -> Result<DetailThread> {
        // Inner join: a thread whose owner is gone has no detail row.
        let thread = self.store.find_thread(id);
        let username = thread.as_ref().and_then(|t| self.store.username_of(&t.owner));

        match (thread, username) {
            (Some(thread), Some(username)) => Ok(DetailThread {
                id: thread.id,
                title: thread.title,
                body: thread.body,
                date: thread.created_at,
                username,
            }),
            _ => Err(DomainError::not_found("Thread tidak ditemukan")),
        }
    }
}
