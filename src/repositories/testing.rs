//! In-memory repository used by unit tests in place of a running MongoDB.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::error::Result;
use crate::repositories::{Memory, MemoryPayload, MemoryRepository};

#[derive(Default)]
pub struct InMemoryMemoryRepository {
    // BTreeMap keyed by insertion counter keeps list order stable.
    records: Mutex<BTreeMap<u64, Memory>>,
    next: Mutex<u64>,
}

impl InMemoryMemoryRepository {
    fn apply(payload: MemoryPayload, memory: &mut Memory) {
        if let Some(location) = payload.location {
            memory.location = Some(location);
        }
        if let Some(date) = payload.date {
            memory.date = Some(date);
        }
        if let Some(description) = payload.description {
            memory.description = Some(description);
        }
        if let Some(image_url) = payload.image_url {
            memory.image_url = Some(image_url);
        }
        memory.extra.extend(payload.extra);
    }
}

#[async_trait]
impl MemoryRepository for InMemoryMemoryRepository {
    async fn insert(&self, payload: MemoryPayload) -> Result<Memory> {
        let memory = payload.into_memory(ObjectId::new());
        let mut next = self.next.lock().unwrap();
        self.records.lock().unwrap().insert(*next, memory.clone());
        *next += 1;
        Ok(memory)
    }

    async fn find_all(&self) -> Result<Vec<Memory>> {
        Ok(self.records.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Memory>> {
        if ObjectId::parse_str(id).is_err() {
            return Ok(None);
        }
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn update_by_id(&self, id: &str, payload: MemoryPayload) -> Result<Option<Memory>> {
        if ObjectId::parse_str(id).is_err() {
            return Ok(None);
        }
        let mut records = self.records.lock().unwrap();
        if let Some(memory) = records.values_mut().find(|m| m.id == id) {
            Self::apply(payload, memory);
            return Ok(Some(memory.clone()));
        }
        Ok(None)
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        if ObjectId::parse_str(id).is_err() {
            return Ok(());
        }
        let mut records = self.records.lock().unwrap();
        records.retain(|_, m| m.id != id);
        Ok(())
    }
}
