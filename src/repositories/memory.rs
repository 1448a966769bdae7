use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, to_document, Bson, Document},
    options::ReturnDocument,
    Client, Collection, Database,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::MongoDBConfig;
use crate::error::{AppError, Result};

/// A memory as it goes over the wire. `_id` is the hex form of the
/// backend-generated ObjectId; all content fields are optional and absent
/// ones are omitted from the JSON output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Fields outside the schema are stored and echoed back verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for create and update. Any subset of the fields may be
/// present; unknown fields are kept and persisted alongside the known ones.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MemoryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MemoryPayload {
    pub fn into_memory(self, id: ObjectId) -> Memory {
        Memory {
            id: id.to_hex(),
            location: self.location,
            date: self.date,
            description: self.description,
            image_url: self.image_url,
            extra: self.extra,
        }
    }
}

/// Stored document shape. Reads come back through this before being
/// converted to the wire form.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MemoryDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub location: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl From<MemoryDocument> for Memory {
    fn from(doc: MemoryDocument) -> Self {
        let extra = match Bson::Document(doc.extra).into_relaxed_extjson() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Memory {
            id: doc.id.to_hex(),
            location: doc.location,
            date: doc.date,
            description: doc.description,
            image_url: doc.image_url,
            extra,
        }
    }
}

#[async_trait]
pub trait MemoryRepository: Send + Sync {
    async fn insert(&self, payload: MemoryPayload) -> Result<Memory>;
    async fn find_all(&self) -> Result<Vec<Memory>>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Memory>>;
    async fn update_by_id(&self, id: &str, payload: MemoryPayload) -> Result<Option<Memory>>;
    async fn delete_by_id(&self, id: &str) -> Result<()>;
}

/// Establishes the MongoDB connection and pings the target database so
/// connectivity problems surface here instead of on the first request.
pub async fn connect(cfg: &MongoDBConfig) -> anyhow::Result<MongoMemoryRepository> {
    let client = Client::with_uri_str(&cfg.connection_uri).await?;
    let db = match &cfg.db_name {
        Some(name) => client.database(name),
        // mongoose falls back to "test" when the URI names no database
        None => client
            .default_database()
            .unwrap_or_else(|| client.database("test")),
    };
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(MongoMemoryRepository::new(db))
}

// MongoDB implementation
pub struct MongoMemoryRepository {
    collection: Collection<MemoryDocument>,
}

impl MongoMemoryRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection("memories"),
        }
    }
}

#[async_trait]
impl MemoryRepository for MongoMemoryRepository {
    async fn insert(&self, payload: MemoryPayload) -> Result<Memory> {
        let doc =
            to_document(&payload).map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let result = self
            .collection
            .clone_with_type::<Document>()
            .insert_one(doc)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("insert did not yield an ObjectId".to_string())
        })?;

        Ok(payload.into_memory(id))
    }

    async fn find_all(&self) -> Result<Vec<Memory>> {
        // No explicit sort, storage-native order.
        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut memories = Vec::new();
        while let Some(doc) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
        {
            memories.push(doc.into());
        }

        Ok(memories)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Memory>> {
        // A malformed id behaves exactly like a missing record.
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let found = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(found.map(Memory::from))
    }

    async fn update_by_id(&self, id: &str, payload: MemoryPayload) -> Result<Option<Memory>> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let set = to_document(&payload).map_err(|e| AppError::DatabaseError(e.to_string()))?;
        if set.is_empty() {
            // MongoDB rejects an empty $set; an empty body is a plain read.
            let found = self
                .collection
                .find_one(doc! { "_id": oid })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            return Ok(found.map(Memory::from));
        }

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(updated.map(Memory::from))
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        // Success regardless of whether anything matched.
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(());
        };

        self.collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
