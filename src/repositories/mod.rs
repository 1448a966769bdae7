pub mod memory;
#[cfg(test)]
pub mod testing;

pub use memory::{
    connect, Memory, MemoryDocument, MemoryPayload, MemoryRepository, MongoMemoryRepository,
};
