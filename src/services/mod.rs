pub mod memory_service;

pub use memory_service::MemoryService;
