mod store;

pub use store::MemoryPostStore;
