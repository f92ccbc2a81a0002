pub mod config;
pub mod store;

pub use config::MongoConfig;
pub use store::MongoPostStore;
