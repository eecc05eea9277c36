pub mod connection;
pub mod kv;
pub mod local;
pub mod offers;

pub use connection::Database;
pub use kv::{KeyValueStore, MemoryStore};
pub use local::{keys, LocalStorage};
pub use offers::OfferRepository;
