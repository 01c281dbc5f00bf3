//! Type-safe key-value persistence layer for the Vraxia storefront.
//!
//! Carts are scoped to a shopper session and must survive a process
//! restart, so every mutation is written back through a [`KvStore`]. The
//! store speaks JSON for any `Serialize`/`DeserializeOwned` type.
//!
//! # Example
//!
//! ```rust,ignore
//! use vraxia_store::{KvStore, MemoryStore, SessionId, cart_key};
//!
//! let store = MemoryStore::new();
//! let session = SessionId::generate();
//!
//! store.set(&cart_key(&session), &cart)?;
//! let cart: Option<Cart> = store.get(&cart_key(&session))?;
//! ```

mod error;
mod kv;
mod session;

pub use error::StoreError;
pub use kv::{KvStore, MemoryStore};
pub use session::{cart_key, SessionId};
