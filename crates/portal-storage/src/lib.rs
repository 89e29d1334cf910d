//! Portal Storage: device-local persistence that may refuse to work
//!
//! Thin key/value layer over whatever the device offers. The portal never
//! depends on it succeeding: a failed read or write is logged and the
//! feature quietly does nothing.

pub mod persist;
pub mod store;

pub use persist::{
    clear_draft, clear_session, forget_email, load_draft, load_remembered_email, remember_email,
    save_draft, DRAFT_AUTOSAVE_SECS, PROFILE_DRAFT, REMEMBERED_EMAIL, TOKEN, USER_INFO,
};
pub use store::{DeniedStore, DeviceStore, MemoryStore, StorageError};
