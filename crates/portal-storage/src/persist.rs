//! Persisted portal entries
//!
//! The well-known keys and the helpers around them. Every helper degrades
//! silently on storage failure: remember-me simply does not persist, drafts
//! are simply not offered. Failures are logged, never surfaced to the user.

use portal_core::FormSnapshot;

use crate::store::DeviceStore;

/// Email remembered across sessions when the login checkbox is checked
pub const REMEMBERED_EMAIL: &str = "rememberedEmail";
/// Serialized in-progress profile edits
pub const PROFILE_DRAFT: &str = "profileDraft";
/// Opaque session markers, written by the login flow, cleared on logout
pub const TOKEN: &str = "token";
pub const USER_INFO: &str = "userInfo";

/// Draft autosave cadence while the profile editor is in edit mode
pub const DRAFT_AUTOSAVE_SECS: i64 = 30;

pub fn remember_email(store: &mut dyn DeviceStore, email: &str) {
    if let Err(err) = store.set(REMEMBERED_EMAIL, email) {
        tracing::warn!(%err, "could not save remembered email");
    }
}

pub fn forget_email(store: &mut dyn DeviceStore) {
    if let Err(err) = store.remove(REMEMBERED_EMAIL) {
        tracing::warn!(%err, "could not clear remembered email");
    }
}

pub fn load_remembered_email(store: &dyn DeviceStore) -> Option<String> {
    match store.get(REMEMBERED_EMAIL) {
        Ok(email) => email,
        Err(err) => {
            tracing::warn!(%err, "could not load remembered email");
            None
        }
    }
}

pub fn save_draft(store: &mut dyn DeviceStore, snapshot: &FormSnapshot) {
    let json = match snapshot.to_json() {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(%err, "could not serialize profile draft");
            return;
        }
    };
    if let Err(err) = store.set(PROFILE_DRAFT, &json) {
        tracing::warn!(%err, "could not save profile draft");
    }
}

pub fn load_draft(store: &dyn DeviceStore) -> Option<FormSnapshot> {
    let json = match store.get(PROFILE_DRAFT) {
        Ok(json) => json?,
        Err(err) => {
            tracing::warn!(%err, "could not load profile draft");
            return None;
        }
    };
    match FormSnapshot::from_json(&json) {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            tracing::warn!(%err, "stored profile draft is corrupt");
            None
        }
    }
}

pub fn clear_draft(store: &mut dyn DeviceStore) {
    if let Err(err) = store.remove(PROFILE_DRAFT) {
        tracing::warn!(%err, "could not clear profile draft");
    }
}

/// Logout: drop the opaque session markers
pub fn clear_session(store: &mut dyn DeviceStore) {
    for key in [TOKEN, USER_INFO] {
        if let Err(err) = store.remove(key) {
            tracing::warn!(key, %err, "could not clear session entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DeniedStore, MemoryStore};

    #[test]
    fn remember_and_forget_email() {
        let mut store = MemoryStore::new();
        remember_email(&mut store, "a@b.co");
        assert_eq!(load_remembered_email(&store).as_deref(), Some("a@b.co"));
        forget_email(&mut store);
        assert_eq!(load_remembered_email(&store), None);
    }

    #[test]
    fn denied_store_degrades_silently() {
        let mut store = DeniedStore;
        remember_email(&mut store, "a@b.co");
        assert_eq!(load_remembered_email(&store), None);
    }

    #[test]
    fn draft_round_trip() {
        let mut store = MemoryStore::new();
        let snapshot = FormSnapshot::from_entries(vec![
            ("firstName".to_string(), "Bhavesh".to_string()),
            ("city".to_string(), "Pune".to_string()),
        ]);
        save_draft(&mut store, &snapshot);
        let restored = load_draft(&store).unwrap();
        assert_eq!(restored.entries(), snapshot.entries());
        clear_draft(&mut store);
        assert!(load_draft(&store).is_none());
    }

    #[test]
    fn corrupt_draft_is_not_offered() {
        let mut store = MemoryStore::new();
        store.set(PROFILE_DRAFT, "not json").unwrap();
        assert!(load_draft(&store).is_none());
    }

    #[test]
    fn logout_clears_session_markers() {
        let mut store = MemoryStore::new();
        store.set(TOKEN, "opaque").unwrap();
        store.set(USER_INFO, "{}").unwrap();
        store.set(REMEMBERED_EMAIL, "a@b.co").unwrap();
        clear_session(&mut store);
        assert_eq!(store.get(TOKEN).unwrap(), None);
        assert_eq!(store.get(USER_INFO).unwrap(), None);
        // Remembered email survives logout
        assert!(store.get(REMEMBERED_EMAIL).unwrap().is_some());
    }
}
