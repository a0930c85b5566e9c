//! Feedback shown around the auth forms: per-field validation messages and
//! general banners. The store is plain data; pages wrap it in a signal and
//! the components render from it.
//!
//! Clearing is a two-step cycle so messages can fade out before they go away:
//! `begin_clear` hides everything and returns an epoch, the caller schedules
//! `finish_clear(epoch)` after [`FEEDBACK_CLEAR_MS`], and a newer cycle
//! supersedes any pending removal.

use crate::features::auth::validate::Field;

/// Delay between hiding feedback and removing it, in milliseconds.
pub const FEEDBACK_CLEAR_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
    Info,
}

/// Validation message attached to a single field. At most one per field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldMessage {
    pub field: Field,
    pub message: String,
    pub visible: bool,
}

/// Message shown at the top of the form, newest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerMessage {
    pub kind: BannerKind,
    pub message: String,
    pub visible: bool,
}

#[derive(Clone, Debug, Default)]
pub struct FeedbackStore {
    fields: Vec<FieldMessage>,
    banners: Vec<BannerMessage>,
    clear_epoch: u64,
}

impl FeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message for `field`, re-using an existing entry if present.
    pub fn set_field_error(&mut self, field: Field, message: impl Into<String>) {
        let message = message.into();
        if let Some(entry) = self.fields.iter_mut().find(|entry| entry.field == field) {
            entry.message = message;
            entry.visible = true;
        } else {
            self.fields.push(FieldMessage {
                field,
                message,
                visible: true,
            });
        }
    }

    pub fn field_error(&self, field: Field) -> Option<&FieldMessage> {
        self.fields.iter().find(|entry| entry.field == field)
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push_banner(BannerKind::Error, message.into());
    }

    pub fn push_success(&mut self, message: impl Into<String>) {
        self.push_banner(BannerKind::Success, message.into());
    }

    pub fn push_info(&mut self, message: impl Into<String>) {
        self.push_banner(BannerKind::Info, message.into());
    }

    fn push_banner(&mut self, kind: BannerKind, message: String) {
        self.banners.insert(
            0,
            BannerMessage {
                kind,
                message,
                visible: true,
            },
        );
    }

    pub fn banners(&self) -> &[BannerMessage] {
        &self.banners
    }

    /// Hides every message and starts a new clear cycle. The caller schedules
    /// `finish_clear` with the returned epoch once the hide delay elapses.
    pub fn begin_clear(&mut self) -> u64 {
        for entry in &mut self.fields {
            entry.visible = false;
        }
        for banner in &mut self.banners {
            banner.visible = false;
        }
        self.clear_epoch += 1;
        self.clear_epoch
    }

    /// Removes messages hidden by the cycle identified by `epoch`. Messages
    /// shown again since `begin_clear` stay; a stale epoch means a newer
    /// cycle superseded this one and nothing is touched.
    pub fn finish_clear(&mut self, epoch: u64) {
        if epoch != self.clear_epoch {
            return;
        }
        self.fields.retain(|entry| entry.visible);
        self.banners.retain(|banner| banner.visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_reuse_one_entry_per_field() {
        let mut store = FeedbackStore::new();
        store.set_field_error(Field::Email, "Email is required");
        store.set_field_error(Field::Email, "Please enter a valid email address");

        let entry = store.field_error(Field::Email).expect("entry exists");
        assert_eq!(entry.message, "Please enter a valid email address");
        assert!(entry.visible);
        assert!(store.field_error(Field::Password).is_none());
    }

    #[test]
    fn banners_are_prepended_newest_first() {
        let mut store = FeedbackStore::new();
        store.push_error("first");
        store.push_success("second");
        store.push_info("third");

        let messages: Vec<&str> = store
            .banners()
            .iter()
            .map(|banner| banner.message.as_str())
            .collect();
        assert_eq!(messages, vec!["third", "second", "first"]);
        assert_eq!(store.banners()[0].kind, BannerKind::Info);
        assert_eq!(store.banners()[1].kind, BannerKind::Success);
    }

    #[test]
    fn clear_cycle_hides_then_removes() {
        let mut store = FeedbackStore::new();
        store.set_field_error(Field::Email, "Email is required");
        store.push_error("Login failed. Please check your credentials.");

        let epoch = store.begin_clear();
        assert!(!store.field_error(Field::Email).expect("still present").visible);
        assert!(!store.banners()[0].visible);

        store.finish_clear(epoch);
        assert!(store.fields.is_empty());
        assert!(store.banners.is_empty());
    }

    #[test]
    fn messages_shown_again_survive_the_pending_removal() {
        let mut store = FeedbackStore::new();
        store.set_field_error(Field::Email, "Email is required");

        let epoch = store.begin_clear();
        store.set_field_error(Field::Email, "Please enter a valid email address");
        store.finish_clear(epoch);

        let entry = store.field_error(Field::Email).expect("entry survives");
        assert!(entry.visible);
        assert_eq!(entry.message, "Please enter a valid email address");
    }

    #[test]
    fn stale_epoch_does_not_remove_anything() {
        let mut store = FeedbackStore::new();
        store.push_error("first pass");
        let stale = store.begin_clear();

        store.push_error("second pass");
        let current = store.begin_clear();
        store.set_field_error(Field::Password, "Password is required");

        store.finish_clear(stale);
        assert_eq!(store.banners().len(), 2, "stale tick must be ignored");

        store.finish_clear(current);
        assert_eq!(store.banners().len(), 0);
        assert!(store.field_error(Field::Password).is_some());
    }

    #[test]
    fn clearing_twice_in_succession_settles_empty() {
        let mut store = FeedbackStore::new();
        store.set_field_error(Field::Name, "Name is required");
        store.push_error("Registration failed. Please try again.");

        let first = store.begin_clear();
        let second = store.begin_clear();
        store.finish_clear(first);
        assert_eq!(store.banners().len(), 1, "older tick leaves the cycle alone");

        store.finish_clear(second);
        assert!(store.fields.is_empty());
        assert!(store.banners.is_empty());

        store.finish_clear(second);
        assert!(store.banners.is_empty());
    }
}
