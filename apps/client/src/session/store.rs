//! Session Store — the single authority over the current user's state.
//!
//! Synchronization contract: every mutating operation re-serializes the
//! affected slot through the `SlotStore` before returning, and publishes
//! the post-mutation snapshot to subscribers. Operations never return
//! errors — storage faults are logged and swallowed (the in-memory state
//! stays authoritative for the rest of the process).

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::session::models::{
    truncate_name, Achievement, CompletionRecord, Profile, ProfileDraft, Session,
};
use crate::session::progression::level_for_xp;
use crate::storage::{SlotStore, AUTH_SLOT, USER_SLOT};

/// Achievement seeded on first login.
const WELCOME_ID: &str = "welcome_aboard";
const WELCOME_NAME: &str = "Welcome Aboard";
const WELCOME_DESCRIPTION: &str = "Stepped through the gates of PrepNova.";
const WELCOME_ICON: &str = "🚀";

/// Owns the in-memory [`Session`] and keeps it synchronized with the two
/// persisted slots. Constructed once by the composition root and passed by
/// reference to whatever needs it — no hidden singleton.
pub struct SessionStore {
    session: Session,
    slots: Arc<dyn SlotStore>,
    publisher: watch::Sender<Session>,
}

impl SessionStore {
    /// Builds the store by reading both slots.
    ///
    /// A missing or malformed `user` slot falls back to the default
    /// profile; the `auth` slot authenticates only on the exact literal
    /// `"true"`. Neither case is an error — a corrupt local cache is
    /// recoverable, a blocked UI is not.
    pub fn initialize(slots: Arc<dyn SlotStore>) -> Self {
        let profile = match slots.load(USER_SLOT) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("stored profile unreadable ({e}); starting from defaults");
                Profile::default()
            }),
            None => Profile::default(),
        };
        let authenticated = slots.load(AUTH_SLOT).as_deref() == Some("true");

        let session = Session {
            profile,
            authenticated,
        };
        let (publisher, _) = watch::channel(session.clone());
        Self {
            session,
            slots,
            publisher,
        }
    }

    /// Current session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current profile.
    pub fn profile(&self) -> &Profile {
        &self.session.profile
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.authenticated
    }

    /// Subscribes to session snapshots. Each mutating operation publishes
    /// exactly one post-mutation snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.publisher.subscribe()
    }

    /// Replaces the profile with `draft` merged over the default profile
    /// (NOT over the previously stored one), seeds the welcome achievement
    /// if absent, and authenticates.
    pub fn login(&mut self, draft: ProfileDraft) {
        let mut profile = draft.into_profile();
        if !profile.has_achievement(WELCOME_ID) {
            profile.achievements.push(Achievement {
                id: WELCOME_ID.to_string(),
                name: WELCOME_NAME.to_string(),
                description: WELCOME_DESCRIPTION.to_string(),
                icon_glyph: WELCOME_ICON.to_string(),
                granted_at: Some(Utc::now().date_naive()),
            });
        }
        self.session.profile = profile;
        self.session.authenticated = true;
        self.persist_profile();
        self.persist_auth();
        self.publish();
    }

    /// Drops authentication. The profile and its slot are deliberately left
    /// untouched: PrepNova keeps progress for this storage origin across
    /// logins, so the same browser/device resumes where it left off. Do not
    /// "fix" this by clearing the user slot. Idempotent when already
    /// anonymous.
    pub fn logout(&mut self) {
        self.session.authenticated = false;
        self.persist_auth();
        self.publish();
    }

    pub fn update_avatar(&mut self, glyph: impl Into<String>) {
        self.session.profile.avatar_glyph = glyph.into();
        self.persist_profile();
        self.publish();
    }

    /// Truncated to 24 characters; other fields untouched.
    pub fn update_display_name(&mut self, name: impl Into<String>) {
        self.session.profile.display_name = truncate_name(name.into());
        self.persist_profile();
        self.publish();
    }

    pub fn update_title(&mut self, title: impl Into<String>) {
        self.session.profile.title = title.into();
        self.persist_profile();
        self.publish();
    }

    pub fn complete_onboarding(&mut self) {
        self.session.profile.onboarded = true;
        self.persist_profile();
        self.publish();
    }

    /// Idempotent insert: a second grant with an already-present id is a
    /// no-op and never alters the original entry or its grant date.
    pub fn grant_achievement(&mut self, achievement: Achievement) {
        if self.session.profile.has_achievement(&achievement.id) {
            debug!("achievement '{}' already granted", achievement.id);
            return;
        }
        self.session.profile.achievements.push(achievement);
        self.persist_profile();
        self.publish();
    }

    /// Appends a finished trial to the history, banks its xp, and
    /// recomputes the level from the progression curve.
    pub fn record_trial_completion(&mut self, record: CompletionRecord) {
        let profile = &mut self.session.profile;
        profile.xp = profile.xp.saturating_add(u64::from(record.xp_awarded));
        profile.level = level_for_xp(profile.xp);
        profile.history.push(record);
        self.persist_profile();
        self.publish();
    }

    /// Bumps the explored-zone counter.
    pub fn mark_zone_explored(&mut self) {
        self.session.profile.zones_explored = self.session.profile.zones_explored.saturating_add(1);
        self.persist_profile();
        self.publish();
    }

    fn persist_profile(&self) {
        match serde_json::to_string(&self.session.profile) {
            Ok(json) => self.slots.save(USER_SLOT, &json),
            Err(e) => warn!("profile serialization failed ({e}); slot left stale"),
        }
    }

    fn persist_auth(&self) {
        let token = if self.session.authenticated {
            "true"
        } else {
            "false"
        };
        self.slots.save(AUTH_SLOT, token);
    }

    fn publish(&self) {
        self.publisher.send_replace(self.session.clone());
    }
}
