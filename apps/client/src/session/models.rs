//! Session data model.
//!
//! Records serialize in camelCase to stay byte-compatible with the profile
//! JSON already written to the `prepnova_user` slot by earlier builds.
//! Every field carries a default so a partially-shaped stored record still
//! loads; a record that fails to parse at all is replaced wholesale by
//! `Profile::default()` (fail-open, see `store::SessionStore::initialize`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum length of a display name, in characters. Longer names are
/// truncated on write, never rejected.
pub const DISPLAY_NAME_MAX: usize = 24;

/// A badge earned by the user. Unique by `id` within a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon_glyph: String,
    pub granted_at: Option<NaiveDate>,
}

/// One finished trial (mock interview, coding puzzle, quiz). Append-only,
/// insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompletionRecord {
    pub trial_name: String,
    pub date: Option<NaiveDate>,
    pub grade: String,
    pub xp_awarded: u32,
}

/// The persisted user profile — everything in the `prepnova_user` slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub avatar_glyph: String,
    pub display_name: String,
    pub title: String,
    pub level: u32,
    pub xp: u64,
    pub zones_explored: u32,
    pub history: Vec<CompletionRecord>,
    pub onboarded: bool,
    pub achievements: Vec<Achievement>,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            avatar_glyph: String::new(),
            display_name: String::new(),
            title: String::new(),
            level: 1,
            xp: 0,
            zones_explored: 0,
            history: Vec::new(),
            onboarded: false,
            achievements: Vec::new(),
        }
    }
}

impl Profile {
    /// Whether an achievement with this id is already present.
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a.id == id)
    }
}

/// Partial profile supplied at login. Absent fields take `Profile::default()`
/// values — the merge overwrites whatever was stored before, it does not
/// layer over it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDraft {
    pub avatar_glyph: Option<String>,
    pub display_name: Option<String>,
    pub title: Option<String>,
    pub level: Option<u32>,
    pub xp: Option<u64>,
    pub zones_explored: Option<u32>,
    pub history: Option<Vec<CompletionRecord>>,
    pub onboarded: Option<bool>,
    pub achievements: Option<Vec<Achievement>>,
}

impl ProfileDraft {
    /// Merges this draft over the default profile. Display names are
    /// truncated to `DISPLAY_NAME_MAX` characters here as well as in the
    /// single-field update path.
    pub fn into_profile(self) -> Profile {
        let base = Profile::default();
        Profile {
            avatar_glyph: self.avatar_glyph.unwrap_or(base.avatar_glyph),
            display_name: truncate_name(self.display_name.unwrap_or(base.display_name)),
            title: self.title.unwrap_or(base.title),
            level: self.level.unwrap_or(base.level).max(1),
            xp: self.xp.unwrap_or(base.xp),
            zones_explored: self.zones_explored.unwrap_or(base.zones_explored),
            history: self.history.unwrap_or(base.history),
            onboarded: self.onboarded.unwrap_or(base.onboarded),
            achievements: self.achievements.unwrap_or(base.achievements),
        }
    }
}

/// Truncates to `DISPLAY_NAME_MAX` characters (not bytes).
pub fn truncate_name(name: String) -> String {
    if name.chars().count() <= DISPLAY_NAME_MAX {
        name
    } else {
        name.chars().take(DISPLAY_NAME_MAX).collect()
    }
}

/// Profile plus the authentication flag — the full client-side session.
/// The two halves persist to separate slots and can diverge if the process
/// dies between the writes inside `login()`; accepted, low stakes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub profile: Profile,
    pub authenticated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_starts_at_level_one() {
        let p = Profile::default();
        assert_eq!(p.level, 1);
        assert_eq!(p.xp, 0);
        assert!(!p.onboarded);
        assert!(p.achievements.is_empty());
    }

    #[test]
    fn test_profile_round_trips_in_camel_case() {
        let mut p = Profile::default();
        p.display_name = "Nova".to_string();
        p.zones_explored = 3;
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"displayName\""));
        assert!(json.contains("\"zonesExplored\""));
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_partial_stored_record_fills_defaults() {
        let json = r#"{"displayName":"Scout","level":4}"#;
        let p: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(p.display_name, "Scout");
        assert_eq!(p.level, 4);
        assert_eq!(p.xp, 0);
        assert!(p.history.is_empty());
    }

    #[test]
    fn test_draft_merge_is_overwrite_with_defaults() {
        let draft = ProfileDraft {
            display_name: Some("Nova".to_string()),
            xp: Some(120),
            ..ProfileDraft::default()
        };
        let p = draft.into_profile();
        assert_eq!(p.display_name, "Nova");
        assert_eq!(p.xp, 120);
        // untouched fields are defaults, not leftovers
        assert_eq!(p.level, 1);
        assert_eq!(p.title, "");
    }

    #[test]
    fn test_draft_merge_truncates_long_names() {
        let draft = ProfileDraft {
            display_name: Some("x".repeat(40)),
            ..ProfileDraft::default()
        };
        assert_eq!(draft.into_profile().display_name.chars().count(), 24);
    }

    #[test]
    fn test_truncate_name_counts_chars_not_bytes() {
        let name: String = "é".repeat(30);
        assert_eq!(truncate_name(name).chars().count(), 24);
    }
}
