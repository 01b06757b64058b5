//! Slot persistence — the origin-scoped key-value medium behind the
//! session store.
//!
//! The medium holds exactly two named slots (`prepnova_user`,
//! `prepnova_auth`). The contract is deliberately never-fail: an
//! unavailable or corrupt medium reads as absent, and a failed write is
//! logged and swallowed. Losing a local cache is recoverable; blocking the
//! UI on storage faults is not.

pub mod file;
pub mod memory;

pub use file::FileSlotStore;
pub use memory::MemorySlotStore;

/// Slot holding the JSON-encoded profile. Key kept byte-identical to the
/// original storage layout so existing data keeps loading.
pub const USER_SLOT: &str = "prepnova_user";

/// Slot holding the literal authentication token, `"true"` or `"false"`.
pub const AUTH_SLOT: &str = "prepnova_auth";

/// A named-slot string store.
///
/// Implementations must uphold the never-fail contract:
/// - `load` returns `None` for a slot that was never written OR a medium
///   that cannot be read — callers cannot tell the difference and must not
///   need to.
/// - `save` swallows failures (quota, permissions, missing medium) after
///   logging them; it never panics and never escalates.
pub trait SlotStore: Send + Sync {
    fn load(&self, slot: &str) -> Option<String>;
    fn save(&self, slot: &str, value: &str);
}
