//! Progression curve — maps accumulated xp to a level.
//!
//! Linear curve: a level every `XP_PER_LEVEL` points, floor level 1.
//! Levels only rise because xp only rises (completions are append-only).

/// Experience points per level step.
pub const XP_PER_LEVEL: u64 = 250;

/// Level for a given xp total. `0..249` → 1, `250..499` → 2, and so on.
pub fn level_for_xp(xp: u64) -> u32 {
    let steps = xp / XP_PER_LEVEL;
    u32::try_from(steps).unwrap_or(u32::MAX).saturating_add(1)
}
