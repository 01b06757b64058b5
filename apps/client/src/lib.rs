//! PrepNova client core — session/progress store, slot persistence, and the
//! fail-open remote gateway.
//!
//! The view layer (routing, rendering, animation) lives in the shell
//! application and consumes this crate. Two contracts matter to callers:
//!
//! - **Session Store**: every mutation is immediately re-persisted through
//!   the slot store, and the post-mutation snapshot is published to
//!   subscribers. Operations never return errors.
//! - **Remote Gateway**: informational calls (resume analysis, roadmap,
//!   test generation, chat, analytics) always produce a payload — a static
//!   substitute stands in whenever the backend cannot answer. Degraded,
//!   never down.

pub mod config;
pub mod gateway;
pub mod session;
pub mod state;
pub mod storage;
pub mod telemetry;

pub use config::Config;
pub use gateway::payloads::{
    AnalyticsReport, AnswerFeedback, AnswerSubmission, ChatReply, ResumeAnalysis,
    ResumeSubmission, Roadmap, TestKind, TestRecord, TestRequest,
};
pub use gateway::{HttpGateway, RemoteApi};
pub use session::models::{Achievement, CompletionRecord, Profile, ProfileDraft, Session};
pub use session::store::SessionStore;
pub use state::AppContext;
pub use storage::{FileSlotStore, MemorySlotStore, SlotStore, AUTH_SLOT, USER_SLOT};
