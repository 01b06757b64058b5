//! Wire records for the PrepNova backend.
//!
//! Every AI-generated content blob is a closed, typed record — the view
//! layer consumes fixed fields, so nothing here is an open dictionary.
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Request records
// ────────────────────────────────────────────────────────────────────────────

/// Resume upload: raw file bytes plus the job description to score against.
/// Sent as multipart, not JSON — the file part keeps its original name.
#[derive(Debug, Clone)]
pub struct ResumeSubmission {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub job_description: String,
}

/// The kind of test to generate. Tags the returned [`TestRecord`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestKind {
    #[serde(rename = "mcq")]
    MultipleChoice,
    #[serde(rename = "coding")]
    Coding,
    #[serde(rename = "behavioral")]
    Behavioral,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRequest {
    pub topic: String,
    #[serde(rename = "type")]
    pub kind: TestKind,
    pub question_count: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSubmission {
    pub test_id: String,
    pub question_id: String,
    pub answer: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Response records
// ────────────────────────────────────────────────────────────────────────────

/// Skill-match analysis for an uploaded resume against a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    /// 0 – 100.
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub summary: String,
}

/// Week-by-week learning roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub goal: String,
    pub weeks: Vec<RoadmapWeek>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapWeek {
    pub week: u32,
    pub theme: String,
    pub topics: Vec<String>,
    pub milestone: String,
}

/// A generated test, variant by kind. The wire tag is `type`:
/// `"mcq"` | `"coding"` | `"behavioral"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TestRecord {
    #[serde(rename = "mcq")]
    MultipleChoice(McqTest),
    #[serde(rename = "coding")]
    Coding(CodingTest),
    #[serde(rename = "behavioral")]
    Behavioral(BehavioralTest),
}

impl TestRecord {
    pub fn kind(&self) -> TestKind {
        match self {
            TestRecord::MultipleChoice(_) => TestKind::MultipleChoice,
            TestRecord::Coding(_) => TestKind::Coding,
            TestRecord::Behavioral(_) => TestKind::Behavioral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McqTest {
    pub test_id: String,
    pub topic: String,
    pub questions: Vec<McqQuestion>,
}

/// Correct answers stay server-side; the client only sees the options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McqQuestion {
    pub question_id: String,
    pub prompt: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodingTest {
    pub test_id: String,
    pub topic: String,
    pub challenges: Vec<CodingChallenge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodingChallenge {
    pub question_id: String,
    pub prompt: String,
    pub starter_code: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralTest {
    pub test_id: String,
    pub topic: String,
    pub prompts: Vec<BehavioralPrompt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralPrompt {
    pub question_id: String,
    pub prompt: String,
    pub focus_area: String,
}

/// Verdict on a submitted answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerFeedback {
    pub correct: bool,
    pub explanation: String,
}

/// One reply from the interview-coach chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub reply: String,
}

/// Aggregate performance dashboard data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub total_xp: u64,
    pub trials_completed: u32,
    /// 0.0 – 100.0.
    pub average_score: f32,
    pub streak_days: u32,
    pub skill_breakdown: Vec<SkillStat>,
    pub weekly_activity: Vec<WeeklyActivity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillStat {
    pub skill: String,
    /// 0 – 100.
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyActivity {
    pub week: String,
    pub sessions: u32,
    pub xp_earned: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_record_tag_round_trips() {
        let record = TestRecord::MultipleChoice(McqTest {
            test_id: "t-1".to_string(),
            topic: "ownership".to_string(),
            questions: vec![],
        });
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"type\":\"mcq\""));
        let back: TestRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind(), TestKind::MultipleChoice);
    }

    #[test]
    fn test_test_request_serializes_kind_under_type_key() {
        let req = TestRequest {
            topic: "graphs".to_string(),
            kind: TestKind::Behavioral,
            question_count: 5,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "behavioral");
        assert_eq!(json["questionCount"], 5);
    }
}
