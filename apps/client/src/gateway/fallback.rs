//! Substitute payloads served when the backend cannot answer.
//!
//! Shape parity with the live API is the contract: the view layer must not
//! be able to tell substituted content from generated content by structure.
//! Values are fixed demo data with a PrepNova flavor.

use super::payloads::{
    AnalyticsReport, AnswerFeedback, BehavioralPrompt, BehavioralTest, ChatReply, CodingChallenge,
    CodingTest, McqQuestion, McqTest, ResumeAnalysis, Roadmap, RoadmapWeek, SkillStat, TestKind,
    TestRecord, WeeklyActivity,
};

pub fn resume_analysis() -> ResumeAnalysis {
    ResumeAnalysis {
        match_score: 72,
        matched_skills: vec![
            "Python".to_string(),
            "SQL".to_string(),
            "Git".to_string(),
            "REST APIs".to_string(),
        ],
        missing_skills: vec![
            "Kubernetes".to_string(),
            "System Design".to_string(),
            "GraphQL".to_string(),
        ],
        strengths: vec![
            "Strong project portfolio with quantified outcomes".to_string(),
            "Consistent open-source contributions".to_string(),
        ],
        improvements: vec![
            "Lead bullets with measurable impact".to_string(),
            "Surface collaboration and mentoring experience".to_string(),
        ],
        summary: "A solid foundation for the target role; close the infrastructure \
                  gaps and this resume competes well."
            .to_string(),
    }
}

pub fn roadmap() -> Roadmap {
    Roadmap {
        goal: "Interview-ready in four weeks".to_string(),
        weeks: vec![
            RoadmapWeek {
                week: 1,
                theme: "Foundations".to_string(),
                topics: vec![
                    "Data structures refresher".to_string(),
                    "Big-O analysis".to_string(),
                ],
                milestone: "Solve 10 warm-up puzzles".to_string(),
            },
            RoadmapWeek {
                week: 2,
                theme: "Core algorithms".to_string(),
                topics: vec!["Graphs and BFS/DFS".to_string(), "Dynamic programming".to_string()],
                milestone: "Complete two timed mock tests".to_string(),
            },
            RoadmapWeek {
                week: 3,
                theme: "System design".to_string(),
                topics: vec![
                    "Scalability patterns".to_string(),
                    "Data modeling trade-offs".to_string(),
                ],
                milestone: "Design a URL shortener end to end".to_string(),
            },
            RoadmapWeek {
                week: 4,
                theme: "Interview polish".to_string(),
                topics: vec![
                    "Behavioral storytelling".to_string(),
                    "Mock interview circuit".to_string(),
                ],
                milestone: "Pass a full mock interview loop".to_string(),
            },
        ],
    }
}

/// Substitute test matching the requested kind, so the variant the caller
/// receives is the one it asked for.
pub fn test(kind: TestKind) -> TestRecord {
    match kind {
        TestKind::MultipleChoice => TestRecord::MultipleChoice(McqTest {
            test_id: "demo-mcq".to_string(),
            topic: "Core concepts".to_string(),
            questions: vec![
                McqQuestion {
                    question_id: "demo-mcq-1".to_string(),
                    prompt: "Which traversal visits graph neighbors level by level?".to_string(),
                    options: vec![
                        "Depth-first search".to_string(),
                        "Breadth-first search".to_string(),
                        "Binary search".to_string(),
                        "Topological sort".to_string(),
                    ],
                },
                McqQuestion {
                    question_id: "demo-mcq-2".to_string(),
                    prompt: "What is the average lookup cost of a hash map?".to_string(),
                    options: vec![
                        "O(1)".to_string(),
                        "O(log n)".to_string(),
                        "O(n)".to_string(),
                        "O(n log n)".to_string(),
                    ],
                },
            ],
        }),
        TestKind::Coding => TestRecord::Coding(CodingTest {
            test_id: "demo-coding".to_string(),
            topic: "Arrays and strings".to_string(),
            challenges: vec![CodingChallenge {
                question_id: "demo-coding-1".to_string(),
                prompt: "Return the first non-repeating character in a string, or None."
                    .to_string(),
                starter_code: "def first_unique(s):\n    # your solution here\n    pass\n"
                    .to_string(),
                language: "python".to_string(),
            }],
        }),
        TestKind::Behavioral => TestRecord::Behavioral(BehavioralTest {
            test_id: "demo-behavioral".to_string(),
            topic: "Teamwork".to_string(),
            prompts: vec![BehavioralPrompt {
                question_id: "demo-behavioral-1".to_string(),
                prompt: "Tell me about a time you disagreed with a teammate and how you resolved it."
                    .to_string(),
                focus_area: "conflict resolution".to_string(),
            }],
        }),
    }
}

pub fn answer_feedback() -> AnswerFeedback {
    AnswerFeedback {
        correct: true,
        explanation: "Recorded. The grading service is offline, so this answer was accepted \
                      without live evaluation."
            .to_string(),
    }
}

pub fn chat_reply() -> ChatReply {
    ChatReply {
        reply: "Good question. Break the problem into smaller steps, talk through your \
                assumptions out loud, and start with the simplest case that works."
            .to_string(),
    }
}

pub fn analytics() -> AnalyticsReport {
    AnalyticsReport {
        total_xp: 1240,
        trials_completed: 9,
        average_score: 78.5,
        streak_days: 4,
        skill_breakdown: vec![
            SkillStat {
                skill: "Algorithms".to_string(),
                score: 74,
            },
            SkillStat {
                skill: "System design".to_string(),
                score: 61,
            },
            SkillStat {
                skill: "Behavioral".to_string(),
                score: 85,
            },
        ],
        weekly_activity: vec![
            WeeklyActivity {
                week: "W1".to_string(),
                sessions: 3,
                xp_earned: 320,
            },
            WeeklyActivity {
                week: "W2".to_string(),
                sessions: 4,
                xp_earned: 450,
            },
            WeeklyActivity {
                week: "W3".to_string(),
                sessions: 2,
                xp_earned: 470,
            },
        ],
    }
}
