//! Built-in challenge definitions.

use serde::Serialize;

use crate::profile::Tier;

/// A challenge the user can pick. Immutable; lives for the whole process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChallengeDefinition {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Length of the challenge in days.
    pub duration: u32,
    pub category: &'static str,
    pub tier: Tier,
}

impl ChallengeDefinition {
    /// "1 day challenge", "7 days challenge".
    pub fn duration_label(&self) -> String {
        let unit = if self.duration > 1 { "days" } else { "day" };
        format!("{} {} challenge", self.duration, unit)
    }
}

const fn def(
    id: u32,
    title: &'static str,
    description: &'static str,
    duration: u32,
    category: &'static str,
    tier: Tier,
) -> ChallengeDefinition {
    ChallengeDefinition {
        id,
        title,
        description,
        duration,
        category,
        tier,
    }
}

pub(super) static BEGINNER: [ChallengeDefinition; 5] = [
    def(1, "Fixed to Growth", "Identify one fixed mindset thought today and reframe it as growth mindset.", 1, "awareness", Tier::Beginner),
    def(2, "The Power of Yet", "Add 'yet' to three statements about things you can't do.", 1, "language", Tier::Beginner),
    def(3, "Challenge Comfort", "Do one thing outside your comfort zone today.", 1, "action", Tier::Beginner),
    def(4, "Mistake Reflection", "Reflect on a recent mistake and what you learned from it.", 1, "reflection", Tier::Beginner),
    def(5, "Process Praise", "Give genuine process-based praise to someone today.", 1, "relationships", Tier::Beginner),
];

pub(super) static INTERMEDIATE: [ChallengeDefinition; 5] = [
    def(6, "Weekly Learning Goal", "Set one learning goal for the week and plan how to achieve it.", 7, "planning", Tier::Intermediate),
    def(7, "Feedback Seeker", "Ask for constructive feedback from someone this week.", 7, "courage", Tier::Intermediate),
    def(8, "Skill Builder", "Dedicate 30 minutes daily to developing a new skill.", 7, "practice", Tier::Intermediate),
    def(9, "Obstacle Mapping", "Identify potential obstacles for a goal and plan solutions.", 7, "problem-solving", Tier::Intermediate),
    def(10, "Growth Story", "Journal about a time you grew through challenge.", 7, "reflection", Tier::Intermediate),
];

pub(super) static ADVANCED: [ChallengeDefinition; 5] = [
    def(11, "Month of Growth", "Set and track progress on a meaningful 30-day growth goal.", 30, "commitment", Tier::Advanced),
    def(12, "Challenge Network", "Build a network of people who challenge you to grow.", 30, "relationships", Tier::Advanced),
    def(13, "Deep Practice", "Engage in deliberate practice for 1 hour daily on a skill.", 30, "mastery", Tier::Advanced),
    def(14, "Fear Facing", "Identify and take action on one significant fear each week.", 30, "courage", Tier::Advanced),
    def(15, "Legacy Project", "Create something that represents your growth journey.", 30, "creation", Tier::Advanced),
];
