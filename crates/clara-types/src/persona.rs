//! Persona definitions for Clara.
//!
//! A persona is a named behavioral configuration the user can switch
//! between. Each persona maps to a static instruction text; the effective
//! system instruction for a session is the fixed base instruction followed
//! by the persona-specific instruction.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Base system instruction shared by every persona.
///
/// Persona-specific focus text is appended after this block when a
/// session is created.
pub const BASE_INSTRUCTION: &str = "\
You are Clara AI, a warm, intelligent, and female AI assistant.
Personality & Style:
- Friendly, understanding, optimistic -- but not overly emotional.
- Speaks clearly with actionable and practical advice.
- Keeps responses helpful, short-to-medium length unless user requests detail.
- Non-judgmental and supportive.

Capabilities & Behavior Rules:
- Offer realistic, step-by-step solutions.
- When user is emotional, prioritize empathy & comfort before giving advice (Acknowledge -> Perspective -> Solution).
- If unsure, ask clarifying questions.
- Avoid medical, legal, or harmful instructions.

Mission: Help users improve relationships, succeed in business, stay mentally strong, and be prepared for everyday challenges.

MANDATORY ENDING: End every reply with one short call-to-action question to keep the user engaged.";

const RELATIONSHIP_INSTRUCTION: &str = "\
CURRENT FOCUS: RELATIONSHIP COACHING.
Focus on communication tips, healthy boundaries, and identifying red flags.
Tone: Warm, empathetic, safe.";

const BUSINESS_INSTRUCTION: &str = "\
CURRENT FOCUS: BUSINESS STRATEGIST.
Focus on branding, marketing, sales, leadership, financial context, and risk assessment.
Tone: Professional, strategic, direct.";

const WELLNESS_INSTRUCTION: &str = "\
CURRENT FOCUS: STRESS & WELLNESS GUIDE.
Focus on mindfulness, breathing routines, CBT-style tips, and motivation.
Tone: Calming, grounding, encouraging.";

const EDC_INSTRUCTION: &str = "\
CURRENT FOCUS: EDC & PRODUCTIVITY EXPERT.
Focus on tools, organization, everyday carry gear, and preparedness.
Tone: Practical, efficient, resourceful.";

/// Selectable assistant persona.
///
/// The set is fixed at compile time; each variant carries a static
/// instruction text and a short tagline for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Relationship,
    Business,
    Wellness,
    Edc,
}

impl Persona {
    /// All personas, in display order.
    pub const ALL: [Persona; 4] = [
        Persona::Relationship,
        Persona::Business,
        Persona::Wellness,
        Persona::Edc,
    ];

    /// Persona-specific instruction text appended to [`BASE_INSTRUCTION`].
    pub fn instruction(&self) -> &'static str {
        match self {
            Persona::Relationship => RELATIONSHIP_INSTRUCTION,
            Persona::Business => BUSINESS_INSTRUCTION,
            Persona::Wellness => WELLNESS_INSTRUCTION,
            Persona::Edc => EDC_INSTRUCTION,
        }
    }

    /// Full system instruction: base persona followed by the mode focus.
    pub fn system_instruction(&self) -> String {
        format!("{BASE_INSTRUCTION}\n\n{}", self.instruction())
    }

    /// Short tagline shown in the chat header.
    pub fn tagline(&self) -> &'static str {
        match self {
            Persona::Relationship => "Relationship Coach & Emotional Support",
            Persona::Business => "Consulting, Strategy & Entrepreneurship",
            Persona::Wellness => "Stress Management & Daily Motivation",
            Persona::Edc => "Productivity, Gear & Organization",
        }
    }

    /// Greeting shown when a session under this persona begins.
    pub fn greeting(&self) -> String {
        format!(
            "Hi, I'm **Clara**. I'm set to **{self}** mode.\n\nHow can I help you thrive today?"
        )
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Persona::Relationship => write!(f, "Relationship"),
            Persona::Business => write!(f, "Business"),
            Persona::Wellness => write!(f, "Wellness"),
            Persona::Edc => write!(f, "EDC"),
        }
    }
}

impl FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relationship" => Ok(Persona::Relationship),
            "business" => Ok(Persona::Business),
            "wellness" => Ok(Persona::Wellness),
            "edc" => Ok(Persona::Edc),
            other => Err(format!("invalid persona: '{other}'")),
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Persona::Relationship
    }
}
