//! Narrative content for each social style: what it means and how to grow.
//!
//! Shown on the results page and in downloadable reports under the score grid.

use crate::style::SocialStyle;

/// Descriptive profile of one style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleProfile {
    /// The style described.
    pub style: SocialStyle,
    /// One-paragraph summary.
    pub description: &'static str,
    /// Typical strengths.
    pub strengths: [&'static str; 5],
    /// Typical blind spots.
    pub challenges: [&'static str; 5],
    /// Development suggestions.
    pub tips: [&'static str; 5],
}

static ANALYTICAL: StyleProfile = StyleProfile {
    style: SocialStyle::Analytical,
    description: "Analyticals are characterized by low assertiveness and low responsiveness. \
                  They are logical, thorough, and detail-oriented.",
    strengths: [
        "Thorough and detail-oriented approach",
        "Strong critical thinking skills",
        "Logical and methodical problem-solving",
        "High-quality work with few errors",
        "Thoughtful and careful decision-making",
    ],
    challenges: [
        "May be perceived as overly critical or perfectionistic",
        "Can struggle with making quick decisions",
        "May have difficulty expressing emotions",
        "Can get caught in \"analysis paralysis\"",
        "May not connect easily with others",
    ],
    tips: [
        "Practice making decisions with limited information",
        "Share your thought process with others",
        "Make an effort to connect personally with colleagues",
        "Be mindful of perfectionist tendencies",
        "Consider the big picture alongside the details",
    ],
};

static DRIVER: StyleProfile = StyleProfile {
    style: SocialStyle::Driver,
    description: "Drivers are characterized by high assertiveness and low responsiveness. \
                  They are direct, decisive, and results-oriented.",
    strengths: [
        "Strong decision-making skills",
        "Task-oriented and efficient",
        "Direct and straightforward communication",
        "Goal-focused and determined",
        "Takes initiative and leads by example",
    ],
    challenges: [
        "May appear impatient or controlling",
        "Can be perceived as insensitive to others' feelings",
        "May struggle with building personal relationships",
        "Can overlook important details in pursuit of results",
        "May not listen well to others' input",
    ],
    tips: [
        "Practice active listening skills",
        "Take time to build relationships with colleagues",
        "Be mindful of how your directness affects others",
        "Acknowledge and appreciate others' contributions",
        "Consider the human element in decision-making",
    ],
};

static AMIABLE: StyleProfile = StyleProfile {
    style: SocialStyle::Amiable,
    description: "Amiables are characterized by low assertiveness and high responsiveness. \
                  They are supportive, patient, and relationship-oriented.",
    strengths: [
        "Strong team player and collaborator",
        "Excellent listening skills",
        "Patient and supportive of others",
        "Creates harmony in groups",
        "Builds deep, trusting relationships",
    ],
    challenges: [
        "May avoid necessary conflict",
        "Can struggle with making quick decisions",
        "May have difficulty saying \"no\"",
        "Can be overly concerned with others' opinions",
        "May not assert their own needs effectively",
    ],
    tips: [
        "Practice asserting your opinions and needs",
        "Develop comfort with healthy conflict",
        "Set boundaries to avoid overcommitment",
        "Trust your own judgment more often",
        "Balance relationship concerns with task completion",
    ],
};

static EXPRESSIVE: StyleProfile = StyleProfile {
    style: SocialStyle::Expressive,
    description: "Expressives are characterized by high assertiveness and high responsiveness. \
                  They are enthusiastic, creative, and people-oriented.",
    strengths: [
        "Naturally charismatic and engaging",
        "Creative and innovative thinking",
        "Builds relationships easily",
        "Persuasive and inspiring communicator",
        "Energetic and enthusiastic approach",
    ],
    challenges: [
        "May struggle with follow-through on tasks",
        "Can be perceived as disorganized",
        "May dominate conversations",
        "Can make decisions based on emotions rather than facts",
        "May lose interest in projects over time",
    ],
    tips: [
        "Develop systems to track details and follow through",
        "Practice listening without interrupting",
        "Balance enthusiasm with practical considerations",
        "Set clear priorities and stick to them",
        "Be mindful of others who need time to process information",
    ],
};

/// Profile for a style.
pub fn profile(style: SocialStyle) -> &'static StyleProfile {
    match style {
        SocialStyle::Analytical => &ANALYTICAL,
        SocialStyle::Driver => &DRIVER,
        SocialStyle::Amiable => &AMIABLE,
        SocialStyle::Expressive => &EXPRESSIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_matches_style() {
        for style in SocialStyle::ALL {
            assert_eq!(profile(style).style, style);
            assert_eq!(style.profile().style, style);
        }
    }

    #[test]
    fn test_description_names_quadrant() {
        for style in SocialStyle::ALL {
            let p = profile(style);
            let assert_word = if style.is_assertive() { "high assertiveness" } else { "low assertiveness" };
            let resp_word = if style.is_responsive() { "high responsiveness" } else { "low responsiveness" };
            assert!(p.description.contains(assert_word), "{style}");
            assert!(p.description.contains(resp_word), "{style}");
        }
    }
}
