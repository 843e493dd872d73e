//! The Social Styles question bank.
//!
//! Thirty first-person statements, fifteen per axis. The form layer renders these
//! in order; the scorer only relies on the index→axis split, so the wording can
//! change without touching classification.

use crate::likert::{Axis, QuestionId, QUESTION_COUNT};

/// Display name of the assessment.
pub const ASSESSMENT_NAME: &str = "Social Styles Assessment";

/// Instructions shown above the first statement.
pub const ASSESSMENT_INSTRUCTIONS: &str = "This assessment helps identify your social style \
based on assertiveness and responsiveness dimensions. Rate each statement on a scale of 1-4: \
1 = Strongly Disagree, 2 = Somewhat Disagree, 3 = Somewhat Agree, 4 = Strongly Agree.";

/// A single assessment statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    /// 1-based index.
    pub id: u8,
    /// Statement text.
    pub text: &'static str,
    /// Axis the response feeds.
    pub axis: Axis,
}

const fn q(id: u8, axis: Axis, text: &'static str) -> Question {
    Question { id, text, axis }
}

use crate::likert::Axis::{Assertiveness as A, Responsiveness as R};

/// All thirty statements, ordered by index.
pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    q(1, A, "I typically take charge in group situations."),
    q(2, A, "When I have an opinion, I express it directly."),
    q(3, A, "I make decisions quickly and confidently."),
    q(4, A, "I prefer to lead rather than follow."),
    q(5, A, "I am comfortable challenging others' ideas."),
    q(6, A, "I am direct in my communication style."),
    q(7, A, "When something needs to be done, I take immediate action."),
    q(8, A, "I am comfortable setting the agenda for meetings or gatherings."),
    q(9, A, "I often find myself influencing others' opinions."),
    q(10, A, "I prefer making statements rather than asking questions."),
    q(11, A, "I typically speak up in group settings."),
    q(12, A, "I am comfortable with conflict when necessary."),
    q(13, A, "I often take initiative on projects or tasks."),
    q(14, A, "When I want something, I ask for it directly."),
    q(15, A, "I am not afraid to take risks."),
    q(16, R, "I easily show my emotions to others."),
    q(17, R, "Building relationships is a priority for me in work settings."),
    q(18, R, "I pay close attention to how others are feeling."),
    q(19, R, "I am warm and friendly in my interactions."),
    q(20, R, "I value harmony in my relationships."),
    q(21, R, "I am animated when communicating with others."),
    q(22, R, "I tend to be expressive with my face and gestures."),
    q(23, R, "I prioritize people's feelings over task completion."),
    q(24, R, "I am comfortable discussing personal topics."),
    q(25, R, "I prefer collaborating with others rather than working independently."),
    q(26, R, "I am sensitive to the moods and emotions of others."),
    q(27, R, "I enjoy socializing and casual conversation."),
    q(28, R, "I prefer a supportive environment over a competitive one."),
    q(29, R, "I am open about sharing my feelings."),
    q(30, R, "I tend to be informal rather than formal in interactions."),
];

/// Look up the statement for a question id.
pub fn question(id: QuestionId) -> &'static Question {
    &QUESTIONS[id.slot()]
}
