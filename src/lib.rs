//! # social-styles-core
//!
//! Scoring engine for the Social Styles self-assessment.
//!
//! ---
//!
//! ## Two axes, four quadrants
//!
//! A respondent rates thirty statements on a 1–4 agreement scale. Questions 1–15
//! measure **assertiveness** (how strongly they try to influence others), questions
//! 16–30 measure **responsiveness** (how openly they show feeling). Each axis score
//! is the plain mean of its fifteen responses, so it always lies in `[1.0, 4.0]`.
//!
//! A score of 2.5 or more is *high*. The two high/low bits pick one of four styles:
//!
//! ```text
//!                     responsiveness
//!                  low            high
//!               ┌────────────┬────────────┐
//!   assert high │  DRIVER    │ EXPRESSIVE │
//!               ├────────────┼────────────┤
//!          low  │ ANALYTICAL │  AMIABLE   │
//!               └────────────┴────────────┘
//! ```
//!
//! The cutoff is compared on exact integer sums (`2·sum ≥ 5·count`), never on a
//! rounded or floating-point mean. Display rounding is a separate, later step and
//! cannot move a respondent across a quadrant line.
//!
//! ---
//!
//! ## The pipeline
//!
//! ```text
//! form input → AnswerSheet ──to_answer_set()──→ AnswerSet ──score()──→ ScoreResult
//!                  ↑                                ↑                      │
//!               Progress                 AssessmentError            ┌──────┴──────┐
//!                                        (reject, never guess)  SocialStyle  DisplayScore
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`likert`] | [`Likert`], [`QuestionId`], [`Axis`] | Response scale and question→axis mapping |
//! | [`questions`] | [`questions::Question`] | The thirty statements |
//! | [`answers`] | [`AnswerSheet`], [`AnswerSet`], [`Progress`] | Partial and validated answer collections |
//! | [`style`] | [`AxisScore`], [`SocialStyle`] | Exact axis scores and quadrant classification |
//! | [`scorer`] | [`ScoreResult`] | Score a validated answer set |
//! | [`display`] | [`DisplayScore`], [`DisplayConfig`] | Presentation rounding |
//! | [`profile`] | [`profile::StyleProfile`] | Style descriptions, strengths and tips |
//! | [`team`] | [`TeamRoster`] | Team style mix and centroid |
//! | [`error`] | [`AssessmentError`] | Validation failures |
//! | `report` | `report::ScoreReport` | Serialisable result snapshot (requires `serde` feature) |
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default with no heap required. Enable the `serde`
//! feature for the report format (needs `alloc`) and `python-ffi` for the PyO3
//! extension module.
//!
//! ## License
//!
//! Business Source License 1.1. Free for evaluation and non-production use.

#![cfg_attr(not(any(feature = "std", feature = "python-ffi")), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(feature = "std", feature = "python-ffi"))]
extern crate std;

pub mod answers;
pub mod display;
pub mod error;
pub mod likert;
pub mod profile;
pub mod questions;
pub mod scorer;
pub mod style;
pub mod team;

#[cfg(feature = "serde")]
pub mod report;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use answers::{AnswerSet, AnswerSheet, Progress, RawValue};
pub use display::{DisplayConfig, DisplayScore, RoundingMode};
pub use error::AssessmentError;
pub use likert::{Axis, Likert, QuestionId};
pub use scorer::{
    score, score_pairs, score_submitted, score_submitted_values, score_values, ScoreResult,
};
pub use style::{AxisScore, SocialStyle};
pub use team::TeamRoster;
