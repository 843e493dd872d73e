//! Python FFI bindings via PyO3.
//!
//! Exposes the scorer to a Python web backend so form submissions are validated
//! and scored by the same code everywhere.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from social_styles_core import score, IncompleteAnswerSetError
//!
//! responses = {i: 3 for i in range(1, 31)}
//! result = score(responses)
//! print(result.style)                   # "EXPRESSIVE"
//! print(result.assertiveness_display)   # "3.0"
//!
//! del responses[7]
//! try:
//!     score(responses)
//! except IncompleteAnswerSetError as e:
//!     print(e)
//! ```

#![allow(non_snake_case)]

use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyFloat};

use crate::answers::RawValue;
use crate::display::DisplayConfig;
use crate::error::AssessmentError as RustAssessmentError;
use crate::questions::QUESTIONS;
use crate::scorer::{self, ScoreResult as RustScoreResult};
use crate::style::SocialStyle as RustSocialStyle;

create_exception!(
    social_styles_core,
    AssessmentError,
    PyValueError,
    "Base class for rejected assessment submissions."
);
create_exception!(
    social_styles_core,
    IncompleteAnswerSetError,
    AssessmentError,
    "One or more questions has no response."
);
create_exception!(
    social_styles_core,
    InvalidResponseValueError,
    AssessmentError,
    "A response is not an integer in 1-4."
);

fn to_py_err(err: RustAssessmentError) -> PyErr {
    let message = err.to_string();
    match err {
        RustAssessmentError::IncompleteAnswerSet { .. } => IncompleteAnswerSetError::new_err(message),
        RustAssessmentError::InvalidResponseValue { .. }
        | RustAssessmentError::NonIntegerResponse { .. } => InvalidResponseValueError::new_err(message),
        _ => AssessmentError::new_err(message),
    }
}

// ── SocialStyle ──────────────────────────────────────────────────────────────

/// One of the four social style quadrants.
///
/// Styles:
///     ANALYTICAL: low assertiveness, low responsiveness
///     DRIVER    : high assertiveness, low responsiveness
///     AMIABLE   : low assertiveness, high responsiveness
///     EXPRESSIVE: high assertiveness, high responsiveness
#[pyclass(name = "SocialStyle", frozen)]
#[derive(Clone)]
pub struct PySocialStyle {
    inner: RustSocialStyle,
}

#[pymethods]
impl PySocialStyle {
    /// Style for a pair of high/low axis flags.
    #[staticmethod]
    pub fn from_quadrant(assertive: bool, responsive: bool) -> Self {
        Self {
            inner: RustSocialStyle::from_quadrant(assertive, responsive),
        }
    }

    /// Parse a style name, case-insensitively.
    #[staticmethod]
    pub fn parse(name: &str) -> PyResult<Self> {
        name.parse::<RustSocialStyle>()
            .map(|inner| Self { inner })
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// ANALYTICAL class attribute.
    #[classattr]
    pub fn ANALYTICAL() -> Self {
        Self {
            inner: RustSocialStyle::Analytical,
        }
    }

    /// DRIVER class attribute.
    #[classattr]
    pub fn DRIVER() -> Self {
        Self {
            inner: RustSocialStyle::Driver,
        }
    }

    /// AMIABLE class attribute.
    #[classattr]
    pub fn AMIABLE() -> Self {
        Self {
            inner: RustSocialStyle::Amiable,
        }
    }

    /// EXPRESSIVE class attribute.
    #[classattr]
    pub fn EXPRESSIVE() -> Self {
        Self {
            inner: RustSocialStyle::Expressive,
        }
    }

    /// Title-case name, e.g. "Driver".
    pub fn label(&self) -> &'static str {
        self.inner.label()
    }

    /// Grid accent colour as [r, g, b] bytes.
    pub fn accent_rgb(&self) -> [u8; 3] {
        self.inner.accent_rgb()
    }

    /// Typical strengths for this style.
    pub fn strengths(&self) -> Vec<&'static str> {
        self.inner.profile().strengths.to_vec()
    }

    /// Development suggestions for this style.
    pub fn tips(&self) -> Vec<&'static str> {
        self.inner.profile().tips.to_vec()
    }

    /// Python str: the upper-case style name.
    pub fn __str__(&self) -> &'static str {
        self.inner.as_str()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!("SocialStyle.{}", self.inner.as_str())
    }

    /// Python equality comparison.
    pub fn __eq__(&self, other: &PySocialStyle) -> bool {
        self.inner == other.inner
    }
}

// ── ScoreResult ──────────────────────────────────────────────────────────────

/// Scored assessment: two axis scores and the quadrant style.
///
/// `*_score` attributes are unrounded means; `*_display` attributes are the
/// one-decimal strings shown to the respondent.
#[pyclass(name = "ScoreResult", frozen)]
#[derive(Clone)]
pub struct PyScoreResult {
    inner: RustScoreResult,
}

#[pymethods]
impl PyScoreResult {
    /// Style name: "ANALYTICAL", "DRIVER", "AMIABLE" or "EXPRESSIVE".
    #[getter]
    pub fn style(&self) -> &'static str {
        self.inner.style().as_str()
    }

    /// The style as a [`PySocialStyle`] object.
    #[getter]
    pub fn social_style(&self) -> PySocialStyle {
        PySocialStyle {
            inner: self.inner.style(),
        }
    }

    /// Unrounded assertiveness mean in [1.0, 4.0].
    #[getter]
    pub fn assertiveness_score(&self) -> f64 {
        self.inner.assertiveness_score()
    }

    /// Unrounded responsiveness mean in [1.0, 4.0].
    #[getter]
    pub fn responsiveness_score(&self) -> f64 {
        self.inner.responsiveness_score()
    }

    /// Assertiveness rounded to one decimal place.
    #[getter]
    pub fn assertiveness_display(&self) -> String {
        self.inner.assertiveness().display(&DisplayConfig::default()).to_string()
    }

    /// Responsiveness rounded to one decimal place.
    #[getter]
    pub fn responsiveness_display(&self) -> String {
        self.inner.responsiveness().display(&DisplayConfig::default()).to_string()
    }

    /// Profile summary paragraph for the style.
    #[getter]
    pub fn description(&self) -> &'static str {
        self.inner.style().profile().description
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        let shown = self.inner.display(&DisplayConfig::default());
        format!(
            "ScoreResult(style={}, assertiveness={}, responsiveness={})",
            shown.style, shown.assertiveness, shown.responsiveness,
        )
    }

    /// Python equality comparison.
    pub fn __eq__(&self, other: &PyScoreResult) -> bool {
        self.inner == other.inner
    }
}

// ── Functions ────────────────────────────────────────────────────────────────

/// Score a mapping of question index (1–30) to response (1–4).
///
/// Keys and values are taken as arbitrary Python objects so that every bad
/// submission surfaces as an `AssessmentError` subclass, never `TypeError` or
/// `OverflowError`.
///
/// Raises:
///     IncompleteAnswerSetError: a question is unanswered
///     InvalidResponseValueError: a response is not an integer in 1–4
///     AssessmentError: unknown or non-integer question index
#[pyfunction]
pub fn score(responses: &Bound<'_, PyDict>) -> PyResult<PyScoreResult> {
    let mut pairs = Vec::with_capacity(responses.len());
    for (key, value) in responses.iter() {
        pairs.push((question_index(&key)?, raw_value(&value)));
    }
    scorer::score_submitted(pairs)
        .map(|inner| PyScoreResult { inner })
        .map_err(to_py_err)
}

/// Score an iterable of 30 responses given in question order.
#[pyfunction]
pub fn score_values(values: &Bound<'_, PyAny>) -> PyResult<PyScoreResult> {
    let items = values
        .iter()
        .map_err(|_| AssessmentError::new_err("expected a sequence of 30 responses"))?;
    let mut raw = Vec::new();
    for item in items {
        raw.push(raw_value(&item?));
    }
    scorer::score_submitted_values(&raw)
        .map(|inner| PyScoreResult { inner })
        .map_err(to_py_err)
}

fn question_index(key: &Bound<'_, PyAny>) -> PyResult<i64> {
    if key.is_instance_of::<PyBool>() || key.is_instance_of::<PyFloat>() {
        return Err(AssessmentError::new_err(format!("question index {key} is not an integer")));
    }
    key.extract::<i64>()
        .map_err(|_| AssessmentError::new_err(format!("unknown question index {key}: expected 1-30")))
}

fn raw_value(value: &Bound<'_, PyAny>) -> RawValue {
    if value.is_instance_of::<PyBool>() || value.is_instance_of::<PyFloat>() {
        return RawValue::NotInteger;
    }
    value.extract::<i64>().map_or(RawValue::NotInteger, RawValue::Integer)
}

/// The question bank as `(id, text, axis)` tuples.
#[pyfunction]
pub fn questions() -> Vec<(u8, &'static str, &'static str)> {
    QUESTIONS
        .iter()
        .map(|q| (q.id, q.text, q.axis.as_str()))
        .collect()
}

// ── Module entry point ────────────────────────────────────────────────────────

/// Social Styles assessment scoring.
#[pymodule]
pub fn social_styles_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    m.add_class::<PySocialStyle>()?;
    m.add_class::<PyScoreResult>()?;
    m.add_function(wrap_pyfunction!(score, m)?)?;
    m.add_function(wrap_pyfunction!(score_values, m)?)?;
    m.add_function(wrap_pyfunction!(questions, m)?)?;
    m.add("AssessmentError", py.get_type_bound::<AssessmentError>())?;
    m.add("IncompleteAnswerSetError", py.get_type_bound::<IncompleteAnswerSetError>())?;
    m.add("InvalidResponseValueError", py.get_type_bound::<InvalidResponseValueError>())?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("QUESTION_COUNT", crate::likert::QUESTION_COUNT)?;
    Ok(())
}
