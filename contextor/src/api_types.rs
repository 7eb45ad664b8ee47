//! Public API types re-used by external crates (e.g., the HTTP API layer).

/// Final answer together with the exact context passed to the model.
///
/// # Example
/// ```
/// use contextor::QaAnswer;
/// let qa = QaAnswer {
///     answer: "She studied computer science.".into(),
///     context: "Education: B.E. Computer Science".into(),
/// };
/// assert!(!qa.answer.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct QaAnswer {
    pub answer: String,
    pub context: String,
}
