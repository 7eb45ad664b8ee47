//! Prompt builder: one fixed template, context first, then the question.

/// Instruction + context + question template.
///
/// No truncation happens here: if the result exceeds the model window, the
/// provider rejects the request and the caller sees an LLM error.
pub const TEMPLATE: &str = "You are an assistant. Use only the following context to answer the question.

Context:
{context}

Question: {question}
";

/// Substitutes `context` and `question` into [`TEMPLATE`].
///
/// Placeholders are filled in one pass, so braces inside the context are
/// never re-expanded.
///
/// # Example
/// ```
/// let p = contextor::build_prompt("Skills: Rust", "What languages?");
/// assert!(p.contains("Context:\nSkills: Rust\n"));
/// assert!(p.ends_with("Question: What languages?\n"));
/// ```
pub fn build_prompt(context: &str, question: &str) -> String {
    let mut out = String::with_capacity(TEMPLATE.len() + context.len() + question.len());
    let mut rest = TEMPLATE;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(stripped) = tail.strip_prefix("{context}") {
            out.push_str(context);
            rest = stripped;
        } else if let Some(stripped) = tail.strip_prefix("{question}") {
            out.push_str(question);
            rest = stripped;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
