/// Compile a literal pattern once and hand out a `&'static Regex`.
///
/// Patterns are crate-internal literals, so a failing compile is a bug caught
/// by the first test that touches the call site.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static PATTERN: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*PATTERN
    }};
}
