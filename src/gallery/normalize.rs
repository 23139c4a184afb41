/// Coerces optional free-text input to a trimmed string. Absent input is empty.
pub fn normalize<S: AsRef<str>>(input: Option<S>) -> String {
    input
        .as_ref()
        .map(|value| value.as_ref().trim().to_string())
        .unwrap_or_default()
}
