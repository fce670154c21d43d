/// Formats the greeting line for the given hostname.
///
/// The line terminator is left to the caller.
pub fn greeting(name: &str) -> String {
    format!("New hello from {}", name)
}
