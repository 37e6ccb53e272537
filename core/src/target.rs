/// Derives the reusable network portion of a dotted-quad address: the first
/// three octets joined by `.` with a trailing dot, so the user only types
/// the host part.
///
/// Anything that does not split into exactly four parts is returned
/// unchanged, so callers must not rely on the trailing-dot shape for
/// malformed input.
pub fn derive_prefix(ip: &str) -> String {
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() == 4 {
        format!("{}.{}.{}.", parts[0], parts[1], parts[2])
    } else {
        ip.to_string()
    }
}
