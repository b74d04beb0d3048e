/// Reduces a display name to its lookup key: ascii letters lowercased,
/// spaces kept, every other character deleted.
///
/// This is the only key derivation used by the name indices, so population
/// and queries must both go through it.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
