/// Characters treated as word separators in item identifiers.
const SEPARATORS: [char; 2] = ['-', '_'];

/// Human-readable heading for an item identifier.
///
/// Separators become spaces and only the first character is upper-cased:
/// `smart-home-control` → `Smart home control`.
pub fn format_heading(id: &str) -> String {
    let spaced: String = id
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect();

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
