//! Title-to-id slugification.

/// Derive the stable passage id for a title.
///
/// Lowercases the title, then maps every maximal run of characters outside
/// `[a-z0-9]` to a single hyphen. Runs touching either end of the string
/// are dropped with nothing in their place, so the id never starts or ends
/// with a hyphen. The mapping is pure and must stay byte-for-byte stable:
/// authoring tools and diff ids both key on it.
///
/// ```
/// use storyloom_core::extract::slug;
///
/// assert_eq!(slug("My Passage!"), "my-passage");
/// assert_eq!(slug("A  B"), "a-b");
/// ```
pub fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut run_open = false;
    for c in title.chars().flat_map(|c| c.to_lowercase()) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if run_open && !out.is_empty() {
                out.push('-');
            }
            run_open = false;
            out.push(c);
        } else {
            run_open = true;
        }
    }
    out
}
