/// Strips `<` and `>` from free text before it is stored or rendered.
///
/// Everything else is kept in order. Applying it twice changes nothing.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_angle_brackets_only() {
        assert_eq!(
            sanitize("<script>alert('x')</script>"),
            "scriptalert('x')/script"
        );
        assert_eq!(sanitize("a&b \"c\" 'd' é ✓"), "a&b \"c\" 'd' é ✓");
        assert_eq!(sanitize("<<>>"), "");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_is_idempotent() {
        for input in ["student@uni.edu", "<i>x</i>", "a<<b>>c", "  <> "] {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once);
        }
    }
}
