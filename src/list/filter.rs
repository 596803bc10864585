//! Hidden-name classification

/// Check whether a bare entry name counts as hidden.
///
/// With `show_all` nothing is hidden. Otherwise a name is hidden iff its
/// first character is an ASCII period. Callers never pass an empty string;
/// every filesystem entry has a non-empty name.
pub fn is_hidden(name: &str, show_all: bool) -> bool {
    if show_all {
        return false;
    }
    name.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_prefixed_names_are_hidden() {
        assert!(is_hidden(".git", false));
        assert!(is_hidden(".bashrc", false));
        assert!(is_hidden(".", false));
        assert!(is_hidden("..", false));
    }

    #[test]
    fn plain_names_are_not_hidden() {
        assert!(!is_hidden("src", false));
        assert!(!is_hidden("a.txt", false));
        assert!(!is_hidden("weird.name.with.dots", false));
    }

    #[test]
    fn show_all_overrides_everything() {
        assert!(!is_hidden(".git", true));
        assert!(!is_hidden(".", true));
        assert!(!is_hidden("src", true));
    }
}
