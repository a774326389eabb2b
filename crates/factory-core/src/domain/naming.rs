//! Identifier conversion for generated code.

/// Convert a hyphenated identifier to camelCase.
///
/// Every `-` followed by a character is dropped and that character is
/// upper-cased. Nothing else changes, so the first letter keeps its case and
/// a trailing `-` survives.
///
/// | Input        | Output     |
/// |--------------|------------|
/// | `ui-kit`     | `uiKit`    |
/// | `a-b-c`      | `aBC`      |
/// | `storage`    | `storage`  |
/// | `my_pkg-x`   | `my_pkgX`  |
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.next() {
                out.extend(next.to_uppercase());
                continue;
            }
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_hyphen() {
        assert_eq!(camel_case("ui-kit"), "uiKit");
    }

    #[test]
    fn several_hyphens() {
        assert_eq!(camel_case("a-b-c"), "aBC");
        assert_eq!(camel_case("design-system-core"), "designSystemCore");
    }

    #[test]
    fn plain_identifier_unchanged() {
        assert_eq!(camel_case("foo"), "foo");
        assert_eq!(camel_case("Foo"), "Foo");
    }

    #[test]
    fn trailing_hyphen_kept() {
        assert_eq!(camel_case("foo-"), "foo-");
    }

    #[test]
    fn double_hyphen_uppercases_the_second() {
        // the character after the first '-' is itself '-', which has no case
        assert_eq!(camel_case("a--b"), "a-b");
    }

    #[test]
    fn underscores_untouched() {
        assert_eq!(camel_case("my_pkg-x"), "my_pkgX");
    }
}
