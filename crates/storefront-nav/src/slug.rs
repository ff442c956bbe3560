//! URL-safe slugs for subcategory names.

/// Derive the URL slug of a display name.
///
/// Lowercases, turns whitespace and hyphen runs into a single `-`, drops
/// every character outside `[a-z0-9_-]` and trims hyphens from both ends.
/// Diacritics are dropped, not transliterated.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        } else if c.is_ascii_alphanumeric() || c == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_names() {
        assert_eq!(slugify("ELF Decor"), "elf-decor");
        assert_eq!(slugify("IZOLATII ECO-FRIENDLY"), "izolatii-eco-friendly");
        assert_eq!(slugify("MATERIALE HIDROIZOLANTE"), "materiale-hidroizolante");
    }

    #[test]
    fn test_symbols_are_stripped() {
        assert_eq!(slugify("ADEZIVI&CHITURI"), "adezivichituri");
        assert_eq!(slugify("Adezivi & Chituri"), "adezivi-chituri");
        assert_eq!(slugify("a& b"), "a-b");
    }

    #[test]
    fn test_hyphens_collapse_and_trim() {
        assert_eq!(slugify("  --Grunduri   --  interior-- "), "grunduri-interior");
        assert_eq!(slugify("snake_case name"), "snake_case-name");
    }

    #[test]
    fn test_diacritics_dropped() {
        assert_eq!(slugify("Izola\u{021b}ii termice"), "izolaii-termice");
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("&&& ---"), "");
    }

    #[test]
    fn test_stable_on_slugs() {
        for name in ["ELF Decor", "Vopsele lavabile", "ADEZIVI&CHITURI"] {
            let once = slugify(name);
            assert_eq!(slugify(&once), once);
        }
    }
}
