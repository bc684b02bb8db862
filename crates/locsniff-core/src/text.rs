// crates/locsniff-core/src/text.rs

//! Character-level text helpers shared by dictionary building and querying.
//!
//! The folding table is fixed: the dictionary registers every key in both
//! its accented and folded spelling, and queries are folded with the same
//! table, so the two sides can never disagree on what "unaccented" means.

/// Fold common Latin diacritics to their ASCII equivalents.
///
/// Pure and total: characters outside the table pass through unchanged.
/// Case is preserved; callers that need a lookup key apply the lowercase
/// pass themselves (or use [`fold_key`]). `ß` → `ss` is the only
/// multi-character expansion.
///
/// # Examples
///
/// ```
/// use locsniff_core::text::fold;
///
/// assert_eq!(fold("São Paulo"), "Sao Paulo");
/// assert_eq!(fold("Straße"), "Strasse");
/// assert_eq!(fold("Łódź"), "Lodz");
/// ```
pub fn fold(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            'à' | 'á' | 'â' | 'ä' | 'æ' | 'ã' | 'å' | 'ā' => out.push('a'),
            'À' | 'Á' | 'Â' | 'Ä' | 'Æ' | 'Ã' | 'Å' | 'Ā' => out.push('A'),
            'ç' | 'ć' | 'č' => out.push('c'),
            'Ç' | 'Ć' | 'Č' => out.push('C'),
            'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' => out.push('e'),
            'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ė' | 'Ę' => out.push('E'),
            'î' | 'ï' | 'í' | 'ī' | 'į' | 'ì' => out.push('i'),
            'Î' | 'Ï' | 'Í' | 'Ī' | 'Į' | 'Ì' => out.push('I'),
            'ł' => out.push('l'),
            'Ł' => out.push('L'),
            'ñ' | 'ń' => out.push('n'),
            'Ñ' | 'Ń' => out.push('N'),
            'ô' | 'ö' | 'ò' | 'ó' | 'œ' | 'ø' | 'ō' | 'õ' => out.push('o'),
            'Ô' | 'Ö' | 'Ò' | 'Ó' | 'Œ' | 'Ø' | 'Ō' | 'Õ' => out.push('O'),
            'ß' => out.push_str("ss"),
            'ś' | 'š' => out.push('s'),
            'Ś' | 'Š' => out.push('S'),
            'û' | 'ü' | 'ù' | 'ú' | 'ū' => out.push('u'),
            'Û' | 'Ü' | 'Ù' | 'Ú' | 'Ū' => out.push('U'),
            'ÿ' => out.push('y'),
            'Ÿ' => out.push('Y'),
            'ž' | 'ź' | 'ż' => out.push('z'),
            'Ž' | 'Ź' | 'Ż' => out.push('Z'),
            _ => out.push(ch),
        }
    }
    out
}

/// Fold and lowercase: the canonical form for dictionary keys.
///
/// ```
/// use locsniff_core::text::fold_key;
///
/// assert_eq!(fold_key("São Paulo"), "sao paulo");
/// ```
#[inline]
pub fn fold_key(s: &str) -> String {
    fold(s).to_lowercase()
}

/// Trim and collapse internal whitespace runs to a single space.
///
/// ```
/// use locsniff_core::text::clean;
///
/// assert_eq!(clean("  Paris,   France\t"), "Paris, France");
/// ```
pub fn clean(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_preserves_case() {
        assert_eq!(fold("ÉTAT"), "ETAT");
        assert_eq!(fold("état"), "etat");
    }

    #[test]
    fn fold_passes_unmapped_through() {
        assert_eq!(fold("東京 Tokyo!"), "東京 Tokyo!");
    }

    #[test]
    fn fold_expands_eszett() {
        assert_eq!(fold("Gießen"), "Giessen");
    }

    #[test]
    fn fold_key_is_lowercased() {
        assert_eq!(fold_key("Québec"), "quebec");
        assert_eq!(fold_key("KØBENHAVN"), "kobenhavn");
    }

    #[test]
    fn clean_collapses_runs() {
        assert_eq!(clean("  a \t b\n\nc "), "a b c");
        assert_eq!(clean(""), "");
    }
}
