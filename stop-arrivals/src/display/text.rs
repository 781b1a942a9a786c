//! Label normalisation for display.

/// Title-case a free-text label.
///
/// Splits on whitespace, uppercases the first character of each word,
/// lowercases the rest and joins with single spaces.
///
/// # Examples
///
/// ```
/// use stop_arrivals::display::title_case;
///
/// assert_eq!(title_case("CENTRUM plac GRUNWALDZKI"), "Centrum Plac Grunwaldzki");
/// ```
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_case_words() {
        assert_eq!(
            title_case("CENTRUM plac GRUNWALDZKI"),
            "Centrum Plac Grunwaldzki"
        );
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(title_case("  KROMERA \t  pętla\n"), "Kromera Pętla");
    }

    #[test]
    fn non_ascii_letters() {
        assert_eq!(title_case("ŚWIDNICKA"), "Świdnicka");
        assert_eq!(title_case("żerniki"), "Żerniki");
    }

    #[test]
    fn empty_and_blank() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("   "), "");
    }

    #[test]
    fn digits_and_punctuation_untouched() {
        assert_eq!(title_case("os. SOBIESKIEGO 2"), "Os. Sobieskiego 2");
    }
}
