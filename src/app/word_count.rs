/// Count words in mixed CJK/Latin text.
///
/// The rule, kept bit-for-bit compatible with the counts users already see:
/// a maximal run of whitespace (full-width space included) separates and
/// counts as nothing, a maximal run of single-byte characters (ASCII and
/// Latin-1 letters, digits, punctuation) collapses to one counted word, and
/// every remaining character - CJK ideographs and anything else beyond
/// U+00FF - counts on its own.
///
/// This is deliberately not a Unicode word-segmentation algorithm.
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_single_byte_run = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            in_single_byte_run = false;
        } else if (ch as u32) < 0x100 {
            if !in_single_byte_run {
                count += 1;
            }
            in_single_byte_run = true;
        } else {
            in_single_byte_run = false;
            count += 1;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(count_words("   \t\r\n  "), 0);
        assert_eq!(count_words("\u{3000}\u{3000}"), 0);
    }

    #[test]
    fn test_ascii_words() {
        assert_eq!(count_words("hello"), 1);
        assert_eq!(count_words("hello world"), 2);
        assert_eq!(count_words("one  two\tthree\nfour"), 4);
    }

    #[test]
    fn test_ascii_run_includes_punctuation_and_digits() {
        // A run of single-byte characters is one word no matter what is in it.
        assert_eq!(count_words("don't"), 1);
        assert_eq!(count_words("3.14abc!"), 1);
        assert_eq!(count_words("a+b=c, x"), 2);
    }

    #[test]
    fn test_cjk_counts_per_character() {
        assert_eq!(count_words("你好"), 2);
        assert_eq!(count_words("你好世界"), 4);
    }

    #[test]
    fn test_mixed_ascii_and_cjk() {
        // "hi" collapses to one unit, each ideograph counts alone.
        assert_eq!(count_words("hi你好"), 3);
        assert_eq!(count_words("你好hi"), 3);
        assert_eq!(count_words("abc一def"), 3);
    }

    #[test]
    fn test_fullwidth_space_separates() {
        assert_eq!(count_words("你\u{3000}好"), 2);
        assert_eq!(count_words("hello\u{3000}world"), 2);
    }

    #[test]
    fn test_whitespace_breaks_runs() {
        assert_eq!(count_words("  hello  "), 1);
        assert_eq!(count_words("a b c"), 3);
        assert_eq!(count_words("一 二 三"), 3);
    }
}
