/// Filter for the file formats the editor opens as text.
///
/// FLTK format: "Description\tPattern", one filter per line. The native
/// chooser appends its own "All Files (*)" entry, so we don't include it.
pub fn text_files_filter() -> String {
    "Text Files\t*.{txt,js,html,md}".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_format() {
        let filter = text_files_filter();
        assert!(filter.contains('\t'));
        assert!(filter.starts_with("Text Files"));
    }

    #[test]
    fn test_filter_extensions() {
        let filter = text_files_filter();
        for ext in ["txt", "js", "html", "md"] {
            assert!(filter.contains(ext), "missing extension {}", ext);
        }
    }
}
