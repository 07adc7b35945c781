/// Turn a layout label into a file base name: path separators, characters
/// reserved on Windows and control characters become `_`.
pub fn file_stem(label: &str) -> String {
    label
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::file_stem;

    #[test]
    fn keeps_ordinary_labels() {
        assert_eq!(file_stem("カスタム"), "カスタム");
        assert_eq!(file_stem("ETC 2024"), "ETC 2024");
    }

    #[test]
    fn replaces_separators_and_reserved() {
        assert_eq!(file_stem("a/b\\c"), "a_b_c");
        assert_eq!(file_stem("x:y*z?"), "x_y_z_");
        assert_eq!(file_stem("tab\n"), "tab_");
    }
}
