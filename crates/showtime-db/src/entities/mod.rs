pub mod artist;
pub mod show;
pub mod venue;

/// Split a stored genre column into its values.
///
/// Accepts the comma-separated form written by this service as well as the
/// `{Jazz,"Rock n Roll"}` array-literal form found in older rows.
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.trim()
        .trim_start_matches('{')
        .trim_end_matches('}')
        .split(',')
        .map(|g| g.trim().trim_matches('"').trim())
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join genre values into the stored comma-separated form.
pub fn join_genres<S: AsRef<str>>(genres: &[S]) -> String {
    genres
        .iter()
        .map(|g| g.as_ref().trim())
        .filter(|g| !g.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_comma_separated() {
        assert_eq!(split_genres("Jazz,Reggae,Swing"), vec!["Jazz", "Reggae", "Swing"]);
    }

    #[test]
    fn test_split_array_literal() {
        assert_eq!(
            split_genres(r#"{Jazz,"Rock n Roll",Folk}"#),
            vec!["Jazz", "Rock n Roll", "Folk"]
        );
    }

    #[test]
    fn test_split_empty() {
        assert!(split_genres("").is_empty());
        assert!(split_genres("{}").is_empty());
    }

    #[test]
    fn test_join_skips_blank() {
        assert_eq!(join_genres(&["Jazz", " ", "Folk "]), "Jazz,Folk");
    }
}
