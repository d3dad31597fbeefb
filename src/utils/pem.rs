/// Collects every `-----BEGIN {label}-----` .. `-----END {label}-----` section
/// in `text`, marker lines included, in the order they appear.
///
/// A BEGIN line restarts the current section, so an unterminated section is
/// dropped. Lines outside a section and END lines with no open section are
/// ignored.
pub(crate) fn pem_sections<'a>(text: &'a str, label: &str) -> Vec<Vec<&'a str>> {
    let begin = format!("-----BEGIN {label}-----");
    let end = format!("-----END {label}-----");

    let mut sections = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for line in text.lines() {
        if line.contains(&begin) {
            current = Some(vec![line]);
        } else if line.contains(&end) {
            if let Some(mut section) = current.take() {
                section.push(line);
                sections.push(section);
            }
        } else if let Some(section) = current.as_mut() {
            section.push(line);
        }
    }

    sections
}

/// Base64 body of a section returned by [`pem_sections`], markers stripped
/// and whitespace removed.
pub(crate) fn pem_body(section: &[&str]) -> String {
    let inner: &[&str] = match section {
        [_, inner @ .., _] => inner,
        _ => &[],
    };

    inner
        .iter()
        .flat_map(|line| line.split_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restarts_on_nested_begin() {
        let text = "-----BEGIN X-----\nlost\n-----BEGIN X-----\nkept\n-----END X-----\n";
        let sections = pem_sections(text, "X");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0], ["-----BEGIN X-----", "kept", "-----END X-----"]);
    }

    #[test]
    fn ignores_other_labels_and_stray_end() {
        let text = "-----END X-----\n-----BEGIN Y-----\nbody\n-----END Y-----\n";
        assert!(pem_sections(text, "X").is_empty());
        assert_eq!(pem_sections(text, "Y").len(), 1);
    }

    #[test]
    fn body_joins_inner_lines() {
        let section = ["-----BEGIN X-----", "QUJD", " REVG ", "-----END X-----"];
        assert_eq!(pem_body(&section), "QUJDREVG");
    }
}
