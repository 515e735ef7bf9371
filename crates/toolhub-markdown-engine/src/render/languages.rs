use std::collections::BTreeMap;

/// Display labels for common fence tags, keyed by lowercase tag.
pub static BUILTIN_LANGUAGE_LABELS: &[(&str, &str)] = &[
    ("bash", "Bash"),
    ("c", "C"),
    ("cpp", "C++"),
    ("cs", "C#"),
    ("csharp", "C#"),
    ("css", "CSS"),
    ("diff", "Diff"),
    ("dockerfile", "Dockerfile"),
    ("go", "Go"),
    ("graphql", "GraphQL"),
    ("html", "HTML"),
    ("java", "Java"),
    ("javascript", "JavaScript"),
    ("js", "JavaScript"),
    ("json", "JSON"),
    ("jsx", "JSX"),
    ("kotlin", "Kotlin"),
    ("markdown", "Markdown"),
    ("md", "Markdown"),
    ("php", "PHP"),
    ("py", "Python"),
    ("python", "Python"),
    ("rb", "Ruby"),
    ("rs", "Rust"),
    ("ruby", "Ruby"),
    ("rust", "Rust"),
    ("sh", "Shell"),
    ("shell", "Shell"),
    ("sql", "SQL"),
    ("swift", "Swift"),
    ("text", "Text"),
    ("toml", "TOML"),
    ("ts", "TypeScript"),
    ("tsx", "TSX"),
    ("txt", "Text"),
    ("typescript", "TypeScript"),
    ("xml", "XML"),
    ("yaml", "YAML"),
    ("yml", "YAML"),
    ("zsh", "Zsh"),
];

/// Maps a code fence tag to the label shown above the code block.
///
/// Lookup is case-insensitive: overrides first, then the built-in table.
/// Unknown tags fall back to the raw tag uppercased, so an empty tag gets an
/// empty label.
#[derive(Debug, Clone, Default)]
pub struct LanguageLabels {
    overrides: BTreeMap<String, String>,
}

impl LanguageLabels {
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn with_overrides<I, K, V>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            overrides: overrides
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
                .collect(),
        }
    }

    pub fn label(&self, tag: &str) -> String {
        let key = tag.to_lowercase();
        if let Some(label) = self.overrides.get(&key) {
            return label.clone();
        }
        BUILTIN_LANGUAGE_LABELS
            .iter()
            .find(|(k, _)| *k == key)
            .map_or_else(|| tag.to_uppercase(), |(_, label)| (*label).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("js", "JavaScript")]
    #[case("JS", "JavaScript")]
    #[case("Python", "Python")]
    #[case("tsx", "TSX")]
    #[case("hcl", "HCL")]
    #[case("objective-c", "OBJECTIVE-C")]
    #[case("", "")]
    fn builtin_labels_and_fallback(#[case] tag: &str, #[case] expected: &str) {
        assert_eq!(LanguageLabels::builtin().label(tag), expected);
    }

    #[test]
    fn overrides_win_and_ignore_case() {
        let labels = LanguageLabels::with_overrides([("HCL", "Terraform"), ("js", "JS")]);
        assert_eq!(labels.label("hcl"), "Terraform");
        assert_eq!(labels.label("Js"), "JS");
        assert_eq!(labels.label("py"), "Python");
    }

    #[test]
    fn builtin_table_is_sorted_and_lowercase() {
        let keys: Vec<_> = BUILTIN_LANGUAGE_LABELS.iter().map(|(k, _)| *k).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(keys, sorted);
        assert!(keys.iter().all(|k| *k == k.to_lowercase()));
    }
}
