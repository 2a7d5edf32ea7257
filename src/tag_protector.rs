/*!
 * Reversible protection of markup and placeholder tokens.
 *
 * Translation services routinely mangle format placeholders (`%1`) and
 * markup brackets. Before a segment is handed to the service, every
 * protected literal is swapped for a reserved-alphabet placeholder;
 * after translation the substitution is reversed.
 */

/// Reversible escaping of markup and placeholder tokens.
///
/// Holds an ordered list of `(literal, placeholder)` pairs. `protect`
/// replaces every occurrence of each literal with its placeholder in
/// list order; `unprotect` applies the inverse substitutions in the
/// same order. Placeholders use the reserved `⟦…⟧` bracket alphabet,
/// which is assumed absent from mod text. The scheme does not escape
/// its own delimiters - callers supplying custom pairs must pick
/// placeholder forms guaranteed absent from the input.
#[derive(Debug, Clone)]
pub struct TagProtector {
    /// Ordered (literal, placeholder) substitution pairs
    pairs: Vec<(String, String)>,
}

impl TagProtector {
    /// Create a protector from an explicit ordered pair list
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Create a protector for the standard mod-file token set:
    /// numbered format placeholders `%1`..`%9` and the markup
    /// brackets `<`, `>`, `[`, `]`.
    pub fn with_default_tokens() -> Self {
        let mut pairs = Vec::with_capacity(13);
        for n in 1..=9 {
            pairs.push((format!("%{}", n), format!("⟦p{}⟧", n)));
        }
        pairs.push(("<".to_string(), "⟦lt⟧".to_string()));
        pairs.push((">".to_string(), "⟦gt⟧".to_string()));
        pairs.push(("[".to_string(), "⟦lb⟧".to_string()));
        pairs.push(("]".to_string(), "⟦rb⟧".to_string()));
        Self::new(pairs)
    }

    /// Replace every protected literal with its placeholder, in pair order
    pub fn protect(&self, text: &str) -> String {
        let mut protected = text.to_string();
        for (literal, placeholder) in &self.pairs {
            protected = protected.replace(literal, placeholder);
        }
        protected
    }

    /// Restore every placeholder back to its literal, in pair order
    pub fn unprotect(&self, text: &str) -> String {
        let mut restored = text.to_string();
        for (literal, placeholder) in &self.pairs {
            restored = restored.replace(placeholder, literal);
        }
        restored
    }

    /// Number of substitution pairs in this protector
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the protector has no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Default for TagProtector {
    fn default() -> Self {
        Self::with_default_tokens()
    }
}
