//! Profiling configuration and partial updates.

/// Words every new profile guards against unless overridden.
pub const DEFAULT_COMMON_WORDS: [&str; 3] = ["password", "123456", "secret"];

/// Configuration owned by a [`crate::Password`] instance.
///
/// Defaults come from [`PasswordConfig::default`], which builds a fresh
/// value on every call — instances never share configuration state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PasswordConfig {
    /// Ordered dictionary of common/forbidden words.
    pub common_words: Vec<String>,
    /// Maximum edit distance at which a dictionary word still counts as a
    /// match. 0 accepts exact (windowed) occurrences only.
    pub min_word_distance: usize,
    /// Advisory strength target, nominally 1 (simple) to 10 (overkill).
    /// Not fed into any formula here; callers use it as a policy knob, and
    /// out-of-range values are stored as-is.
    pub complexity: u8,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            common_words: DEFAULT_COMMON_WORDS.iter().map(ToString::to_string).collect(),
            min_word_distance: 3,
            complexity: 5,
        }
    }
}

impl PasswordConfig {
    /// Overwrites the fields present in `update`, keeping the rest.
    pub fn apply(&mut self, update: PasswordConfigUpdate) {
        if let Some(common_words) = update.common_words {
            self.common_words = common_words;
        }
        if let Some(min_word_distance) = update.min_word_distance {
            self.min_word_distance = min_word_distance;
        }
        if let Some(complexity) = update.complexity {
            self.complexity = complexity;
        }
    }
}

/// Partial configuration: absent fields leave the existing value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PasswordConfigUpdate {
    pub common_words: Option<Vec<String>>,
    pub min_word_distance: Option<usize>,
    pub complexity: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = PasswordConfig::default();
        assert_eq!(config.common_words, vec!["password", "123456", "secret"]);
        assert_eq!(config.min_word_distance, 3);
        assert_eq!(config.complexity, 5);
    }

    #[test]
    fn test_defaults_are_fresh_values() {
        let mut first = PasswordConfig::default();
        first.common_words.push("hunter".to_string());
        assert_eq!(PasswordConfig::default().common_words.len(), 3);
    }

    #[test]
    fn test_apply_overwrites_present_fields_only() {
        let mut config = PasswordConfig::default();
        config.apply(PasswordConfigUpdate {
            complexity: Some(10),
            ..Default::default()
        });
        assert_eq!(config.complexity, 10);
        assert_eq!(config.min_word_distance, 3);
        assert_eq!(config.common_words.len(), 3);
    }

    #[test]
    fn test_apply_empty_update_changes_nothing() {
        let mut config = PasswordConfig::default();
        let before = config.clone();
        config.apply(PasswordConfigUpdate::default());
        assert_eq!(config, before);
    }

    #[test]
    fn test_apply_replaces_word_list_wholesale() {
        let mut config = PasswordConfig::default();
        config.apply(PasswordConfigUpdate {
            common_words: Some(vec!["hello".into(), "swag".into(), "password".into()]),
            ..Default::default()
        });
        assert_eq!(config.common_words, vec!["hello", "swag", "password"]);
    }

    #[test]
    fn test_out_of_range_complexity_is_kept_as_is() {
        let mut config = PasswordConfig::default();
        config.apply(PasswordConfigUpdate {
            complexity: Some(42),
            ..Default::default()
        });
        assert_eq!(config.complexity, 42);
    }
}
