//! Password profile orchestrator - holds the password and configuration.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::analysis::{charset_size, entropy_bits, is_forbidden};
use crate::config::{PasswordConfig, PasswordConfigUpdate};
use crate::report::StrengthReport;

/// Change callback invoked with the current profile text.
pub type ChangeCallback = Box<dyn FnMut(&str)>;

/// A password under analysis, together with its configuration and an
/// optional change callback.
///
/// Each instance exclusively owns its password and configuration; nothing
/// is shared between instances, so no locking is ever needed. The stored
/// password is a [`SecretString`], which keeps it out of `Debug` output
/// and zeroizes the buffer on drop. [`Password::clean`] swaps in an empty
/// string, but this is best-effort scrubbing only - copies the caller made
/// before handing the password over are outside this crate's control.
pub struct Password {
    password: SecretString,
    config: PasswordConfig,
    on_change: Option<ChangeCallback>,
}

impl Password {
    /// Creates a profile for `password`.
    ///
    /// The configuration starts from [`PasswordConfig::default`] with the
    /// fields present in `config` applied on top. If `on_change` is
    /// supplied it is invoked once, inline, with the current profile
    /// before this returns; a panicking callback propagates to the caller.
    ///
    /// # Example
    ///
    /// ```
    /// use pwd_profile::{Password, PasswordConfigUpdate};
    ///
    /// let profile = Password::new(
    ///     "hunter2",
    ///     Some(PasswordConfigUpdate {
    ///         min_word_distance: Some(2),
    ///         ..Default::default()
    ///     }),
    ///     None,
    /// );
    /// assert_eq!(profile.profile(), "hunter2");
    /// ```
    pub fn new(
        password: impl Into<String>,
        config: Option<PasswordConfigUpdate>,
        on_change: Option<ChangeCallback>,
    ) -> Self {
        let mut merged = PasswordConfig::default();
        if let Some(update) = config {
            merged.apply(update);
        }

        let mut profile = Self {
            password: SecretString::from(password.into()),
            config: merged,
            on_change,
        };
        profile.notify();
        profile
    }

    /// Replaces the password and merges `config` into the current
    /// configuration, then fires the change callback if one is set.
    pub fn update(&mut self, password: impl Into<String>, config: Option<PasswordConfigUpdate>) {
        self.password = SecretString::from(password.into());
        if let Some(update) = config {
            self.config.apply(update);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("password updated");

        self.notify();
    }

    fn notify(&mut self) {
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(self.password.expose_secret());
        }
    }

    /// Current password text.
    pub fn profile(&self) -> &str {
        self.password.expose_secret()
    }

    /// Current configuration.
    pub fn config(&self) -> &PasswordConfig {
        &self.config
    }

    /// Checks the password against the configured common words.
    ///
    /// Returns `true` when the password is NOT a vague match for any
    /// configured word. A `false` result means the password is too similar
    /// to a common word and should be treated as weak.
    pub fn is_common_password(&self) -> bool {
        !is_forbidden(
            self.password.expose_secret(),
            &self.config.common_words,
            self.config.min_word_distance,
        )
    }

    /// Estimated charset cardinality of the current password.
    pub fn charset_size(&self) -> u32 {
        charset_size(self.password.expose_secret())
    }

    /// Estimated entropy of the current password in bits.
    pub fn entropy_bits(&self) -> f64 {
        entropy_bits(self.password.expose_secret())
    }

    /// Overwrites the stored password with an empty string.
    ///
    /// Best-effort scrubbing: the displaced buffer is zeroized on drop,
    /// but no guarantee is made about other copies. Configuration and
    /// callback stay in place, and a later [`Password::update`] makes the
    /// instance live again.
    pub fn clean(&mut self) {
        self.password = SecretString::from(String::new());

        #[cfg(feature = "tracing")]
        tracing::debug!("password cleaned");
    }

    /// Builds a strength report for the current password.
    ///
    /// # Arguments
    /// * `token` - Optional cancellation token (async feature only); a
    ///   cancelled token yields a [`Strength::NotEvaluated`] report.
    ///
    /// [`Strength::NotEvaluated`]: crate::Strength::NotEvaluated
    pub fn strength_report(
        &self,
        #[cfg(feature = "async")] token: Option<CancellationToken>,
    ) -> StrengthReport {
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    return StrengthReport::cancelled();
                }
            }
        }

        let password = self.password.expose_secret();
        let mut reasons = Vec::new();

        if password.is_empty() {
            reasons.push("Password is empty".to_string());
        }

        let common_word_match = is_forbidden(
            password,
            &self.config.common_words,
            self.config.min_word_distance,
        );
        if common_word_match {
            reasons.push("Too similar to a common word".to_string());
        }

        StrengthReport {
            entropy_bits: Some(entropy_bits(password)),
            charset_size: charset_size(password),
            common_word_match,
            reasons,
        }
    }

    /// Async version that sends the strength report via channel.
    #[cfg(feature = "async")]
    pub async fn strength_report_tx(&self, token: CancellationToken, tx: mpsc::Sender<StrengthReport>) {
        use std::time::Duration;

        #[cfg(feature = "tracing")]
        tracing::info!("strength report is about to start...");

        tokio::time::sleep(Duration::from_millis(300)).await;
        let report = self.strength_report(Some(token));

        if tx.send(report).await.is_err() {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send strength report: receiver dropped");
        }
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("password", &self.password)
            .field("config", &self.config)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
