//! Data-handling policy attached to every reading.

use serde::{Deserialize, Serialize};

/// How the service may retain, use and sanitize a reading.
///
/// Each reading owns its own policy. The default policy leaves all four
/// lists empty.
///
/// # Examples
///
/// ```
/// use geopose_core::Privacy;
///
/// let privacy = Privacy::default().with_data_retention(["session"]);
/// assert_eq!(privacy.data_retention, vec!["session".to_owned()]);
/// assert!(privacy.data_acceptable_use.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Privacy {
    /// Retention rules the service must honour.
    pub data_retention: Vec<String>,
    /// Uses the reading may be put to.
    pub data_acceptable_use: Vec<String>,
    /// Sanitization already applied by the client.
    pub data_sanitization_applied: Vec<String>,
    /// Sanitization the service is asked to apply.
    pub data_sanitization_requested: Vec<String>,
}

impl Privacy {
    /// Replace the retention rules.
    #[must_use]
    pub fn with_data_retention<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_retention = rules.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the acceptable uses.
    #[must_use]
    pub fn with_data_acceptable_use<I, S>(mut self, uses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_acceptable_use = uses.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the sanitization already applied.
    #[must_use]
    pub fn with_data_sanitization_applied<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_sanitization_applied = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the sanitization requested from the service.
    #[must_use]
    pub fn with_data_sanitization_requested<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_sanitization_requested = steps.into_iter().map(Into::into).collect();
        self
    }
}
