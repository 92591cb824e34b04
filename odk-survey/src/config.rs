use serde::Deserialize;

/// XForm conventions the reader relies on.
///
/// The defaults match the forms deployed for the care programs; deployments
/// with different naming pass their own values at construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// The `setvalue` reference whose value lists the targeted program IDs.
    pub programs_ref: String,

    /// Submission field that asks for a follow-up service request.
    pub alert_field: String,

    /// Submission attribute holding the form version the answers belong to.
    pub version_key: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            programs_ref: "/data/programs".to_string(),
            alert_field: "send_alert".to_string(),
            version_key: "-version".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: ReaderConfig = serde_json::from_str(r#"{ "alert_field": "red_flag" }"#).unwrap();
        assert_eq!(config.alert_field, "red_flag");
        assert_eq!(config.programs_ref, "/data/programs");
        assert_eq!(config.version_key, "-version");
    }
}
