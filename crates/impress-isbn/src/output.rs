//! Result rendering for the CLI and hosts.

use crate::{IsbnError, OutputFormat, Result, Verification};

/// Render a verification in the requested format.
pub fn render(report: &Verification, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.check_digit.to_string()),
        OutputFormat::Json => {
            serde_json::to_string(report).map_err(|e| IsbnError::Serialization(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{verify_with_config, CheckConfig};

    #[test]
    fn text_is_bare_check_character() {
        let report = verify_with_config("91-85668-01", &CheckConfig::default()).unwrap();
        assert_eq!(render(&report, OutputFormat::Text).unwrap(), "X");
    }

    #[test]
    fn json_report() {
        let report = verify_with_config("978-1-61262-294-1", &CheckConfig::default()).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(&report, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["kind"], "isbn13");
        assert_eq!(json["payload"], "978161262294");
        assert_eq!(json["check_digit"], "1");
        assert_eq!(json["supplied"], "1");
        assert_eq!(json["matches"], true);
    }
}
