//! Unit tests for error handling

use super::*;

#[cfg(test)]
mod fpl_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let fpl_error = FplError::from(reqwest_error);

        match fpl_error {
            FplError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let fpl_error = FplError::from(json_error);

        match fpl_error {
            FplError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let fpl_error = FplError::from(header_error);

        match fpl_error {
            FplError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let fpl_error = FplError::from(parse_error);

        match fpl_error {
            FplError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_missing_league_id_error() {
        let error = FplError::MissingLeagueId {
            env_var: "FPL_LEAGUE_ID".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League ID not provided"));
        assert!(error_string.contains("FPL_LEAGUE_ID"));
    }

    #[test]
    fn test_upstream_error_display() {
        let error = FplError::Upstream {
            status: 503,
            url: "https://fantasy.premierleague.com/api/bootstrap-static/".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("503"));
        assert!(error_string.contains("bootstrap-static"));
    }

    #[test]
    fn test_entry_not_found_display() {
        let entry = FplError::EntryNotFound { entry: 42 };
        assert_eq!(entry.to_string(), "Entry not found: 42");
    }
}
