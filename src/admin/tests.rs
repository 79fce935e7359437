//! Admin Module Tests

#[cfg(test)]
mod tests {
    use crate::admin::handlers::{AdminConfig, VerifyPasswordRequest};

    #[test]
    fn test_password_match() {
        let config = AdminConfig::new("hunter2");

        assert!(config.matches("hunter2"));
        assert!(!config.matches("hunter3"));
        assert!(!config.matches(""));
    }

    #[test]
    fn test_password_is_case_sensitive() {
        let config = AdminConfig::new("Secret");
        assert!(!config.matches("secret"));
    }

    #[test]
    fn test_verify_request_deserialization() {
        let req: VerifyPasswordRequest =
            serde_json::from_str(r#"{"password": "hunter2"}"#).expect("Deserialization failed");
        assert_eq!(req.password, "hunter2");
    }
}
