//! Response types for the account API

use serde::{Deserialize, Serialize};

/// Account metadata as returned by `GET /api/v2/account.json`.
///
/// Every field defaults so that partial payloads still decode; the
/// gateway only consumes `url` and `subdomain`, the remaining fields
/// track the wire format for forward compatibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountResponse {
    pub url: String,
    pub name: String,
    pub sandbox: bool,
    pub subdomain: String,
    pub time_format: i64,
    pub time_zone: String,
    pub owner_id: i64,
    pub multiproduct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_payload_decodes() {
        let body = r#"{
            "url": "https://acme.example.com",
            "name": "Acme",
            "sandbox": false,
            "subdomain": "acme",
            "time_format": 24,
            "time_zone": "Europe/Berlin",
            "owner_id": 42,
            "multiproduct": true
        }"#;

        let account: AccountResponse = serde_json::from_str(body).unwrap();
        assert_eq!(account.url, "https://acme.example.com");
        assert_eq!(account.subdomain, "acme");
        assert_eq!(account.time_format, 24);
        assert_eq!(account.owner_id, 42);
        assert!(account.multiproduct);
    }

    #[test]
    fn empty_object_decodes_to_defaults() {
        let account: AccountResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(account.url, "");
        assert_eq!(account.subdomain, "");
        assert!(!account.sandbox);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = r#"{"url": "https://acme.example.com", "plan": "enterprise"}"#;
        let account: AccountResponse = serde_json::from_str(body).unwrap();
        assert_eq!(account.url, "https://acme.example.com");
    }
}
