use crate::model::endpoint::Endpoint;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::collections::BTreeMap;

/// A normalized contract: endpoint key -> endpoint
///
/// Built once by the normalizer and never mutated afterwards. Backed by a
/// `BTreeMap`, so iteration is always in sorted key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedContract {
    endpoints: BTreeMap<String, Endpoint>,
}

impl NormalizedContract {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an endpoint under its own key
    pub(crate) fn insert(&mut self, endpoint: Endpoint) {
        self.endpoints.insert(endpoint.key(), endpoint);
    }

    pub fn get(&self, key: &str) -> Option<&Endpoint> {
        self.endpoints.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.endpoints.contains_key(key)
    }

    /// Endpoint keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.endpoints.keys().map(String::as_str)
    }

    /// `(key, endpoint)` pairs in sorted key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Endpoint)> {
        self.endpoints.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// SHA-256 over the canonical JSON form, hex encoded
    ///
    /// Two contracts with the same digest compare as identical.
    pub fn digest(&self) -> String {
        let canonical = serde_json::to_string(&self.endpoints).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl FromIterator<Endpoint> for NormalizedContract {
    fn from_iter<I: IntoIterator<Item = Endpoint>>(iter: I) -> Self {
        let mut contract = NormalizedContract::new();
        for endpoint in iter {
            contract.insert(endpoint);
        }
        contract
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::Field;

    #[test]
    fn test_keys_are_sorted() {
        let contract: NormalizedContract = [
            Endpoint::new("POST", "/users"),
            Endpoint::new("GET", "/users"),
            Endpoint::new("DELETE", "/users/{id}"),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = contract.keys().collect();
        assert_eq!(keys, vec!["DELETE /users/{id}", "GET /users", "POST /users"]);
    }

    #[test]
    fn test_later_endpoint_with_same_key_wins() {
        let first = Endpoint::new("GET", "/a").with_name("first");
        let second = Endpoint::new("get", "/a").with_name("second");
        let contract: NormalizedContract = [first, second].into_iter().collect();

        assert_eq!(contract.len(), 1);
        assert_eq!(contract.get("GET /a").map(|e| e.name.as_str()), Some("second"));
    }

    #[test]
    fn test_digest_tracks_field_changes() {
        let mut ep = Endpoint::new("GET", "/a");
        let before: NormalizedContract = [ep.clone()].into_iter().collect();
        ep.request.insert("id".to_string(), Field::new("string", true));
        let after: NormalizedContract = [ep].into_iter().collect();

        assert_eq!(before.digest(), before.clone().digest());
        assert_ne!(before.digest(), after.digest());
        assert_eq!(before.digest().len(), 64);
    }
}
