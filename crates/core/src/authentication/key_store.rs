use subtle::ConstantTimeEq;

/// A source of truth for which API keys are accepted.
pub trait ApiKeyStore: Send + Sync {
    fn is_valid(&self, api_key: &str) -> bool;
}

/// Holds the API keys configured for the service.
///
/// Every candidate is compared in constant time and the scan never stops
/// early, so timing does not reveal which (if any) key matched.
#[derive(Debug, Clone, Default)]
pub struct StaticApiKeyStore {
    keys: Vec<String>,
}

impl StaticApiKeyStore {
    /// Creates a store from the configured keys, ignoring empty entries.
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self { keys: keys.into_iter().map(Into::into).filter(|key| !key.is_empty()).collect() }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl ApiKeyStore for StaticApiKeyStore {
    fn is_valid(&self, api_key: &str) -> bool {
        let candidate = api_key.as_bytes();

        self.keys.iter().fold(false, |matched, key| {
            // ct_eq on slices of different lengths is false without inspecting content
            let equal: bool = key.as_bytes().ct_eq(candidate).into();
            matched | equal
        })
    }
}
