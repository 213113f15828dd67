use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::AppError;

pub const ENTITY_ID: &str = "entity_id";

/// String key/value pairs sent as a service call body.
///
/// Keeps insertion order; inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceData {
    pairs: Vec<(String, String)>,
}

impl ServiceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a flat `[key, value, key, value, ...]` list.
    pub fn from_flat(args: &[String]) -> Result<Self, AppError> {
        if args.len() % 2 != 0 {
            return Err(AppError::InvalidInput(format!(
                "Service data must be KEY VALUE pairs, got odd trailing argument '{}'",
                args[args.len() - 1]
            )));
        }
        let mut data = Self::new();
        for pair in args.chunks_exact(2) {
            data.insert(pair[0].clone(), pair[1].clone());
        }
        Ok(data)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Insert every pair of `other`, in order.
    pub fn extend(&mut self, other: &ServiceData) {
        for (key, value) in &other.pairs {
            self.insert(key.clone(), value.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for ServiceData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (key, value) in &self.pairs {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One `services/<domain>/<service>` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCall {
    pub domain: String,
    pub service: String,
    pub entity_id: Option<String>,
    pub data: ServiceData,
}

impl ServiceCall {
    pub fn new(domain: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            service: service.into(),
            entity_id: None,
            data: ServiceData::new(),
        }
    }

    pub fn with_entity(mut self, entity_id: Option<String>) -> Self {
        self.entity_id = entity_id;
        self
    }

    pub fn with_data(mut self, data: &ServiceData) -> Self {
        self.data.extend(data);
        self
    }

    pub fn path(&self) -> String {
        format!("services/{}/{}", self.domain, self.service)
    }

    /// The request body: `entity_id` first (skipped when absent or empty),
    /// then the extra data. Extra data may overwrite `entity_id`.
    pub fn payload(&self) -> ServiceData {
        let mut body = ServiceData::new();
        if let Some(entity_id) = self.entity_id.as_deref().filter(|e| !e.is_empty()) {
            body.insert(ENTITY_ID, entity_id);
        }
        body.extend(&self.data);
        body
    }
}
