#![allow(dead_code)]

use serde_json::Value;
use shelf_core::{
    models::{Map, Operation, ProductEntry},
    ports::RemoteStore,
};
use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

/// Counts of every call the cache made, successful or not.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Calls {
    pub exists: usize,
    pub read: usize,
    pub write: usize,
    pub merge: usize,
    pub delete: usize,
}

#[derive(Debug, thiserror::Error)]
#[error("scripted {0} failure")]
pub struct ScriptedError(pub Operation);

#[derive(Default)]
struct State {
    collections: HashMap<String, Map<String, Value>>,
    calls: Calls,
    failing: HashSet<Operation>,
    failing_keys: HashSet<String>,
}

impl State {
    fn check(&self, operation: Operation, key: Option<&str>) -> Result<(), ScriptedError> {
        let key_fails = key.is_some_and(|key| self.failing_keys.contains(key));
        if self.failing.contains(&operation) || key_fails {
            Err(ScriptedError(operation))
        } else {
            Ok(())
        }
    }
}

/// An in-memory document store whose failures are scripted by the test.
#[derive(Clone, Default)]
pub struct ScriptedStore(Arc<Mutex<State>>);

impl ScriptedStore {
    pub fn with_entries(collection: &str, entries: &[ProductEntry]) -> Self {
        let store = Self::default();
        for entry in entries {
            store.insert(collection, &entry.id, serde_json::to_value(&entry.data).unwrap());
        }
        store
    }

    pub fn insert(&self, collection: &str, key: &str, value: Value) {
        self.0
            .lock()
            .unwrap()
            .collections
            .entry(collection.to_owned())
            .or_default()
            .insert(key.to_owned(), value);
    }

    pub fn document(&self, collection: &str, key: &str) -> Option<Value> {
        self.0
            .lock()
            .unwrap()
            .collections
            .get(collection)
            .and_then(|documents| documents.get(key).cloned())
    }

    pub fn keys(&self, collection: &str) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .collections
            .get(collection)
            .map(|documents| documents.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn calls(&self) -> Calls {
        self.0.lock().unwrap().calls
    }

    /// Make every call of this kind fail.
    pub fn fail(&self, operation: Operation) {
        self.0.lock().unwrap().failing.insert(operation);
    }

    /// Make every call addressing this document fail.
    pub fn fail_key(&self, key: &str) {
        self.0.lock().unwrap().failing_keys.insert(key.to_owned());
    }

    pub fn recover(&self) {
        let mut state = self.0.lock().unwrap();
        state.failing.clear();
        state.failing_keys.clear();
    }
}

impl RemoteStore for ScriptedStore {
    type Error = ScriptedError;

    async fn exists(&self, collection: &str) -> Result<bool, Self::Error> {
        let mut state = self.0.lock().unwrap();
        state.calls.exists += 1;
        state.check(Operation::Exists, None)?;
        Ok(state
            .collections
            .get(collection)
            .is_some_and(|documents| !documents.is_empty()))
    }

    async fn read(&self, collection: &str) -> Result<Option<Map<String, Value>>, Self::Error> {
        let mut state = self.0.lock().unwrap();
        state.calls.read += 1;
        state.check(Operation::Read, None)?;
        Ok(state
            .collections
            .get(collection)
            .filter(|documents| !documents.is_empty())
            .cloned())
    }

    async fn write(&self, collection: &str, key: &str, value: Value) -> Result<(), Self::Error> {
        let mut state = self.0.lock().unwrap();
        state.calls.write += 1;
        state.check(Operation::Write, Some(key))?;
        state
            .collections
            .entry(collection.to_owned())
            .or_default()
            .insert(key.to_owned(), value);
        Ok(())
    }

    async fn merge(&self, collection: &str, key: &str, partial: Value) -> Result<(), Self::Error> {
        let mut state = self.0.lock().unwrap();
        state.calls.merge += 1;
        state.check(Operation::Merge, Some(key))?;
        let document = state
            .collections
            .entry(collection.to_owned())
            .or_default()
            .entry(key.to_owned())
            .or_insert_with(|| Value::Object(Default::default()));
        shelf_core::models::merge_document(document, partial);
        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<(), Self::Error> {
        let mut state = self.0.lock().unwrap();
        state.calls.delete += 1;
        state.check(Operation::Delete, Some(key))?;
        if let Some(documents) = state.collections.get_mut(collection) {
            documents.shift_remove(key);
            if documents.is_empty() {
                state.collections.remove(collection);
            }
        }
        Ok(())
    }
}
