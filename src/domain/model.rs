use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "MyJSApp";
pub const GREETED_NAME: &str = "World";
pub const PERSON_NAME: &str = "John Doe";
pub const PERSON_AGE: u32 = 30;
pub const FRUITS: [&str; 3] = ["apple", "banana", "cherry"];

/// Upper bound (exclusive) under which the script performs its increments.
pub const INCREMENT_THRESHOLD: u64 = 5;
pub const INCREMENT_STEPS: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter(u64);

impl Counter {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn starting_at(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn increment(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// The key-value record built by the script. Serialized with its original field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptRecord {
    pub url: String,
    pub timeout: u64,
    pub is_active: bool,
}

impl Default for ScriptRecord {
    fn default() -> Self {
        Self {
            url: "http://example.com".to_string(),
            timeout: 5000,
            is_active: true,
        }
    }
}

pub fn fruits() -> Vec<String> {
    FRUITS.iter().map(|f| f.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub counter: u64,
    pub lines: Vec<String>,
    pub fruits: Vec<String>,
    pub record: ScriptRecord,
}

impl RunReport {
    pub fn to_summary_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
