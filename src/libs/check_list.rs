use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Letters, digits and spaces, one to twenty characters.
pub const NAME_PATTERN: &str = r"^[A-Za-z0-9 ]{1,20}$";

static NAME_REGEX: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckList {
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
}

impl CheckList {
    pub fn new(name: &str, description: &str) -> Self {
        CheckList {
            id: None,
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    pub fn has_valid_name(&self) -> bool {
        is_valid_name(&self.name)
    }
}

pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX
        .get_or_init(|| Regex::new(NAME_PATTERN).expect("check list name pattern compiles"))
        .is_match(name)
}
