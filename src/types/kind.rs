use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Coarse runtime category of a value.
///
/// Closed and payload-free. `Unknown` stands for any value the classifier could not pin down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Number,
    String,
    Boolean,
    Null,
    Undefined,
    Array,
    Object,
    Function,
    Unknown,
}

const PRIMITIVES: [Kind; 5] = [Kind::Number, Kind::String, Kind::Boolean, Kind::Null, Kind::Undefined];

const ALL: [Kind; 9] = [
    Kind::Number,
    Kind::String,
    Kind::Boolean,
    Kind::Null,
    Kind::Undefined,
    Kind::Array,
    Kind::Object,
    Kind::Function,
    Kind::Unknown,
];

impl Kind {
    pub fn is_primitive(&self) -> bool {
        PRIMITIVES.contains(self)
    }

    pub fn primitives() -> &'static [Kind] {
        &PRIMITIVES
    }

    pub fn all() -> &'static [Kind] {
        &ALL
    }

    pub fn name(&self) -> &'static str {
        match self {
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Boolean => "boolean",
            Kind::Null => "null",
            Kind::Undefined => "undefined",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Function => "function",
            Kind::Unknown => "unknown",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
