//! Structured-interchange format (JSON).
//!
//! The interchange document is trusted to already match the canonical
//! shape. Decoding is typed but permissive: after the JSON decode step,
//! every field is extracted with an explicit presence check and degrades
//! individually, so malformed-but-decodable input passes through rather
//! than being rejected. Unknown top-level members are never dropped; they
//! pass into the metadata bag unexamined.

use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::{Result, StoryError};
use crate::extract::slug;
use crate::formats::StoryFormat;
use crate::model::{Metadata, ParsedPassage, ParsedStory, Position, DEFAULT_TITLE};

/// Top-level members with canonical meaning; everything else routes into
/// the metadata bag.
const KNOWN_FIELDS: &[&str] = &["title", "author", "passages", "metadata", "variables"];

/// Parser for the structured JSON interchange format.
#[derive(Debug, Default)]
pub struct JsonFormat;

impl StoryFormat for JsonFormat {
    fn can_parse(&self, content: &str) -> bool {
        match serde_json::from_str::<Value>(content) {
            Ok(Value::Object(map)) => map.contains_key("passages"),
            _ => false,
        }
    }

    fn parse(&self, content: &str) -> Result<ParsedStory> {
        decode(content)
    }

    fn format(&self) -> &'static str {
        "json"
    }
}

/// Decode interchange text into the canonical model.
///
/// Hard failure is confined to the decode step (invalid JSON, or a root
/// value that is not an object). Every field after that point degrades on
/// its own: a missing title becomes the placeholder, a malformed passage
/// list becomes empty, a malformed position becomes absent.
fn decode(content: &str) -> Result<ParsedStory> {
    let raw: Value = serde_json::from_str(content).map_err(|e| StoryError::MalformedInput {
        format: "json",
        cause: e.to_string(),
    })?;

    let obj = match raw.as_object() {
        Some(obj) => obj,
        None => {
            return Err(StoryError::MalformedInput {
                format: "json",
                cause: "document root must be an object".to_string(),
            })
        }
    };

    let title = string_member(obj, "title").unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let author = string_member(obj, "author");

    let passages: Vec<ParsedPassage> = match obj.get("passages") {
        Some(Value::Array(items)) => items.iter().filter_map(decode_passage).collect(),
        _ => Vec::new(),
    };

    let variables = match obj.get("variables") {
        Some(Value::Object(map)) => Some(bag_from(map)),
        _ => None,
    };

    // Metadata bag: declared `metadata` object entries plus every unknown
    // top-level member, passed through unexamined.
    let mut bag = Metadata::new();
    let mut metadata_declared = false;
    for (key, value) in obj {
        if KNOWN_FIELDS.contains(&key.as_str()) {
            if key == "metadata" {
                match value {
                    Value::Object(map) => {
                        metadata_declared = true;
                        for (k, v) in map {
                            bag.set(k.clone(), v.clone());
                        }
                    }
                    other => bag.set(key.clone(), other.clone()),
                }
            } else if key == "variables" && !value.is_object() {
                bag.set(key.clone(), value.clone());
            }
        } else {
            bag.set(key.clone(), value.clone());
        }
    }
    let metadata = (metadata_declared || !bag.is_empty()).then_some(bag);

    let story = ParsedStory {
        title,
        author,
        passages,
        metadata,
        variables,
    };
    debug!(passages = story.passages.len(), "decoded interchange document");
    Ok(story)
}

/// Decode one passage element; non-object elements are skipped.
fn decode_passage(value: &Value) -> Option<ParsedPassage> {
    let obj = value.as_object()?;
    let title = string_member(obj, "title").unwrap_or_default();
    let id = string_member(obj, "id").unwrap_or_else(|| slug(&title));
    Some(ParsedPassage {
        id,
        title,
        content: string_member(obj, "content").unwrap_or_default(),
        tags: string_seq(obj.get("tags")),
        position: obj.get("position").and_then(decode_position),
        links: string_seq(obj.get("links")),
    })
}

/// An `{x, y}` integer pair; anything else is absent.
fn decode_position(value: &Value) -> Option<Position> {
    let obj = value.as_object()?;
    let x = obj.get("x")?.as_i64()?;
    let y = obj.get("y")?.as_i64()?;
    Some(Position { x, y })
}

fn string_member(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// String elements of an array member, in order; non-strings are skipped.
fn string_seq(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn bag_from(map: &Map<String, Value>) -> Metadata {
    let mut bag = Metadata::new();
    for (k, v) in map {
        bag.set(k.clone(), v.clone());
    }
    bag
}
