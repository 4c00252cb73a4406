use serde_json::{json, Value};
use storyloom_core::model::{ParsedPassage, ParsedStory};

/// Build a minimal valid interchange document with two linked passages.
#[allow(dead_code)]
pub fn base_interchange() -> Value {
    json!({
        "title": "The Cave",
        "author": "Ada",
        "passages": [
            {
                "id": "start",
                "title": "Start",
                "content": "Torch in hand, you face the cave. Cave Mouth",
                "tags": ["intro"],
                "position": {"x": 100, "y": 200},
                "links": ["Cave Mouth"]
            },
            {
                "id": "cave-mouth",
                "title": "Cave Mouth",
                "content": "It is pitch dark."
            }
        ],
        "metadata": {"format": "Harlowe", "zoom": 1.5}
    })
}

/// Serialize a JSON value to the text form the parsers ingest.
#[allow(dead_code)]
pub fn to_text(v: &Value) -> String {
    serde_json::to_string(v).unwrap()
}

/// Minimal two-passage markup document.
#[allow(dead_code)]
pub fn base_markup() -> &'static str {
    "::Start\nGo north. [[North]]\n\n::North\nYou are north. [[Start]]\n"
}

/// Build a passage with the given id, title, and body.
#[allow(dead_code)]
pub fn passage(id: &str, title: &str, content: &str) -> ParsedPassage {
    let mut p = ParsedPassage::new(id.to_string(), title.to_string());
    p.content = content.to_string();
    p
}

/// Build a story whose passages carry the given ids (title mirrors the id,
/// body is empty). Convenient for set-level diff scenarios.
#[allow(dead_code)]
pub fn story_with(ids: &[&str]) -> ParsedStory {
    let mut story = ParsedStory::new("Fixture");
    for id in ids {
        story.passages.push(passage(id, id, ""));
    }
    story
}
