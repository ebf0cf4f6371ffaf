//! Story document fixtures.

use serde_json::{Value, json};

/// A small three-scene story.
///
/// - scene 1 has an image, a sound and two triggers, one carrying click
///   effects
/// - scene 2 has no text, media or triggers
/// - scene 3 has an empty image name and a trigger pointing at a scene that
///   does not exist
#[must_use]
pub fn sample_story() -> Value {
    json!({
        "start_id": 1,
        "scenes": [
            {
                "id": 1,
                "title": "The Gate",
                "text": "Rain hammers the rusted gate.",
                "hint": "Try opening it.",
                "image": "gate.png",
                "sound": "rain.mp3",
                "triggers": [
                    {
                        "pattern": "open",
                        "response": "The gate creaks open.",
                        "next_id": 2,
                        "fx_sound": "creak.mp3",
                        "fx_image": "spark.png"
                    },
                    {
                        "pattern": "wait",
                        "response": "Nothing happens."
                    }
                ]
            },
            {
                "id": 2,
                "title": "The Yard"
            },
            {
                "id": 3,
                "title": "The Cellar",
                "text": "It is dark.",
                "image": "",
                "triggers": [
                    { "pattern": "descend", "response": "You fall.", "next_id": 404 }
                ]
            }
        ]
    })
}

/// [`sample_story`] serialized as a JSON document.
///
/// # Panics
///
/// Never in practice; a `Value` always serializes.
#[must_use]
pub fn sample_story_bytes() -> Vec<u8> {
    serde_json::to_vec_pretty(&sample_story()).expect("fixture serializes")
}
