//! Read-only views returned to the game client.

use serde::Serialize;
use storyteller_core::scene::{Scene, SceneId, Trigger};

/// The scene a new game begins at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartIdView {
    /// The start scene identifier.
    pub start_id: SceneId,
}

/// Client-facing projection of a trigger. Click effects are not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerView {
    /// Input pattern the player has to match.
    pub pattern: String,
    /// Response shown when the pattern matches.
    pub response: String,
    /// Scene to move to, if any.
    pub next_id: Option<SceneId>,
}

impl From<Trigger> for TriggerView {
    fn from(trigger: Trigger) -> Self {
        Self {
            pattern: trigger.pattern,
            response: trigger.response,
            next_id: trigger.next_id,
        }
    }
}

/// Client-facing projection of a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneView {
    /// The scene identifier.
    pub id: SceneId,
    /// Display title.
    pub title: String,
    /// Lines of dialogue; always exactly the scene text.
    pub dialogue: Vec<String>,
    /// Hint shown when the player is stuck.
    pub hint: String,
    /// Player-input triggers.
    pub triggers: Vec<TriggerView>,
    /// Background image, `null` when the scene has none.
    pub image: Option<String>,
    /// Background sound, `null` when the scene has none.
    pub sound: Option<String>,
}

impl From<Scene> for SceneView {
    fn from(scene: Scene) -> Self {
        Self {
            id: scene.id,
            title: scene.title,
            dialogue: vec![scene.text],
            hint: scene.hint,
            triggers: scene.triggers.into_iter().map(TriggerView::from).collect(),
            image: scene.image,
            sound: scene.sound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(id: SceneId) -> Scene {
        serde_json::from_value(serde_json::json!({ "id": id })).unwrap()
    }

    #[test]
    fn test_dialogue_wraps_scene_text() {
        let mut source = scene(1);
        source.text = "Rain hammers the gate.".to_owned();

        let view = SceneView::from(source);

        assert_eq!(view.dialogue, vec!["Rain hammers the gate.".to_owned()]);
    }

    #[test]
    fn test_dialogue_is_single_empty_line_without_text() {
        let view = SceneView::from(scene(2));

        assert_eq!(view.dialogue, vec![String::new()]);
    }

    #[test]
    fn test_trigger_view_drops_effects() {
        let trigger: Trigger = serde_json::from_value(serde_json::json!({
            "pattern": "open",
            "response": "It opens.",
            "next_id": 2,
            "fx_sound": "creak.mp3",
            "fx_image": "spark.png"
        }))
        .unwrap();

        let json = serde_json::to_value(TriggerView::from(trigger)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "pattern": "open", "response": "It opens.", "next_id": 2 })
        );
    }

    #[test]
    fn test_absent_media_serializes_as_null() {
        let json = serde_json::to_value(SceneView::from(scene(3))).unwrap();

        assert!(json["image"].is_null());
        assert!(json["sound"].is_null());
        assert_eq!(json["triggers"], serde_json::json!([]));
    }
}
