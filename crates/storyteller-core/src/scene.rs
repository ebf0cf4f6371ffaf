//! Story data model as it appears in the story document.

use serde::Deserialize;

/// Identifier of a scene within a story.
pub type SceneId = i64;

/// Start scene used when the document does not name one.
pub const DEFAULT_START_ID: SceneId = 1;

/// Title used for scenes that do not carry one.
pub const DEFAULT_SCENE_TITLE: &str = "Unknown scene";

fn default_start_id() -> SceneId {
    DEFAULT_START_ID
}

fn default_title() -> String {
    DEFAULT_SCENE_TITLE.to_owned()
}

/// A complete story document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Story {
    /// The scene a new game begins at.
    #[serde(default = "default_start_id")]
    pub start_id: SceneId,
    /// All scenes, in document order.
    #[serde(default)]
    pub scenes: Vec<Scene>,
}

/// One narrative unit of the story graph.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scene {
    /// Unique scene identifier.
    pub id: SceneId,
    /// Display title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Narrative text shown to the player.
    #[serde(default)]
    pub text: String,
    /// Hint shown when the player is stuck.
    #[serde(default)]
    pub hint: String,
    /// Background image file name.
    #[serde(default)]
    pub image: Option<String>,
    /// Background sound file name.
    #[serde(default)]
    pub sound: Option<String>,
    /// Player-input triggers, in document order.
    #[serde(default)]
    pub triggers: Vec<Trigger>,
}

/// A player-input pattern that may move the game to another scene.
///
/// `next_id` is not checked against the loaded scenes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Trigger {
    /// Input pattern the player has to match.
    #[serde(default)]
    pub pattern: String,
    /// Response shown when the pattern matches.
    #[serde(default)]
    pub response: String,
    /// Scene to move to, if any.
    #[serde(default)]
    pub next_id: Option<SceneId>,
    /// Click effect sound.
    #[serde(default)]
    pub fx_sound: Option<String>,
    /// Click effect image.
    #[serde(default)]
    pub fx_image: Option<String>,
}
