//! Maps media file names onto the game client's asset layout.

use crate::domain::views::SceneView;

/// Directory background images are served from.
pub const IMAGE_ASSET_DIR: &str = "public/assets/images";

/// Directory background sounds are served from.
pub const SOUND_ASSET_DIR: &str = "public/assets/sounds";

/// Prefixes `name` with `dir`. Absent and empty names are returned untouched.
fn asset_path(dir: &str, name: Option<String>) -> Option<String> {
    match name {
        Some(name) if !name.is_empty() => Some(format!("{dir}/{name}")),
        other => other,
    }
}

/// Rewrites the scene's image and sound to client asset paths.
#[must_use]
pub fn resolve_media(mut view: SceneView) -> SceneView {
    view.image = asset_path(IMAGE_ASSET_DIR, view.image);
    view.sound = asset_path(SOUND_ASSET_DIR, view.sound);
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(image: Option<&str>, sound: Option<&str>) -> SceneView {
        SceneView {
            id: 1,
            title: "The Gate".to_owned(),
            dialogue: vec![String::new()],
            hint: String::new(),
            triggers: Vec::new(),
            image: image.map(str::to_owned),
            sound: sound.map(str::to_owned),
        }
    }

    #[test]
    fn test_image_and_sound_are_prefixed() {
        let resolved = resolve_media(view(Some("a.png"), Some("b.mp3")));

        assert_eq!(resolved.image.as_deref(), Some("public/assets/images/a.png"));
        assert_eq!(resolved.sound.as_deref(), Some("public/assets/sounds/b.mp3"));
    }

    #[test]
    fn test_absent_media_stays_absent() {
        let resolved = resolve_media(view(None, None));

        assert_eq!(resolved.image, None);
        assert_eq!(resolved.sound, None);
    }

    #[test]
    fn test_empty_names_are_not_prefixed() {
        let resolved = resolve_media(view(Some(""), Some("")));

        assert_eq!(resolved.image.as_deref(), Some(""));
        assert_eq!(resolved.sound.as_deref(), Some(""));
    }
}
