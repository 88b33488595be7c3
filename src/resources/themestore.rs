//! Design token store.
//!
//! [`ThemeStore`] carries the static styling tables the demo consumes: font
//! family stacks, parametric keyframe definitions, animation timing entries,
//! responsive breakpoint ranges, and the content globs naming which asset
//! paths the theme applies to. The tables are pure data: they are loaded
//! once at startup (JSON via serde) and only ever looked up afterwards.
//!
//! Built-in defaults mirror `assets/theme.json`, so the demo still runs when
//! the file is missing.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Easing curve names accepted by animation timing entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
}

/// Parametric keyframe definition for a circular orbit: an angle sweep at a
/// fixed radius around the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyframeTrack {
    /// Sweep start angle in degrees.
    pub from_angle: f32,
    /// Sweep end angle in degrees.
    pub to_angle: f32,
    /// Orbit radius in pixels.
    pub radius: f32,
}

/// Animation timing entry: which keyframe track to play and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    /// Key into the keyframe table.
    pub keyframes: String,
    /// Duration of one pass in seconds.
    pub duration: f32,
    /// Easing curve applied to the normalized time.
    pub easing: Easing,
    /// Whether the animation repeats.
    pub looped: bool,
}

/// The theme document as stored on disk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeDocument {
    /// Glob patterns naming the asset paths this theme applies to. Recorded
    /// and reported only; never evaluated at runtime.
    #[serde(default)]
    pub content: Vec<String>,
    /// Named font stacks, ordered by preference.
    #[serde(default)]
    pub font_families: FxHashMap<String, Vec<String>>,
    /// Named keyframe definitions.
    #[serde(default)]
    pub keyframes: FxHashMap<String, KeyframeTrack>,
    /// Named animation timing entries.
    #[serde(default)]
    pub animations: FxHashMap<String, AnimationSpec>,
    /// Named inclusive viewport-width ranges `[min, max]`.
    #[serde(default)]
    pub breakpoints: FxHashMap<String, [u32; 2]>,
}

/// Resource wrapping the loaded theme document with lookup helpers.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ThemeStore {
    pub doc: ThemeDocument,
}

impl Default for ThemeStore {
    /// Built-in tokens matching `assets/theme.json`.
    fn default() -> Self {
        let mut font_families = FxHashMap::default();
        font_families.insert(
            "primary".to_string(),
            vec!["medium".to_string(), "sans-serif".to_string()],
        );
        font_families.insert(
            "secondary".to_string(),
            vec!["bold".to_string(), "serif".to_string()],
        );

        let mut keyframes = FxHashMap::default();
        keyframes.insert(
            "orbit".to_string(),
            KeyframeTrack {
                from_angle: 0.0,
                to_angle: 360.0,
                radius: 20.0,
            },
        );

        let mut animations = FxHashMap::default();
        animations.insert(
            "orbit".to_string(),
            AnimationSpec {
                keyframes: "orbit".to_string(),
                duration: 2.0,
                easing: Easing::Linear,
                looped: true,
            },
        );

        let mut breakpoints = FxHashMap::default();
        breakpoints.insert("sm".to_string(), [640, 767]);
        breakpoints.insert("md".to_string(), [768, 1023]);
        breakpoints.insert("lg".to_string(), [1024, 1279]);
        breakpoints.insert("xl".to_string(), [1280, 1535]);

        Self {
            doc: ThemeDocument {
                content: vec!["assets/**/*.json".to_string()],
                font_families,
                keyframes,
                animations,
                breakpoints,
            },
        }
    }
}

impl ThemeStore {
    /// Load a theme document from a JSON file.
    ///
    /// Returns an error if the file cannot be read or parsed. Animation
    /// entries referencing a missing keyframe track are kept but logged,
    /// since lookups treat them as absent.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
        let doc = Self::parse(&text)
            .map_err(|e| format!("Failed to parse theme file {}: {}", path.display(), e))?;
        let store = Self { doc };
        for (name, spec) in store.doc.animations.iter() {
            if !store.doc.keyframes.contains_key(&spec.keyframes) {
                log::warn!(
                    "Theme animation '{}' references unknown keyframes '{}'",
                    name,
                    spec.keyframes
                );
            }
        }
        Ok(store)
    }

    /// Parse a theme document from a JSON string.
    pub fn parse(text: &str) -> Result<ThemeDocument, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }

    /// Serialize the document as pretty-printed JSON.
    pub fn to_pretty_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(&self.doc).map_err(|e| e.to_string())
    }

    /// Look up an animation together with its keyframe track.
    ///
    /// Returns `None` if either the timing entry or the referenced track is
    /// missing.
    pub fn animation(&self, name: &str) -> Option<(&AnimationSpec, &KeyframeTrack)> {
        let spec = self.doc.animations.get(name)?;
        let track = self.doc.keyframes.get(&spec.keyframes)?;
        Some((spec, track))
    }

    /// Look up a font family stack by token name.
    pub fn font_family(&self, name: &str) -> Option<&[String]> {
        self.doc.font_families.get(name).map(|v| v.as_slice())
    }

    /// Name of the breakpoint whose inclusive range contains `width`.
    ///
    /// When ranges overlap, the one with the largest lower bound wins so the
    /// most specific breakpoint is reported.
    pub fn breakpoint_for(&self, width: u32) -> Option<&str> {
        self.doc
            .breakpoints
            .iter()
            .filter(|(_, [min, max])| *min <= width && width <= *max)
            .max_by_key(|(_, [min, _])| *min)
            .map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "content": ["assets/**/*.json"],
        "font_families": {
            "primary": ["medium", "sans-serif"]
        },
        "keyframes": {
            "orbit": { "from_angle": 0.0, "to_angle": 360.0, "radius": 20.0 }
        },
        "animations": {
            "orbit": { "keyframes": "orbit", "duration": 2.0, "easing": "linear", "looped": true }
        },
        "breakpoints": {
            "sm": [640, 767],
            "md": [768, 1023]
        }
    }"#;

    #[test]
    fn test_parse_sample_document() {
        let doc = ThemeStore::parse(SAMPLE).expect("sample theme should parse");
        assert_eq!(doc.content, vec!["assets/**/*.json".to_string()]);
        assert_eq!(
            doc.font_families.get("primary").map(|v| v.len()),
            Some(2)
        );
        let track = doc.keyframes.get("orbit").expect("orbit keyframes");
        assert_eq!(track.radius, 20.0);
        assert_eq!(track.to_angle, 360.0);
        let spec = doc.animations.get("orbit").expect("orbit animation");
        assert_eq!(spec.easing, Easing::Linear);
        assert!(spec.looped);
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let doc = ThemeStore::parse("{}").expect("empty theme should parse");
        assert!(doc.content.is_empty());
        assert!(doc.font_families.is_empty());
        assert!(doc.animations.is_empty());
    }

    #[test]
    fn test_unknown_easing_is_rejected() {
        let text = r#"{
            "animations": {
                "x": { "keyframes": "x", "duration": 1.0, "easing": "bouncy", "looped": false }
            }
        }"#;
        assert!(ThemeStore::parse(text).is_err());
    }

    #[test]
    fn test_animation_joins_keyframes() {
        let store = ThemeStore {
            doc: ThemeStore::parse(SAMPLE).unwrap(),
        };
        let (spec, track) = store.animation("orbit").expect("orbit resolves");
        assert_eq!(spec.duration, 2.0);
        assert_eq!(track.radius, 20.0);
        assert!(store.animation("missing").is_none());
    }

    #[test]
    fn test_animation_with_dangling_keyframes_is_absent() {
        let text = r#"{
            "animations": {
                "orbit": { "keyframes": "gone", "duration": 1.0, "easing": "linear", "looped": true }
            }
        }"#;
        let store = ThemeStore {
            doc: ThemeStore::parse(text).unwrap(),
        };
        assert!(store.animation("orbit").is_none());
    }

    #[test]
    fn test_breakpoint_lookup() {
        let store = ThemeStore {
            doc: ThemeStore::parse(SAMPLE).unwrap(),
        };
        assert_eq!(store.breakpoint_for(640), Some("sm"));
        assert_eq!(store.breakpoint_for(767), Some("sm"));
        assert_eq!(store.breakpoint_for(800), Some("md"));
        assert_eq!(store.breakpoint_for(639), None);
        assert_eq!(store.breakpoint_for(2000), None);
    }

    #[test]
    fn test_default_round_trips_through_json() {
        let store = ThemeStore::default();
        let json = store.to_pretty_json().expect("default serializes");
        let doc = ThemeStore::parse(&json).expect("serialized default parses");
        assert_eq!(doc, store.doc);
    }

    #[test]
    fn test_default_has_orbit_tokens() {
        let store = ThemeStore::default();
        let (spec, track) = store.animation("orbit").expect("built-in orbit");
        assert_eq!(spec.duration, 2.0);
        assert_eq!(track.radius, 20.0);
        assert!(store.font_family("primary").is_some());
    }
}
