//! Asset keys for the rendering layer
//!
//! Pure string derivation only. Loading, caching, and reporting missing files
//! belong to whoever draws the panel.

use crate::sim::{Pet, PetColor, PetKind, PetSize, Sprite, Theme};

/// Light or dark host appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

/// Animated sprite path, e.g. `dog/brown_walk_8fps.gif`
pub fn sprite_key(kind: PetKind, color: PetColor, sprite: Sprite) -> String {
    format!("{}/{}_{}_8fps.gif", kind, color, sprite.as_str())
}

/// Sprite path for a pet's current state
pub fn pet_sprite_key(pet: &Pet) -> String {
    sprite_key(pet.kind, pet.color, pet.sprite())
}

/// Background image for a theme at a panel width; `None` means no background
pub fn background_key(theme: Theme, panel_width: f32, scheme: ColorScheme) -> Option<String> {
    if theme == Theme::None {
        return None;
    }
    let size = PetSize::for_panel_width(panel_width);
    Some(format!(
        "backgrounds/{}/background-{}-{}.png",
        theme,
        scheme.as_str(),
        size
    ))
}
