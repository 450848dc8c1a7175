//! Theme asset tables
//!
//! A theme supplies the center-object pool, the single correct peripheral
//! image, and the fake-image pool the allocator draws distractors from.
//! Pools are validated once at load time; an empty fake pool would
//! otherwise only surface mid-round as a missing sprite.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("theme '{0}' has no center objects")]
    EmptyCenterPool(String),
    #[error("theme '{0}' has no fake peripheral images")]
    EmptyFakePool(String),
    #[error("theme '{0}' has no correct peripheral image")]
    MissingCorrectImage(String),
}

/// Asset configuration for one selectable theme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    /// Candidate center objects; one is drawn per round
    pub center_objects: Vec<String>,
    /// The single image the player must locate
    pub correct_peripheral: String,
    /// Distractor images for medium/hard rounds
    pub fake_peripherals: Vec<String>,
    /// CSS class the UI applies to the play field
    pub background_class: String,
    /// Prompt text shown while awaiting the sector click
    pub click_prompt: String,
}

impl Theme {
    /// The built-in themes
    pub fn builtin() -> Vec<Theme> {
        vec![
            Theme {
                name: "space".into(),
                center_objects: vec!["img/ufo1.png".into(), "img/ufo2.png".into()],
                correct_peripheral: "img/moon.png".into(),
                fake_peripherals: vec!["img/phobos.png".into()],
                background_class: "dd-theme-space".into(),
                click_prompt: "Click the sector where the object appeared".into(),
            },
            Theme {
                name: "ocean".into(),
                center_objects: vec!["img/shark1.png".into(), "img/shark2.png".into()],
                correct_peripheral: "img/dolphin.png".into(),
                fake_peripherals: vec!["img/dolphin2.png".into()],
                background_class: "dd-theme-ocean".into(),
                click_prompt: "Click the sector where object appeared".into(),
            },
            Theme {
                name: "savanna".into(),
                center_objects: vec!["img/cheetah.png".into(), "img/leopard.png".into()],
                correct_peripheral: "img/impala.png".into(),
                fake_peripherals: vec!["img/antelope.png".into()],
                background_class: "dd-theme-savanna".into(),
                click_prompt: "Click the sector where object appeared".into(),
            },
        ]
    }

    /// Validate the asset pools. Called once when a theme is activated,
    /// not per spawn.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.center_objects.is_empty() {
            return Err(ThemeError::EmptyCenterPool(self.name.clone()));
        }
        if self.correct_peripheral.is_empty() {
            return Err(ThemeError::MissingCorrectImage(self.name.clone()));
        }
        if self.fake_peripherals.is_empty() {
            return Err(ThemeError::EmptyFakePool(self.name.clone()));
        }
        Ok(())
    }
}

/// Pick a session theme uniformly from the built-in set
pub fn choose_theme<R: Rng>(rng: &mut R) -> Theme {
    let mut themes = Theme::builtin();
    let idx = rng.random_range(0..themes.len());
    themes.swap_remove(idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_builtin_themes_validate() {
        let themes = Theme::builtin();
        assert_eq!(themes.len(), 3);
        for theme in &themes {
            theme.validate().unwrap();
        }
    }

    #[test]
    fn test_empty_pools_rejected() {
        let mut theme = Theme::builtin().remove(0);
        theme.fake_peripherals.clear();
        assert_eq!(
            theme.validate(),
            Err(ThemeError::EmptyFakePool("space".into()))
        );

        let mut theme = Theme::builtin().remove(0);
        theme.center_objects.clear();
        assert_eq!(
            theme.validate(),
            Err(ThemeError::EmptyCenterPool("space".into()))
        );
    }

    #[test]
    fn test_choose_theme_is_seeded() {
        let mut a = Pcg32::seed_from_u64(3);
        let mut b = Pcg32::seed_from_u64(3);
        assert_eq!(choose_theme(&mut a).name, choose_theme(&mut b).name);
    }
}
