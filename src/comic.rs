//! Comic assembly - restyling an exported sketch and collecting panels.
//!
//! The remote generator (image description followed by styled
//! re-generation) is a host collaborator behind [`ImageGenerator`]. A
//! [`GenerationSession`] wraps one sketch: it keeps the image on display
//! untouched when the generator fails, and reports the failure as a notice
//! instead. Nothing here touches whiteboard history.

use crate::constants::GENERATION_FAILED_MESSAGE;
use crate::export::ExportedImage;
use crate::notifications::{Toast, ToastManager};
use crate::settings::Settings;
use thiserror::Error;
use tracing::{debug, error};

// ============================================================================
// Themes
// ============================================================================

/// A visual style the generator can redraw a sketch in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub key: &'static str,
    /// Style fragment appended to the generation prompt
    pub prompt: &'static str,
}

pub const THEMES: [Theme; 9] = [
    Theme { key: "sketch", prompt: "a simple sketch" },
    Theme { key: "comic", prompt: "a coloured comic panel" },
    Theme { key: "cartoon", prompt: "a colourful, modern cartoon scene" },
    Theme { key: "disney", prompt: "a Disney movie scene" },
    Theme { key: "manga", prompt: "a manga panel" },
    Theme { key: "anime", prompt: "a colourful, modern anime scene" },
    Theme { key: "daVinci", prompt: "a Da Vinci painting" },
    Theme { key: "vanGogh", prompt: "a Van Gogh painting" },
    Theme { key: "dali", prompt: "a Dali painting" },
];

impl Theme {
    pub fn find(key: &str) -> Option<&'static Theme> {
        THEMES.iter().find(|theme| theme.key == key)
    }

    pub fn all() -> &'static [Theme] {
        &THEMES
    }
}

/// Prompt for the re-generation step, built from the vision description of
/// the sketch and a theme's style fragment.
pub fn style_instruction(description: &str, style_prompt: &str) -> String {
    format!("{description} Instead of a simple drawing, recreate this in the style of {style_prompt}")
}

// ============================================================================
// Generation
// ============================================================================

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generation request failed: {0}")]
    Request(String),

    #[error("Generator returned no image")]
    EmptyResponse,

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

/// Remote image generation. Implementations own their protocol and any
/// retry policy.
#[allow(async_fn_in_trait)]
pub trait ImageGenerator {
    /// Restyle `image` according to `style_prompt`, returning the URL of the
    /// generated image.
    async fn generate(&self, image: &ExportedImage, style_prompt: &str) -> Result<String, GenerationError>;
}

/// One sketch on its way to becoming a comic panel.
pub struct GenerationSession {
    sketch: ExportedImage,
    theme: &'static Theme,
    image: String,
    loading: bool,
}

impl GenerationSession {
    /// Start a session showing the sketch itself.
    pub fn new(sketch: ExportedImage, theme_key: &str) -> Result<Self, GenerationError> {
        let theme = Theme::find(theme_key).ok_or_else(|| GenerationError::UnknownTheme(theme_key.to_string()))?;
        Ok(Self {
            image: sketch.as_str().to_string(),
            sketch,
            theme,
            loading: false,
        })
    }

    /// Start a session on the theme preselected in `settings`.
    pub fn from_settings(sketch: ExportedImage, settings: &Settings) -> Result<Self, GenerationError> {
        Self::new(sketch, &settings.default_theme)
    }

    pub fn sketch(&self) -> &ExportedImage {
        &self.sketch
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    /// Image currently on display: the sketch, or the last successful result.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn select_theme(&mut self, key: &str) -> Result<(), GenerationError> {
        self.theme = Theme::find(key).ok_or_else(|| GenerationError::UnknownTheme(key.to_string()))?;
        Ok(())
    }

    /// Ask the generator for a new rendition of the sketch.
    ///
    /// On failure the displayed image is left as it was and an error notice
    /// is pushed.
    pub async fn spin<G: ImageGenerator>(
        &mut self,
        generator: &G,
        notices: &mut ToastManager,
    ) -> Result<&str, GenerationError> {
        self.loading = true;
        let result = generator
            .generate(&self.sketch, self.theme.prompt)
            .await
            .and_then(|url| {
                if url.is_empty() {
                    Err(GenerationError::EmptyResponse)
                } else {
                    Ok(url)
                }
            });
        self.loading = false;

        match result {
            Ok(url) => {
                debug!(theme = self.theme.key, "image generated");
                self.image = url;
                Ok(&self.image)
            }
            Err(e) => {
                error!(theme = self.theme.key, "Error generating image: {}", e);
                notices.push(Toast::error(GENERATION_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    /// Add the displayed image to the comic as its next panel.
    pub fn confirm(&self, comic: &mut Comic) {
        comic.push(self.image.clone());
    }
}

// ============================================================================
// Comic
// ============================================================================

/// Ordered comic panels, as image URLs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Comic {
    panels: Vec<String>,
}

impl Comic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, image_url: impl Into<String>) {
        self.panels.push(image_url.into());
    }

    pub fn panels(&self) -> &[String] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Drop every panel and start over.
    pub fn restart(&mut self) {
        self.panels.clear();
    }
}
