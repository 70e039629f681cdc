//! Terminal rendering of README markdown.

use crate::core::error::PmanError;
use std::io::IsTerminal;
use termimad::MadSkin;

pub const README_WRAP_WIDTH: usize = 120;
const MIN_WRAP_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Dark,
    Light,
    /// Plain text, for pipes and redirected output.
    NoTty,
}

impl Style {
    /// Pick a style from the environment the way a terminal pager would.
    pub fn detect() -> Self {
        if !std::io::stdout().is_terminal() {
            return Style::NoTty;
        }
        match std::env::var("COLORFGBG") {
            Ok(v) if background_is_light(&v) => Style::Light,
            _ => Style::Dark,
        }
    }
}

// COLORFGBG is "fg;bg" (sometimes "fg;default;bg"); 7 and 15 are light backgrounds.
fn background_is_light(colorfgbg: &str) -> bool {
    matches!(colorfgbg.rsplit(';').next(), Some("7") | Some("15"))
}

pub struct Renderer {
    skin: MadSkin,
    width: usize,
}

impl Renderer {
    pub fn new(style: Style, width: usize) -> Result<Self, PmanError> {
        if width < MIN_WRAP_WIDTH {
            return Err(PmanError::Render(format!(
                "wrap width {} is below the minimum of {}",
                width, MIN_WRAP_WIDTH
            )));
        }
        let skin = match style {
            Style::Dark => MadSkin::default_dark(),
            Style::Light => MadSkin::default_light(),
            Style::NoTty => MadSkin::no_style(),
        };
        Ok(Self { skin, width })
    }

    /// Best-effort render: the renderer has no failure path, and invalid
    /// UTF-8 is replaced rather than rejected.
    pub fn render(&self, data: &[u8]) -> String {
        let text = String::from_utf8_lossy(data);
        self.skin.text(&text, Some(self.width)).to_string()
    }
}

/// Styled markdown using auto-detected style and a 120 column wrap.
pub fn beautify_md(data: &[u8]) -> Result<String, PmanError> {
    let renderer = Renderer::new(Style::detect(), README_WRAP_WIDTH).inspect_err(|e| {
        tracing::warn!(error = %e, "something went wrong while creating renderer");
    })?;
    Ok(renderer.render(data))
}
