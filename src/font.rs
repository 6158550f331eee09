//! Font descriptor parsing and loading
//!
//! Descriptors use the fontconfig name syntax (`family-size:key=value`, e.g.
//! `mono-12` or `DejaVu Sans Mono:pixelsize=14:bold`). The family is resolved to
//! a font file through fontconfig and loaded with fontdue to obtain metrics.

use anyhow::{Context, Result};
use fontconfig::{Fontconfig, Pattern};
use fontdue::{Font, FontSettings};
use std::ffi::CString;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Point size used when the descriptor names none
const DEFAULT_POINT_SIZE: f32 = 12.0;

/// Resolution used to turn point sizes into pixel sizes
const DPI: f32 = 96.0;

/// Bare property constants that select a style
const STYLE_CONSTANTS: &[(&str, &str)] = &[
    ("bold", "Bold"),
    ("italic", "Italic"),
    ("oblique", "Oblique"),
    ("light", "Light"),
    ("medium", "Medium"),
    ("regular", "Regular"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSize {
    Points(f32),
    Pixels(f32),
}

/// Parsed font descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Descriptor as written in the config file
    pub raw: String,
    pub families: Vec<String>,
    pub size: FontSize,
    pub style: Option<String>,
}

impl FontDescriptor {
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split(':');
        let head = parts.next().unwrap_or_default();

        let (family_part, mut size) = match head.rsplit_once('-') {
            Some((family, size)) => match size.trim().parse::<f32>() {
                Ok(points) if points > 0.0 => (family, FontSize::Points(points)),
                _ => (head, FontSize::Points(DEFAULT_POINT_SIZE)),
            },
            None => (head, FontSize::Points(DEFAULT_POINT_SIZE)),
        };

        let families = family_part
            .split(',')
            .map(|f| f.trim().replace('\\', ""))
            .filter(|f| !f.is_empty())
            .collect();

        let mut style = None;
        for property in parts {
            match property.split_once('=') {
                Some(("size", value)) => {
                    if let Ok(points) = value.trim().parse::<f32>() {
                        size = FontSize::Points(points);
                    }
                }
                Some(("pixelsize", value)) => {
                    if let Ok(pixels) = value.trim().parse::<f32>() {
                        size = FontSize::Pixels(pixels);
                    }
                }
                Some(("style", value)) => style = Some(value.trim().to_string()),
                Some(_) => {}
                None => {
                    if let Some((_, name)) = STYLE_CONSTANTS
                        .iter()
                        .find(|(constant, _)| constant.eq_ignore_ascii_case(property.trim()))
                    {
                        style = Some((*name).to_string());
                    }
                }
            }
        }

        Self {
            raw: raw.to_string(),
            families,
            size,
            style,
        }
    }

    pub fn pixel_size(&self) -> f32 {
        match self.size {
            FontSize::Points(points) => points * DPI / 72.0,
            FontSize::Pixels(pixels) => pixels,
        }
    }

    /// Family handed to fontconfig; an empty descriptor asks for the default
    pub fn primary_family(&self) -> &str {
        self.families.first().map_or("", String::as_str)
    }
}

/// A font resolved and loaded for drawing
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedFont {
    pub descriptor: String,
    /// Family fontconfig actually matched (may be a substitute)
    pub family: String,
    pub path: PathBuf,
    pub pixel_size: f32,
    pub ascent: i32,
    pub descent: i32,
    pub height: i32,
}

/// Resolve the descriptor to a font file through fontconfig
pub fn find_font_path(descriptor: &FontDescriptor) -> Result<(String, PathBuf)> {
    let fc = Fontconfig::new().context("Failed to initialize fontconfig")?;
    let family = descriptor.primary_family();

    let mut pattern = Pattern::new(&fc);
    if !family.is_empty() {
        let family_cstr = CString::new(family)
            .with_context(|| format!("Invalid family name: {}", family))?;
        pattern.add_string(fontconfig::FC_FAMILY, &family_cstr);
    }
    if let Some(style) = &descriptor.style {
        let style_cstr =
            CString::new(style.as_str()).with_context(|| format!("Invalid style name: {}", style))?;
        pattern.add_string(fontconfig::FC_STYLE, &style_cstr);
    }

    let matched = pattern.font_match();
    let matched_family = matched
        .get_string(fontconfig::FC_FAMILY)
        .unwrap_or(family)
        .to_string();
    if !family.is_empty() && !matched_family.eq_ignore_ascii_case(family) {
        debug!(requested = family, matched = %matched_family, "Fontconfig substituted font family");
    }

    let path = PathBuf::from(
        matched
            .filename()
            .with_context(|| format!("No font file found for '{}'", descriptor.raw))?,
    );
    if !path.exists() {
        warn!(font = %descriptor.raw, path = %path.display(), "Font file path from fontconfig does not exist");
        anyhow::bail!("Font file path '{}' does not exist", path.display());
    }

    Ok((matched_family, path))
}

/// Load the font a descriptor names and compute its line metrics
pub fn load_font(descriptor: &FontDescriptor) -> Result<LoadedFont> {
    let (family, path) = find_font_path(descriptor)?;
    let pixel_size = descriptor.pixel_size();

    let font_data = fs::read(&path)
        .with_context(|| format!("Failed to read font file: {}", path.display()))?;
    let font = Font::from_bytes(font_data, FontSettings::default())
        .map_err(|e| anyhow::anyhow!("Failed to parse font: {}", e))?;

    let metrics = font
        .horizontal_line_metrics(pixel_size)
        .with_context(|| format!("Font '{}' has no horizontal metrics", path.display()))?;
    let ascent = metrics.ascent.ceil() as i32;
    let descent = (-metrics.descent).ceil() as i32;

    info!(font = %descriptor.raw, family = %family, path = %path.display(), pixel_size, "Loaded font");
    Ok(LoadedFont {
        descriptor: descriptor.raw.clone(),
        family,
        path,
        pixel_size,
        ascent,
        descent,
        height: ascent + descent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_family_and_size() {
        let d = FontDescriptor::parse("mono-12");
        assert_eq!(d.families, vec!["mono".to_string()]);
        assert_eq!(d.size, FontSize::Points(12.0));
        assert_eq!(d.style, None);
        assert_eq!(d.pixel_size(), 16.0);
    }

    #[test]
    fn test_parse_family_with_dashes_and_spaces() {
        let d = FontDescriptor::parse("DejaVu Sans Mono-9.5");
        assert_eq!(d.primary_family(), "DejaVu Sans Mono");
        assert_eq!(d.size, FontSize::Points(9.5));

        let d = FontDescriptor::parse("Terminus-Bold");
        assert_eq!(d.primary_family(), "Terminus-Bold");
        assert_eq!(d.size, FontSize::Points(DEFAULT_POINT_SIZE));
    }

    #[test]
    fn test_parse_properties() {
        let d = FontDescriptor::parse("Terminus:pixelsize=14:bold");
        assert_eq!(d.primary_family(), "Terminus");
        assert_eq!(d.size, FontSize::Pixels(14.0));
        assert_eq!(d.pixel_size(), 14.0);
        assert_eq!(d.style.as_deref(), Some("Bold"));

        let d = FontDescriptor::parse("Fira Code,monospace:size=10:style=Medium Italic");
        assert_eq!(d.families, vec!["Fira Code".to_string(), "monospace".to_string()]);
        assert_eq!(d.size, FontSize::Points(10.0));
        assert_eq!(d.style.as_deref(), Some("Medium Italic"));
    }

    #[test]
    fn test_parse_empty_descriptor() {
        let d = FontDescriptor::parse("");
        assert!(d.families.is_empty());
        assert_eq!(d.primary_family(), "");
        assert_eq!(d.raw, "");
    }
}
