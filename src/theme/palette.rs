//! Colours and global styles for each color scheme.

use super::ColorScheme;

/// Mantine `dark` shades used by the shell.
pub mod dark {
    pub const SHADE_7: &str = "#1a1b1e";
    pub const SHADE_8: &str = "#141517";
    pub const SHADE_9: &str = "#101113";
}

/// Mantine `pink` shades used by the shell.
pub mod pink {
    pub const SHADE_1: &str = "#ffdeeb";
    pub const SHADE_2: &str = "#fcc2d7";
}

const FONT_FAMILY: &str = "-apple-system, BlinkMacSystemFont, Segoe UI, Roboto, Helvetica, Arial, sans-serif, Apple Color Emoji, Segoe UI Emoji";
const LINE_HEIGHT: f32 = 1.55;

/// Subset of normalize.css applied before the shell styles.
const NORMALIZE: &str = "\
html { line-height: 1.15; -webkit-text-size-adjust: 100%; }
main { display: block; }
h1 { font-size: 2em; margin: 0.67em 0; }
a { background-color: transparent; }
b, strong { font-weight: bolder; }
img { border-style: none; }
svg { overflow: hidden; }
button, input, select, textarea { font-family: inherit; font-size: 100%; line-height: 1.15; margin: 0; }
button, select { text-transform: none; }
button { overflow: visible; -webkit-appearance: button; }
button::-moz-focus-inner { border-style: none; padding: 0; }
";

/// Header height in pixels.
pub const HEADER_HEIGHT: u32 = 65;

/// Spacing scale: `xs` (header padding) and `md` (main padding).
pub const SPACING_XS: u32 = 10;
pub const SPACING_MD: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub body_background: &'static str,
    pub body_text: &'static str,
    pub header_background: &'static str,
    pub header_text: &'static str,
}

impl Palette {
    pub const fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self {
                body_background: dark::SHADE_8,
                body_text: pink::SHADE_1,
                header_background: dark::SHADE_7,
                header_text: pink::SHADE_2,
            },
            ColorScheme::Light => Self {
                body_background: pink::SHADE_1,
                body_text: dark::SHADE_9,
                header_background: pink::SHADE_2,
                header_text: dark::SHADE_7,
            },
        }
    }

    /// Inline style for the shell header.
    pub fn header_style(&self) -> String {
        format!(
            "background-color:{};color:{};height:{HEADER_HEIGHT}px;padding:{SPACING_XS}px;",
            self.header_background, self.header_text
        )
    }
}

/// Global reset plus body colours for `scheme`.
pub fn global_styles(scheme: ColorScheme) -> String {
    let palette = Palette::for_scheme(scheme);
    format!(
        "{NORMALIZE}\
         *, *::before, *::after {{ box-sizing: border-box; }}\n\
         body {{ margin: 0; font-family: {FONT_FAMILY}; -webkit-font-smoothing: antialiased; \
         background-color: {}; color: {}; line-height: {LINE_HEIGHT}; color-scheme: {}; }}\n\
         .moon-header {{ display: flex; align-items: center; border-bottom: 1px solid {}; }}\n\
         .moon-group {{ display: flex; flex: 1; align-items: center; justify-content: space-between; gap: {SPACING_MD}px; }}\n\
         .moon-main {{ padding: {SPACING_MD}px; }}\n\
         .color-scheme-toggle {{ cursor: pointer; border: 0; border-radius: 4px; width: 34px; height: 34px; \
         font-size: 18px; background: {}; color: {}; }}\n",
        palette.body_background,
        palette.body_text,
        scheme,
        palette.body_background,
        palette.body_background,
        palette.header_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_per_scheme() {
        let light = Palette::for_scheme(ColorScheme::Light);
        assert_eq!(light.header_background, pink::SHADE_2);
        assert_eq!(light.body_text, dark::SHADE_9);

        let night = Palette::for_scheme(ColorScheme::Dark);
        assert_eq!(night.header_background, dark::SHADE_7);
        assert_eq!(night.body_background, dark::SHADE_8);
    }

    #[test]
    fn test_global_styles_reset_and_colours() {
        let css = global_styles(ColorScheme::Dark);
        assert!(css.contains("box-sizing: border-box"));
        assert!(css.contains("background-color: #141517"));
        assert!(css.contains("color: #ffdeeb"));
        assert!(css.contains("line-height: 1.55"));
    }

    #[test]
    fn test_global_styles_start_with_normalize() {
        let css = global_styles(ColorScheme::Light);
        assert!(css.starts_with("html { line-height: 1.15;"));
        assert!(css.contains("font-family: inherit"));
        assert!(css.find("-webkit-text-size-adjust") < css.find("box-sizing: border-box"));
    }

    #[test]
    fn test_header_style_height_and_padding() {
        let style = Palette::for_scheme(ColorScheme::Light).header_style();
        assert!(style.contains("background-color:#fcc2d7"));
        assert!(style.contains("height:65px"));
        assert!(style.contains("padding:10px"));
    }
}
