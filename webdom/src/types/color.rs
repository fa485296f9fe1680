use std::str::FromStr;

/// A CSS color value as the caller wrote it.
///
/// The raw string is kept verbatim and is what ends up in the inline style.
/// Parsing into [`Rgb`] is best-effort and only used for inspection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Functional notations we accept without evaluating them.
const FUNCTIONAL_PREFIXES: &[&str] = &[
    "rgb(", "rgba(", "hsl(", "hsla(", "hwb(", "lab(", "lch(", "oklab(", "oklch(", "color(",
    "var(",
];

const KEYWORDS: &[&str] = &["transparent", "currentcolor", "inherit", "initial", "unset"];

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Resolve hex (`#rgb`, `#rrggbb`) and named colors to RGB.
    pub fn to_rgb(&self) -> Option<Rgb> {
        use palette::Srgb;

        let value = self.0.trim();
        if let Some(hex) = value.strip_prefix('#') {
            let srgb = Srgb::<u8>::from_str(hex).ok()?;
            let (r, g, b) = srgb.into_components();
            return Some(Rgb::new(r, g, b));
        }

        let named = palette::named::from_str(&value.to_ascii_lowercase())?;
        let (r, g, b) = named.into_components();
        Some(Rgb::new(r, g, b))
    }

    /// Whether the string looks like something a browser would accept.
    pub fn is_recognized(&self) -> bool {
        if self.to_rgb().is_some() {
            return true;
        }
        let value = self.0.trim().to_ascii_lowercase();
        KEYWORDS.contains(&value.as_str())
            || FUNCTIONAL_PREFIXES
                .iter()
                .any(|prefix| value.starts_with(prefix) && value.ends_with(')'))
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
