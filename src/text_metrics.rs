use crate::config::FontSource;
use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use once_cell::sync::Lazy;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;
use ttf_parser::{Face, FaceParsingError, GlyphId};

const ELLIPSIS: &str = "...";

// Installed fonts are scanned once and only read afterwards.
static SYSTEM_FONTS: Lazy<Database> = Lazy::new(|| {
    let mut db = Database::new();
    db.load_system_fonts();
    db
});

#[derive(Debug, Error)]
pub enum FontError {
    #[error("font size must be positive, got {0}")]
    InvalidSize(f32),
    #[error("no installed font matches `{0}`")]
    NoMatch(String),
    #[error("failed to read font file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("font data could not be parsed: {0}")]
    Parse(#[from] FaceParsingError),
}

/// Measures, wraps and truncates text for one font at one size.
///
/// A measurer caches glyph lookups internally, so each render builds its own
/// and never shares it across threads.
pub struct TextMeasurer {
    font_size: f32,
    metrics: Metrics,
}

enum Metrics {
    Builtin,
    Face(FontFace),
}

impl TextMeasurer {
    pub fn new(source: &FontSource, font_family: &str, font_size: f32) -> Result<Self, FontError> {
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(FontError::InvalidSize(font_size));
        }
        let metrics = match source {
            FontSource::Builtin => Metrics::Builtin,
            FontSource::System => Metrics::Face(load_system_face(font_family)?),
            FontSource::File(path) => {
                let data = std::fs::read(path).map_err(|source| FontError::Io {
                    path: path.clone(),
                    source,
                })?;
                Metrics::Face(FontFace::new(data, 0)?)
            }
        };
        Ok(Self { font_size, metrics })
    }

    /// Sum of glyph advances in pixels.
    pub fn measure(&self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let normalized;
        let text = if text.contains('\t') {
            normalized = text.replace('\t', "    ");
            normalized.as_str()
        } else {
            text
        };
        match &self.metrics {
            Metrics::Builtin => text
                .chars()
                .filter(|ch| *ch != '\n')
                .map(char_width_factor)
                .sum::<f32>()
                * self.font_size,
            Metrics::Face(face) => face.measure_width(text, self.font_size),
        }
    }

    /// Greedy word wrap. Never returns an empty vector; a single word wider
    /// than `max_width` stays whole on its own line.
    pub fn wrap(&self, text: &str, max_width: f32) -> Vec<String> {
        if text.is_empty() || self.measure(text) <= max_width {
            return vec![text.to_string()];
        }

        let mut words = text.split_whitespace();
        let Some(first) = words.next() else {
            return vec![String::new()];
        };

        let mut lines = Vec::new();
        let mut current = first.to_string();
        for word in words {
            let candidate = format!("{current} {word}");
            if self.measure(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }
        lines.push(current);
        lines
    }

    /// Longest character prefix that fits together with a trailing ellipsis.
    pub fn truncate_with_ellipsis(&self, text: &str, max_width: f32) -> String {
        if text.is_empty() || self.measure(text) <= max_width {
            return text.to_string();
        }

        let available = max_width - self.measure(ELLIPSIS);
        if available <= 0.0 {
            return ELLIPSIS.to_string();
        }

        let chars: Vec<char> = text.chars().collect();
        let prefix = |len: usize| chars[..len].iter().collect::<String>();
        let (mut low, mut high) = (0usize, chars.len());
        while low < high {
            let mid = (low + high + 1) / 2;
            if self.measure(&prefix(mid)) <= available {
                low = mid;
            } else {
                high = mid - 1;
            }
        }

        if low == 0 {
            ELLIPSIS.to_string()
        } else {
            format!("{}{ELLIPSIS}", prefix(low))
        }
    }

    pub fn line_height(&self) -> f32 {
        match &self.metrics {
            Metrics::Builtin => self.font_size * 1.15,
            Metrics::Face(face) => face.line_height(self.font_size),
        }
    }

    /// Height above the baseline.
    pub fn ascent(&self) -> f32 {
        match &self.metrics {
            Metrics::Builtin => self.font_size * 0.905,
            Metrics::Face(face) => face.ascent(self.font_size),
        }
    }
}

fn load_system_face(font_family: &str) -> Result<FontFace, FontError> {
    #[derive(Clone, Copy)]
    enum FamilyToken {
        Generic(Family<'static>),
        Name(usize),
    }

    let mut names: Vec<String> = Vec::new();
    let mut order: Vec<FamilyToken> = Vec::new();
    for part in font_family.split(',') {
        let raw = part.trim().trim_matches('"').trim_matches('\'');
        if raw.is_empty() {
            continue;
        }
        match raw.to_ascii_lowercase().as_str() {
            "serif" => order.push(FamilyToken::Generic(Family::Serif)),
            "sans-serif" | "system-ui" | "-apple-system" | "ui-sans-serif" => {
                order.push(FamilyToken::Generic(Family::SansSerif))
            }
            "monospace" | "ui-monospace" => order.push(FamilyToken::Generic(Family::Monospace)),
            "cursive" => order.push(FamilyToken::Generic(Family::Cursive)),
            "fantasy" => order.push(FamilyToken::Generic(Family::Fantasy)),
            _ => {
                order.push(FamilyToken::Name(names.len()));
                names.push(raw.to_string());
            }
        }
    }
    if order.is_empty() {
        order.push(FamilyToken::Generic(Family::SansSerif));
    }

    let families: Vec<Family<'_>> = order
        .iter()
        .map(|token| match *token {
            FamilyToken::Generic(family) => family,
            FamilyToken::Name(idx) => Family::Name(names[idx].as_str()),
        })
        .collect();
    let query = Query {
        families: &families,
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let db = &*SYSTEM_FONTS;
    let (data, index) = db
        .query(&query)
        .and_then(|id| db.with_face_data(id, |data, index| (data.to_vec(), index)))
        .ok_or_else(|| FontError::NoMatch(font_family.to_string()))?;
    FontFace::new(data, index)
}

struct FontFace {
    data: Vec<u8>,
    index: u32,
    units_per_em: f32,
    ascender: f32,
    descender: f32,
    line_gap: f32,
    ascii_advances: [u16; 128],
    glyph_cache: RefCell<HashMap<char, Option<u16>>>,
}

impl FontFace {
    fn new(data: Vec<u8>, index: u32) -> Result<Self, FontError> {
        let face = Face::parse(&data, index)?;
        let mut ascii_advances = [0u16; 128];
        for byte in 0u8..=127 {
            if let Some(glyph_id) = face.glyph_index(byte as char) {
                ascii_advances[byte as usize] = face.glyph_hor_advance(glyph_id).unwrap_or(0);
            }
        }
        let units_per_em = f32::from(face.units_per_em().max(1));
        let ascender = f32::from(face.ascender());
        let descender = f32::from(face.descender());
        let line_gap = f32::from(face.line_gap());
        Ok(Self {
            data,
            index,
            units_per_em,
            ascender,
            descender,
            line_gap,
            ascii_advances,
            glyph_cache: RefCell::new(HashMap::new()),
        })
    }

    fn measure_width(&self, text: &str, font_size: f32) -> f32 {
        let scale = font_size / self.units_per_em;
        let fallback = font_size * 0.56;
        let mut width = 0.0f32;
        for ch in text.chars() {
            if ch == '\n' {
                continue;
            }
            let advance = if ch.is_ascii() {
                Some(self.ascii_advances[ch as usize]).filter(|advance| *advance > 0)
            } else {
                self.glyph_advance(ch)
            };
            width += match advance {
                Some(advance) => f32::from(advance) * scale,
                None => fallback,
            };
        }
        width.max(0.0)
    }

    fn glyph_advance(&self, ch: char) -> Option<u16> {
        if let Some(cached) = self.glyph_cache.borrow().get(&ch) {
            return *cached;
        }
        let advance = Face::parse(&self.data, self.index).ok().and_then(|face| {
            face.glyph_index(ch)
                .and_then(|glyph: GlyphId| face.glyph_hor_advance(glyph))
        });
        self.glyph_cache.borrow_mut().insert(ch, advance);
        advance
    }

    fn line_height(&self, font_size: f32) -> f32 {
        (self.ascender - self.descender + self.line_gap) * font_size / self.units_per_em
    }

    fn ascent(&self, font_size: f32) -> f32 {
        self.ascender * font_size / self.units_per_em
    }
}

/// Advance widths as a fraction of the font size for a sans-serif face.
pub(crate) fn char_width_factor(ch: char) -> f32 {
    match ch {
        ' ' => 0.306,
        '\\' | '.' | ',' | ':' | ';' | '|' | '!' | '(' | ')' | '[' | ']' | '{' | '}' => 0.321,
        'A' => 0.652,
        'B' => 0.648,
        'C' => 0.734,
        'D' => 0.723,
        'E' => 0.594,
        'F' => 0.575,
        'G' | 'H' => 0.742,
        'I' => 0.272,
        'J' => 0.557,
        'K' => 0.648,
        'L' => 0.559,
        'M' => 0.903,
        'N' => 0.763,
        'O' => 0.754,
        'P' => 0.623,
        'Q' => 0.755,
        'R' => 0.637,
        'S' => 0.633,
        'T' => 0.599,
        'U' => 0.746,
        'V' => 0.661,
        'W' => 0.958,
        'X' => 0.655,
        'Y' => 0.646,
        'Z' => 0.621,
        'a' => 0.550,
        'b' => 0.603,
        'c' => 0.547,
        'd' => 0.609,
        'e' => 0.570,
        'f' => 0.340,
        'g' | 'h' => 0.600,
        'i' => 0.235,
        'j' => 0.227,
        'k' => 0.522,
        'l' => 0.239,
        'm' => 0.867,
        'n' => 0.585,
        'o' => 0.574,
        'p' => 0.595,
        'q' => 0.585,
        'r' => 0.364,
        's' => 0.523,
        't' => 0.305,
        'u' => 0.585,
        'v' => 0.545,
        'w' => 0.811,
        'x' => 0.538,
        'y' => 0.556,
        'z' => 0.550,
        '0' => 0.613,
        '1' => 0.396,
        '2' => 0.609,
        '3' => 0.597,
        '4' => 0.614,
        '5' => 0.586,
        '6' => 0.608,
        '7' => 0.559,
        '8' => 0.611,
        '9' => 0.595,
        '@' | '#' | '%' | '&' => 0.946,
        _ => 0.568,
    }
}
