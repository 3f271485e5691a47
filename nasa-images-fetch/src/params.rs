use serde::{Deserialize, Serialize};
use std::fmt;

pub const YEAR_MIN: i32 = 1920;
pub const YEAR_MAX: i32 = 2024;

/// NASA center that produced the media. `All` is sent as an empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Center {
    Afrc,
    Arc,
    Grc,
    Hq,
    Jpl,
    Jsc,
    Ksc,
    Lrc,
    Msfc,
    Ssc,
    #[default]
    All,
}

impl Center {
    pub const ALL: [Center; 11] = [
        Center::Afrc,
        Center::Arc,
        Center::Grc,
        Center::Hq,
        Center::Jpl,
        Center::Jsc,
        Center::Ksc,
        Center::Lrc,
        Center::Msfc,
        Center::Ssc,
        Center::All,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Center::Afrc => "AFRC",
            Center::Arc => "ARC",
            Center::Grc => "GRC",
            Center::Hq => "HQ",
            Center::Jpl => "JPL",
            Center::Jsc => "JSC",
            Center::Ksc => "KSC",
            Center::Lrc => "LRC",
            Center::Msfc => "MSFC",
            Center::Ssc => "SSC",
            Center::All => "",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Center::Afrc => "Armstrong Flight Research Center (AFRC)",
            Center::Arc => "Ames Research Center (ARC)",
            Center::Grc => "Glenn Research Center (GRC)",
            Center::Hq => "Headquarters (HQ)",
            Center::Jpl => "Jet Propulsion Laboratory (JPL)",
            Center::Jsc => "Johnson Space Center (JSC)",
            Center::Ksc => "Kennedy Space Center (KSC)",
            Center::Lrc => "Langley Research Center (LRC)",
            Center::Msfc => "Marshall Space Flight Center (MSFC)",
            Center::Ssc => "Stennis Space Center (SSC)",
            Center::All => "All Centers",
        }
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MediaType {
    Image,
    Video,
    Audio,
    #[default]
    All,
}

impl MediaType {
    pub const ALL: [MediaType; 4] = [
        MediaType::All,
        MediaType::Audio,
        MediaType::Image,
        MediaType::Video,
    ];

    /// Value of the `media_type` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Audio => "audio",
            MediaType::All => "image,video,audio",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaType::Image => "Images",
            MediaType::Video => "Video",
            MediaType::Audio => "Audio",
            MediaType::All => "All",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Search criteria as entered in the form. Unset text fields are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub center: Center,
    pub media_type: MediaType,
    pub year_start: i32,
    pub year_end: i32,
    pub location: String,
    pub photographer: String,
    pub secondary_creator: String,
    pub keywords: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            center: Center::All,
            media_type: MediaType::All,
            year_start: YEAR_MIN,
            year_end: YEAR_MAX,
            location: String::new(),
            photographer: String::new(),
            secondary_creator: String::new(),
            keywords: String::new(),
        }
    }
}

impl SearchParams {
    /// Pulls both years into `[YEAR_MIN, YEAR_MAX]` and orders them.
    pub fn clamp_years(&mut self) {
        self.year_start = self.year_start.clamp(YEAR_MIN, YEAR_MAX);
        self.year_end = self.year_end.clamp(YEAR_MIN, YEAR_MAX);
        if self.year_start > self.year_end {
            std::mem::swap(&mut self.year_start, &mut self.year_end);
        }
    }

    pub fn has_valid_years(&self) -> bool {
        (YEAR_MIN..=YEAR_MAX).contains(&self.year_start)
            && (YEAR_MIN..=YEAR_MAX).contains(&self.year_end)
            && self.year_start <= self.year_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SearchParams::default();
        assert!(params.query.is_empty());
        assert_eq!(params.center, Center::All);
        assert_eq!(params.media_type, MediaType::All);
        assert_eq!((params.year_start, params.year_end), (1920, 2024));
        assert!(params.has_valid_years());
    }

    #[test]
    fn test_clamp_years_out_of_range() {
        let mut params = SearchParams {
            year_start: 1800,
            year_end: 3000,
            ..Default::default()
        };
        params.clamp_years();
        assert_eq!((params.year_start, params.year_end), (YEAR_MIN, YEAR_MAX));
    }

    #[test]
    fn test_clamp_years_swaps_reversed_range() {
        let mut params = SearchParams {
            year_start: 1990,
            year_end: 1969,
            ..Default::default()
        };
        assert!(!params.has_valid_years());
        params.clamp_years();
        assert_eq!((params.year_start, params.year_end), (1969, 1990));
    }

    #[test]
    fn test_center_codes() {
        assert_eq!(Center::ALL.len(), 11);
        assert_eq!(Center::Jsc.code(), "JSC");
        assert_eq!(Center::All.code(), "");
        assert_eq!(Center::Msfc.to_string(), "Marshall Space Flight Center (MSFC)");
    }

    #[test]
    fn test_media_type_all_param() {
        assert_eq!(MediaType::All.as_param(), "image,video,audio");
        assert_eq!(MediaType::Audio.as_param(), "audio");
    }
}
