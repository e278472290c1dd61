use chrono::{DateTime, NaiveTime, Utc};

/// One geocoding result kept after coordinate deduplication.
///
/// `index` is the record's position in the original geocoding response,
/// before duplicates were dropped. Display numbering is derived from it, so
/// ordinals can have gaps when earlier duplicates were skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoCandidate {
    pub index: usize,
    pub name: String,
    pub country: String,
    pub state: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCandidate {
    /// Unique key: `{index}_{name}_{country}`, with `_{state}` appended when
    /// the record carries a state.
    pub fn key(&self) -> String {
        match &self.state {
            Some(state) => format!("{}_{}_{}_{}", self.index, self.name, self.country, state),
            None => format!("{}_{}_{}", self.index, self.name, self.country),
        }
    }

    /// Human-readable label, numbered by response position (1-based).
    pub fn display_label(&self) -> String {
        let ordinal = self.index + 1;
        match &self.state {
            Some(state) => format!("{ordinal}. {} ({}-{state})", self.name, self.country),
            None => format!("{ordinal}. {} ({})", self.name, self.country),
        }
    }

    /// Coordinates rounded to 4 decimal places for display. The exact
    /// unrounded pair stays on the candidate itself.
    pub fn coords_label(&self) -> String {
        format!("({:.4}, {:.4})", self.latitude, self.longitude)
    }

    /// Full item shown in the single-choice coordinate selector.
    pub fn selector_item(&self) -> String {
        format!("{}: {}", self.display_label(), self.coords_label())
    }
}

/// Raw icon image bytes for one icon code.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    pub code: String,
    pub bytes: Vec<u8>,
}

/// One 3-hour forecast record, with temperatures already converted to °C.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSlot {
    pub timestamp: DateTime<Utc>,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub condition: String,
    pub icon_code: String,
    pub icon: Option<IconImage>,
}

impl ForecastSlot {
    /// Feels-like temperature back in Kelvin.
    pub fn feels_like_k(&self) -> f64 {
        self.feels_like_c + crate::transform::KELVIN_OFFSET
    }

    /// Display timestamp, e.g. `2024-05-01 12:00:00`.
    pub fn formatted_date(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// Short day label for the condition strip, e.g. `Wed, May-01`.
    pub fn day_label(&self) -> String {
        self.timestamp.format("%a, %b-%d").to_string()
    }

    /// Time-of-day label for the condition strip, e.g. `12:00`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Per-forecast summary computed once from the payload's city block.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastMeta {
    pub sunrise_local: NaiveTime,
    pub sunset_local: NaiveTime,
    pub utc_offset_label: String,
    pub country: String,
}
