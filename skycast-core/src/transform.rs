//! Turns a raw forecast payload into renderable slots plus a per-forecast
//! summary: Kelvin to Celsius conversion, local sunrise/sunset, the UTC
//! offset label and lazily fetched icon images.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::forecast::{ForecastEntry, ForecastPayload};
use crate::icons::IconFetcher;
use crate::model::{ForecastMeta, ForecastSlot, IconImage};

pub const KELVIN_OFFSET: f64 = 273.15;

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// Human-readable UTC offset, e.g. `UTC+2` or `UTC-5`.
///
/// Hours use floor division, so a -5400 second offset labels as `UTC-2`.
pub fn utc_offset_label(offset_seconds: i64) -> String {
    let hours = offset_seconds.div_euclid(3600);
    if hours < 0 {
        format!("UTC{hours}")
    } else {
        format!("UTC+{hours}")
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}

/// Time-of-day at the payload's location for a UTC unix timestamp.
fn local_time(ts: i64, offset_seconds: i64) -> NaiveTime {
    let utc = unix_to_utc(ts).unwrap_or_else(Utc::now);
    (utc + Duration::seconds(offset_seconds)).time()
}

/// Transform a raw forecast payload into ordered slots and the summary meta.
///
/// Each distinct icon code is fetched at most once per call; a failed icon
/// fetch is logged and the affected slots simply carry no image.
pub async fn transform(
    payload: &ForecastPayload,
    icons: &dyn IconFetcher,
) -> (Vec<ForecastSlot>, ForecastMeta) {
    let mut cache: HashMap<String, Option<IconImage>> = HashMap::new();
    let mut slots = Vec::with_capacity(payload.list.len());

    for entry in &payload.list {
        let (condition, icon_code) = condition_of(entry);

        let icon = if icon_code.is_empty() {
            None
        } else {
            if !cache.contains_key(&icon_code) {
                let fetched = match icons.fetch(&icon_code).await {
                    Ok(image) => Some(image),
                    Err(err) => {
                        tracing::warn!(code = %icon_code, %err, "failed to fetch weather icon");
                        None
                    }
                };
                cache.insert(icon_code.clone(), fetched);
            }
            cache.get(&icon_code).and_then(Clone::clone)
        };

        slots.push(ForecastSlot {
            timestamp: unix_to_utc(entry.dt).unwrap_or_else(Utc::now),
            temp_min_c: kelvin_to_celsius(entry.main.temp_min),
            temp_max_c: kelvin_to_celsius(entry.main.temp_max),
            feels_like_c: kelvin_to_celsius(entry.main.feels_like),
            humidity_pct: entry.main.humidity,
            condition,
            icon_code,
            icon,
        });
    }

    let meta = ForecastMeta {
        sunrise_local: local_time(payload.city.sunrise, payload.city.timezone),
        sunset_local: local_time(payload.city.sunset, payload.city.timezone),
        utc_offset_label: utc_offset_label(payload.city.timezone),
        country: payload.city.country.clone(),
    };

    (slots, meta)
}

fn condition_of(entry: &ForecastEntry) -> (String, String) {
    match entry.weather.first() {
        Some(weather) => (weather.main.clone(), weather.icon.clone()),
        None => ("Unknown".to_string(), String::new()),
    }
}
