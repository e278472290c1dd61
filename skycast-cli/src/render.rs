//! Text rendering of the transformed forecast: summary cards, temperature
//! and humidity series, and a short per-slot condition strip.

use skycast_core::{ForecastMeta, ForecastSlot, GeoCandidate};

/// How many leading slots the condition strip shows.
const STRIP_SLOTS: usize = 10;

pub fn forecast(city: &str, candidate: &GeoCandidate, slots: &[ForecastSlot], meta: &ForecastMeta) {
    println!("{}", capitalize(city));
    println!("5-day forecast for {}", candidate.display_label());
    println!();

    summary(meta);
    println!();
    temperature_table(slots);
    println!();
    condition_strip(slots);
    println!();
    humidity_table(slots);
}

fn summary(meta: &ForecastMeta) {
    println!("Sunrise   {}", meta.sunrise_local.format("%H:%M:%S"));
    println!("Sunset    {}", meta.sunset_local.format("%H:%M:%S"));
    println!("Timezone  {}", meta.utc_offset_label);
    println!("Country   {}", meta.country);
}

fn temperature_table(slots: &[ForecastSlot]) {
    println!("Temperature (°C)");
    println!(
        "{:<20} {:>8} {:>8} {:>10}",
        "Date Time", "Min", "Max", "Feels-like"
    );
    for slot in slots {
        println!(
            "{:<20} {:>8.2} {:>8.2} {:>10.2}",
            slot.formatted_date(),
            slot.temp_min_c,
            slot.temp_max_c,
            slot.feels_like_c
        );
    }
}

fn condition_strip(slots: &[ForecastSlot]) {
    println!("Conditions");
    for slot in slots.iter().take(STRIP_SLOTS) {
        let icon = match &slot.icon {
            Some(image) => format!("[{} icon, {} bytes]", image.code, image.bytes.len()),
            None => "-".to_string(),
        };
        println!(
            "{:<12} {:<6} {:<14} {}",
            slot.day_label(),
            slot.time_label(),
            slot.condition,
            icon
        );
    }
}

fn humidity_table(slots: &[ForecastSlot]) {
    println!("Humidity");
    for slot in slots {
        println!("{:<20} {:>3}%", slot.formatted_date(), slot.humidity_pct);
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
