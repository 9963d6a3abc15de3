//! Picks the hourly readings six hours before and after a reference time.

use chrono::{Duration, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::{error::WeatherError, model::ForecastDay};

/// Distance, in hours, between the reference time and each reading.
pub const OFFSET_HOURS: i64 = 6;

/// Position of one reading inside `forecast.forecastday[..].hour[..]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourSlot {
    pub day: usize,
    pub hour: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyOffsets {
    pub past_temp: f64,
    /// Clock hour of `reference - 6h`.
    pub past_label_hour: u32,
    pub future_temp: f64,
    /// Clock hour of `reference + 6h`.
    pub future_label_hour: u32,
    pub past_slot: HourSlot,
    pub future_slot: HourSlot,
}

impl HourlyOffsets {
    pub fn past_label(&self) -> String {
        format!("{:02}:00", self.past_label_hour)
    }

    pub fn future_label(&self) -> String {
        format!("{:02}:00", self.future_label_hour)
    }
}

/// Slots to read for `reference`.
///
/// The past slot always points at day 0, even when `reference - 6h` lands on
/// the previous calendar day: for references before 06:00 this reads today's
/// evening hour and labels it "six hours ago". Kept as is for compatibility
/// with the existing guide output.
pub fn offset_slots(reference: NaiveDateTime) -> (HourSlot, HourSlot) {
    let past = reference - Duration::hours(OFFSET_HOURS);
    let future = reference + Duration::hours(OFFSET_HOURS);

    let future_day = if future.date() == reference.date() { 0 } else { 1 };

    (
        HourSlot { day: 0, hour: past.hour() },
        HourSlot { day: future_day, hour: future.hour() },
    )
}

/// Temperatures six hours before and after `reference`.
///
/// Fails with [`WeatherError::ForecastWindow`] when the payload does not
/// contain the day or hour a slot points at; the provider is asked for two
/// full days, so this means the upstream contract was broken.
pub fn select_offset(
    forecast_days: &[ForecastDay],
    reference: NaiveDateTime,
) -> Result<HourlyOffsets, WeatherError> {
    let (past_slot, future_slot) = offset_slots(reference);

    let past_temp = read_slot(forecast_days, past_slot)?;
    let future_temp = read_slot(forecast_days, future_slot)?;

    Ok(HourlyOffsets {
        past_temp,
        past_label_hour: past_slot.hour,
        future_temp,
        future_label_hour: future_slot.hour,
        past_slot,
        future_slot,
    })
}

fn read_slot(forecast_days: &[ForecastDay], slot: HourSlot) -> Result<f64, WeatherError> {
    let day = forecast_days.get(slot.day).ok_or_else(|| WeatherError::ForecastWindow {
        day: slot.day,
        hour: slot.hour,
        available: format!("{} day(s)", forecast_days.len()),
    })?;

    day.hour
        .get(slot.hour as usize)
        .map(|reading| reading.temp_c)
        .ok_or_else(|| WeatherError::ForecastWindow {
            day: slot.day,
            hour: slot.hour,
            available: format!("{} hour(s) on that day", day.hour.len()),
        })
}
