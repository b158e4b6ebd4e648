//! Deserializers for the loosely typed JSON the rental backend emits.
//!
//! The backend is a PHP/MySQL service: numeric columns frequently arrive as
//! strings, flags as `0`/`1`, and dates as MySQL `DATETIME` text. These helpers
//! accept those forms and produce the canonical Rust types.

use chrono::{DateTime, NaiveDate};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber<T> {
    Number(T),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Free-form text that the backend may also send as a bare number or null.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawText>::deserialize(deserializer)? {
        None => String::new(),
        Some(RawText::Text(text)) => text,
        Some(RawText::Int(value)) => value.to_string(),
        Some(RawText::Float(value)) => value.to_string(),
    })
}

pub fn parse_flag(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "si" | "sí" => Some(true),
        "0" | "false" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Empty strings and MySQL zero dates mean "no date".
pub fn parse_date(text: &str) -> Result<Option<NaiveDate>, String> {
    let text = text.trim();
    if text.is_empty() || text.starts_with("0000-00-00") {
        return Ok(None);
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Ok(Some(stamp.date_naive()));
    }

    let day = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| format!("invalid date '{}': {}", text, e))
}

pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawFlag>::deserialize(deserializer)? {
        None => Ok(false),
        Some(RawFlag::Bool(value)) => Ok(value),
        Some(RawFlag::Int(value)) => Ok(value != 0),
        Some(RawFlag::Text(text)) => parse_flag(&text)
            .ok_or_else(|| D::Error::custom(format!("invalid flag value '{}'", text))),
    }
}

pub fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match RawNumber::<T>::deserialize(deserializer)? {
        RawNumber::Number(value) => Ok(value),
        RawNumber::Text(text) => text
            .trim()
            .parse()
            .map_err(|e| D::Error::custom(format!("invalid number '{}': {}", text, e))),
    }
}

pub fn date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_date(&text)
        .map_err(D::Error::custom)?
        .ok_or_else(|| D::Error::custom("date is required"))
}

pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(text) => parse_date(&text).map_err(D::Error::custom),
    }
}
