//! Flexible timestamp scanning.
//!
//! A timestamp is matched against a fixed list of layouts, tried in order.
//! Input is consumed one bare string at a time, only as far as the layout
//! being tried needs, and what was consumed carries over to the next layout.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};

use crate::error::{ScanError, ScanResult};
use crate::Scanner;

/// Zone applied when the text carries no offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DefaultZone {
    Utc,
    Local,
}

#[derive(Debug, Clone, Copy)]
enum Layout {
    /// RFC 3339, offset required.
    Rfc3339,
    /// No zone in the text.
    Naive(&'static str),
    /// A numeric `-0700` offset.
    Offset(&'static str),
    /// A zone abbreviation such as `MST`, read as offset zero.
    Abbreviation(&'static str),
}

#[derive(Debug, Clone, Copy)]
struct TimestampFormat {
    layout: Layout,
    zone: DefaultZone,
}

const fn entry(layout: Layout, zone: DefaultZone) -> TimestampFormat {
    TimestampFormat { layout, zone }
}

const TIMESTAMP_FORMATS: [TimestampFormat; 11] = [
    entry(Layout::Rfc3339, DefaultZone::Utc),
    entry(Layout::Naive("%b %d %Y, %H:%M"), DefaultZone::Local),
    entry(Layout::Naive("%b %d %Y, %I:%M%p"), DefaultZone::Local),
    entry(Layout::Abbreviation("%A, %d-%b-%y %H:%M:%S %Z"), DefaultZone::Utc),
    entry(Layout::Abbreviation("%d %b %y %H:%M %Z"), DefaultZone::Utc),
    entry(Layout::Offset("%d %b %y %H:%M %z"), DefaultZone::Utc),
    entry(Layout::Naive("%a %b %d %H:%M:%S %Y"), DefaultZone::Local),
    entry(Layout::Abbreviation("%a %b %d %H:%M:%S %Z %Y"), DefaultZone::Utc),
    entry(Layout::Offset("%a %b %d %H:%M:%S %z %Y"), DefaultZone::Utc),
    entry(Layout::Abbreviation("%a, %d %b %Y %H:%M:%S %Z"), DefaultZone::Utc),
    entry(Layout::Offset("%a, %d %b %Y %H:%M:%S %z"), DefaultZone::Utc),
];

impl TimestampFormat {
    fn part_count(&self) -> usize {
        match self.layout {
            Layout::Rfc3339 => 1,
            Layout::Naive(layout) | Layout::Offset(layout) | Layout::Abbreviation(layout) => {
                layout.split(' ').filter(|part| !part.is_empty()).count()
            }
        }
    }

    fn parse(&self, input: &str) -> Result<DateTime<FixedOffset>, String> {
        match self.layout {
            Layout::Rfc3339 => DateTime::parse_from_rfc3339(input).map_err(|e| e.to_string()),
            Layout::Offset(layout) => DateTime::parse_from_str(input, layout).map_err(|e| e.to_string()),
            Layout::Naive(layout) => {
                let naive = NaiveDateTime::parse_from_str(input, layout).map_err(|e| e.to_string())?;
                self.in_default_zone(naive)
            }
            Layout::Abbreviation(layout) => {
                let (layout, input) = strip_zone_abbreviation(layout, input)?;
                let naive = NaiveDateTime::parse_from_str(&input, &layout).map_err(|e| e.to_string())?;
                Ok(Utc.from_utc_datetime(&naive).fixed_offset())
            }
        }
    }

    fn in_default_zone(&self, naive: NaiveDateTime) -> Result<DateTime<FixedOffset>, String> {
        match self.zone {
            DefaultZone::Utc => Ok(Utc.from_utc_datetime(&naive).fixed_offset()),
            DefaultZone::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.fixed_offset())
                .ok_or_else(|| "time does not exist in the local zone".to_string()),
        }
    }
}

/// Removes the `%Z` item from `layout` and the matching word from `input`.
fn strip_zone_abbreviation(layout: &str, input: &str) -> Result<(String, String), String> {
    let layout_parts: Vec<&str> = layout.split(' ').filter(|p| !p.is_empty()).collect();
    let input_parts: Vec<&str> = input.split(' ').filter(|p| !p.is_empty()).collect();
    let index = layout_parts
        .iter()
        .position(|part| *part == "%Z")
        .ok_or_else(|| "layout has no zone".to_string())?;

    match input_parts.get(index) {
        Some(zone) if is_zone_abbreviation(zone) => {}
        _ => return Err("input contains no zone abbreviation".to_string()),
    }

    let without = |parts: &[&str]| {
        parts
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, part)| *part)
            .collect::<Vec<_>>()
            .join(" ")
    };
    Ok((without(&layout_parts), without(&input_parts)))
}

fn is_zone_abbreviation(word: &str) -> bool {
    (3..=5).contains(&word.len()) && word.bytes().all(|b| b.is_ascii_uppercase())
}

impl Scanner {
    /// Scans a timestamp in any of the supported layouts.
    ///
    /// The layouts, tried in order, are RFC 3339 and the equivalents of
    /// `Jan 2 2006, 15:04`, `Jan 2 2006, 3:04PM`,
    /// `Monday, 02-Jan-06 15:04:05 MST`, `02 Jan 06 15:04 MST`,
    /// `02 Jan 06 15:04 -0700`, `Mon Jan 2 15:04:05 2006`,
    /// `Mon Jan 2 15:04:05 MST 2006`, `Mon Jan 02 15:04:05 -0700 2006`,
    /// `Mon, 02 Jan 2006 15:04:05 MST` and
    /// `Mon, 02 Jan 2006 15:04:05 -0700`. Layouts without an offset use the
    /// local zone when they name no zone at all and UTC otherwise.
    pub fn scan_timestamp(&mut self) -> ScanResult<DateTime<FixedOffset>> {
        self.check()?;

        let mut input = String::new();
        let mut parts = 0;
        let mut last_error = String::new();

        for format in &TIMESTAMP_FORMATS {
            while parts < format.part_count() {
                self.skip_spaces();
                if self.cursor.is_at_end() {
                    if parts == 0 {
                        return Err(ScanError::EndOfInput);
                    }
                    self.token = input;
                    return Err(self.set_error_message(format!("Timestamp expected: {}", last_error)));
                }

                let part = self.scan_string()?;
                if !input.is_empty() {
                    input.push(' ');
                }
                input.push_str(&part);
                for separator in [',', ';'] {
                    if self.cursor.match_char(separator) {
                        input.push(separator);
                        break;
                    }
                }
                parts += 1;
            }

            match format.parse(&input) {
                Ok(timestamp) => {
                    self.token = input;
                    return Ok(timestamp);
                }
                Err(err) => last_error = err,
            }
        }

        self.token = input;
        Err(self.set_error_message(format!("Timestamp expected: {}", last_error)))
    }
}

/// Parses a timestamp from a string in any layout [`Scanner::scan_timestamp`]
/// accepts.
pub fn time_from_string(text: &str) -> ScanResult<DateTime<FixedOffset>> {
    Scanner::new(text).scan_timestamp()
}
