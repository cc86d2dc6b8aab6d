//! Palettes and the bounded palette history.

pub mod color;

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Maximum number of palettes kept in [`History`].
pub const HISTORY_LIMIT: usize = 12;

/// One generation result. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub id: String,
    pub mood: String,
    pub colors: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Millisecond timestamp id, bumped past the previous one if the clock
/// has not advanced.
fn next_id(now: OffsetDateTime) -> String {
    let millis = (now.unix_timestamp_nanos() / 1_000_000) as i64;
    let mut prev = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = millis.max(prev + 1);
        match LAST_ID.compare_exchange_weak(prev, candidate, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return candidate.to_string(),
            Err(actual) => prev = actual,
        }
    }
}

impl Palette {
    /// Build a palette stamped with the current time.
    pub fn new(mood: impl Into<String>, colors: Vec<String>) -> Self {
        Self::new_at(mood, colors, OffsetDateTime::now_utc())
    }

    pub fn new_at(mood: impl Into<String>, colors: Vec<String>, now: OffsetDateTime) -> Self {
        let created_at = now
            .format(&Rfc3339)
            .unwrap_or_else(|_| now.unix_timestamp().to_string());
        Self {
            id: next_id(now),
            mood: mood.into(),
            colors,
            created_at,
        }
    }

    /// Creation time formatted for display, falling back to the raw string.
    pub fn created_label(&self) -> String {
        let fmt = time::macros::format_description!("[year]-[month]-[day] [hour]:[minute]");
        OffsetDateTime::parse(&self.created_at, &Rfc3339)
            .ok()
            .and_then(|t| t.format(&fmt).ok())
            .unwrap_or_else(|| self.created_at.clone())
    }

    pub fn created_date(&self) -> String {
        let fmt = time::macros::format_description!("[year]-[month]-[day]");
        OffsetDateTime::parse(&self.created_at, &Rfc3339)
            .ok()
            .and_then(|t| t.format(&fmt).ok())
            .unwrap_or_else(|| self.created_at.clone())
    }
}

/// Most-recent-first list of palettes, never longer than [`HISTORY_LIMIT`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(Vec<Palette>);

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap loaded palettes, dropping anything past the limit.
    pub fn from_vec(mut palettes: Vec<Palette>) -> Self {
        palettes.truncate(HISTORY_LIMIT);
        Self(palettes)
    }

    /// `[palette] ++ take(self, HISTORY_LIMIT - 1)`
    pub fn append(self, palette: Palette) -> Self {
        let mut palettes = Vec::with_capacity(HISTORY_LIMIT);
        palettes.push(palette);
        palettes.extend(self.0.into_iter().take(HISTORY_LIMIT - 1));
        Self(palettes)
    }

    pub fn get(&self, index: usize) -> Option<&Palette> {
        self.0.get(index)
    }

    pub fn latest(&self) -> Option<&Palette> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Palette> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_palette(mood: &str) -> Palette {
        Palette::new(
            mood,
            vec![
                "#112233".to_string(),
                "#445566".to_string(),
                "#778899".to_string(),
                "#aabbcc".to_string(),
            ],
        )
    }

    #[test]
    fn test_append_prepends() {
        let history = History::new()
            .append(make_palette("first"))
            .append(make_palette("second"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().unwrap().mood, "second");
        assert_eq!(history.get(1).unwrap().mood, "first");
    }

    #[test]
    fn test_length_is_bounded() {
        for n in [0usize, 1, 11, 12, 13, 30] {
            let mut history = History::new();
            for i in 0..n {
                history = history.append(make_palette(&format!("mood {i}")));
            }
            assert_eq!(history.len(), n.min(HISTORY_LIMIT));
            if n > 0 {
                assert_eq!(history.latest().unwrap().mood, format!("mood {}", n - 1));
            }
        }
    }

    #[test]
    fn test_thirteenth_evicts_oldest() {
        let mut history = History::new();
        for i in 0..12 {
            history = history.append(make_palette(&format!("mood {i}")));
        }
        let before: Vec<String> = history.iter().map(|p| p.mood.clone()).collect();
        history = history.append(make_palette("mood 12"));

        let after: Vec<String> = history.iter().map(|p| p.mood.clone()).collect();
        assert_eq!(after[0], "mood 12");
        assert_eq!(&after[1..], &before[..11]);
        assert!(!after.contains(&"mood 0".to_string()));
    }

    #[test]
    fn test_from_vec_truncates() {
        let palettes: Vec<Palette> = (0..20).map(|i| make_palette(&i.to_string())).collect();
        let history = History::from_vec(palettes);
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.latest().unwrap().mood, "0");
    }

    #[test]
    fn test_ids_are_unique_within_a_millisecond() {
        let now = OffsetDateTime::now_utc();
        let a = Palette::new_at("a", vec![], now);
        let b = Palette::new_at("b", vec![], now);
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert!(b.id.parse::<i64>().unwrap() > a.id.parse::<i64>().unwrap());
    }

    #[test]
    fn test_serialized_field_names() {
        let p = make_palette("calm");
        let v = serde_json::to_value(&p).unwrap();
        assert!(v.get("createdAt").is_some());
        assert!(v.get("created_at").is_none());
        assert_eq!(v["mood"], "calm");
        assert_eq!(v["colors"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_created_label_falls_back_to_raw() {
        let mut p = make_palette("calm");
        p.created_at = "yesterday".to_string();
        assert_eq!(p.created_label(), "yesterday");

        let p = Palette::new_at(
            "calm",
            vec![],
            time::macros::datetime!(2024-05-01 13:45 UTC),
        );
        assert_eq!(p.created_label(), "2024-05-01 13:45");
        assert_eq!(p.created_date(), "2024-05-01");
    }
}
