use crate::palette::{History, Palette};
use anyhow::Context;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const HISTORY_KEY: &str = "mood-palettes";
const DARK_MODE_KEY: &str = "dark-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }
}

/// Key-value persistence for the palette history and the display mode.
///
/// The two keys are written independently; nothing keeps them consistent
/// with each other.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }

        let conn = Connection::open(path).with_context(|| format!("open {}", path.display()))?;
        let s = Self { conn };
        s.init_schema()?;
        Ok(s)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory db")?;
        let s = Self { conn };
        s.init_schema()?;
        Ok(s)
    }

    fn init_schema(&self) -> anyhow::Result<()> {
        self.conn
            .execute_batch(
                r#"
CREATE TABLE IF NOT EXISTS kv (
  key TEXT PRIMARY KEY,
  value TEXT NOT NULL,
  updated_at INTEGER NOT NULL
);
"#,
            )
            .context("init schema")?;
        Ok(())
    }

    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .with_context(|| format!("read key {key}"))
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let now = time::OffsetDateTime::now_utc().unix_timestamp();
        self.conn
            .execute(
                r#"
INSERT INTO kv(key, value, updated_at)
VALUES(?1, ?2, ?3)
ON CONFLICT(key) DO UPDATE SET
  value=excluded.value,
  updated_at=excluded.updated_at
"#,
                params![key, value, now],
            )
            .with_context(|| format!("write key {key}"))?;
        Ok(())
    }

    /// Load the palette history. Missing or malformed data yields an empty history.
    pub fn load_history(&self) -> anyhow::Result<History> {
        let Some(raw) = self.get(HISTORY_KEY)? else {
            return Ok(History::new());
        };
        match serde_json::from_str::<Vec<Palette>>(&raw) {
            Ok(palettes) => Ok(History::from_vec(palettes)),
            Err(e) => {
                tracing::warn!("ignoring malformed stored palettes: {e}");
                Ok(History::new())
            }
        }
    }

    pub fn save_history(&self, history: &History) -> anyhow::Result<()> {
        let raw = serde_json::to_string(history).context("serialize palettes")?;
        self.set(HISTORY_KEY, &raw)?;
        tracing::debug!(count = history.len(), "saved palette history");
        Ok(())
    }

    pub fn load_display_mode(&self) -> anyhow::Result<DisplayMode> {
        Ok(match self.get(DARK_MODE_KEY)?.as_deref() {
            Some("true") => DisplayMode::Dark,
            _ => DisplayMode::Light,
        })
    }

    pub fn save_display_mode(&self, mode: DisplayMode) -> anyhow::Result<()> {
        self.set(DARK_MODE_KEY, if mode.is_dark() { "true" } else { "false" })
    }

    /// Remove both keys.
    pub fn clear(&self) -> anyhow::Result<()> {
        self.conn
            .execute(
                "DELETE FROM kv WHERE key IN (?1, ?2)",
                params![HISTORY_KEY, DARK_MODE_KEY],
            )
            .context("clear storage")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_history(n: usize) -> History {
        let mut h = History::new();
        for i in 0..n {
            h = h.append(Palette::new(
                format!("mood {i}"),
                vec!["#000000".into(), "#ffffff".into(), "red".into(), "rgb(1, 2, 3)".into()],
            ));
        }
        h
    }

    #[test]
    fn test_empty_store_defaults() {
        let s = Storage::open_in_memory().unwrap();
        assert!(s.load_history().unwrap().is_empty());
        assert_eq!(s.load_display_mode().unwrap(), DisplayMode::Light);
    }

    #[test]
    fn test_history_round_trip() {
        let s = Storage::open_in_memory().unwrap();
        let h = sample_history(5);
        s.save_history(&h).unwrap();
        s.save_history(&h).unwrap();
        assert_eq!(s.load_history().unwrap(), h);
    }

    #[test]
    fn test_save_overwrites() {
        let s = Storage::open_in_memory().unwrap();
        s.save_history(&sample_history(7)).unwrap();
        let smaller = sample_history(2);
        s.save_history(&smaller).unwrap();
        assert_eq!(s.load_history().unwrap(), smaller);
    }

    #[test]
    fn test_malformed_history_is_absent() {
        let s = Storage::open_in_memory().unwrap();
        for raw in [
            "not json",
            "{\"id\":\"1\"}",
            "[{\"id\":1,\"mood\":\"x\",\"colors\":[],\"createdAt\":\"t\"}]",
            "[{\"id\":\"1\",\"mood\":\"x\",\"colors\":\"red\",\"createdAt\":\"t\"}]",
            "[{\"id\":\"1\",\"mood\":\"x\"}]",
        ] {
            s.set(HISTORY_KEY, raw).unwrap();
            assert!(s.load_history().unwrap().is_empty(), "input: {raw}");
        }
    }

    #[test]
    fn test_reads_browser_layout() {
        let s = Storage::open_in_memory().unwrap();
        s.set(
            HISTORY_KEY,
            r##"[{"id":"1700000000000","mood":"peaceful sunset","colors":["#FF7E5F","#FEB47B","#86A8E7","#91EAE4"],"createdAt":"2023-11-14T22:13:20.000Z"}]"##,
        )
        .unwrap();
        let h = s.load_history().unwrap();
        assert_eq!(h.len(), 1);
        assert_eq!(h.latest().unwrap().mood, "peaceful sunset");
        assert_eq!(h.latest().unwrap().colors[2], "#86A8E7");
    }

    #[test]
    fn test_oversized_history_is_truncated() {
        let s = Storage::open_in_memory().unwrap();
        let palettes: Vec<Palette> = (0..15)
            .map(|i| Palette::new(format!("m{i}"), vec![]))
            .collect();
        s.set(HISTORY_KEY, &serde_json::to_string(&palettes).unwrap())
            .unwrap();
        assert_eq!(s.load_history().unwrap().len(), crate::palette::HISTORY_LIMIT);
    }

    #[test]
    fn test_display_mode_toggle_twice() {
        let s = Storage::open_in_memory().unwrap();
        let original = s.load_display_mode().unwrap();

        let once = original.toggled();
        s.save_display_mode(once).unwrap();
        assert_eq!(s.load_display_mode().unwrap(), DisplayMode::Dark);

        let twice = once.toggled();
        s.save_display_mode(twice).unwrap();
        assert_eq!(twice, original);
        assert_eq!(s.load_display_mode().unwrap(), original);
        assert_eq!(s.get(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_unknown_display_value_is_light() {
        let s = Storage::open_in_memory().unwrap();
        s.set(DARK_MODE_KEY, "yes").unwrap();
        assert_eq!(s.load_display_mode().unwrap(), DisplayMode::Light);
    }

    #[test]
    fn test_clear_and_file_backed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("moodpal.sqlite3");
        {
            let s = Storage::open(&path).unwrap();
            s.save_history(&sample_history(3)).unwrap();
            s.save_display_mode(DisplayMode::Dark).unwrap();
        }
        let s = Storage::open(&path).unwrap();
        assert_eq!(s.load_history().unwrap().len(), 3);
        assert_eq!(s.load_display_mode().unwrap(), DisplayMode::Dark);

        s.clear().unwrap();
        assert!(s.load_history().unwrap().is_empty());
        assert_eq!(s.load_display_mode().unwrap(), DisplayMode::Light);
    }
}
