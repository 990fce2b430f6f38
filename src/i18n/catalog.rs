use crate::errors::AppResult;
use crate::i18n::Localizer;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Translation table loaded from a `source,translated[,context]` CSV file.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    language: String,
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            entries: HashMap::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn insert(&mut self, source: impl Into<String>, translated: impl Into<String>) {
        self.entries.insert(source.into(), translated.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn load(language: &str, path: &Path) -> AppResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(language, file)
    }

    /// Rows with fewer than two columns or an empty source are skipped;
    /// later rows override earlier ones.
    pub fn from_reader<R: Read>(language: &str, reader: R) -> AppResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut catalog = Self::new(language);
        for record in rdr.records() {
            let record = record?;
            let (Some(source), Some(translated)) = (record.get(0), record.get(1)) else {
                continue;
            };
            if source.is_empty() {
                continue;
            }
            catalog.insert(source, translated);
        }

        Ok(catalog)
    }
}

impl Localizer for Catalog {
    fn translate(&self, text: &str) -> String {
        self.entries
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}
