use std::{collections::HashMap, fs, path::Path};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

// (fam.) のような略記とその英語表記
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Abbreviation {
    #[serde(rename = "acr")]
    pub acronym: String,
    #[serde(rename = "eng")]
    pub expansion: String,
}

#[derive(Debug, Clone, Default)]
pub struct AbbreviationTable {
    expansions: HashMap<String, String>,
}

impl AbbreviationTable {
    // 同じ略記が複数あれば先のものを使う
    pub fn new(abbreviations: Vec<Abbreviation>) -> Self {
        let mut expansions = HashMap::with_capacity(abbreviations.len());
        for abbreviation in abbreviations {
            expansions
                .entry(abbreviation.acronym)
                .or_insert(abbreviation.expansion);
        }

        AbbreviationTable { expansions }
    }

    // [{ "acr": "fam.", "eng": "familiar" }, ...]
    pub fn from_json(json: &str) -> Result<Self> {
        let abbreviations: Vec<Abbreviation> =
            serde_json::from_str(json).context("Failed to parse abbreviation JSON")?;
        Ok(Self::new(abbreviations))
    }

    // acr,eng
    // fam.,familiar
    pub fn from_csv(csv: &str) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(csv.as_bytes());

        let mut abbreviations = Vec::new();
        for (i, record) in reader.deserialize().enumerate() {
            let abbreviation: Abbreviation =
                record.with_context(|| format!("Failed to parse abbreviation at {}", i))?;
            abbreviations.push(abbreviation);
        }

        Ok(Self::new(abbreviations))
    }

    // 拡張子で形式を決める
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read abbreviations: {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        let table = match extension.as_deref() {
            Some("json") => Self::from_json(&data),
            Some("csv") => Self::from_csv(&data),
            _ => bail!("Unknown abbreviation table format: {}", path.display()),
        };
        table.with_context(|| format!("Invalid abbreviation table: {}", path.display()))
    }

    // acronym は括弧を含まない ("fam.")
    pub fn get(&self, acronym: &str) -> Option<&str> {
        self.expansions.get(acronym).map(|e| e.as_str())
    }

    pub fn len(&self) -> usize {
        self.expansions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expansions.is_empty()
    }
}
