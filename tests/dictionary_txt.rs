use std::{fs, path::Path};

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use dictionary_json::dictionary_txt::{
    abbreviation::AbbreviationTable,
    parser::{dictionary_lines, parse_dictionary_txt, Lexicon, ParseOptions},
};

static SAMPLE_DICTIONARY: &str = "./tests/sample.dictionary.txt";
static SAMPLE_ABBREVIATIONS: &str = "./tests/abbreviations.json";

fn load_sample() -> Result<(String, Lexicon)> {
    let txt = fs::read_to_string(SAMPLE_DICTIONARY)?;
    let abbreviations = AbbreviationTable::load(Path::new(SAMPLE_ABBREVIATIONS))?;
    Ok((txt, Lexicon::new(abbreviations)))
}

#[test]
fn test_sample_dictionary() -> Result<()> {
    let (txt, lexicon) = load_sample()?;

    let entries = parse_dictionary_txt(&txt, &lexicon, &ParseOptions::default());

    assert_eq!(
        serde_json::to_value(&entries)?,
        json!([
            { "word": "abelo", "meaning": "bee" },
            {
                "word": "aeroplano",
                "isObsolete": true,
                "newWord": "aviadilo",
                "grammarClass": "transitive",
                "tags": ["familiar"]
            },
            { "word": "Â«bebo", "isLent": true, "meaning": "baby" },
            {
                "word": "ĉevalo",
                "meaning": "horse",
                "tags": ["familiar"],
                "equivalent": "ĉevo",
                "pronouns": ["= ĉevo"]
            },
            {
                "word": "fari",
                "meaning": "to do, to make",
                "grammarClass": "transitive",
                "tags": ["figurative"],
                "pronouns": ["mi, vi"]
            },
            { "word": "iri", "meaning": "to go", "grammarClass": "non-transitive" }
        ])
    );

    Ok(())
}

#[test]
fn test_sample_dictionary_with_raw_flags() -> Result<()> {
    let (txt, lexicon) = load_sample()?;

    let options = ParseOptions { raw_flags: true };
    let entries = parse_dictionary_txt(&txt, &lexicon, &options);

    let flags: Vec<Option<&str>> = entries.iter().map(|e| e.flags.as_deref()).collect();
    assert_eq!(
        flags,
        vec![
            None,
            Some("{tr} (fam.)"),
            None,
            Some("(fam.) [= ĉevo]"),
            Some("{tr} (fig.) [mi, vi]"),
            Some("{ntr} <strange>"),
        ]
    );
    assert!(entries.iter().all(|e| e.grammar_class.is_none()));

    Ok(())
}

#[test]
fn test_pretty_output_omits_absent_fields() -> Result<()> {
    let (txt, lexicon) = load_sample()?;

    let entries = parse_dictionary_txt(&txt, &lexicon, &ParseOptions::default());
    let output = serde_json::to_string_pretty(&entries[..1])?;

    assert_eq!(
        output,
        "[\n  {\n    \"word\": \"abelo\",\n    \"meaning\": \"bee\"\n  }\n]"
    );

    Ok(())
}

#[test]
fn test_dictionary_lines_skips_blank_lines() {
    let txt = "a  b\r\n\r\n   \nc  d\n\ne";

    let lines: Vec<&str> = dictionary_lines(txt).collect();

    assert_eq!(lines, vec!["a  b", "c  d", "e"]);
}

#[test]
fn test_entries_keep_input_order() {
    let txt = "zebro  zebra\nabelo  bee\nmezo  middle\n";

    let entries = parse_dictionary_txt(txt, &Lexicon::default(), &ParseOptions::default());

    let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["zebro", "abelo", "mezo"]);
}

#[test]
fn test_abbreviations_from_csv() -> Result<()> {
    let table = AbbreviationTable::from_csv("acr,eng\nfam.,familiar\nfig.,figurative\n")?;

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("fam."), Some("familiar"));
    assert_eq!(table.get("fig."), Some("figurative"));
    assert_eq!(table.get("(fam.)"), None);

    Ok(())
}

#[test]
fn test_first_abbreviation_wins() -> Result<()> {
    let table = AbbreviationTable::load(Path::new(SAMPLE_ABBREVIATIONS))?;

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("fig."), Some("figurative"));

    Ok(())
}

#[test]
fn test_invalid_abbreviation_table() {
    assert!(AbbreviationTable::from_json("{ \"acr\": \"fam.\" }").is_err());
    assert!(AbbreviationTable::from_csv("acr,eng\nfam.\n").is_err());
    assert!(AbbreviationTable::load(Path::new("./tests/sample.dictionary.txt")).is_err());
    assert!(AbbreviationTable::load(Path::new("./tests/missing.json")).is_err());
}

#[test]
fn test_empty_abbreviation_table() -> Result<()> {
    let table = AbbreviationTable::from_json("[]")?;
    assert!(table.is_empty());

    let table = AbbreviationTable::from_csv("acr,eng\nfam.,familiar\n")?;
    assert!(!table.is_empty());

    Ok(())
}
