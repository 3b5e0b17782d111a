use crate::dictionary_txt::{
    abbreviation::AbbreviationTable, entry::DictionaryEntry, flag_parser::annotate_entry,
    grammar_class::GrammarClassTable, line_parser::parse_line,
};

// 解析に使う表．起動時に一度だけ作り，参照で渡す．
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub grammar_classes: GrammarClassTable,
    pub abbreviations: AbbreviationTable,
}

impl Lexicon {
    pub fn new(abbreviations: AbbreviationTable) -> Self {
        Lexicon {
            grammar_classes: GrammarClassTable::default(),
            abbreviations,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    // フラグを解析せず flags のまま出力する
    pub raw_flags: bool,
}

// 空白のみの行は飛ばす
pub fn dictionary_lines(txt: &str) -> impl Iterator<Item = &str> {
    txt.split('\n')
        // 改行が CR+LF のこともある
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
}

pub fn parse_dictionary_entry(
    line: &str,
    lexicon: &Lexicon,
    options: &ParseOptions,
) -> DictionaryEntry {
    let mut entry = parse_line(line);

    if !options.raw_flags {
        annotate_entry(&mut entry, lexicon);
    }

    entry
}

pub fn parse_dictionary_txt(
    txt: &str,
    lexicon: &Lexicon,
    options: &ParseOptions,
) -> Vec<DictionaryEntry> {
    dictionary_lines(txt)
        .map(|line| parse_dictionary_entry(line, lexicon, options))
        .collect()
}
