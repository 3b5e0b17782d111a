use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::dictionary_txt::{
    entry::{DictionaryEntry, GrammarClass},
    parser::Lexicon,
};

// フラグの解析規則
//
// 規則はこの順に元のフラグ文字列へ適用する．後の規則ほど狭い．
// 取り除く方は作業用の文字列に順に適用し，最後に残ったものを警告する．
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagRule {
    GrammarClass,     // {tr}
    AbbreviatedTag,   // (fam.)
    ParentheticalTag, // (sports)
    Equivalent,       // [= synonym] (= synonym)
    Pronoun,          // [li, ŝi] ("[= …]" も含む)
}

pub const FLAG_RULES: [FlagRule; 5] = [
    FlagRule::GrammarClass,
    FlagRule::AbbreviatedTag,
    FlagRule::ParentheticalTag,
    FlagRule::Equivalent,
    FlagRule::Pronoun,
];

impl FlagRule {
    pub fn regex(self) -> &'static Regex {
        static REGEX_GRAMMAR_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]+\}").unwrap());
        // 隣り合う括弧が 1 つに繋がらないよう中に括弧を含めない
        static REGEX_ABBREVIATED_TAG: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\([^=()]+?\.\)").unwrap());
        static REGEX_PARENTHETICAL_TAG: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\([^=()]+?[^.()]\)").unwrap());
        static REGEX_EQUIVALENT: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\[= [^\]]+\]|\(= [^)]+\)").unwrap());
        static REGEX_PRONOUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]+\]").unwrap());

        match self {
            FlagRule::GrammarClass => &*REGEX_GRAMMAR_CLASS,
            FlagRule::AbbreviatedTag => &*REGEX_ABBREVIATED_TAG,
            FlagRule::ParentheticalTag => &*REGEX_PARENTHETICAL_TAG,
            FlagRule::Equivalent => &*REGEX_EQUIVALENT,
            FlagRule::Pronoun => &*REGEX_PRONOUN,
        }
    }

    // 括弧などの囲みの長さ (前, 後)
    fn enclosure(self) -> (usize, usize) {
        match self {
            FlagRule::GrammarClass => (0, 0), // 表は括弧込みで引く
            FlagRule::Equivalent => ("[= ".len(), 1),
            _ => (1, 1),
        }
    }

    // 囲みを除いた一致部分 (一致順)
    pub fn spans(self, flags: &str) -> Vec<&str> {
        let (l, r) = self.enclosure();
        self.regex()
            .find_iter(flags)
            .map(|m| {
                let m = m.as_str();
                &m[l..(m.len() - r)]
            })
            .collect()
    }

    fn apply(self, spans: Vec<&str>, lexicon: &Lexicon, parsed: &mut ParsedFlags) {
        match self {
            FlagRule::GrammarClass => {
                // 表にないコードは捨てる
                let values = spans
                    .iter()
                    .filter_map(|code| lexicon.grammar_classes.get(code))
                    .flatten()
                    .cloned()
                    .collect();
                parsed.grammar_class = Some(GrammarClass::from_values(spans.len(), values));
            }

            FlagRule::AbbreviatedTag => {
                // 一つも引けなくても空の tags にする
                let tags = spans
                    .iter()
                    .filter_map(|acronym| lexicon.abbreviations.get(acronym))
                    .map(|expansion| expansion.to_owned())
                    .collect();
                parsed.tags = Some(tags);
            }

            FlagRule::ParentheticalTag => {
                parsed
                    .tags
                    .get_or_insert_with(Vec::new)
                    .extend(spans.iter().map(|&tag| tag.to_owned()));
            }

            FlagRule::Equivalent => {
                // 同義語は最初の一つだけ
                if 1 < spans.len() {
                    debug!(discarded = ?&spans[1..], "Extra equivalents are discarded");
                }
                parsed.equivalent = spans.first().map(|&e| e.to_owned());
            }

            FlagRule::Pronoun => {
                parsed.pronouns = Some(spans.iter().map(|&p| p.to_owned()).collect());
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFlags {
    pub grammar_class: Option<GrammarClass>,
    pub tags: Option<Vec<String>>,
    pub equivalent: Option<String>,
    pub pronouns: Option<Vec<String>>,

    // 解析できずに残った部分 (空白のみなら None)
    pub leftover: Option<String>,
}

pub fn parse_flags(flags: &str, lexicon: &Lexicon) -> ParsedFlags {
    let mut parsed = ParsedFlags::default();
    let mut remaining = flags.to_owned();

    for rule in FLAG_RULES {
        let spans = rule.spans(flags);
        if spans.is_empty() {
            continue;
        }

        rule.apply(spans, lexicon, &mut parsed);
        remaining = rule.regex().replace_all(&remaining, "").into_owned();
    }

    // 空の {} が少しある
    let remaining = remaining.replace("{}", "");
    if !remaining.trim().is_empty() {
        parsed.leftover = Some(remaining);
    }

    parsed
}

// entry.flags を型付きのフィールドに置き換える
//
// flags がなければ何もしない．残りがあれば警告してそれを返す．
pub fn annotate_entry(entry: &mut DictionaryEntry, lexicon: &Lexicon) -> Option<String> {
    let flags = entry.flags.take()?;

    let parsed = parse_flags(&flags, lexicon);

    if parsed.grammar_class.is_some() {
        entry.grammar_class = parsed.grammar_class;
    }
    if parsed.tags.is_some() {
        entry.tags = parsed.tags;
    }
    if parsed.equivalent.is_some() {
        entry.equivalent = parsed.equivalent;
    }
    if parsed.pronouns.is_some() {
        entry.pronouns = parsed.pronouns;
    }

    if let Some(leftover) = &parsed.leftover {
        warn!(word = %entry.word, leftover = %leftover, "Not all flags were parsed");
    }

    parsed.leftover
}
