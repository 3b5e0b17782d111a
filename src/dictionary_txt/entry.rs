use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub word: String, // 見出し語

    #[serde(skip_serializing_if = "is_false")]
    pub is_obsolete: bool, // [旧語> 新語] 形式
    #[serde(skip_serializing_if = "is_false")]
    pub is_lent: bool, // 外来語記号付き

    // 見出し語と意味の間の未解析の注記 (annotate_entry が消費する)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,

    // meaning と new_word はどちらか一方のみ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_word: Option<String>, // is_obsolete の場合のみ

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar_class: Option<GrammarClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equivalent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<Vec<String>>,
}

impl DictionaryEntry {
    pub fn new(word: &str) -> Self {
        DictionaryEntry {
            word: word.to_owned(),
            ..Default::default()
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

// {tr} => "transitive"
// {tr/ntr} => ["transitive", "non-transitive"]
// {tr} {xyz} => ["transitive"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GrammarClass {
    Single(String),
    Multiple(Vec<String>),
}

impl GrammarClass {
    // 一致した {…} が一つで値も一つのときだけ単一の値
    pub fn from_values(match_count: usize, mut values: Vec<String>) -> Self {
        if match_count == 1 && values.len() == 1 {
            Self::Single(values.remove(0))
        } else {
            Self::Multiple(values)
        }
    }
}
