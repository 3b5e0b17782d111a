use std::collections::HashMap;

// {…} の文法分類
static DEFAULT_GRAMMAR_CLASSES: &[(&str, &[&str])] = &[
    ("{prep.}", &["preposition"]),
    ("{tr}", &["transitive"]),
    ("{ntr}", &["non-transitive"]),
    ("{tr/ntr}", &["transitive", "non-transitive"]),
    ("{suf.}", &["suffix"]),
    ("{adv.}", &["adverb"]),
    ("{pref.}", &["prefix"]),
    ("{interj.}", &["interjection"]),
    ("{imp}", &["impersonal"]),
    ("{konj.}", &["conjunction"]),
    ("{pron.}", &["pronoun"]),
    ("{artiklo.}", &["article"]),
    ("{artikl.}", &["article"]),
];

#[derive(Debug, Clone)]
pub struct GrammarClassTable {
    // 括弧付きのコード => 値 (複数のこともある)
    classes: HashMap<String, Vec<String>>,
}

impl GrammarClassTable {
    // code は "{tr}" のように括弧込み
    pub fn get(&self, code: &str) -> Option<&[String]> {
        self.classes.get(code).map(|v| v.as_slice())
    }
}

impl Default for GrammarClassTable {
    fn default() -> Self {
        let classes = DEFAULT_GRAMMAR_CLASSES
            .iter()
            .map(|&(code, values)| {
                let values = values.iter().map(|&v| v.to_owned()).collect();
                (code.to_owned(), values)
            })
            .collect();

        GrammarClassTable { classes }
    }
}
