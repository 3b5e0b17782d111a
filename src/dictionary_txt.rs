// 1 行 1 見出し語の辞書テキストの解析
//
// 形式に文法はなく，位置と区切り文字だけで見出し語・フラグ・意味を切り出す：
//   word {tr} (fig.) [= synonym]  meaning
//   [oldword {tr}]> newword] (fam.)
//   Â«loanword  meaning
//
// 解析に失敗する行はなく，常に最善の結果を返す．
// 解釈できなかったフラグは警告として報告する．

pub mod abbreviation;
pub mod entry;
pub mod flag_parser;
pub mod grammar_class;
pub mod line_parser;
pub mod parser;
pub mod scanner;
