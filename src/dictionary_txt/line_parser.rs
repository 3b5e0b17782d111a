use crate::dictionary_txt::{
    entry::DictionaryEntry,
    scanner::{LineScanner, MEANING_DELIMITER_WIDTH, OBSOLETE_CLOSE, OBSOLETE_OPEN},
};

// 見出し語・フラグ・意味の切り出し
//
//   word {tr} (fig.)  meaning
//   [oldword {tr}]> newword] (fam.)
//
// 失敗はせず，崩れた行でもそれらしい結果を返す
pub fn parse_line(line: &str) -> DictionaryEntry {
    let line = LineScanner::new(line);

    // 空白のみの行は呼び出し側で除外されている前提
    let Some(start) = line.word_start() else {
        return DictionaryEntry::default();
    };

    let is_obsolete = line.char_at(start) == Some(OBSOLETE_OPEN);
    // 外来語記号は見出し語に含めたまま
    let is_lent = line.lent_marker_at(start);
    let start = if is_obsolete { start + 1 } else { start };

    let split = line.word_meaning_split(start, is_obsolete);

    let end = line.word_end_from(start);
    // "[oldword> newword]" のように注記がない旧語は ">" で見出し語が終わる
    let end = if is_obsolete { end.min(split) } else { end };

    let mut entry = DictionaryEntry::new(&line.substring(start, end));
    entry.is_obsolete = is_obsolete;
    entry.is_lent = is_lent;

    let meaning_start = split + MEANING_DELIMITER_WIDTH;

    // 区切り以上のものが間にあればフラグ
    if meaning_start > end + 3 {
        let flags_end = meaning_start - MEANING_DELIMITER_WIDTH - usize::from(is_obsolete);
        entry.flags = Some(line.substring(end + 1, flags_end));
    }

    // 意味のない見出し語もある
    if meaning_start < line.len() {
        if is_obsolete {
            // 旧語の "意味" は新語
            let new_word_end = line
                .index_of_char(OBSOLETE_CLOSE, meaning_start)
                .unwrap_or(line.len());
            entry.new_word = Some(line.substring(meaning_start, new_word_end));

            // "]" の後にもフラグが続くことがある
            if line.len() > new_word_end + 1 {
                let rest = line.substring(new_word_end + 1, line.len());
                entry.flags.get_or_insert_with(String::new).push_str(&rest);
            }
        } else {
            entry.meaning = Some(line.substring(meaning_start, line.len()));
        }
    }

    entry
}
