// 行内の位置 (char 単位) を扱う走査補助

// 注記の開始記号
pub const FLAG_OPEN_DELIMITERS: [char; 4] = ['[', '(', '{', '<'];

// 見出し語と意味の区切り
pub const MEANING_DELIMITER: &str = "  ";
// 旧語と新語の区切り
pub const OBSOLETE_MEANING_DELIMITER: &str = ">";
// どちらの区切りも意味の前に 2 文字ある ("  ", "> ")
pub const MEANING_DELIMITER_WIDTH: usize = 2;

pub const OBSOLETE_OPEN: char = '[';
pub const OBSOLETE_CLOSE: char = ']';

// 元データでは « が二重に符号化されて "Â«" になっている
pub const LENT_MARKERS: [&str; 2] = ["Â«", "«"];

pub struct LineScanner {
    chars: Vec<char>,
}

impl LineScanner {
    pub fn new(line: &str) -> Self {
        LineScanner {
            chars: line.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn starts_with_at(&self, index: usize, needle: &str) -> bool {
        if self.len() < index {
            return false;
        }

        let mut rest = self.chars[index..].iter();
        needle.chars().all(|c| rest.next() == Some(&c))
    }

    // offset 以降で最初に needle が現れる位置
    pub fn index_of(&self, needle: &str, offset: usize) -> Option<usize> {
        (offset..self.len()).find(|&i| self.starts_with_at(i, needle))
    }

    // 見つからなければ行の長さ
    pub fn index_of_or_length(&self, needle: &str, offset: usize) -> usize {
        self.index_of(needle, offset).unwrap_or(self.len())
    }

    pub fn index_of_char(&self, needle: char, offset: usize) -> Option<usize> {
        (offset..self.len()).find(|&i| self.chars[i] == needle)
    }

    // 最初の空白でない文字
    pub fn word_start(&self) -> Option<usize> {
        self.chars.iter().position(|&c| c != ' ')
    }

    // offset 以降の見出し語の終わり
    //
    // 注記の開始記号 (その直前の空白を含めない)・二連続の空白・行末 のうち
    // offset 以降にある最小の位置
    pub fn word_end_from(&self, offset: usize) -> usize {
        FLAG_OPEN_DELIMITERS
            .iter()
            .filter_map(|&c| self.index_of_char(c, offset))
            .filter_map(|i| i.checked_sub(1))
            .chain(self.index_of(MEANING_DELIMITER, offset))
            .chain(Some(self.len()))
            .filter(|&i| offset <= i)
            .min()
            .unwrap_or(self.len())
    }

    // 見出し語と意味の区切りの位置
    pub fn word_meaning_split(&self, offset: usize, is_obsolete: bool) -> usize {
        let delimiter = if is_obsolete {
            OBSOLETE_MEANING_DELIMITER
        } else {
            MEANING_DELIMITER
        };
        self.index_of_or_length(delimiter, offset)
    }

    // [start, end) を範囲内に収めて切り出す
    pub fn substring(&self, start: usize, end: usize) -> String {
        let end = end.min(self.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    pub fn lent_marker_at(&self, index: usize) -> bool {
        LENT_MARKERS
            .iter()
            .any(|marker| self.starts_with_at(index, marker))
    }
}
