pub mod dictionary_txt;
pub mod utility;
