/*!
# Dataset sources

Locating and extracting dataset archives, and reading the utterances
they contain. Two reader variants exist, matching the two dataset
distributions: flat xlsx spreadsheets ([spreadsheet]) and nested json
corpora ([json]).
!*/
pub mod archive;
pub mod json;
pub mod spreadsheet;
