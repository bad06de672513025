//! Build script to generate embedded word lists
//!
//! Reads the files under `data/wordlists/` and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// (file stem, const name, doc comment)
const LISTS: &[(&str, &str, &str)] = &[
    ("read_minds", "READ_MINDS", "The ten words shown on the read-minds screen"),
    ("en_uk", "EN_UK", "EN-UK dictionary sample"),
    ("words_19k", "WORDS_19K", "Sample of the 19K common words list"),
    ("all_names", "ALL_NAMES", "First names of any gender"),
    ("boys_names", "BOYS_NAMES", "Boys' first names"),
    ("girls_names", "GIRLS_NAMES", "Girls' first names"),
    ("months_stars", "MONTHS_STARS", "Months of the year and star signs"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("wordlists.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for (stem, const_name, doc_comment) in LISTS {
        let input_path = format!("data/wordlists/{stem}.txt");
        generate_word_list(&input_path, &mut output, const_name, doc_comment);
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_word_list(input_path: &str, output: &mut fs::File, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect();

    writeln!(output, "/// {doc_comment} ({} words)", words.len()).unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
