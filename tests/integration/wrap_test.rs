//! Library-level wrapping properties over mixed text.

use termweave::ansi::{scan, strip_escape_sequences, width_default, TextRun};
use termweave::wrap::{wrap_lines, WrapConfig};

const STYLED: &str = "\x1b[1;34mtermweave\x1b[0m measures \x1b[4mvisible\x1b[24m columns, \
                      keeps \x1b]8;;https://example.com\x07hyperlinks\x1b]8;;\x07 whole and \
                      never splits a word like supercalifragilisticexpialidocious in half";

fn escapes(input: &str) -> Vec<String> {
    scan(input)
        .filter_map(|run| match run {
            TextRun::Escape { raw, .. } => Some(raw.to_string()),
            TextRun::Literal(_) => None,
        })
        .collect()
}

#[test]
fn lines_fit_unless_a_single_word_is_wider() {
    for max in 1..=40 {
        let config = WrapConfig::new(max).unwrap();
        for line in wrap_lines(STYLED, &config) {
            let visible = strip_escape_sequences(&line);
            assert!(
                width_default(&line) <= max || !visible.contains(' '),
                "width {max}: {visible:?} overflows"
            );
        }
    }
}

#[test]
fn escapes_survive_in_order() {
    let expected = escapes(STYLED);
    for max in [1, 5, 12, 30, 200] {
        let config = WrapConfig::new(max).unwrap();
        let joined = wrap_lines(STYLED, &config).concat();
        assert_eq!(escapes(&joined), expected, "width {max}");
    }
}

#[test]
fn words_are_preserved() {
    let expected: Vec<String> = strip_escape_sequences(STYLED)
        .split_whitespace()
        .map(str::to_string)
        .collect();
    for max in [1, 7, 16, 33] {
        let config = WrapConfig::new(max).unwrap();
        let words: Vec<String> = wrap_lines(STYLED, &config)
            .iter()
            .flat_map(|line| {
                strip_escape_sequences(line)
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        assert_eq!(words, expected, "width {max}");
    }
}

#[test]
fn long_word_stays_on_its_own_line() {
    let config = WrapConfig::new(10).unwrap();
    let lines = wrap_lines(STYLED, &config);
    assert!(lines
        .iter()
        .any(|line| line == "supercalifragilisticexpialidocious"));
}

#[test]
fn newlines_are_hard_breaks() {
    let config = WrapConfig::new(80).unwrap();
    assert_eq!(
        wrap_lines("first\n\nthird", &config),
        vec!["first", "", "third"]
    );
}
