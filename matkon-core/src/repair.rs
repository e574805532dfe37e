//! Best-effort cleanup of near-JSON model output.
//!
//! The generative backend keeps producing JSON broken in the same few ways:
//! markdown fences around the payload, smart punctuation, zero-width
//! characters, trailing commas, missing whitespace after separators, and bare
//! `"` characters inside Hebrew string values (most often the מ"ל and ק"ג
//! unit notations). [`repair_json`] normalizes all of these in a fixed order.
//! It never fails and it is a semantic no-op on output that is already valid.

use std::sync::OnceLock;

use regex::Regex;

struct Patterns {
    fences: Regex,
    ml_unit: Regex,
    kg_unit: Regex,
    hebrew_split: Regex,
    trailing_comma: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        fences: Regex::new("```(?:json)?").expect("static pattern"),
        ml_unit: Regex::new(r#""מ"ל""#).expect("static pattern"),
        kg_unit: Regex::new(r#""ק"ג""#).expect("static pattern"),
        hebrew_split: Regex::new(r#""([א-ת])"([א-ת])""#).expect("static pattern"),
        trailing_comma: Regex::new(r",(\s*[}\]])").expect("static pattern"),
    })
}

/// Repair near-JSON text into something `serde_json` will accept.
///
/// Steps, in order:
/// 1. strip markdown code fences;
/// 2. escape the quote inside the quoted מ"ל and ק"ג unit values;
/// 3. merge a stray quote splitting a two-letter Hebrew value, `"ק"ל"`
///    becomes `"קל"` (the real units from step 2 no longer match, their
///    quote follows a backslash);
/// 4. normalize smart quotes to ASCII, drop zero-width and control
///    characters, collapse non-breaking spaces;
/// 5. trim and drop trailing commas before `}` or `]`;
/// 6. re-space `:` and `,` separators outside string values, leaving
///    `://` URLs alone.
pub fn repair_json(raw: &str) -> String {
    let p = patterns();
    let text = p.fences.replace_all(raw, "");
    let text = p.ml_unit.replace_all(&text, r#""מ\"ל""#);
    let text = p.kg_unit.replace_all(&text, r#""ק\"ג""#);
    let text = p.hebrew_split.replace_all(&text, r#""${1}${2}""#);
    let text = normalize_characters(&text);
    let text = text.trim();
    let text = p.trailing_comma.replace_all(text, "${1}");
    respace_separators(&text)
}

/// Smart punctuation to ASCII, invisible and control characters out.
/// Tab, LF and CR survive; everything here is position-independent so a
/// single pass matches the original sequence of global replacements.
fn normalize_characters(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{00A0}' => out.push(' '),
            '\u{200B}'..='\u{200D}'
            | '\u{FEFF}'
            | '\u{2060}'
            | '\u{00AD}'
            | '\u{2028}'
            | '\u{2029}' => {}
            '\u{0000}'..='\u{0008}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000E}'..='\u{001F}'
            | '\u{007F}'..='\u{009F}' => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Rewrite `:` and `,` outside string values to `": "` / `", "`.
///
/// Tracks string boundaries on unescaped quotes so separators inside values
/// (times, notes) are untouched, and skips `:` followed by `/` so URLs keep
/// their `://`. A `:` already followed by whitespace has that whitespace
/// collapsed into the single canonical space.
fn respace_separators(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 16);
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let prev = if i > 0 { Some(chars[i - 1]) } else { None };
        let next = chars.get(i + 1).copied();

        if ch == '"' && !escaped {
            in_string = !in_string;
        }
        if !in_string {
            if ch == ':' && next != Some('/') && prev != Some(':') {
                out.push_str(": ");
                while matches!(chars.get(i + 1), Some(c) if c.is_whitespace()) {
                    i += 1;
                }
                i += 1;
                continue;
            }
            if ch == ',' && !matches!(next, Some(c) if c.is_whitespace()) {
                out.push_str(", ");
                i += 1;
                continue;
            }
        }

        out.push(ch);
        escaped = ch == '\\' && !escaped;
        i += 1;
    }
    out
}
