//! Domain orderings for grades, references and level codes.
//!
//! All comparators are keyed, so they are total orders and safe for `sort_by`.

use std::cmp::Ordering;

const ROMAN_GRADES: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Integer value of a roman grade I–X
pub fn roman_value(grade: &str) -> Option<u32> {
    ROMAN_GRADES
        .iter()
        .position(|r| *r == grade)
        .map(|idx| idx as u32 + 1)
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum GradeKey<'a> {
    Numeric(u64),
    Roman(u32),
    Text(&'a str),
}

fn grade_key(grade: &str) -> GradeKey<'_> {
    if !grade.is_empty() && grade.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = grade.parse::<u64>() {
            return GradeKey::Numeric(n);
        }
    }
    match roman_value(grade) {
        Some(v) => GradeKey::Roman(v),
        None => GradeKey::Text(grade),
    }
}

/// Numeric labels first (by value), then roman numerals (by value), then the rest lexicographically.
pub fn compare_grades(a: &str, b: &str) -> Ordering {
    grade_key(a).cmp(&grade_key(b))
}

/// Single letters first (alphabetically), then by leading letter and trailing number.
pub fn compare_references(a: &str, b: &str) -> Ordering {
    reference_key(a).cmp(&reference_key(b))
}

fn reference_key(reference: &str) -> (bool, Option<char>, u64, &str) {
    let mut chars = reference.chars();
    let first = chars.next();
    let rest = chars.as_str();
    let multi = !rest.is_empty();
    let suffix = rest.parse::<u64>().unwrap_or(0);
    (multi, first, suffix, reference)
}

/// Integer formed by the digits of a code ("20-B" -> 20, "CC" -> 0)
pub fn code_number(code: &str) -> u64 {
    let digits: String = code.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Numeric-aware comparison: digit runs compare by value, everything else by character.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let ln = take_number(&mut left);
                let rn = take_number(&mut right);
                let ord = ln
                    .trim_start_matches('0')
                    .len()
                    .cmp(&rn.trim_start_matches('0').len())
                    .then_with(|| ln.trim_start_matches('0').cmp(rn.trim_start_matches('0')));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(l), Some(r)) => {
                let ord = l.to_lowercase().cmp(r.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut out = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        out.push(c);
        chars.next();
    }
    out
}
