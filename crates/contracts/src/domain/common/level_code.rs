use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Roman grade I–X with an optional reference letter glued to it ("IIIE").
/// Longer numerals come first so that "VII" is never read as "VI" + "I".
static ROMAN_GRADE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(VIII|VII|III|II|IX|IV|VI|V|I|X)([A-I])?$").expect("valid roman grade regex")
});

/// Numeric grade 1–10 with an optional reference letter ("3", "10B").
static NUMERIC_GRADE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(10|[1-9])([A-I])?$").expect("valid numeric grade regex"));

/// Result of parsing the raw `nivel_codigo` of an employee.
///
/// Shapes are tried by the number of `-`-delimited parts:
///
/// | input          | shape               | code       | grade | reference |
/// |----------------|---------------------|------------|-------|-----------|
/// | `TEC58`        | `OnePart`           | `TEC58`    | -     | -         |
/// | `TEC58-IIIE`   | `TwoPartGraded`     | `TEC58`    | `III` | `E`       |
/// | `ACT-30`       | `TwoPartStructural` | `ACT-30`   | -     | -         |
/// | `TEC58-III-E`  | `ThreePart`         | `TEC58`    | `III` | `E`       |
/// | `-III-E`       | `ThreePart`         | empty      | `III` | `E`       |
/// | blank          | `Unparsed`          | raw string | -     | -         |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ParsedCode {
    /// Blank input
    Unparsed { code: String },
    /// No hyphen: the whole string is the code
    OnePart { code: String },
    /// `A-B` where `B` is not a grade: `A-B` is the code
    TwoPartStructural { code: String },
    /// `A-B` where `B` is a grade, optionally followed by a reference letter
    TwoPartGraded {
        code: String,
        grade: String,
        reference: Option<String>,
    },
    /// `A-B-C[-...]`: code, grade and reference taken positionally
    ThreePart {
        code: String,
        grade: String,
        reference: String,
    },
}

impl ParsedCode {
    /// Parse a raw level code. Never fails: blank input degrades to `Unparsed`.
    /// The string is split as given, surrounding whitespace included.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::unparsed(raw);
        }

        let parts: Vec<&str> = raw.split('-').collect();
        match parts.as_slice() {
            [code] => Self::OnePart {
                code: (*code).to_string(),
            },
            [code, tail] => match split_grade(tail) {
                Some((grade, reference)) => Self::TwoPartGraded {
                    code: (*code).to_string(),
                    grade,
                    reference,
                },
                None => Self::TwoPartStructural {
                    code: raw.to_string(),
                },
            },
            // Positional, no check on the shape of any segment
            [code, grade, reference, ..] => Self::ThreePart {
                code: (*code).to_string(),
                grade: (*grade).to_string(),
                reference: (*reference).to_string(),
            },
            [] => Self::unparsed(raw),
        }
    }

    fn unparsed(raw: &str) -> Self {
        Self::Unparsed {
            code: raw.to_string(),
        }
    }

    /// Code including its alphabetic prefix ("TEC58", "ACT-30")
    pub fn code(&self) -> &str {
        match self {
            Self::Unparsed { code }
            | Self::OnePart { code }
            | Self::TwoPartStructural { code }
            | Self::TwoPartGraded { code, .. }
            | Self::ThreePart { code, .. } => code,
        }
    }

    /// Code with the leading uppercase prefix removed ("TEC58" -> "58")
    pub fn base_code(&self) -> &str {
        strip_prefix(self.code())
    }

    pub fn grade(&self) -> Option<&str> {
        match self {
            Self::TwoPartGraded { grade, .. } | Self::ThreePart { grade, .. } => Some(grade),
            _ => None,
        }
    }

    pub fn reference(&self) -> Option<&str> {
        match self {
            Self::TwoPartGraded { reference, .. } => reference.as_deref(),
            Self::ThreePart { reference, .. } => Some(reference),
            _ => None,
        }
    }

    /// True when both grade and reference are known, i.e. a grid cell can be addressed
    pub fn addresses_cell(&self) -> bool {
        self.grade().is_some() && self.reference().is_some()
    }
}

/// Removes the leading run of ASCII uppercase letters from a code.
pub fn strip_prefix(code: &str) -> &str {
    code.trim_start_matches(|c: char| c.is_ascii_uppercase())
}

/// Leading uppercase prefix of a code ("TEC58" -> "TEC")
pub fn code_prefix(code: &str) -> &str {
    &code[..code.len() - strip_prefix(code).len()]
}

fn split_grade(segment: &str) -> Option<(String, Option<String>)> {
    let caps = ROMAN_GRADE
        .captures(segment)
        .or_else(|| NUMERIC_GRADE.captures(segment))?;
    let grade = caps.get(1)?.as_str().to_string();
    let reference = caps.get(2).map(|m| m.as_str().to_string());
    Some((grade, reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_parts_are_positional() {
        for raw in ["TEC58-III-E", "SEG16-I-A", "58-X-A1", "20-B-I-A"] {
            let parts: Vec<&str> = raw.split('-').collect();
            let parsed = ParsedCode::parse(raw);
            assert_eq!(parsed.code(), parts[0]);
            assert_eq!(parsed.grade(), Some(parts[1]));
            assert_eq!(parsed.reference(), Some(parts[2]));
        }
    }

    #[test]
    fn test_two_parts_with_roman_grade() {
        let parsed = ParsedCode::parse("TEC58-IIIE");
        assert_eq!(parsed.code(), "TEC58");
        assert_eq!(parsed.grade(), Some("III"));
        assert_eq!(parsed.reference(), Some("E"));
        assert!(parsed.addresses_cell());

        let parsed = ParsedCode::parse("ADM10-VII");
        assert_eq!(parsed.grade(), Some("VII"));
        assert_eq!(parsed.reference(), None);
        assert!(!parsed.addresses_cell());

        let parsed = ParsedCode::parse("SAU3-VIA");
        assert_eq!(parsed.grade(), Some("VI"));
        assert_eq!(parsed.reference(), Some("A"));
    }

    #[test]
    fn test_two_parts_with_numeric_grade() {
        let parsed = ParsedCode::parse("SOP4-10B");
        assert_eq!(parsed.code(), "SOP4");
        assert_eq!(parsed.grade(), Some("10"));
        assert_eq!(parsed.reference(), Some("B"));

        let parsed = ParsedCode::parse("SOP4-3");
        assert_eq!(parsed.grade(), Some("3"));
        assert_eq!(parsed.reference(), None);
    }

    #[test]
    fn test_two_parts_structural_suffix() {
        let parsed = ParsedCode::parse("ACT-30");
        assert!(matches!(parsed, ParsedCode::TwoPartStructural { .. }));
        assert_eq!(parsed.code(), "ACT-30");
        assert_eq!(parsed.grade(), None);
        assert_eq!(parsed.reference(), None);

        // 11 is outside the numeric grade range, J is not a reference letter
        assert_eq!(ParsedCode::parse("ACT-11").code(), "ACT-11");
        assert_eq!(ParsedCode::parse("ACT-IIJ").code(), "ACT-IIJ");
    }

    #[test]
    fn test_one_part() {
        let parsed = ParsedCode::parse("CC");
        assert_eq!(parsed, ParsedCode::OnePart { code: "CC".into() });
        assert_eq!(parsed.grade(), None);
    }

    #[test]
    fn test_unparsed_keeps_original() {
        for raw in ["", "   "] {
            let parsed = ParsedCode::parse(raw);
            assert!(matches!(parsed, ParsedCode::Unparsed { .. }), "{raw:?}");
            assert_eq!(parsed.code(), raw);
            assert_eq!(parsed.grade(), None);
            assert_eq!(parsed.reference(), None);
        }
    }

    #[test]
    fn test_empty_segments_are_taken_as_is() {
        let parsed = ParsedCode::parse("-III-E");
        assert_eq!(parsed.code(), "");
        assert_eq!(parsed.grade(), Some("III"));
        assert_eq!(parsed.reference(), Some("E"));

        let parsed = ParsedCode::parse("TEC58--E");
        assert_eq!(parsed.code(), "TEC58");
        assert_eq!(parsed.grade(), Some(""));
        assert_eq!(parsed.reference(), Some("E"));

        // Nothing after the hyphen is not a grade
        assert_eq!(ParsedCode::parse("TEC58-").code(), "TEC58-");
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let parsed = ParsedCode::parse(" TEC58-III-E");
        assert_eq!(parsed.code(), " TEC58");
        assert_eq!(parsed.grade(), Some("III"));

        assert_eq!(ParsedCode::parse("CC ").code(), "CC ");
    }

    #[test]
    fn test_base_code_strips_prefix() {
        assert_eq!(ParsedCode::parse("TEC58-III-E").base_code(), "58");
        assert_eq!(ParsedCode::parse("TEP59A-I-A").base_code(), "59A");
        assert_eq!(ParsedCode::parse("58-I-A").base_code(), "58");
        assert_eq!(code_prefix("SEG16"), "SEG");
        assert_eq!(code_prefix("16"), "");
    }
}
