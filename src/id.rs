//! Identifier format predicates. Each store has its own native id shape; the
//! service checks path ids against the store's format before any lookup and
//! hands the store the canonical spelling.

use regex::Regex;

pub trait IdFormat: Send + Sync {
    /// Short name used in validation messages, e.g. "uuid".
    fn name(&self) -> &str;

    /// The canonical spelling of `raw`, or `None` when it is not a valid id.
    /// Every accepted spelling of one id normalizes to the same string.
    fn normalize(&self, raw: &str) -> Option<String>;

    fn is_valid(&self, raw: &str) -> bool {
        self.normalize(raw).is_some()
    }
}

/// UUIDs in any spelling `uuid` accepts, canonicalized to lowercase hyphenated
/// form, which is how the Postgres and in-memory stores render them.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidFormat;

impl IdFormat for UuidFormat {
    fn name(&self) -> &str {
        "uuid"
    }

    fn normalize(&self, raw: &str) -> Option<String> {
        uuid::Uuid::try_parse(raw).ok().map(|u| u.hyphenated().to_string())
    }
}

/// Ids matching a full-string regular expression.
#[derive(Clone, Debug)]
pub struct PatternFormat {
    name: String,
    pattern: Regex,
    lowercase: bool,
}

impl PatternFormat {
    /// Matching ids are passed through unchanged.
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.into(),
            pattern: Regex::new(&format!("^(?:{})$", pattern))?,
            lowercase: false,
        })
    }

    /// 12-byte ids rendered as 24 hex digits, canonically lowercase.
    pub fn object_id() -> Self {
        Self {
            name: "object id".into(),
            pattern: Regex::new("^[0-9a-fA-F]{24}$").expect("static pattern"),
            lowercase: true,
        }
    }
}

impl IdFormat for PatternFormat {
    fn name(&self) -> &str {
        &self.name
    }

    fn normalize(&self, raw: &str) -> Option<String> {
        if !self.pattern.is_match(raw) {
            return None;
        }
        Some(if self.lowercase {
            raw.to_ascii_lowercase()
        } else {
            raw.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_format() {
        let f = UuidFormat;
        assert!(f.is_valid("67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(f.is_valid("67e5504410b1426f9247bb680e5fe0c8"));
        assert!(!f.is_valid("not-a-valid-id"));
        assert!(!f.is_valid(""));
    }

    #[test]
    fn uuid_spellings_share_one_canonical_form() {
        let f = UuidFormat;
        let canonical = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        for raw in [
            canonical,
            "67E55044-10B1-426F-9247-BB680E5FE0C8",
            "67e5504410b1426f9247bb680e5fe0c8",
            "67E5504410B1426F9247BB680E5FE0C8",
        ] {
            assert_eq!(f.normalize(raw).as_deref(), Some(canonical), "{raw}");
        }
        assert_eq!(f.normalize("not-a-valid-id"), None);
    }

    #[test]
    fn object_id_format() {
        let f = PatternFormat::object_id();
        assert!(f.is_valid("507f1f77bcf86cd799439011"));
        assert!(!f.is_valid("507f1f77bcf86cd79943901"));
        assert!(!f.is_valid("507f1f77bcf86cd79943901z"));
        assert!(!f.is_valid("x507f1f77bcf86cd799439011"));
        assert_eq!(
            f.normalize("507F1F77BCF86CD799439011").as_deref(),
            Some("507f1f77bcf86cd799439011")
        );
    }

    #[test]
    fn custom_pattern_is_anchored_and_verbatim() {
        let f = PatternFormat::new("code", "[A-Za-z0-9]+").unwrap();
        assert_eq!(f.normalize("Ab12").as_deref(), Some("Ab12"));
        assert!(!f.is_valid("Ab-12"));
        assert_eq!(f.name(), "code");
    }
}
