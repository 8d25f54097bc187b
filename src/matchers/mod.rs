// Pairwise compatibility checks between two categorical attributes.
//
// Matchers never fail. Input they do not recognise on either side is ruled
// appropriate, and comparisons are substring-tolerant so that "dark slim
// jeans" still matches a rule written for "jeans".

pub mod accessory;
pub mod footwear;
pub mod garment;

/// Outcome of a compatibility check. `reason` is empty iff `appropriate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub appropriate: bool,
    pub reason: String,
}

impl Verdict {
    pub fn ok() -> Self {
        Verdict {
            appropriate: true,
            reason: String::new(),
        }
    }

    pub fn flag(reason: impl Into<String>) -> Self {
        Verdict {
            appropriate: false,
            reason: reason.into(),
        }
    }

    pub fn is_flagged(&self) -> bool {
        !self.appropriate
    }
}

/// True when any of `needles` occurs inside `haystack`.
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_constructors() {
        let ok = Verdict::ok();
        assert!(ok.appropriate);
        assert!(ok.reason.is_empty());
        assert!(!ok.is_flagged());

        let flagged = Verdict::flag("too loud");
        assert!(flagged.is_flagged());
        assert_eq!(flagged.reason, "too loud");
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("dark slim jeans", &["jeans", "chinos"]));
        assert!(!contains_any("chinos", &["jeans"]));
        assert!(!contains_any("anything", &[]));
    }
}
