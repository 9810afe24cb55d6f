pub const NO_EVIDENCE: &str = "근거 없음";

/// Picks the justification shown for a verdict. Never returns an empty string.
pub fn resolve(evidence: Option<&str>, reason: Option<&str>) -> String {
    if let Some(evidence) = evidence.filter(|text| !text.trim().is_empty()) {
        return evidence.to_string();
    }

    match reason.filter(|text| !text.is_empty()) {
        Some(reason) => reason.to_string(),
        None => NO_EVIDENCE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evidence_wins_when_present() {
        assert_eq!(resolve(Some("E"), Some("R")), "E");
        assert_eq!(resolve(Some("  E  "), None), "  E  ");
    }

    #[test]
    fn blank_evidence_falls_back_to_reason() {
        assert_eq!(resolve(Some(""), Some("R")), "R");
        assert_eq!(resolve(Some("  "), Some("R")), "R");
        assert_eq!(resolve(Some("\n\t"), Some("R")), "R");
        assert_eq!(resolve(None, Some("R")), "R");
    }

    #[test]
    fn missing_everything_uses_fixed_fallback() {
        assert_eq!(resolve(None, None), NO_EVIDENCE);
        assert_eq!(resolve(Some(" "), Some("")), NO_EVIDENCE);
        assert_eq!(resolve(None, Some("")), NO_EVIDENCE);
    }

    #[test]
    fn never_returns_empty() {
        let samples = [None, Some(""), Some(" "), Some("x")];
        for evidence in samples {
            for reason in samples {
                assert!(
                    !resolve(evidence, reason).is_empty(),
                    "resolve({evidence:?}, {reason:?}) was empty"
                );
            }
        }
    }
}
