/// Compute effective limit with precedence: global flag -> configured default.
///
/// A zero flag value falls back to the default rather than listing nothing.
#[must_use]
pub fn effective_limit(flag: Option<u32>, configured: u32) -> u32 {
    flag.filter(|limit| *limit > 0).unwrap_or(configured)
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn flag_takes_precedence() {
        assert_eq!(effective_limit(Some(5), 50), 5);
    }

    #[test]
    fn configured_used_when_flag_missing() {
        assert_eq!(effective_limit(None, 50), 50);
    }

    #[test]
    fn zero_flag_falls_back() {
        assert_eq!(effective_limit(Some(0), 50), 50);
    }
}
