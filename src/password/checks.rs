//! Named character-class checks.

/// Minimum length for the `length` check.
pub const MIN_LENGTH: usize = 6;

/// Characters accepted by the `special` check.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// A named predicate over a candidate password.
#[derive(Debug, Clone, Copy)]
pub struct Check {
    pub name: &'static str,
    pub predicate: fn(&str) -> bool,
}

impl Check {
    pub const fn new(name: &'static str, predicate: fn(&str) -> bool) -> Self {
        Self { name, predicate }
    }

    pub fn passes(&self, candidate: &str) -> bool {
        (self.predicate)(candidate)
    }
}

/// Ordered list of checks. The default set has five entries.
#[derive(Debug, Clone)]
pub struct CheckSet {
    checks: Vec<Check>,
}

impl CheckSet {
    pub fn new(checks: Vec<Check>) -> Self {
        Self { checks }
    }

    /// Appends a check, replacing any existing check with the same name
    /// in place.
    pub fn with(mut self, check: Check) -> Self {
        match self.checks.iter_mut().find(|c| c.name == check.name) {
            Some(existing) => *existing = check,
            None => self.checks.push(check),
        }
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.checks.retain(|c| c.name != name);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for CheckSet {
    fn default() -> Self {
        Self::new(vec![
            Check::new("length", has_min_length),
            Check::new("uppercase", has_uppercase),
            Check::new("lowercase", has_lowercase),
            Check::new("number", has_digit),
            Check::new("special", has_special),
        ])
    }
}

fn has_min_length(pwd: &str) -> bool {
    pwd.chars().count() >= MIN_LENGTH
}

fn has_uppercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_digit())
}

fn has_special(pwd: &str) -> bool {
    pwd.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let names: Vec<_> = CheckSet::default().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["length", "uppercase", "lowercase", "number", "special"]);
    }

    #[test]
    fn test_length_boundary() {
        assert!(!has_min_length("abcde"));
        assert!(has_min_length("abcdef"));
        // counted in characters, not bytes
        assert!(!has_min_length("ééééé"));
    }

    #[test]
    fn test_character_classes_are_ascii() {
        assert!(!has_uppercase("É"));
        assert!(!has_uppercase("École"));
        assert!(has_uppercase("Ecole"));
        assert!(!has_lowercase("ÉÇ"));
        assert!(has_lowercase("ÉCOLe"));
    }

    #[test]
    fn test_special_set_is_fixed() {
        assert!(has_special("a!"));
        assert!(has_special("\"quoted\""));
        assert!(!has_special("under_score"));
        assert!(!has_special("dash-and+plus"));
    }

    #[test]
    fn test_with_replaces_same_name() {
        fn at_least_ten(pwd: &str) -> bool {
            pwd.chars().count() >= 10
        }

        let set = CheckSet::default().with(Check::new("length", at_least_ten));
        assert_eq!(set.len(), 5);
        let length = set.iter().next().unwrap();
        assert!(!length.passes("abcdef"));
    }

    #[test]
    fn test_without() {
        let set = CheckSet::default().without("special");
        assert_eq!(set.len(), 4);
        assert!(set.iter().all(|c| c.name != "special"));
    }
}
