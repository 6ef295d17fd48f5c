//! Per-field validity rules.
//!
//! Every rule is a total function over raw string values. The postal and
//! confirm rules also read the value of the field they depend on.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// The 25 most populous countries, matched literally after trimming.
pub const TOP_COUNTRIES: [&str; 25] = [
    "China",
    "India",
    "United States",
    "Indonesia",
    "Pakistan",
    "Brazil",
    "Nigeria",
    "Bangladesh",
    "Russia",
    "Mexico",
    "Japan",
    "Ethiopia",
    "Philippines",
    "Egypt",
    "Vietnam",
    "DR Congo",
    "Turkey",
    "Iran",
    "Germany",
    "Thailand",
    "United Kingdom",
    "France",
    "Italy",
    "South Africa",
    "Tanzania",
];

/// Minimum password length, in UTF-16 code units.
pub const PASSWORD_MIN_LENGTH: usize = 10;

// HTML living standard "valid e-mail address". Classes are spelled out in
// both cases; `(?i)` would fold non-ASCII letters such as U+212A onto them.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.!#$%&'*+/=?^`{|}~-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*$")
        .expect("email pattern is valid")
});

static POSTAL_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("United States", r"^[0-9]{5}(-[0-9]{4})?$"),
        ("Canada", r"^[A-Za-z][0-9][A-Za-z][ -]?[0-9][A-Za-z][0-9]$"),
        ("United Kingdom", r"^[A-Z]{1,2}[0-9][A-Z0-9]? [0-9][A-Z]{2}$"),
        ("Germany", r"^[0-9]{5}$"),
        ("France", r"^[0-9]{5}$"),
    ]
    .into_iter()
    .map(|(country, pattern)| {
        (
            country,
            Regex::new(pattern).expect("postal pattern is valid"),
        )
    })
    .collect()
});

/// Trim whitespace and byte order marks from both ends, as browsers trim
/// form values.
pub fn trim_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Check an email address against the HTML email pattern.
///
/// The value is not trimmed; surrounding whitespace makes it invalid.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Check that the trimmed value names one of [`TOP_COUNTRIES`].
pub fn is_valid_country(value: &str) -> bool {
    TOP_COUNTRIES.contains(&trim_value(value))
}

/// Look up the postal code pattern registered for a country.
pub fn postal_pattern(country: &str) -> Option<&'static Regex> {
    let country = trim_value(country);
    POSTAL_PATTERNS
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, re)| re)
}

/// Check a postal code against the selected country.
///
/// Invalid whenever the country itself is invalid, and invalid for any
/// country without a registered pattern.
pub fn is_valid_postal(country: &str, postal: &str) -> bool {
    if !is_valid_country(country) {
        return false;
    }
    postal_pattern(country).is_some_and(|re| re.is_match(trim_value(postal)))
}

/// A password requirement that a value can fail to meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PasswordRequirement {
    Length,
    Capital,
    Number,
}

impl PasswordRequirement {
    /// Human-readable description used in the error message.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Length => "at least 10 characters",
            Self::Capital => "one capital letter",
            Self::Number => "one number",
        }
    }
}

impl fmt::Display for PasswordRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Collect the requirements a password does not meet, in display order.
///
/// An empty result means the password is valid.
pub fn password_missing(value: &str) -> Vec<PasswordRequirement> {
    let mut missing = Vec::new();
    if value.encode_utf16().count() < PASSWORD_MIN_LENGTH {
        missing.push(PasswordRequirement::Length);
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        missing.push(PasswordRequirement::Capital);
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        missing.push(PasswordRequirement::Number);
    }
    missing
}

/// Build the password error message, or an empty string when nothing is missing.
pub fn password_message(value: &str) -> String {
    let missing = password_missing(value);
    if missing.is_empty() {
        return String::new();
    }
    let parts: Vec<&str> = missing.iter().map(|r| r.describe()).collect();
    format!("Password must contain {}.", parts.join(", "))
}

/// Check that the confirmation is non-empty and equals the password exactly.
pub fn is_valid_confirm(confirm: &str, password: &str) -> bool {
    !confirm.is_empty() && confirm == password
}
