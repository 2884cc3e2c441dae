//! Email value helpers shared by the roster and the suggestion box.

use shared::error::IntakeError;

/// Trims `raw` and checks it has a simple `local@domain.tld` shape.
pub fn validate_email(raw: &str) -> Result<String, IntakeError> {
    let email = raw.trim();
    let invalid = || IntakeError::InvalidEmail {
        email: email.to_string(),
    };

    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return Err(invalid());
    };
    if host.is_empty() || tld.is_empty() || host.starts_with('.') {
        return Err(invalid());
    }

    Ok(email.to_string())
}

/// "john.doe@example.com" -> "John Doe".
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    local
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn same_email(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Case-insensitive substring filter over `directory`, in directory order.
/// Blank input yields nothing rather than the whole directory.
pub fn suggest_emails<S: AsRef<str>>(partial: &str, directory: &[S]) -> Vec<String> {
    if partial.is_empty() {
        return Vec::new();
    }
    let needle = partial.to_lowercase();
    directory
        .iter()
        .map(AsRef::as_ref)
        .filter(|email| email.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "tests/email_tests.rs"]
mod tests;
