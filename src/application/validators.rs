use validator::ValidateEmail;

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// Names must be non-empty after trimming and fit the column.
pub fn is_valid_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && name.len() <= 120
}

/// Calendar month number as used in payment composite keys.
pub fn is_valid_month(month: i32) -> bool {
    (1..=12).contains(&month)
}
