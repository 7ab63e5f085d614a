//! Spelling helpers for generational labels

/// English ordinal of a positive number ("1st", "2nd", "3rd", "11th", "22nd")
///
/// # Examples
///
/// ```
/// use kinship_domain::ordinal::ordinal;
///
/// assert_eq!(ordinal(2), "2nd");
/// assert_eq!(ordinal(13), "13th");
/// ```
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Cousin removal phrase ("once removed", "twice removed", "3 times removed")
///
/// Returns `None` when `removed` is zero.
pub fn removal(removed: u32) -> Option<String> {
    match removed {
        0 => None,
        1 => Some("once removed".to_string()),
        2 => Some("twice removed".to_string()),
        n => Some(format!("{} times removed", n)),
    }
}

/// Prefix of "Great-" repetitions ("", "Great-", "Great-Great-", "3x Great-")
pub fn greats(count: u32) -> String {
    match count {
        0 => String::new(),
        1 => "Great-".to_string(),
        2 => "Great-Great-".to_string(),
        n => format!("{}x Great-", n),
    }
}

/// Neutral lineal term for `generations` steps ("Parent", "Grandparent", "Great-Grandparent")
pub fn lineal(generations: u32, parent: &str, grand: &str) -> String {
    match generations {
        0 | 1 => parent.to_string(),
        n => format!("{}{}", greats(n - 2), grand),
    }
}
