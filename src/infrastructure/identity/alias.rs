use super::wordlist::WORDS;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use rand::{Rng, rngs::OsRng};

pub const ALIAS_COOKIE_NAME: &str = "comment_alias";

/// Roughly 400 days.
pub const ALIAS_COOKIE_MAX_AGE_SECONDS: i64 = 34_560_000;

/// Draws two words from the OS random source and title-cases them.
///
/// Aliases are display labels, not identifiers. Two browsers may draw the
/// same alias.
pub fn generate_alias() -> String {
    let first = WORDS[OsRng.gen_range(0..WORDS.len())];
    let second = WORDS[OsRng.gen_range(0..WORDS.len())];
    format!("{} {}", title_case(first), title_case(second))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Reads the alias previously issued to this browser, if any.
///
/// The jar percent-decodes cookie values, so the stored alias comes back
/// exactly as it was issued.
pub fn alias_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(ALIAS_COOKIE_NAME)
        .map(|cookie| cookie.value().trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Returns the browser's alias, issuing and persisting a new one when the
/// cookie is missing or empty.
pub fn get_or_create_alias(jar: CookieJar, secure: bool) -> (CookieJar, String) {
    if let Some(existing) = alias_from_jar(&jar) {
        return (jar, existing);
    }

    let alias = generate_alias();
    let cookie = Cookie::build((ALIAS_COOKIE_NAME, alias.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::seconds(ALIAS_COOKIE_MAX_AGE_SECONDS));

    (jar.add(cookie), alias)
}
