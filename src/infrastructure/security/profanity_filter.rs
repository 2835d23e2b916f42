use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

lazy_static! {
    static ref WORD_REGEX: Regex = Regex::new(r"[A-Za-z0-9']+").unwrap();
    static ref DEFAULT_FILTER: ProfanityFilter = ProfanityFilter::default();
}

/// Direct curse words only. Variants, leetspeak and substrings are not
/// expanded.
const BLOCKLIST: &[&str] = &[
    "arse", "arsehole", "ass", "asshole", "assholes", "bastard", "bastards", "bitch",
    "bitches", "bitching", "bollocks", "bullshit", "bugger", "cock", "cocksucker", "crap",
    "cunt", "cunts", "damn", "dammit", "dick", "dickhead", "dipshit", "douche", "douchebag",
    "fag", "faggot", "fuck", "fucked", "fucker", "fuckers", "fuckin", "fucking", "fucks",
    "goddamn", "horseshit", "jackass", "jerkoff", "motherfucker", "motherfucking", "nigga",
    "nigger", "piss", "pissed", "prick", "pussy", "retard", "shit", "shits", "shitty",
    "slut", "twat", "wank", "wanker", "whore",
];

/// Programming vocabulary that broad blocklists tend to catch.
pub const TECHNICAL_TERMS: &[&str] = &["fork", "master", "slave", "kill", "abort", "execute"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfanityCheck {
    pub is_profane: bool,
    pub cleaned_text: String,
}

#[derive(Debug, Clone)]
pub struct ProfanityFilter {
    words: HashSet<String>,
}

impl Default for ProfanityFilter {
    fn default() -> Self {
        let mut filter = Self::new(BLOCKLIST.iter().copied());
        filter.remove_words(TECHNICAL_TERMS.iter().copied());
        filter
    }
}

impl ProfanityFilter {
    pub fn new<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut filter = Self {
            words: HashSet::new(),
        };
        filter.add_words(words);
        filter
    }

    pub fn add_words<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        self.words
            .extend(words.into_iter().map(|w| w.trim().to_lowercase()).filter(|w| !w.is_empty()));
    }

    pub fn remove_words<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        for word in words {
            self.words.remove(&word.trim().to_lowercase());
        }
    }

    fn is_blocked(&self, token: &str) -> bool {
        let lowered = token.to_lowercase();
        self.words.contains(lowered.trim_matches('\''))
    }

    pub fn has_profanity(&self, text: &str) -> bool {
        WORD_REGEX
            .find_iter(text)
            .any(|m| self.is_blocked(m.as_str()))
    }

    /// Flags the text and masks every blocked word with asterisks of the
    /// same length.
    pub fn check_profanity(&self, text: &str) -> ProfanityCheck {
        let mut is_profane = false;
        let cleaned_text = WORD_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                let token = &caps[0];
                if self.is_blocked(token) {
                    is_profane = true;
                    "*".repeat(token.chars().count())
                } else {
                    token.to_string()
                }
            })
            .into_owned();

        ProfanityCheck {
            is_profane,
            cleaned_text,
        }
    }
}

/// Checks against the shared default filter.
pub fn check_profanity(text: &str) -> ProfanityCheck {
    DEFAULT_FILTER.check_profanity(text)
}

pub fn has_profanity(text: &str) -> bool {
    DEFAULT_FILTER.has_profanity(text)
}
