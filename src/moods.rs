use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mood {
    pub emoji: &'static str,
    pub label: &'static str,
    pub score: u8,
}

/// Score used for moods outside the catalog.
pub const NEUTRAL_SCORE: u8 = 5;

pub static MOODS: [Mood; 12] = [
    Mood { emoji: "😊", label: "Happy", score: 8 },
    Mood { emoji: "😢", label: "Sad", score: 3 },
    Mood { emoji: "😠", label: "Angry", score: 2 },
    Mood { emoji: "😰", label: "Anxious", score: 4 },
    Mood { emoji: "😴", label: "Tired", score: 5 },
    Mood { emoji: "🤗", label: "Excited", score: 9 },
    Mood { emoji: "😌", label: "Calm", score: 7 },
    Mood { emoji: "🤔", label: "Thoughtful", score: 6 },
    Mood { emoji: "😍", label: "Loved", score: 9 },
    Mood { emoji: "😎", label: "Confident", score: 8 },
    Mood { emoji: "🥺", label: "Vulnerable", score: 4 },
    Mood { emoji: "🤯", label: "Overwhelmed", score: 3 },
];

pub fn lookup(emoji: &str) -> Option<&'static Mood> {
    MOODS.iter().find(|mood| mood.emoji == emoji)
}

pub fn score(emoji: &str) -> u8 {
    lookup(emoji).map_or(NEUTRAL_SCORE, |mood| mood.score)
}

pub fn label(emoji: &str) -> &'static str {
    lookup(emoji).map_or("Unknown", |mood| mood.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_moods_resolve() {
        assert_eq!(label("😌"), "Calm");
        assert_eq!(score("🤗"), 9);
        assert_eq!(lookup("😠").map(|m| m.score), Some(2));
    }

    #[test]
    fn unknown_mood_is_neutral() {
        assert!(lookup("🦀").is_none());
        assert_eq!(score("🦀"), NEUTRAL_SCORE);
        assert_eq!(label("🦀"), "Unknown");
    }

    #[test]
    fn emojis_are_unique() {
        for (idx, mood) in MOODS.iter().enumerate() {
            assert!(MOODS[idx + 1..].iter().all(|other| other.emoji != mood.emoji));
        }
    }
}
