use serde::{Deserialize, Serialize};

/// Viewer personality labels, in the order the classifier checks them
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PersonalityKind {
    Newcomer,
    Binger,
    Critic,
    Enthusiast,
    Explorer,
    Reviewer,
    MarathonRunner,
    Cinephile,
    BalancedViewer,
}

impl PersonalityKind {
    pub fn label(&self) -> &'static str {
        match self {
            PersonalityKind::Newcomer => "Newcomer",
            PersonalityKind::Binger => "Binger",
            PersonalityKind::Critic => "Critic",
            PersonalityKind::Enthusiast => "Enthusiast",
            PersonalityKind::Explorer => "Explorer",
            PersonalityKind::Reviewer => "Reviewer",
            PersonalityKind::MarathonRunner => "Marathon Runner",
            PersonalityKind::Cinephile => "Cinephile",
            PersonalityKind::BalancedViewer => "Balanced Viewer",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            PersonalityKind::Newcomer => "🌱",
            PersonalityKind::Binger => "📺",
            PersonalityKind::Critic => "🧐",
            PersonalityKind::Enthusiast => "🤩",
            PersonalityKind::Explorer => "🧭",
            PersonalityKind::Reviewer => "✍️",
            PersonalityKind::MarathonRunner => "🏃",
            PersonalityKind::Cinephile => "🎬",
            PersonalityKind::BalancedViewer => "⚖️",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PersonalityKind::Newcomer => "Your watch journey is just getting started.",
            PersonalityKind::Binger => "Once an episode starts, the next one is already queued.",
            PersonalityKind::Critic => "You hold everything you watch to a very high bar.",
            PersonalityKind::Enthusiast => "You find something to love in almost everything you watch.",
            PersonalityKind::Explorer => "No single genre can keep you for long.",
            PersonalityKind::Reviewer => "You rarely finish something without writing about it.",
            PersonalityKind::MarathonRunner => "Your screen time is measured in days, not hours.",
            PersonalityKind::Cinephile => "The big screen story is where your heart is.",
            PersonalityKind::BalancedViewer => "Movies and shows share your attention in equal measure.",
        }
    }

    pub fn profile(&self) -> PersonalityProfile {
        PersonalityProfile {
            kind: *self,
            label: self.label().to_string(),
            emoji: self.emoji().to_string(),
            description: self.description().to_string(),
        }
    }
}

/// Personality label with its display text, as carried by the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonalityProfile {
    pub kind: PersonalityKind,
    pub label: String,
    pub emoji: String,
    pub description: String,
}

impl Default for PersonalityProfile {
    fn default() -> Self {
        PersonalityKind::Newcomer.profile()
    }
}
