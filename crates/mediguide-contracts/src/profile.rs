//! User profile types.
//!
//! The profile screen is entirely static: an identity header plus a fixed
//! menu. No session or account state exists behind it.

use serde::{Deserialize, Serialize};

/// The signed-in user's static identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl UserProfile {
    /// Uppercase initials derived from the name, for the avatar circle.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// The fixed profile menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileMenuItem {
    Settings,
    History,
    Notifications,
    HelpSupport,
}

impl ProfileMenuItem {
    /// All entries in the order the screen lists them.
    pub const ALL: [ProfileMenuItem; 4] = [
        ProfileMenuItem::Settings,
        ProfileMenuItem::History,
        ProfileMenuItem::Notifications,
        ProfileMenuItem::HelpSupport,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ProfileMenuItem::Settings => "Settings",
            ProfileMenuItem::History => "History",
            ProfileMenuItem::Notifications => "Notifications",
            ProfileMenuItem::HelpSupport => "Help & Support",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            ProfileMenuItem::Settings => "App preferences and account settings",
            ProfileMenuItem::History => "View your symptom check history",
            ProfileMenuItem::Notifications => "Manage your notification preferences",
            ProfileMenuItem::HelpSupport => "FAQs and contact support",
        }
    }
}
