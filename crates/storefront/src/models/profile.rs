//! Profile edits kept in the session.

use grubzap_core::Email;
use grubzap_core::catalog::UserProfile;
use serde::{Deserialize, Serialize};

/// Contact details the visitor changed on the settings tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetails {
    pub name: String,
    pub email: Email,
    pub phone: String,
}

impl ProfileDetails {
    /// Overlay the edits on a profile.
    #[must_use]
    pub fn apply_to(&self, mut profile: UserProfile) -> UserProfile {
        profile.name.clone_from(&self.name);
        profile.email = self.email.clone();
        profile.phone.clone_from(&self.phone);
        profile
    }
}
