//! Records for the home and about pages.

use serde::{Deserialize, Serialize};

use crate::types::{FoodCategoryId, TeamMemberId};

/// A cuisine tile on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodCategory {
    pub id: FoodCategoryId,
    pub name: String,
    pub emoji: String,
    /// CSS modifier for the tile background.
    pub tone: String,
}

/// One step of the "How it works" strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowItWorksStep {
    pub number: u8,
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// A team member on the about page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub name: String,
    pub role: String,
    pub image: String,
    pub description: String,
}
