use serde::{Deserialize, Serialize};

use crate::categories::{ACCESSORIES, CATEGORY_ORDER};

/// A system the customer asked to have installed.
///
/// Each variant maps to a fixed set of quote categories; the mapping drives
/// which parts of the catalog a quote request is allowed to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredSystem {
    Display,
    Projection,
    Audio,
    VideoConferencing,
    Control,
    Streaming,
    SignalDistribution,
}

impl RequiredSystem {
    /// The quote categories this system pulls in.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            Self::Display => &["Displays", "Mounts & Racks", "Cabling"],
            Self::Projection => &["Projection", "Mounts & Racks", "Cabling"],
            Self::Audio => &["Audio", "Cabling"],
            Self::VideoConferencing => &["Video Conferencing", "Networking"],
            Self::Control => &["Control"],
            Self::Streaming => &["Streaming & Recording", "Networking"],
            Self::SignalDistribution => &["Switching", "Cabling"],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Display => "flat-panel display",
            Self::Projection => "projection",
            Self::Audio => "audio reinforcement",
            Self::VideoConferencing => "video conferencing",
            Self::Control => "room control",
            Self::Streaming => "streaming and recording",
            Self::SignalDistribution => "signal distribution",
        }
    }
}

/// Pricing tier requested by the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Economy,
    Standard,
    Premium,
}

impl BudgetTier {
    pub fn label(self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }
}

/// The customer's answers to the requirement questionnaire.
///
/// Every field except `required_systems` is optional; absent answers are
/// simply omitted from the formatted requirement text rather than validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementAnswers {
    pub required_systems: Vec<RequiredSystem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_dimensions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seating_capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewing_distance_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_construction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_tier: Option<BudgetTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_equipment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RequirementAnswers {
    /// Categories a quote for these answers may reference: every category the
    /// requested systems map to, in precedence order, with Accessories always
    /// included.
    pub fn allowed_categories(&self) -> Vec<&'static str> {
        CATEGORY_ORDER
            .iter()
            .copied()
            .filter(|category| {
                *category == ACCESSORIES
                    || self
                        .required_systems
                        .iter()
                        .any(|system| system.categories().contains(category))
            })
            .collect()
    }

    /// Format the answers as `key: value` lines for embedding into a prompt.
    /// Empty and absent answers are left out.
    pub fn requirements_text(&self) -> String {
        let mut lines = Vec::new();

        if !self.required_systems.is_empty() {
            let systems: Vec<&str> = self.required_systems.iter().map(|s| s.label()).collect();
            lines.push(format!("Required systems: {}", systems.join(", ")));
        }
        push_text(&mut lines, "Room type", self.room_type.as_deref());
        push_text(&mut lines, "Room dimensions", self.room_dimensions.as_deref());
        if let Some(capacity) = self.seating_capacity {
            lines.push(format!("Seating capacity: {capacity}"));
        }
        if let Some(distance) = self.viewing_distance_m {
            lines.push(format!("Farthest viewing distance: {distance} m"));
        }
        push_text(&mut lines, "Wall construction", self.wall_construction.as_deref());
        if let Some(tier) = self.budget_tier {
            lines.push(format!("Budget tier: {}", tier.label()));
        }
        push_text(&mut lines, "Existing equipment", self.existing_equipment.as_deref());
        push_text(&mut lines, "Additional notes", self.notes.as_deref());

        lines.join("\n")
    }
}

fn push_text(lines: &mut Vec<String>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            lines.push(format!("{key}: {trimmed}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessories_always_allowed() {
        let answers = RequirementAnswers::default();
        assert_eq!(answers.allowed_categories(), vec![ACCESSORIES]);
    }

    #[test]
    fn allowed_categories_follow_precedence_order() {
        let answers = RequirementAnswers {
            required_systems: vec![RequiredSystem::Audio, RequiredSystem::Display],
            ..Default::default()
        };
        // Display maps in before Audio despite the request order.
        assert_eq!(
            answers.allowed_categories(),
            vec!["Displays", "Audio", "Mounts & Racks", "Cabling", ACCESSORIES]
        );
    }

    #[test]
    fn overlapping_systems_dedupe_categories() {
        let answers = RequirementAnswers {
            required_systems: vec![
                RequiredSystem::Display,
                RequiredSystem::Projection,
                RequiredSystem::SignalDistribution,
            ],
            ..Default::default()
        };
        let allowed = answers.allowed_categories();
        assert_eq!(
            allowed.iter().filter(|c| **c == "Cabling").count(),
            1,
            "shared categories must appear once"
        );
    }

    #[test]
    fn requirements_text_omits_absent_and_blank_answers() {
        let answers = RequirementAnswers {
            required_systems: vec![RequiredSystem::VideoConferencing],
            room_type: Some("Boardroom".into()),
            room_dimensions: None,
            wall_construction: Some("   ".into()),
            seating_capacity: Some(12),
            ..Default::default()
        };
        let text = answers.requirements_text();
        assert!(text.contains("Required systems: video conferencing"));
        assert!(text.contains("Room type: Boardroom"));
        assert!(text.contains("Seating capacity: 12"));
        assert!(!text.contains("Room dimensions"));
        assert!(!text.contains("Wall construction"));
    }
}
