//! High-level business categories used to partition the review corpus.

use serde::{Deserialize, Serialize};

/// Coarse business category. Declaration order is the processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HighLevelCategory {
    #[serde(rename = "Active Life")]
    ActiveLife,
    #[serde(rename = "Arts & Entertainment")]
    ArtsEntertainment,
    #[serde(rename = "Automotive")]
    Automotive,
    #[serde(rename = "Beauty & Spas")]
    BeautySpas,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Event Planning & Services")]
    EventPlanningServices,
    #[serde(rename = "Financial Services")]
    FinancialServices,
    #[serde(rename = "Food")]
    Food,
    #[serde(rename = "Health & Medical")]
    HealthMedical,
    #[serde(rename = "Home Services")]
    HomeServices,
    #[serde(rename = "Hotels & Travel")]
    HotelsTravel,
    #[serde(rename = "Local Flavor")]
    LocalFlavor,
    #[serde(rename = "Local Services")]
    LocalServices,
    #[serde(rename = "Mass Media")]
    MassMedia,
    #[serde(rename = "Nightlife")]
    Nightlife,
    #[serde(rename = "Pets")]
    Pets,
    #[serde(rename = "Professional Services")]
    ProfessionalServices,
    #[serde(rename = "Public Services & Government")]
    PublicServicesGovernment,
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[serde(rename = "Religious Organizations")]
    ReligiousOrganizations,
    #[serde(rename = "Restaurants")]
    Restaurants,
    #[serde(rename = "Shopping")]
    Shopping,
}

impl HighLevelCategory {
    /// Every category, in processing order.
    pub const ALL: [HighLevelCategory; 22] = [
        Self::ActiveLife,
        Self::ArtsEntertainment,
        Self::Automotive,
        Self::BeautySpas,
        Self::Education,
        Self::EventPlanningServices,
        Self::FinancialServices,
        Self::Food,
        Self::HealthMedical,
        Self::HomeServices,
        Self::HotelsTravel,
        Self::LocalFlavor,
        Self::LocalServices,
        Self::MassMedia,
        Self::Nightlife,
        Self::Pets,
        Self::ProfessionalServices,
        Self::PublicServicesGovernment,
        Self::RealEstate,
        Self::ReligiousOrganizations,
        Self::Restaurants,
        Self::Shopping,
    ];

    /// Display name, exactly as it appears in business category tags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActiveLife => "Active Life",
            Self::ArtsEntertainment => "Arts & Entertainment",
            Self::Automotive => "Automotive",
            Self::BeautySpas => "Beauty & Spas",
            Self::Education => "Education",
            Self::EventPlanningServices => "Event Planning & Services",
            Self::FinancialServices => "Financial Services",
            Self::Food => "Food",
            Self::HealthMedical => "Health & Medical",
            Self::HomeServices => "Home Services",
            Self::HotelsTravel => "Hotels & Travel",
            Self::LocalFlavor => "Local Flavor",
            Self::LocalServices => "Local Services",
            Self::MassMedia => "Mass Media",
            Self::Nightlife => "Nightlife",
            Self::Pets => "Pets",
            Self::ProfessionalServices => "Professional Services",
            Self::PublicServicesGovernment => "Public Services & Government",
            Self::RealEstate => "Real Estate",
            Self::ReligiousOrganizations => "Religious Organizations",
            Self::Restaurants => "Restaurants",
            Self::Shopping => "Shopping",
        }
    }

    /// Normalized name stamped onto labeled records, e.g. `active_life`.
    pub fn slug(&self) -> String {
        category_slug(self.as_str())
    }
}

impl std::fmt::Display for HighLevelCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HighLevelCategory {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| crate::Error::Config(format!("unknown category: {}", s)))
    }
}

/// Lowercase the name and replace `" & "` and single spaces with `_`.
pub fn category_slug(name: &str) -> String {
    name.to_lowercase().replace(" & ", "_").replace(' ', "_")
}
