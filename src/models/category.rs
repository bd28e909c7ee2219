use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Closed set of event categories. Matching is exact and case-sensitive; the
/// multi-word members keep their display spelling on the wire.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Category {
    Technology,
    Business,
    #[serde(rename = "Arts & Culture")]
    #[strum(serialize = "Arts & Culture")]
    ArtsCulture,
    Sports,
    #[serde(rename = "Health & Wellness")]
    #[strum(serialize = "Health & Wellness")]
    HealthWellness,
    Education,
    #[serde(rename = "Food & Drink")]
    #[strum(serialize = "Food & Drink")]
    FoodDrink,
    Music,
    Networking,
    Charity,
}

impl Category {
    pub fn label(&self) -> &'static str {
        self.into()
    }
}
