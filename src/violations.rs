use serde::{Deserialize, Serialize};

use crate::campaign::CreateCampaignBody;

pub const MINIMUM_NAME_LENGTH: usize = 3;
pub const MINIMUM_DESCRIPTION_LENGTH: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING-KEBAB-CASE")]
pub enum Violation {
    CampaignNameTooShort {
        minimum_length: usize,
        current_length: usize,
    },
    CampaignTypeMissing,
    CampaignDescriptionTooShort {
        minimum_length: usize,
        current_length: usize,
    },
}

/// Checks every field independently and reports all violations at once.
pub fn validate_create_campaign(body: &CreateCampaignBody) -> Vec<Violation> {
    let mut violations = vec![];

    let name_length = body.name.chars().count();
    if name_length < MINIMUM_NAME_LENGTH {
        violations.push(Violation::CampaignNameTooShort {
            minimum_length: MINIMUM_NAME_LENGTH,
            current_length: name_length,
        });
    }

    if body.campaign_type.is_none() {
        violations.push(Violation::CampaignTypeMissing);
    }

    let description_length = body.description.chars().count();
    if description_length < MINIMUM_DESCRIPTION_LENGTH {
        violations.push(Violation::CampaignDescriptionTooShort {
            minimum_length: MINIMUM_DESCRIPTION_LENGTH,
            current_length: description_length,
        });
    }

    violations
}
