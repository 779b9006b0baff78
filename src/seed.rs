use chrono::{Duration, Utc};

use crate::campaign::{Campaign, CampaignStatus, CampaignType};
use crate::database::Database;
use crate::error::Error;

/// Inserts a handful of demo campaigns so a fresh deployment has something to
/// show on the dashboard. Does nothing if the collection already has data.
pub async fn seed(db: &dyn Database) -> Result<(), Error> {
    if !db.campaigns().fetch_campaigns().await?.is_empty() {
        return Ok(());
    }

    let campaign1_id = "CPN-16E77539-8873-4C8A-BCA3-2036010474AD".parse().unwrap();
    let campaign2_id = "CPN-5EA81D0A-9788-4B8A-82D9-1A0D636B53CE".parse().unwrap();
    let campaign3_id = "CPN-33957EB6-0EE7-487F-A087-E55C335BD63C".parse().unwrap();

    let now = Utc::now();
    let campaigns = vec![
        Campaign {
            id: campaign1_id,
            name: "Summer Product Launch".to_string(),
            campaign_type: CampaignType::Email,
            description: "Announce the summer lineup to the existing customer base".to_string(),
            status: CampaignStatus::Active,
            emails_sent: 1240,
            replies: 86,
            meetings_booked: 14,
            created_at: now,
            updated_at: now,
        },
        Campaign {
            id: campaign2_id,
            name: "Reactivation Outreach".to_string(),
            campaign_type: CampaignType::Whatsapp,
            description: "Win back accounts that went quiet over the last quarter".to_string(),
            status: CampaignStatus::Paused,
            emails_sent: 430,
            replies: 12,
            meetings_booked: 3,
            created_at: now - Duration::days(7),
            updated_at: now - Duration::days(7),
        },
        Campaign {
            id: campaign3_id,
            name: "Conference Follow-up".to_string(),
            campaign_type: CampaignType::Email,
            description: "Follow up with every lead collected at the spring conference"
                .to_string(),
            status: CampaignStatus::Completed,
            emails_sent: 310,
            replies: 45,
            meetings_booked: 9,
            created_at: now - Duration::days(30),
            updated_at: now - Duration::days(30),
        },
    ];

    for campaign in &campaigns {
        db.campaigns().insert_campaign(campaign).await?;
    }

    Ok(())
}
