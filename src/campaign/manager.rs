use chrono::Utc;

use crate::database::Database;
use crate::error::Error;
use crate::violations;

use super::{Campaign, CampaignId, CreateCampaignBody};

#[tracing::instrument(skip(db))]
pub async fn create_campaign(
    db: &dyn Database,
    body: CreateCampaignBody,
) -> Result<Campaign, Error> {
    let violations = violations::validate_create_campaign(&body);

    let campaign_type = match body.campaign_type.filter(|_| violations.is_empty()) {
        Some(campaign_type) => campaign_type,
        None => return Err(Error::CampaignInvalid { violations }),
    };

    let now = Utc::now();
    let campaign = Campaign {
        id: CampaignId::new(),
        name: body.name,
        campaign_type,
        description: body.description,
        status: body.status,
        // counters always start at zero, whatever the caller sent
        emails_sent: 0,
        replies: 0,
        meetings_booked: 0,
        created_at: now,
        updated_at: now,
    };

    db.campaigns().insert_campaign(&campaign).await?;

    Ok(campaign)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaigns(db: &dyn Database) -> Result<Vec<Campaign>, Error> {
    let campaigns = db.campaigns().fetch_campaigns().await?;

    Ok(campaigns)
}

#[tracing::instrument(skip(db))]
pub async fn delete_campaign(db: &dyn Database, campaign_id: CampaignId) -> Result<(), Error> {
    db.campaigns().delete_campaign_by_id(campaign_id).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::{CampaignStatus, CampaignType};
    use crate::database::test::MockDatabase;
    use std::sync::{Arc, Mutex};

    fn create_body() -> CreateCampaignBody {
        CreateCampaignBody {
            name: "Launch Q3".to_string(),
            campaign_type: Some(CampaignType::Email),
            description: "Q3 product launch outreach".to_string(),
            status: CampaignStatus::Draft,
        }
    }

    #[tokio::test]
    async fn can_create_campaign() {
        let mut db = MockDatabase::new();
        let called_insert = Arc::new(Mutex::new(false));
        let called_insert_clone = Arc::clone(&called_insert);
        db.campaigns.on_insert_campaign = Box::new(move |campaign| {
            *called_insert_clone.lock().unwrap() = true;
            assert_eq!(campaign.name, "Launch Q3".to_string());
            assert_eq!(campaign.created_at, campaign.updated_at);
            Ok(())
        });

        let campaign = create_campaign(&db, create_body()).await.unwrap();

        assert_eq!(campaign.name, "Launch Q3".to_string());
        assert_eq!(campaign.campaign_type, CampaignType::Email);
        assert_eq!(campaign.status, CampaignStatus::Draft);
        assert!(
            *called_insert.lock().unwrap(),
            "db.insert_campaign was not called"
        );
    }

    #[tokio::test]
    async fn create_campaign_forces_counters_to_zero() {
        let mut db = MockDatabase::new();
        db.campaigns.on_insert_campaign = Box::new(|campaign| {
            assert_eq!(campaign.emails_sent, 0);
            assert_eq!(campaign.replies, 0);
            assert_eq!(campaign.meetings_booked, 0);
            Ok(())
        });

        let campaign = create_campaign(&db, create_body()).await.unwrap();

        assert_eq!(campaign.emails_sent, 0);
        assert_eq!(campaign.replies, 0);
        assert_eq!(campaign.meetings_booked, 0);
    }

    #[tokio::test]
    async fn create_campaign_rejects_invalid_body_before_insert() {
        // no insert hook installed, the mock panics if the store is reached
        let db = MockDatabase::new();
        let mut body = create_body();
        body.name = "ab".to_string();

        let result = create_campaign(&db, body).await;

        assert!(matches!(
            result,
            Err(Error::CampaignInvalid { violations }) if violations.len() == 1
        ));
    }

    #[tokio::test]
    async fn create_campaign_rejects_missing_type() {
        let db = MockDatabase::new();
        let mut body = create_body();
        body.campaign_type = None;

        let result = create_campaign(&db, body).await;

        assert!(matches!(result, Err(Error::CampaignInvalid { .. })));
    }

    #[tokio::test]
    async fn get_campaigns_returns_store_order() {
        let mut db = MockDatabase::new();
        db.campaigns.on_fetch_campaigns = Box::new(|| {
            let now = Utc::now();
            Ok(vec![
                Campaign {
                    id: CampaignId::new(),
                    name: "Newest".to_string(),
                    campaign_type: CampaignType::Email,
                    description: "created most recently".to_string(),
                    status: CampaignStatus::Active,
                    emails_sent: 0,
                    replies: 0,
                    meetings_booked: 0,
                    created_at: now,
                    updated_at: now,
                },
                Campaign {
                    id: CampaignId::new(),
                    name: "Oldest".to_string(),
                    campaign_type: CampaignType::Whatsapp,
                    description: "created a while ago".to_string(),
                    status: CampaignStatus::Paused,
                    emails_sent: 0,
                    replies: 0,
                    meetings_booked: 0,
                    created_at: now,
                    updated_at: now,
                },
            ])
        });

        let campaigns = get_campaigns(&db).await.unwrap();

        assert_eq!(campaigns.len(), 2);
        assert_eq!(campaigns[0].name, "Newest".to_string());
        assert_eq!(campaigns[1].name, "Oldest".to_string());
    }

    #[tokio::test]
    async fn get_campaigns_propagates_store_failure() {
        let mut db = MockDatabase::new();
        db.campaigns.on_fetch_campaigns = Box::new(|| {
            Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            )))
        });

        // a failed fetch is an error, never an empty collection
        let result = get_campaigns(&db).await;

        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[tokio::test]
    async fn delete_campaign_passes_id_to_store() {
        let mut db = MockDatabase::new();
        let test_campaign_id = CampaignId::new();
        let called_delete = Arc::new(Mutex::new(false));
        let called_delete_clone = Arc::clone(&called_delete);
        db.campaigns.on_delete_campaign_by_id = Box::new(move |campaign_id| {
            *called_delete_clone.lock().unwrap() = true;
            assert_eq!(campaign_id, test_campaign_id);
            Ok(())
        });

        delete_campaign(&db, test_campaign_id).await.unwrap();

        assert!(
            *called_delete.lock().unwrap(),
            "db.delete_campaign_by_id was not called"
        );
    }
}
