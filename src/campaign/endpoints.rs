use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, post, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Error;

use super::{manager, Campaign, CampaignId, CampaignStatus, CampaignType};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateCampaignBody {
    pub name: String,
    #[serde(rename = "type")]
    pub campaign_type: Option<CampaignType>,
    pub description: String,
    #[serde(default)]
    pub status: CampaignStatus,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CampaignBody {
    pub id: CampaignId,
    pub name: String,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    pub description: String,
    pub status: CampaignStatus,
    pub emails_sent: u64,
    pub replies: u64,
    pub meetings_booked: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CampaignBody {
    pub fn render(campaign: Campaign) -> CampaignBody {
        CampaignBody {
            id: campaign.id,
            name: campaign.name,
            campaign_type: campaign.campaign_type,
            description: campaign.description,
            status: campaign.status,
            emails_sent: campaign.emails_sent,
            replies: campaign.replies,
            meetings_booked: campaign.meetings_booked,
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
        }
    }
}

#[post("/campaigns")]
#[tracing::instrument(skip(db))]
async fn create_campaign(
    db: Data<Box<dyn Database>>,
    body: Json<CreateCampaignBody>,
) -> Result<Json<CampaignBody>, Error> {
    let body = body.into_inner();

    let campaign = manager::create_campaign(db.as_ref().as_ref(), body).await?;

    Ok(Json(CampaignBody::render(campaign)))
}

#[get("/campaigns")]
#[tracing::instrument(skip(db))]
async fn get_campaigns(db: Data<Box<dyn Database>>) -> Result<Json<Vec<CampaignBody>>, Error> {
    let campaigns = manager::get_campaigns(db.as_ref().as_ref()).await?;

    let body = campaigns.into_iter().map(CampaignBody::render).collect();

    Ok(Json(body))
}

#[delete("/campaigns/{campaign_id}")]
#[tracing::instrument(skip(db))]
async fn delete_campaign(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
) -> Result<HttpResponse, Error> {
    let campaign_id = params.into_inner();

    manager::delete_campaign(db.as_ref().as_ref(), campaign_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
