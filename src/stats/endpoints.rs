use actix_web::get;
use actix_web::web::{Data, Json};
use serde::{Deserialize, Serialize};

use crate::campaign::manager;
use crate::database::Database;
use crate::error::Error;

use super::{ChartEntry, CHART_SERIES_LIMIT};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DashboardBody {
    pub active_campaigns: usize,
    pub total_emails_sent: u64,
    pub total_replies: u64,
    pub total_meetings: u64,
    pub chart: Vec<ChartEntry>,
}

#[get("/dashboard")]
#[tracing::instrument(skip(db))]
async fn get_dashboard(db: Data<Box<dyn Database>>) -> Result<Json<DashboardBody>, Error> {
    let campaigns = manager::get_campaigns(db.as_ref().as_ref()).await?;

    let body = DashboardBody {
        active_campaigns: super::active_count(&campaigns),
        total_emails_sent: super::total_sent(&campaigns),
        total_replies: super::total_replies(&campaigns),
        total_meetings: super::total_meetings(&campaigns),
        chart: super::chart_series(&campaigns, CHART_SERIES_LIMIT),
    };

    Ok(Json(body))
}
