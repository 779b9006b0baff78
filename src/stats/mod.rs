use serde::{Deserialize, Serialize};

use crate::campaign::{Campaign, CampaignStatus};

pub mod endpoints;
pub use endpoints::*;

pub const CHART_SERIES_LIMIT: usize = 5;
pub const CHART_NAME_LIMIT: usize = 15;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChartEntry {
    pub name: String,
    pub sent: u64,
    pub replies: u64,
    pub meetings: u64,
}

pub fn active_count(campaigns: &[Campaign]) -> usize {
    campaigns
        .iter()
        .filter(|campaign| campaign.status == CampaignStatus::Active)
        .count()
}

pub fn total_sent(campaigns: &[Campaign]) -> u64 {
    campaigns.iter().map(|campaign| campaign.emails_sent).sum()
}

pub fn total_replies(campaigns: &[Campaign]) -> u64 {
    campaigns.iter().map(|campaign| campaign.replies).sum()
}

pub fn total_meetings(campaigns: &[Campaign]) -> u64 {
    campaigns
        .iter()
        .map(|campaign| campaign.meetings_booked)
        .sum()
}

/// Reduces the first `limit` campaigns, in the order given, to chart-ready
/// tuples. The input is expected to already be sorted newest-first.
pub fn chart_series(campaigns: &[Campaign], limit: usize) -> Vec<ChartEntry> {
    campaigns
        .iter()
        .take(limit)
        .map(|campaign| ChartEntry {
            name: truncate_name(&campaign.name),
            sent: campaign.emails_sent,
            replies: campaign.replies,
            meetings: campaign.meetings_booked,
        })
        .collect()
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() > CHART_NAME_LIMIT {
        let prefix: String = name.chars().take(CHART_NAME_LIMIT).collect();
        format!("{}...", prefix)
    } else {
        name.to_string()
    }
}
