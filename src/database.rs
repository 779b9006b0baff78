use mongodb::{Collection, Database as MongoDb};

use crate::campaign::db::{CampaignStore, CAMPAIGNS};
use crate::campaign::{self, Campaign};
use crate::error::Error;

pub trait Database: Send + Sync {
    fn campaigns(&self) -> &dyn CampaignStore;
}

#[derive(Clone, Debug)]
pub struct MongoDatabase {
    campaigns: Collection<Campaign>,
    db: MongoDb,
}

impl MongoDatabase {
    pub async fn initialize(db: MongoDb) -> Result<MongoDatabase, Error> {
        campaign::db::initialize(&db).await?;

        Ok(MongoDatabase {
            campaigns: db.collection(CAMPAIGNS),
            db,
        })
    }

    pub async fn drop(&self) -> Result<(), Error> {
        self.db.drop(None).await?;
        Ok(())
    }
}

impl Database for MongoDatabase {
    fn campaigns(&self) -> &dyn CampaignStore {
        &self.campaigns
    }
}

#[cfg(test)]
pub mod test {
    use async_trait::async_trait;

    use crate::campaign::db::CampaignStore;
    use crate::campaign::{Campaign, CampaignId};
    use crate::error::Error;

    use super::Database;

    pub struct MockDatabase {
        pub campaigns: MockCampaignStore,
    }

    impl MockDatabase {
        pub fn new() -> MockDatabase {
            MockDatabase {
                campaigns: MockCampaignStore::new(),
            }
        }
    }

    impl Database for MockDatabase {
        fn campaigns(&self) -> &dyn CampaignStore {
            &self.campaigns
        }
    }

    pub struct MockCampaignStore {
        pub on_insert_campaign: Box<dyn Fn(&Campaign) -> Result<(), Error> + Send + Sync>,
        pub on_fetch_campaigns: Box<dyn Fn() -> Result<Vec<Campaign>, Error> + Send + Sync>,
        pub on_delete_campaign_by_id: Box<dyn Fn(CampaignId) -> Result<(), Error> + Send + Sync>,
    }

    impl MockCampaignStore {
        pub fn new() -> MockCampaignStore {
            MockCampaignStore {
                on_insert_campaign: Box::new(|_| panic!("unexpected call to insert_campaign")),
                on_fetch_campaigns: Box::new(|| panic!("unexpected call to fetch_campaigns")),
                on_delete_campaign_by_id: Box::new(|_| {
                    panic!("unexpected call to delete_campaign_by_id")
                }),
            }
        }
    }

    #[async_trait]
    impl CampaignStore for MockCampaignStore {
        async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error> {
            (self.on_insert_campaign)(campaign)
        }

        async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error> {
            (self.on_fetch_campaigns)()
        }

        async fn delete_campaign_by_id(&self, campaign_id: CampaignId) -> Result<(), Error> {
            (self.on_delete_campaign_by_id)(campaign_id)
        }
    }
}
