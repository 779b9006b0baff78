use actix_web::web::{self, Data, FormConfig, JsonConfig, PathConfig, QueryConfig};
use actix_web::{App, HttpServer, ResponseError};
use mongodb::{bson, Client};
use tracing::{info, Level};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::fmt::format::FmtSpan;

pub mod campaign;
pub mod config;
pub mod database;
pub mod error;
pub mod seed;
pub mod stats;
pub mod typedid;
pub mod violations;

pub use campaign::{CampaignBody, CreateCampaignBody};
pub use error::Error;
pub use stats::DashboardBody;

use crate::config::Config;
use crate::database::{Database, MongoDatabase};

pub fn run(seed_demo_data: bool) -> Result<(), Error> {
    actix_web::rt::System::new().block_on(serve(seed_demo_data))
}

pub async fn serve(seed_demo_data: bool) -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_span_events(FmtSpan::NEW)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("connecting to db: {}", config.mongodb_uri);
    let db = Client::with_uri_str(&config.mongodb_uri)
        .await?
        .database(&config.mongodb_database);

    // ping the database to ensure connection is established
    db.run_command(bson::doc! { "ping": 1 }, None).await?;

    let db = MongoDatabase::initialize(db).await?;

    if seed_demo_data {
        seed::seed(&db).await?;
    }

    HttpServer::new(move || {
        App::new()
            .app_data(JsonConfig::default().error_handler(|err, _req| {
                // format json errors with custom format
                Error::InvalidJson(err).into()
            }))
            .app_data(PathConfig::default().error_handler(|err, _req| {
                // format path errors with custom format
                Error::InvalidPath(err).into()
            }))
            .app_data(FormConfig::default().error_handler(|err, _req| {
                // format form errors with custom format
                Error::InvalidForm(err).into()
            }))
            .app_data(QueryConfig::default().error_handler(|err, _req| {
                // format query errors with custom format
                Error::InvalidQuery(err).into()
            }))
            .app_data(Data::new(Box::new(db.clone()) as Box<dyn Database>))
            .wrap(TracingLogger::default())
            .service(campaign::endpoints::create_campaign)
            .service(campaign::endpoints::get_campaigns)
            .service(campaign::endpoints::delete_campaign)
            .service(stats::endpoints::get_dashboard)
            .default_service(web::to(|| async { Error::PathDoesNotExist.error_response() }))
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await?;

    Ok(())
}
