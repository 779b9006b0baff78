use outreach_server::{serve, Error};

#[actix_web::main]
async fn main() -> Result<(), Error> {
    serve(true).await
}
