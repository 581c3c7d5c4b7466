#![deny(clippy::all, clippy::nursery)]
#![deny(nonstandard_style, rust_2018_idioms)]

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::{DefaultFields, Format, Full};
use tracing_subscriber::fmt::SubscriberBuilder;

mod response;
use response::{response, Response};

// CloudWatch timestamps each line already
fn log_format() -> SubscriberBuilder<DefaultFields, Format<Full, ()>, LevelFilter> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .without_time()
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    log_format().try_init()?;

    lambda_runtime::run(service_fn(handler)).await?;
    Ok(())
}

async fn handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    debug!("Got event: {}", event.payload);

    info!("Inside Lambda function");

    Ok(response()?)
}
