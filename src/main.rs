// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use redis_guestbook::config::Config;
use redis_guestbook::startup::{ActixApp, Telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::new()?;
    let subscriber = Telemetry::get_subscriber("redis_guestbook", "info");
    Telemetry::init_subscriber(subscriber);
    tracing::info!(
        production = config.get_environment().is_production(),
        "Configuration loaded"
    );

    let application = ActixApp::new(&config).await?;
    if let Err(e) = application.start_server().await {
        tracing::error!(error.message = %e, "Messages gateway stopped with an error");
        return Err(e.into());
    }

    tracing::info!("Messages gateway shut down");
    Ok(())
}
