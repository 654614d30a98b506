// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::env;

use tokio::io::{stdin, stdout, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use redis_guestbook::client::{ChatView, HttpMessagesApi, DEFAULT_API_URL};

const HEADER: &str = "Redis Chat Room";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let base_url = env::var("CHAT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let mut view = ChatView::new(HttpMessagesApi::new(&base_url));
    let mut out = stdout();

    out.write_all(format!("{}\n{}\n", HEADER, view.render()).as_bytes())
        .await?;
    view.mount().await;
    out.write_all(format!("{}\n", view.render()).as_bytes()).await?;

    let mut lines = BufReader::new(stdin()).lines();
    loop {
        out.write_all(format!("[{}] > ", view.send_label()).as_bytes())
            .await?;
        out.flush().await?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };

        match line.trim() {
            "/quit" => break,
            "/dismiss" => view.dismiss_submit_error(),
            _ => {
                view.set_input(&line);
                if !view.can_submit() {
                    continue;
                }
                view.submit().await;
            }
        }

        out.write_all(format!("{}\n", view.render()).as_bytes()).await?;
    }

    Ok(())
}
