//! Log in and print the first page of the group's orders.
//!
//! ```sh
//! API_BASE_URL=http://localhost:8000 DEFAULT_GROUP_ID=g1 \
//! CONSOLE_USER=admin CONSOLE_PASS=secret cargo run --example order_board
//! ```

use console_client::ClientConfig;
use shared::query::{ListQuery, SortDirection};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let username = std::env::var("CONSOLE_USER").unwrap_or_else(|_| "admin".into());
    let password = std::env::var("CONSOLE_PASS").unwrap_or_default();

    let mut client = ClientConfig::from_env().build();
    client.login(&username, &password).await?;

    let account = client.me().await?;
    println!("logged in as {} ({:?})", account.username, account.role);

    let statuses = client.list_statuses(Some(true)).await?;
    println!("statuses: {:?}", statuses.iter().map(|s| &s.status_code).collect::<Vec<_>>());

    let query = ListQuery::new().order_by("parsed_at", SortDirection::Desc);
    let page = client.list_all_orders(&query).await?;
    println!("{} orders ({} total)", page.data.len(), page.total);
    for order in &page.data {
        println!(
            "  {:>10}  qty {:>4}  {:>12} {}  [{}]",
            order.order_id,
            order.item.qty,
            order.display_total(),
            order.currency,
            order.status_code,
        );
    }

    Ok(())
}
