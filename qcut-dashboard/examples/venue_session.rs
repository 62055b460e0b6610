// qcut-dashboard/examples/venue_session.rs
// Walkthrough: restore/login, bind venue, fetch today's orders and the menu

use qcut_client::ClientConfig;
use qcut_dashboard::filter::day_range;
use qcut_dashboard::{
    Action, HistoryView, LogNotifier, MenuView, Session, TokenStore, VenueBinding,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _guard = qcut_dashboard::logging::init(None);

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <email> <password>", args[0]);
        println!("  The API base URL is read from QCUT_API_ENDPOINT");
        return Ok(());
    }

    let client = ClientConfig::from_env()?.build_http_client();

    let data_dir = std::env::temp_dir().join("qcut-dashboard");
    let notifier = LogNotifier;
    let mut session = Session::new(TokenStore::new(&data_dir));

    // Persisted token first, fresh login as the fallback
    session.restore(&client, &notifier).await;
    if session.state().user.is_none() {
        let user = client.login(&args[1], &args[2]).await?;
        session.dispatch(Action::SetUser(user), &notifier);
    }

    let client = client.with_token(session.access_token().unwrap_or_default());

    match session.bind_venue(&client, &notifier).await {
        VenueBinding::Bound => {}
        VenueBinding::NoVenue => {
            tracing::warn!("This account does not belong to any venue");
            return Ok(());
        }
        VenueBinding::Failed => return Ok(()),
    }
    let Some(venue) = session.state().venue.clone() else {
        return Ok(());
    };
    tracing::info!(venue = %venue.name, "Venue bound");

    // Today's order history
    let mut history = HistoryView::new();
    let (from, to) = day_range(0);
    history.filter.set_range(from, to);
    history.refresh_if_needed(&client, &notifier).await;
    tracing::info!(orders = history.visible().len(), "Order history loaded");

    // Full menu
    let mut menu = MenuView::new();
    menu.refresh_if_needed(&client, &venue.id, &notifier).await;
    tracing::info!(drinks = menu.visible().len(), "Menu loaded");

    Ok(())
}
