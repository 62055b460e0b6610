//! View state
//!
//! Fetch-and-cache state for the History and Menu views. Each view
//! holds the last successfully fetched collection, keyed by the
//! dependency values that scoped the fetch; a failed fetch notifies
//! and leaves the displayed collection unchanged. There is no request
//! fencing: the latest response to resolve wins.

use qcut_client::{ClientError, HttpClient};
use shared::{Drink, DrinkFilter, Order, OrderFilter};

use crate::editor::DrinkEditor;
use crate::filter::{filter_drinks, filter_orders};
use crate::notify::Notifier;

fn notify_failure(notifier: &dyn Notifier, error: &ClientError) {
    for message in error.user_messages() {
        notifier.error(&message);
    }
}

/// Order history view
///
/// The cache is keyed by the filter and the bearer token that scoped
/// the fetch, so switching identities with an unchanged filter still
/// re-fetches.
#[derive(Debug, Default)]
pub struct HistoryView {
    pub filter: OrderFilter,
    orders: Vec<Order>,
    fetched_for: Option<(OrderFilter, Option<String>)>,
}

impl HistoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached collection, unfiltered
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The displayed collection: filtered and sorted
    pub fn visible(&self) -> Vec<&Order> {
        filter_orders(&self.orders, &self.filter)
    }

    /// Whether the active filter or the client identity differs from
    /// the last fetched ones
    pub fn needs_refresh(&self, client: &HttpClient) -> bool {
        match &self.fetched_for {
            Some((filter, token)) => filter != &self.filter || token.as_deref() != client.token(),
            None => true,
        }
    }

    /// Fetch the history scoped by the active filter
    ///
    /// On failure every error message is notified and the previously
    /// displayed collection stays as it was.
    pub async fn refresh(&mut self, client: &HttpClient, notifier: &dyn Notifier) {
        let filter = self.filter.clone();
        match client.order_history(&filter).await {
            Ok(orders) => {
                tracing::debug!(count = orders.len(), "Order history fetched");
                self.orders = orders;
                self.fetched_for = Some((filter, client.token().map(str::to_string)));
            }
            Err(e) => notify_failure(notifier, &e),
        }
    }

    /// Fetch only when the filter or identity changed since the last
    /// success
    pub async fn refresh_if_needed(&mut self, client: &HttpClient, notifier: &dyn Notifier) {
        if self.needs_refresh(client) {
            self.refresh(client, notifier).await;
        }
    }
}

/// Menu view
///
/// The drink collection is fetched whole per venue and filtered
/// client-side. Mutations go through the open editor; a successful
/// mutation response is the new authoritative collection and closes
/// the editor.
#[derive(Debug, Default)]
pub struct MenuView {
    pub filter: DrinkFilter,
    drinks: Vec<Drink>,
    editor: Option<DrinkEditor>,
    fetched_for: Option<String>,
}

impl MenuView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached collection, including soft-deleted records
    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    /// The displayed collection: soft-deletes excluded, filter applied
    pub fn visible(&self) -> Vec<&Drink> {
        filter_drinks(&self.drinks, &self.filter)
    }

    pub fn editor(&self) -> Option<&DrinkEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut DrinkEditor> {
        self.editor.as_mut()
    }

    /// Open the blank add form
    pub fn open_add(&mut self) {
        self.editor = Some(DrinkEditor::new());
    }

    /// Open the update form pre-seeded from a drink
    pub fn open_update(&mut self, drink: &Drink) {
        self.editor = Some(DrinkEditor::from_drink(drink));
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Whether the venue changed since the last successful fetch
    pub fn needs_refresh(&self, venue_id: &str) -> bool {
        self.fetched_for.as_deref() != Some(venue_id)
    }

    /// Fetch the venue's full drink list
    pub async fn refresh(&mut self, client: &HttpClient, venue_id: &str, notifier: &dyn Notifier) {
        match client.menu(venue_id).await {
            Ok(drinks) => {
                tracing::debug!(count = drinks.len(), venue = venue_id, "Menu fetched");
                self.drinks = drinks;
                self.fetched_for = Some(venue_id.to_string());
            }
            Err(e) => notify_failure(notifier, &e),
        }
    }

    /// Fetch only when the venue changed since the last success
    pub async fn refresh_if_needed(
        &mut self,
        client: &HttpClient,
        venue_id: &str,
        notifier: &dyn Notifier,
    ) {
        if self.needs_refresh(venue_id) {
            self.refresh(client, venue_id, notifier).await;
        }
    }

    /// Submit the open editor as an add or update mutation
    ///
    /// On success the returned collection replaces the cache and the
    /// editor closes. On failure the editor stays open with the
    /// submitted values and every validation message is notified.
    pub async fn submit(&mut self, client: &HttpClient, notifier: &dyn Notifier) {
        let Some(editor) = &self.editor else {
            return;
        };
        let Some(payload) = editor.payload() else {
            notifier.error("Please select a category");
            return;
        };

        let result = match editor.drink_id() {
            Some(id) => client.update_drink(id, &payload).await,
            None => client.create_drink(&payload).await,
        };
        let updating = editor.is_update();

        match result {
            Ok(drinks) => {
                self.drinks = drinks;
                self.editor = None;
                notifier.success(if updating {
                    "Updated Drink!"
                } else {
                    "Added Drink!"
                });
            }
            Err(e) => notify_failure(notifier, &e),
        }
    }

    /// Soft-delete the drink open in the update editor
    pub async fn submit_delete(&mut self, client: &HttpClient, notifier: &dyn Notifier) {
        let Some(id) = self.editor.as_ref().and_then(|e| e.drink_id()) else {
            return;
        };

        match client.delete_drink(id).await {
            Ok(drinks) => {
                self.drinks = drinks;
                self.editor = None;
                notifier.success("Deleted Drink!");
            }
            Err(e) => notify_failure(notifier, &e),
        }
    }
}
