//! Request dispatch for the App.
//!
//! Every request runs on its own tokio task and reports back through
//! `message_tx`. The slot's [`FetchTicket`](crate::query::FetchTicket) travels
//! with the request so a superseded response can be recognised on arrival.

use super::{App, AppMessage, MutationStatus};
use crate::models::PostId;

impl App {
    /// Start every fetch the current state calls for.
    ///
    /// The list is fetched when it has never loaded or was invalidated. The
    /// detail of `selected_id` is fetched under the same rule; without a
    /// selection no detail request is made.
    pub fn sync_queries(&mut self) {
        if self.queries.posts().needs_fetch() {
            self.fetch_posts();
        }
        if let Some(id) = self.selected_id {
            let needs_fetch = self
                .queries
                .detail(id)
                .map_or(true, |query| query.needs_fetch());
            if needs_fetch {
                self.fetch_post(id);
            }
        }
    }

    fn fetch_posts(&mut self) {
        let ticket = self.queries.posts_mut().begin_fetch();
        self.mark_dirty();

        let tx = self.message_tx.clone();
        let api = self.api.clone();
        tokio::spawn(async move {
            let result = api.list_posts().await.map_err(|e| e.user_message());
            let _ = tx.send(AppMessage::PostsLoaded { ticket, result });
        });
    }

    fn fetch_post(&mut self, id: PostId) {
        let ticket = self.queries.detail_mut(id).begin_fetch();
        self.mark_dirty();

        let tx = self.message_tx.clone();
        let api = self.api.clone();
        tokio::spawn(async move {
            let result = api.get_post(id).await.map_err(|e| e.user_message());
            let _ = tx.send(AppMessage::PostLoaded { id, ticket, result });
        });
    }

    /// Validate the form and send it.
    ///
    /// A missing field sets the dialog's validation message and nothing is
    /// sent. Ignored while a previous submission is pending.
    pub fn submit_form(&mut self) {
        if !self.dialog.open || self.dialog.is_pending() {
            return;
        }
        self.mark_dirty();

        let new_post = match self.dialog.form.validate() {
            Ok(new_post) => new_post,
            Err(message) => {
                tracing::debug!(%message, "form rejected");
                self.dialog.validation_error = Some(message);
                return;
            }
        };
        self.dialog.validation_error = None;
        self.dialog.status = MutationStatus::Pending;

        let tx = self.message_tx.clone();
        let api = self.api.clone();
        tokio::spawn(async move {
            let result = api.create_post(new_post).await.map_err(|e| e.user_message());
            let _ = tx.send(AppMessage::PostCreated { result });
        });
    }
}
