use actix::prelude::*;
use avail_search_core::{AppMessage, SearchRequest, SearchResults};
use nasa_images_fetch::{NormalizeMode, QueryOptions};
use tokio::sync::mpsc::UnboundedSender;

/// Runs searches against the image library off the UI thread.
///
/// At most one search is in flight: submitting a new one cancels the
/// previous future, so only the latest request ever reports back.
pub struct SearchActor {
    pub tx_app_message: UnboundedSender<AppMessage>,
    pub client: reqwest::Client,
    pub base_url: String,
    pub query_options: QueryOptions,
    pub normalize_mode: NormalizeMode,
    in_flight: Option<SpawnHandle>,
}

impl SearchActor {
    pub fn new(
        tx_app_message: UnboundedSender<AppMessage>,
        client: reqwest::Client,
        base_url: String,
        query_options: QueryOptions,
        normalize_mode: NormalizeMode,
    ) -> Self {
        Self {
            tx_app_message,
            client,
            base_url,
            query_options,
            normalize_mode,
            in_flight: None,
        }
    }

    fn cancel_in_flight(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.in_flight.take() {
            tracing::info!("Cancelling in-flight search");
            ctx.cancel_future(handle);
        }
    }
}

impl Actor for SearchActor {
    type Context = Context<Self>;
}

// ============================================================================
// Messages
// ============================================================================

#[derive(Message)]
#[rtype(result = "()")]
pub struct SubmitSearchMessage(pub SearchRequest);

#[derive(Message)]
#[rtype(result = "()")]
pub struct CancelSearchMessage;

// ============================================================================
// Message Handlers
// ============================================================================

impl Handler<SubmitSearchMessage> for SearchActor {
    type Result = ();

    fn handle(&mut self, msg: SubmitSearchMessage, ctx: &mut Self::Context) -> Self::Result {
        self.cancel_in_flight(ctx);

        let SearchRequest { id, params } = msg.0;
        let tx_app_message = self.tx_app_message.clone();
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let query_options = self.query_options;
        let normalize_mode = self.normalize_mode;

        let t = async move {
            tracing::info!("Starting search {}", id);
            let result =
                match nasa_images_fetch::search(&client, &base_url, &params, query_options).await {
                    Ok(response) => Ok(SearchResults {
                        items: nasa_images_fetch::normalize(&response, normalize_mode),
                        total_hits: response.total_hits(),
                    }),
                    Err(e) => {
                        tracing::error!("Search {} failed: {}", id, e);
                        Err(e.to_string())
                    }
                };

            if let Err(e) = tx_app_message.send(AppMessage::SearchCompleted {
                request_id: id,
                result,
            }) {
                tracing::error!("Failed to send search result: {}", e);
            }
        };

        self.in_flight = Some(ctx.spawn(Box::pin(t).into_actor(self)));
    }
}

impl Handler<CancelSearchMessage> for SearchActor {
    type Result = ();

    fn handle(&mut self, _msg: CancelSearchMessage, ctx: &mut Self::Context) -> Self::Result {
        self.cancel_in_flight(ctx);
    }
}
