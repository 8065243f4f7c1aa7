use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::endpoints;
use crate::Result;

impl super::MarketingforceClient {
    /// Send a private message from a personal account.
    ///
    /// The message content is not recorded in the tracing span.
    #[instrument(skip(self, params))]
    pub async fn send_private_message<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value> {
        self.dispatch(endpoints::PRIVATE_MESSAGE, params).await
    }
}
