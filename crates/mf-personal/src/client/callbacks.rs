use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::endpoints;
use crate::Result;

impl super::MarketingforceClient {
    /// Subscribe to personal-account callback events.
    #[instrument(skip(self, params))]
    pub async fn subscribe_personal_callbacks<P: Serialize + ?Sized>(
        &self,
        params: &P,
    ) -> Result<Value> {
        self.dispatch(endpoints::PERSONAL_CALLBACK_SUBSCRIBE, params).await
    }
}
