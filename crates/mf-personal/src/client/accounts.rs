use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::endpoints;
use crate::Result;

impl super::MarketingforceClient {
    /// List personal accounts.
    #[instrument(skip(self, params))]
    pub async fn list_personal_accounts<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value> {
        self.dispatch(endpoints::PERSONAL_ACCOUNT_LIST, params).await
    }

    /// List enterprise (WeCom) personal accounts.
    #[instrument(skip(self, params))]
    pub async fn list_enterprise_personal_accounts<P: Serialize + ?Sized>(
        &self,
        params: &P,
    ) -> Result<Value> {
        self.dispatch(endpoints::ENTERPRISE_PERSONAL_LIST, params).await
    }
}
