use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::endpoints;
use crate::Result;

impl super::MarketingforceClient {
    /// Query the material library.
    #[instrument(skip(self, params))]
    pub async fn list_materials<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value> {
        self.dispatch(endpoints::MATERIAL_LIST, params).await
    }
}
