use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::endpoints;
use crate::Result;

impl super::MarketingforceClient {
    /// Look up enterprise (WeCom) friend information.
    #[instrument(skip(self, params))]
    pub async fn enterprise_friend_info<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value> {
        self.dispatch(endpoints::ENTERPRISE_FRIEND_INFO, params).await
    }

    /// Sync a robot's friend list (WeCom customers).
    #[instrument(skip(self, params))]
    pub async fn sync_robot_friends<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value> {
        self.dispatch(endpoints::SYNC_ROBOT_FRIENDS, params).await
    }
}
