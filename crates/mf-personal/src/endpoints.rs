//! Endpoint paths, relative to the configured host.

/// Personal account list.
pub const PERSONAL_ACCOUNT_LIST: &str = "/business/wxAcc/list";

/// Enterprise (WeCom) personal account list.
pub const ENTERPRISE_PERSONAL_LIST: &str = "/busi-etp/enterprisePersonal/enterprisePersonalList";

/// Send a private (one-to-one) message.
pub const PRIVATE_MESSAGE: &str = "/thirdparty/personal/privateMessage";

/// Enterprise friend lookup.
pub const ENTERPRISE_FRIEND_INFO: &str = "/thirdparty/wxFre/selectEnterFreInfo";

/// Sync of robot friends (WeCom customers).
pub const SYNC_ROBOT_FRIENDS: &str = "/thirdparty/wxFre/synchRobotsFriendsList";

/// Material library query.
pub const MATERIAL_LIST: &str = "/thirdparty/personal/queryMateList";

/// Personal-account callback subscription.
pub const PERSONAL_CALLBACK_SUBSCRIBE: &str = "/thirdparty/partner/personal/on";
