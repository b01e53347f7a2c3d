//! Storage key names
//!
//! These match the keys written by earlier releases, so existing data
//! keeps loading.

/// Admin session flag, holds `"true"` while logged in
pub const ADMIN_SESSION: &str = "adminAuthenticated";

/// JSON array of user-added tool records
pub const CUSTOM_TOOLS: &str = "customTools";

/// JSON array of liked tool ids
pub const LIKED_TOOLS: &str = "likedTools";

/// JSON array of saved tool ids
pub const SAVED_TOOLS: &str = "savedTools";
