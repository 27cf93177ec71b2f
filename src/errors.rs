pub const ERR_ALREADY_REGISTERED: &str = "ERR_ALREADY_REGISTERED";
pub const ERR_UNKNOWN_CLIENT: &str = "ERR_UNKNOWN_CLIENT";
pub const ERR_INVALID_CLIENT_ID: &str = "ERR_INVALID_CLIENT_ID";
pub const ERR_ZERO_ADDRESS: &str = "ERR_ZERO_ADDRESS";
pub const ERR_NOT_ELIGIBLE: &str = "ERR_NOT_ELIGIBLE";
pub const ERR_AUCTION_NOT_CONCLUDED: &str = "ERR_AUCTION_NOT_CONCLUDED";
pub const ERR_ALREADY_PAID: &str = "ERR_ALREADY_PAID";
pub const ERR_DIVISION_BY_ZERO: &str = "ERR_DIVISION_BY_ZERO";
pub const ERR_WRONG_ORDER: &str = "ERR_WRONG_ORDER";
pub const ERR_DUPLICATE_CLIENT: &str = "ERR_DUPLICATE_CLIENT";
pub const ERR_INCOMPLETE_CLIENT_SET: &str = "ERR_INCOMPLETE_CLIENT_SET";
pub const ERR_NOTHING_TO_PAY: &str = "ERR_NOTHING_TO_PAY";
pub const ERR_TRANSFER_FAILED: &str = "ERR_TRANSFER_FAILED";
pub const ERR_UNAUTHORIZED: &str = "ERR_UNAUTHORIZED";
pub const ERR_PAUSED: &str = "ERR_PAUSED";
