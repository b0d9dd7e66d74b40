pub mod client;
pub mod config;
pub mod errors;
pub mod logging;
pub mod utils;

// Re-export
pub use client::create_http_client;
pub use config::{NameServiceConfig, ReceiptPolling, load_dotenv};
pub use errors::{NameServiceError, UNRECOGNIZED_CHAIN_CODE, USER_REJECTED_CODE};
pub use logging::init_tracing;
pub use utils::{get_timestamp_millis, short_address};
