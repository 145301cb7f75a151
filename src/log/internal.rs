pub use log::{log, log_enabled};
