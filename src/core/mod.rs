pub mod ssl_probe;
pub mod view;

pub use crate::domain::model::{Account, IndexView, Payment};
pub use crate::domain::ports::{
    AccountStore, PaymentSource, ProbeOutput, RuntimeEnv, VersionCommand,
};
pub use crate::utils::error::Result;
