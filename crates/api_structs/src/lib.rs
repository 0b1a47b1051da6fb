mod push;
mod reminders;
mod status;
mod subscription;

pub mod dtos {
    pub use crate::subscription::dtos::*;
}

pub use crate::push::api::*;
pub use crate::reminders::api::*;
pub use crate::status::api::*;
pub use crate::subscription::api::*;
