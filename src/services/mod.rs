//! Services module
//!
//! One service per resource family. Every method is a thin call into
//! [`Client::send`](crate::Client::send) with a fixed verb, resource and
//! path parameter order: profile id first, then parent ids, then the
//! child id, then the body and finally the list options.

mod base_service;
mod device_license_service;
mod element_service;
mod media_service;
mod notification_service;
mod option_list_service;
mod page_group_service;
mod page_service;
mod profile_service;
mod record_service;
mod user_group_service;
mod user_service;

pub use base_service::BaseService;
pub use device_license_service::DeviceLicenseService;
pub use element_service::ElementService;
pub use media_service::MediaService;
pub use notification_service::NotificationService;
pub use option_list_service::OptionListService;
pub use page_group_service::PageGroupService;
pub use page_service::PageService;
pub use profile_service::ProfileService;
pub use record_service::RecordService;
pub use user_group_service::UserGroupService;
pub use user_service::UserService;
