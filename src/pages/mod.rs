pub mod admin;
pub mod admin_leave;
pub mod admin_statistics;
pub mod admin_users;
pub mod dashboard;
pub mod home;
pub mod leave;
pub mod leave_history;
pub mod leave_request;
pub mod login;
pub mod profile;
pub mod register;

pub use admin::*;
pub use admin_leave::*;
pub use admin_statistics::*;
pub use admin_users::*;
pub use dashboard::*;
pub use home::*;
pub use leave::*;
pub use leave_history::*;
pub use leave_request::*;
pub use login::*;
pub use profile::*;
pub use register::*;
