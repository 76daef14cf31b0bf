pub mod asset;
pub mod attendance;
pub mod company_info;
pub mod core_value;
pub mod employee;
pub mod events;
pub mod feed;
pub mod health;
pub mod leave_request;
pub mod notification;
pub mod on_duty;
pub mod referral;
pub mod regularization;
pub mod requests;
pub mod resignation;
pub mod ticket;
pub mod users;
pub mod wall_of_fame;
