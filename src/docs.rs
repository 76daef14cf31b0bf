use crate::api::{
    asset::AllotAsset,
    attendance::{AttendanceFlag, CheckAttendance, UserRef},
    company_info::UpsertCompanyInfo,
    core_value::CreateCoreValue,
    employee::CreateEmployee,
    feed::CreatePost,
    leave_request::{CreateLeave, LeaveDeduction},
    notification::CreateNotification,
    on_duty::CreateOnDuty,
    referral::CreateReferral,
    regularization::CreateRegularization,
    resignation::CreateResignation,
    ticket::CreateTicket,
    wall_of_fame::CreateEntry,
};
use crate::auth::handlers::LoginResponse;
use crate::model::{
    asset::{Asset, UserAsset},
    attendance::PunchTimes,
    company_info::CompanyInfo,
    core_value::CoreValue,
    employee::Employee,
    feed::FeedPost,
    leave_request::LeaveRequest,
    notification::Notification,
    on_duty::OnDutyRequest,
    referral::Referral,
    regularization::Regularization,
    resignation::ResignationRequest,
    ticket::Ticket,
    user::User,
    wall_of_fame::WallOfFameEntry,
};
use crate::models::{ForgotPasswordReq, LoginReqDto, RegisterReq};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HR Portal API",
        version = "1.0.0",
        description = r#"
## HR Portal

Backend for an employee self-service portal.

### Key Features
- **Accounts**: registration, login, password reset tokens
- **Attendance**: punch-in/punch-out, overtime flag, regularization requests
- **Leave**: apply for leave, monthly allowance, leave balance ledger
- **People**: employee records, birthdays and work anniversaries
- **Workplace**: assets, tickets, resignations, on-duty requests
- **Culture**: feed, wall of fame, referrals, core values, company info, notifications

### Response Format
- JSON bodies; every error is `{"message": "..."}`
- Request statuses are stored as `Pending` and read through status views

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::health::check_status,

        crate::auth::handlers::register,
        crate::auth::handlers::login,
        crate::auth::handlers::forgot_password,

        crate::api::users::list_users,
        crate::api::users::get_user,

        crate::api::attendance::check_attendance,
        crate::api::attendance::punch_in,
        crate::api::attendance::punch_out,
        crate::api::attendance::previous_day_attendance,

        crate::api::leave_request::check_leave_balance,
        crate::api::leave_request::apply_leave,
        crate::api::leave_request::leave_requests,
        crate::api::leave_request::people_on_leave_today,
        crate::api::leave_request::leave_balance,

        crate::api::regularization::apply_regularization,
        crate::api::regularization::list_regularizations,

        crate::api::requests::pending_requests,
        crate::api::requests::approved_requests,
        crate::api::requests::rejected_requests,
        crate::api::requests::draft_requests,
        crate::api::requests::undo_requests,

        crate::api::asset::allot_asset,
        crate::api::asset::user_assets,
        crate::api::asset::all_assets,

        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::events::check_birthdays,
        crate::api::events::check_anniversary,

        crate::api::feed::add_post,
        crate::api::feed::all_feeds,
        crate::api::feed::feeds_by_user,

        crate::api::referral::add_referral,
        crate::api::referral::all_referrals,

        crate::api::core_value::add_core_value,
        crate::api::core_value::all_core_values,
        crate::api::company_info::upsert_company_info,
        crate::api::company_info::get_company_info,

        crate::api::wall_of_fame::add_entry,
        crate::api::wall_of_fame::all_entries,
        crate::api::wall_of_fame::entries_by_user,

        crate::api::ticket::create_ticket,
        crate::api::ticket::all_tickets,
        crate::api::ticket::tickets_by_status,

        crate::api::resignation::create_resignation,
        crate::api::resignation::all_resignations,

        crate::api::on_duty::create_on_duty,
        crate::api::on_duty::all_on_duty,

        crate::api::notification::create_notification,
        crate::api::notification::all_notifications
    ),
    components(
        schemas(
            RegisterReq,
            LoginReqDto,
            ForgotPasswordReq,
            LoginResponse,
            User,
            CheckAttendance,
            AttendanceFlag,
            UserRef,
            PunchTimes,
            CreateLeave,
            LeaveDeduction,
            LeaveRequest,
            CreateRegularization,
            Regularization,
            AllotAsset,
            Asset,
            UserAsset,
            CreateEmployee,
            Employee,
            CreatePost,
            FeedPost,
            CreateReferral,
            Referral,
            CreateCoreValue,
            CoreValue,
            UpsertCompanyInfo,
            CompanyInfo,
            CreateEntry,
            WallOfFameEntry,
            CreateTicket,
            Ticket,
            CreateResignation,
            ResignationRequest,
            CreateOnDuty,
            OnDutyRequest,
            CreateNotification,
            Notification
        )
    ),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Auth", description = "Registration, login and password reset"),
        (name = "Users", description = "User lookup"),
        (name = "Attendance", description = "Punches and overtime"),
        (name = "Leave", description = "Leave requests and balances"),
        (name = "Regularization", description = "Attendance corrections"),
        (name = "Requests", description = "Leave and regularization requests by status"),
        (name = "Assets", description = "Asset inventory and allotment"),
        (name = "Employee", description = "Employee records"),
        (name = "Events", description = "Birthdays and work anniversaries"),
        (name = "Feed", description = "Home feed posts"),
        (name = "Referral", description = "Candidate referrals"),
        (name = "Company", description = "Core values and company info"),
        (name = "Wall of Fame", description = "Recognition entries"),
        (name = "Tickets", description = "Helpdesk tickets"),
        (name = "Resignation", description = "Resignation requests"),
        (name = "On Duty", description = "On-duty requests"),
        (name = "Notifications", description = "In-process notifications"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_public_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/register", "/check-attendance", "/company-info/{type}", "/notifications"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
