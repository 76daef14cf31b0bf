use crate::{
    api::{
        asset, attendance, company_info, core_value, employee, events, feed, health,
        leave_request, notification, on_duty, referral, regularization, requests, resignation,
        ticket, users, wall_of_fame,
    },
    auth::handlers,
    config::Config,
    error::{json_error_handler, query_error_handler},
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::{Context, Result};
use std::sync::Arc;

type Limiter = Arc<Governor<PeerIpKeyExtractor, NoOpMiddleware>>;

/// Per-peer-IP limiters. Built once so every worker shares the same buckets.
#[derive(Clone)]
pub struct RateLimiters {
    login: Limiter,
    register: Limiter,
    forgot_password: Limiter,
    api: Limiter,
}

fn build_limiter(requests_per_min: u32) -> Result<Limiter> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);

    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .context("invalid rate limiter settings")?;

    Ok(Arc::new(Governor::new(&cfg)))
}

impl RateLimiters {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            login: build_limiter(config.rate_login_per_min)?,
            register: build_limiter(config.rate_register_per_min)?,
            // shares the login budget
            forgot_password: build_limiter(config.rate_login_per_min)?,
            api: build_limiter(config.rate_api_per_min)?,
        })
    }
}

pub fn configure(cfg: &mut web::ServiceConfig, limiters: RateLimiters) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler));

    cfg.route("/", web::get().to(health::check_status));

    // Auth routes, each with its own budget
    cfg.service(
        web::resource("/login")
            .wrap(limiters.login.clone())
            .route(web::post().to(handlers::login)),
    )
    .service(
        web::resource("/register")
            .wrap(limiters.register.clone())
            .route(web::post().to(handlers::register)),
    )
    .service(
        web::resource("/forgot-password")
            .wrap(limiters.forgot_password.clone())
            .route(web::post().to(handlers::forgot_password)),
    );

    cfg.service(
        web::scope("")
            .wrap(limiters.api)
            // users
            .route("/users", web::get().to(users::list_users))
            .route("/users/{id}", web::get().to(users::get_user))
            // attendance
            .route("/check-attendance", web::post().to(attendance::check_attendance))
            .route("/punch-in", web::post().to(attendance::punch_in))
            .route("/punch-out", web::post().to(attendance::punch_out))
            .route(
                "/check-PreviousDayAttendance",
                web::post().to(attendance::previous_day_attendance),
            )
            // leave
            .route("/check-leave-balance", web::post().to(leave_request::check_leave_balance))
            .route("/apply-leave", web::post().to(leave_request::apply_leave))
            .route("/leave/requests", web::get().to(leave_request::leave_requests))
            .route("/leave/today", web::get().to(leave_request::people_on_leave_today))
            .route("/leave-balance", web::get().to(leave_request::leave_balance))
            // regularization; the misspelled path is kept for existing clients
            .service(
                web::resource(["/regularization", "/regularlarization"])
                    .route(web::post().to(regularization::apply_regularization))
                    .route(web::get().to(regularization::list_regularizations)),
            )
            // status views
            .route("/pending-requests", web::get().to(requests::pending_requests))
            .route("/approved-requests", web::get().to(requests::approved_requests))
            .route("/rejected-requests", web::get().to(requests::rejected_requests))
            .route("/draft-requests", web::get().to(requests::draft_requests))
            .route("/undo-requests", web::get().to(requests::undo_requests))
            // assets
            .route("/asset/allot", web::post().to(asset::allot_asset))
            .route("/user/{userId}/assets", web::get().to(asset::user_assets))
            .route("/assets", web::get().to(asset::all_assets))
            // employees and events
            .route("/add_new_employee", web::post().to(employee::create_employee))
            .route("/new_employees", web::get().to(employee::list_employees))
            .route("/new_employee/{id}", web::get().to(employee::get_employee))
            .route("/check-birthdays", web::get().to(events::check_birthdays))
            .route("/year-celebration", web::get().to(events::check_anniversary))
            // feed
            .route("/add_post", web::post().to(feed::add_post))
            .route("/getAll_feed", web::get().to(feed::all_feeds))
            .route("/feeds/user/{user_id}", web::get().to(feed::feeds_by_user))
            // referrals
            .route("/referral", web::post().to(referral::add_referral))
            .route("/referrals", web::get().to(referral::all_referrals))
            // company
            .service(
                web::resource("/core-values")
                    .route(web::post().to(core_value::add_core_value))
                    .route(web::get().to(core_value::all_core_values)),
            )
            .route("/company-info", web::post().to(company_info::upsert_company_info))
            .route("/company-info/{type}", web::get().to(company_info::get_company_info))
            // wall of fame
            .route("/wall-of-fame/post", web::post().to(wall_of_fame::add_entry))
            .route("/wall-of-fame", web::get().to(wall_of_fame::all_entries))
            .route("/wall-of-fame/{user_id}", web::get().to(wall_of_fame::entries_by_user))
            // tickets
            .service(
                web::resource("/tickets")
                    .route(web::post().to(ticket::create_ticket))
                    .route(web::get().to(ticket::all_tickets)),
            )
            .route("/tickets/status/{status}", web::get().to(ticket::tickets_by_status))
            // resignation
            .service(
                web::resource("/resignation")
                    .route(web::post().to(resignation::create_resignation))
                    .route(web::get().to(resignation::all_resignations)),
            )
            // on duty
            .service(
                web::resource("/on-duty")
                    .route(web::post().to(on_duty::create_on_duty))
                    .route(web::get().to(on_duty::all_on_duty)),
            )
            // notifications
            .route("/create-notification", web::post().to(notification::create_notification))
            .route("/notifications", web::get().to(notification::all_notifications)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budget_still_builds_a_limiter() {
        assert!(build_limiter(0).is_ok());
    }

    #[test]
    fn high_budget_builds_a_limiter() {
        assert!(build_limiter(120_000).is_ok());
    }
}
