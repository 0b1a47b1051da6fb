mod register_subscription;

use actix_web::web;
use register_subscription::register_subscription_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/push/subscriptions",
        web::post().to(register_subscription_controller),
    );
}
