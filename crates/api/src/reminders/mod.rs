mod send_reminders;

use actix_web::web;
use send_reminders::send_reminders_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Schedulers differ in the method they trigger with
    cfg.route("/push/cron", web::get().to(send_reminders_controller));
    cfg.route("/push/cron", web::post().to(send_reminders_controller));
}
