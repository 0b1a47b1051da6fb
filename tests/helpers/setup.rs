use chrono::TimeZone;
use chrono_tz::Europe::Budapest;
use homeboard_api::Application;
use homeboard_infra::{Config, FixedSys, HomeboardContext, RecordingPushTransport};
use homeboard_sdk::HomeboardSDK;
use std::sync::Arc;

pub const CRON_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub ctx: HomeboardContext,
    pub push: Arc<RecordingPushTransport>,
    pub sys: Arc<FixedSys>,
    pub address: String,
}

impl TestApp {
    /// Client that is allowed to run ticks and ad hoc sends
    pub fn cron_sdk(&self) -> HomeboardSDK {
        HomeboardSDK::new(self.address.clone(), Some(CRON_SECRET))
    }
}

/// Millis of a wall clock time in the household timezone
pub fn budapest_ts(date: (i32, u32, u32), time: (u32, u32)) -> i64 {
    Budapest
        .with_ymd_and_hms(date.0, date.1, date.2, time.0, time.1, 0)
        .unwrap()
        .timestamp_millis()
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, HomeboardSDK) {
    let config = Config {
        port: 0, // Random port
        cron_secret: CRON_SECRET.into(),
        ..Default::default()
    };
    let push = Arc::new(RecordingPushTransport::new());
    let sys = Arc::new(FixedSys::new(budapest_ts((2026, 10, 16), (12, 0))));
    let mut ctx = HomeboardContext::create_inmemory(config, push.clone());
    ctx.sys = sys.clone();

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = HomeboardSDK::new::<String>(address.clone(), None);
    let app = TestApp {
        ctx,
        push,
        sys,
        address,
    };
    (app, sdk)
}
