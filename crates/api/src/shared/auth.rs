use crate::error::HomeboardError;
use actix_web::HttpRequest;
use homeboard_infra::HomeboardContext;
use homeboard_utils::secrets_match;

fn parse_authtoken_header(token_header_value: &str) -> &str {
    let token = token_header_value.trim();
    token
        .strip_prefix("Bearer")
        .or_else(|| token.strip_prefix("bearer"))
        .map(str::trim)
        .unwrap_or(token)
}

/// Only callers knowing the configured cron secret may run a reminder tick
/// or push ad hoc notifications
pub fn protect_cron_route(
    req: &HttpRequest,
    ctx: &HomeboardContext,
) -> Result<(), HomeboardError> {
    let token = req
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(parse_authtoken_header);

    match token {
        Some(token) if secrets_match(&ctx.config.cron_secret, token) => Ok(()),
        Some(_) => Err(HomeboardError::Unauthorized(
            "Invalid secret provided in the authorization header".into(),
        )),
        None => Err(HomeboardError::Unauthorized(
            "Expected a bearer token in the authorization header".into(),
        )),
    }
}
