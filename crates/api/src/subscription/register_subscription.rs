use crate::error::HomeboardError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use homeboard_api_structs::register_subscription::*;
use homeboard_domain::{InvalidTransportError, PushSubscription, PushTransportInfo};
use homeboard_infra::HomeboardContext;

pub async fn register_subscription_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<HomeboardContext>,
) -> Result<HttpResponse, HomeboardError> {
    let body = body.0;
    let usecase = RegisterSubscriptionUseCase {
        owner_id: body.owner_id,
        transport: body.subscription,
    };

    execute(usecase, &ctx)
        .await
        .map(|sub| HttpResponse::Ok().json(APIResponse::new(sub)))
        .map_err(HomeboardError::from)
}

/// Stores the push transport of a device for the person that registered it.
/// Registering the same device again replaces its keys.
#[derive(Debug)]
pub struct RegisterSubscriptionUseCase {
    pub owner_id: String,
    pub transport: PushTransportInfo,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingOwner,
    InvalidTransport(InvalidTransportError),
    StorageError,
}

impl From<UseCaseError> for HomeboardError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingOwner => {
                Self::BadClientData("A push subscription needs an owner".into())
            }
            UseCaseError::InvalidTransport(e) => {
                Self::BadClientData(format!("Invalid push subscription: {}", e))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RegisterSubscriptionUseCase {
    type Response = PushSubscription;

    type Error = UseCaseError;

    const NAME: &'static str = "RegisterSubscription";

    async fn execute(&mut self, ctx: &HomeboardContext) -> Result<Self::Response, Self::Error> {
        let owner_id = self.owner_id.trim();
        if owner_id.is_empty() {
            return Err(UseCaseError::MissingOwner);
        }
        self.transport
            .validate()
            .map_err(UseCaseError::InvalidTransport)?;

        let sub = PushSubscription::new(owner_id.to_string(), self.transport.clone());
        ctx.repos
            .subscriptions
            .upsert(&sub)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
