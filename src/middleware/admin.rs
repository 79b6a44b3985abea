use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header,
    web, Error,
};
use futures_util::future::LocalBoxFuture;
use secrecy::ExposeSecret;
use std::{
    future::{ready, Ready},
    rc::Rc,
};

use crate::config::settings::AdminSettings;

/// Extract and check the admin bearer token of a request
pub fn validate_admin_token(req: &ServiceRequest) -> Result<(), Error> {
    let admin_settings = req.app_data::<web::Data<AdminSettings>>()
        .ok_or_else(|| ErrorUnauthorized("Admin settings not found"))?;

    let auth_header = req.headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ErrorUnauthorized("No authorization header"))?
        .to_str()
        .map_err(|_| ErrorUnauthorized("Invalid authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ErrorUnauthorized("Invalid authorization header format"))?;

    let expected = admin_settings.api_token.expose_secret();
    if token.is_empty() || token != expected {
        return Err(ErrorUnauthorized("Invalid token"));
    }

    Ok(())
}

pub struct AdminMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AdminMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AdminMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AdminMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        if let Err(e) = validate_admin_token(&req) {
            tracing::warn!("Rejected admin request to {}: {}", req.path(), e);
            return Box::pin(async move { Err(e) });
        }

        Box::pin(async move {
            let res = service.call(req).await?;
            Ok(res)
        })
    }
}
