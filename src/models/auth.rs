//! Session identity backed by a JWT issued by the external auth provider.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpRequest, web};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

/// JWT claims of the signed-in user. Extracting this type from a request
/// fails with 401 when the session cookie is absent or the token does not
/// verify, which the redirect middleware turns into a trip to the sign-in
/// page.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub exp: usize,
}

impl AuthenticatedUser {
    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let decoded = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(decoded.claims)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let Some(config) = req.app_data::<web::Data<ServerConfig>>() else {
            return ready(Err(ErrorUnauthorized("server config missing")));
        };

        let identity = match Identity::from_request(req, payload).into_inner() {
            Ok(identity) => identity,
            Err(_) => return ready(Err(ErrorUnauthorized("no session"))),
        };

        let token = match identity.id() {
            Ok(token) => token,
            Err(_) => return ready(Err(ErrorUnauthorized("no session"))),
        };

        match Self::from_jwt(&token, &config.secret) {
            Ok(user) => ready(Ok(user)),
            Err(e) => {
                log::debug!("Rejecting session token: {e}");
                ready(Err(ErrorUnauthorized("invalid session")))
            }
        }
    }
}
