use actix_identity::Identity;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::{Context, Tera};

use crate::middleware::SIGNIN_PATH;
use crate::models::config::ServerConfig;
use crate::routes::{alert_level_to_str, redirect, render_template};

/// Sign-in landing page. Authentication itself is handled by the external
/// provider; this page only points the user at it.
#[get("/auth/signin")]
pub async fn show_signin(
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("auth_service_url", &server_config.auth_service_url);

    render_template(&tera, "auth/signin.html", &context)
}

/// Fire-and-forget sign-out: drop the identity cookie and go back to the
/// sign-in page.
#[post("/auth/signout")]
pub async fn signout(user: Identity) -> impl Responder {
    user.logout();
    redirect(SIGNIN_PATH)
}
