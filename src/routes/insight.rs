use actix_web::{Responder, post, web};
use actix_web_flash_messages::FlashMessage;
use tera::{Context, Tera};

use crate::db::DbPool;
use crate::gemini::GeminiClient;
use crate::models::auth::AuthenticatedUser;
use crate::repository::cache::ClientCache;
use crate::repository::client::DieselClientRepository;
use crate::routes::{redirect, render_template};
use crate::services::insight as insight_service;

/// Returns the AI summary as an HTML fragment the dashboard swaps in. The
/// summary reads the cached list and never mutates it.
#[post("/ai/analyze")]
pub async fn analyze_clients(
    _user: AuthenticatedUser,
    gemini: web::Data<GeminiClient>,
    cache: web::Data<ClientCache>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let clients = cache.snapshot();

    let mut context = Context::new();
    match insight_service::analyze_client_base(gemini.get_ref(), &clients).await {
        Ok(summary) => {
            let paragraphs: Vec<&str> = summary
                .split("\n\n")
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .collect();
            context.insert("paragraphs", &paragraphs);
            context.insert("is_error", &false);
        }
        Err(e) => {
            log::error!("Failed to analyze client base: {e}");
            context.insert("paragraphs", &["Erro ao analisar dados."]);
            context.insert("is_error", &true);
        }
    }

    render_template(&tera, "main/analysis.html", &context)
}

/// Seeds the base with AI-generated sample clients. Best effort: a reply
/// that fails to parse simply inserts nothing.
#[post("/ai/samples")]
pub async fn generate_samples(
    _user: AuthenticatedUser,
    gemini: web::Data<GeminiClient>,
    pool: web::Data<DbPool>,
    cache: web::Data<ClientCache>,
) -> impl Responder {
    let repo = DieselClientRepository::new(&pool);

    match insight_service::seed_sample_clients(gemini.get_ref(), &repo, &cache).await {
        Ok(0) => FlashMessage::warning("Nenhum cliente de exemplo foi gerado.").send(),
        Ok(count) => FlashMessage::success(format!("{count} clientes de exemplo gerados.")).send(),
        Err(e) => {
            log::error!("Failed to generate sample clients: {e}");
            FlashMessage::error("Erro ao gerar clientes de exemplo.").send();
        }
    }

    redirect("/")
}
