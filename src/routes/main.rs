use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::db::DbPool;
use crate::forms::client::{DeleteClientForm, SaveClientForm};
use crate::forms::main::AddClientForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::cache::ClientCache;
use crate::repository::client::DieselClientRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::client as client_service;
use crate::services::main as main_service;

#[get("/")]
pub async fn show_index(
    user: AuthenticatedUser,
    pool: web::Data<DbPool>,
    cache: web::Data<ClientCache>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let repo = DieselClientRepository::new(&pool);

    // A failed refresh keeps showing the last known list instead of a
    // blank dashboard.
    let page = match main_service::load_index_page(&repo, &cache) {
        Ok(page) => page,
        Err(e) => {
            log::error!("Failed to refresh clients: {e}");
            FlashMessage::error("Erro ao carregar clientes.").send();
            main_service::cached_index_page(&cache)
        }
    };

    let mut context = base_context(&flash_messages, &user, "index");
    context.insert("clients", &page.clients);
    context.insert("stats", &page.stats);

    render_template(&tera, "main/index.html", &context)
}

#[post("/client/add")]
pub async fn add_client(
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
    cache: web::Data<ClientCache>,
    web::Form(form): web::Form<AddClientForm>,
) -> impl Responder {
    let repo = DieselClientRepository::new(&pool);

    match client_service::add_client(&repo, &cache, form) {
        Ok(()) => FlashMessage::success("Cliente cadastrado.").send(),
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(e) => {
            log::error!("Failed to add client: {e}");
            FlashMessage::error("Erro ao cadastrar cliente.").send();
        }
    }

    redirect("/")
}

#[post("/client/save")]
pub async fn save_client(
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
    cache: web::Data<ClientCache>,
    web::Form(form): web::Form<SaveClientForm>,
) -> impl Responder {
    let repo = DieselClientRepository::new(&pool);

    match client_service::save_client(&repo, &cache, &form) {
        Ok(()) => FlashMessage::success("Cliente atualizado.").send(),
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(e) => {
            log::error!("Failed to update client: {e}");
            FlashMessage::error("Erro ao atualizar cliente.").send();
        }
    }

    redirect("/")
}

#[post("/client/delete")]
pub async fn delete_client(
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
    cache: web::Data<ClientCache>,
    web::Form(form): web::Form<DeleteClientForm>,
) -> impl Responder {
    let repo = DieselClientRepository::new(&pool);

    match client_service::remove_client(&repo, &cache, form.id) {
        Ok(()) => FlashMessage::success("Cliente excluído.").send(),
        Err(e) => {
            log::error!("Failed to delete client: {e}");
            FlashMessage::error("Erro ao excluir cliente.").send();
        }
    }

    redirect("/")
}
