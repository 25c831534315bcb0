//! AI insight features: a strategic summary of the client base and
//! best-effort generation of sample clients. Both are advisory, so gateway
//! failures degrade to fallback output instead of failing the page.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::client::{Client, NewClient};
use crate::gemini::{GenerationResult, GenerativeGateway};
use crate::repository::cache::ClientCache;
use crate::repository::{ClientReader, ClientWriter};
use crate::services::ServiceResult;

/// Returned when there is nothing to summarize; the gateway is not called.
pub const NO_CLIENTS_MESSAGE: &str = "Nenhum cliente para analisar.";
/// Returned when the gateway answered without any text.
pub const FALLBACK_MESSAGE: &str = "Não foi possível gerar análise.";
/// How many fictitious clients a single sample request asks for.
pub const SAMPLE_CLIENT_COUNT: usize = 5;

/// Subset of client fields shared with the gateway. Contact details are
/// deliberately left out of the prompt.
#[derive(Serialize)]
struct ClientProfile<'a> {
    name: &'a str,
    company: &'a str,
    notes: Option<&'a str>,
}

/// A fictitious client as generated by the structured-schema call. The
/// status value is constrained by prompt instruction, not by the schema.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SampleClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: String,
    pub notes: String,
}

impl From<SampleClient> for NewClient {
    fn from(sample: SampleClient) -> Self {
        // The model occasionally strays from the instructed status values;
        // samples are a convenience, so unknown ones fall back to active.
        let status = sample.status.parse().unwrap_or_default();
        NewClient::new(
            sample.name,
            sample.email,
            sample.phone,
            sample.company,
            status,
            Some(sample.notes),
        )
    }
}

fn summary_prompt(clients: &[Client]) -> String {
    let profiles: Vec<ClientProfile> = clients
        .iter()
        .map(|c| ClientProfile {
            name: &c.name,
            company: &c.company,
            notes: c.notes.as_deref(),
        })
        .collect();
    let serialized = serde_json::to_string(&profiles).unwrap_or_else(|_| "[]".to_string());
    format!(
        "Analise os seguintes perfis de clientes e forneça um resumo executivo \
         estratégico de 3 parágrafos sobre as oportunidades de negócio: {serialized}"
    )
}

fn sample_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "email": { "type": "STRING" },
                "phone": { "type": "STRING" },
                "company": { "type": "STRING" },
                "status": {
                    "type": "STRING",
                    "description": "Deve ser 'active', 'inactive' ou 'pending'"
                },
                "notes": { "type": "STRING" }
            },
            "required": ["name", "email", "phone", "company", "status", "notes"]
        }
    })
}

/// Produces a three-paragraph executive summary of the client base. An
/// empty list short-circuits without a network call; a gateway reply with
/// no text becomes the fixed fallback message.
pub async fn analyze_client_base<G>(gateway: &G, clients: &[Client]) -> GenerationResult<String>
where
    G: GenerativeGateway + ?Sized,
{
    if clients.is_empty() {
        return Ok(NO_CLIENTS_MESSAGE.to_string());
    }

    let prompt = summary_prompt(clients);
    let text = gateway.generate_text(&prompt).await?;
    Ok(text.unwrap_or_else(|| FALLBACK_MESSAGE.to_string()))
}

/// Asks the gateway for [`SAMPLE_CLIENT_COUNT`] fictitious clients. A reply
/// that does not parse as the declared schema yields an empty list rather
/// than an error.
pub async fn generate_sample_clients<G>(gateway: &G) -> GenerationResult<Vec<SampleClient>>
where
    G: GenerativeGateway + ?Sized,
{
    let prompt = format!(
        "Gere uma lista de {SAMPLE_CLIENT_COUNT} clientes fictícios brasileiros para um \
         sistema de CRM. Inclua nome, email, telefone, empresa e uma nota curta sobre o \
         perfil deles."
    );
    let body = gateway.generate_json(&prompt, &sample_schema()).await?;

    match serde_json::from_str(&body) {
        Ok(samples) => Ok(samples),
        Err(err) => {
            log::error!("Failed to parse sample clients: {err}");
            Ok(Vec::new())
        }
    }
}

/// Generates sample clients and persists them, refreshing the cache once
/// afterwards. Returns how many records were inserted.
pub async fn seed_sample_clients<G, R>(
    gateway: &G,
    repo: &R,
    cache: &ClientCache,
) -> ServiceResult<usize>
where
    G: GenerativeGateway + ?Sized,
    R: ClientReader + ClientWriter + ?Sized,
{
    let samples = generate_sample_clients(gateway).await?;
    if samples.is_empty() {
        return Ok(0);
    }

    let mut inserted = 0;
    for sample in samples {
        repo.create_client(&NewClient::from(sample))?;
        inserted += 1;
    }
    cache.refresh(repo)?;
    Ok(inserted)
}
