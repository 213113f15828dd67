use serde_json::Value;
use tabled::Tabled;

use crate::api::HaClient;
use crate::cli::output::{print_json, print_table};
use crate::command::{Command, Shape};
use crate::config::{OutputMode, RuntimeConfig};
use crate::error::AppError;
use crate::models::event::EventListener;
use crate::models::service::{find_domain, ServiceDomain};
use crate::models::state::EntityState;

const SERVICES_PATH: &str = "services";

#[derive(Tabled)]
struct StateRow {
    #[tabled(rename = "ENTITY")]
    entity_id: String,
    #[tabled(rename = "STATE")]
    state: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "LAST CHANGED")]
    last_changed: String,
}

#[derive(Tabled)]
struct ServiceRow {
    #[tabled(rename = "DOMAIN")]
    domain: String,
    #[tabled(rename = "SERVICES")]
    services: String,
}

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "EVENT")]
    event: String,
    #[tabled(rename = "LISTENERS")]
    listeners: u64,
}

/// GET one endpoint and print it.
pub async fn handle_get(
    client: &HaClient<'_>,
    command: &Command,
    path: &str,
    shape: Shape,
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    let value = match shape {
        Shape::Object => Value::Object(client.get_object(path).await?),
        Shape::Array => Value::Array(client.get_array(path).await?),
    };

    if config.output_mode == OutputMode::Table {
        if let Value::Array(items) = &value {
            match command {
                Command::States { .. } => return print_states(items),
                Command::Services => return print_services(items),
                Command::Events => return print_events(items),
                _ => {}
            }
        }
    }

    print_json(&value);
    Ok(())
}

/// GET `services` and print the entry of a single domain.
pub async fn handle_service_domain(
    client: &HaClient<'_>,
    domain: &str,
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    let services = client.get_array(SERVICES_PATH).await?;
    let entry = find_domain(&services, domain).ok_or_else(|| AppError::Api {
        status: 404,
        message: format!("Service domain not found: {}", domain),
    })?;

    if config.output_mode == OutputMode::Table {
        return print_services(std::slice::from_ref(entry));
    }

    print_json(entry);
    Ok(())
}

fn print_states(items: &[Value]) -> Result<(), AppError> {
    let states: Vec<EntityState> = serde_json::from_value(Value::Array(items.to_vec()))?;
    let rows: Vec<StateRow> = states
        .iter()
        .map(|s| StateRow {
            entity_id: s.entity_id.clone(),
            state: s.state.clone(),
            name: s.friendly_name().unwrap_or_default().to_string(),
            last_changed: s.last_changed.clone().unwrap_or_default(),
        })
        .collect();
    print_table(&rows);
    Ok(())
}

fn print_services(items: &[Value]) -> Result<(), AppError> {
    let domains: Vec<ServiceDomain> = serde_json::from_value(Value::Array(items.to_vec()))?;
    let rows: Vec<ServiceRow> = domains
        .iter()
        .map(|d| ServiceRow {
            domain: d.domain.clone(),
            services: d.service_names().join(", "),
        })
        .collect();
    print_table(&rows);
    Ok(())
}

fn print_events(items: &[Value]) -> Result<(), AppError> {
    let events: Vec<EventListener> = serde_json::from_value(Value::Array(items.to_vec()))?;
    let rows: Vec<EventRow> = events
        .into_iter()
        .map(|e| EventRow {
            event: e.event,
            listeners: e.listener_count,
        })
        .collect();
    print_table(&rows);
    Ok(())
}
