//! Mapping from positional arguments to exactly one API request.
//!
//! | command                         | request                              |
//! |---------------------------------|--------------------------------------|
//! | (none)                          | GET ``                               |
//! | `config`                        | GET `config`                         |
//! | `events`                        | GET `events`                         |
//! | `states` / `state` [entity]     | GET `states` or `states/<entity>`    |
//! | `services`                      | GET `services`                       |
//! | `services <domain>`             | GET `services`, one domain selected  |
//! | `services <d> <s> [k v]...`     | POST `services/<d>/<s>`              |
//! | `toggle`/`turn_on`/`turn_off`   | POST `services/homeassistant/<cmd>`  |
//! | `shell_command <name>`          | POST `services/shell_command/<name>` |
//! | `remote <entity> <command>`     | POST `services/remote/send_command`  |

use crate::api::service_call::{ServiceCall, ServiceData};
use crate::error::AppError;

const CONFIG: &str = "config";
const EVENTS: &str = "events";
const STATES: &str = "states";
const STATE: &str = "state";
const SERVICES: &str = "services";
const TOGGLE: &str = "toggle";
const TURN_ON: &str = "turn_on";
const TURN_OFF: &str = "turn_off";
const SHELL_COMMAND: &str = "shell_command";
const REMOTE: &str = "remote";

const HOMEASSISTANT_DOMAIN: &str = "homeassistant";
const REMOTE_DOMAIN: &str = "remote";
const SEND_COMMAND: &str = "send_command";
const COMMAND_KEY: &str = "command";

/// Expected JSON shape of a read endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Object,
    Array,
}

/// Entity-level actions of the `homeassistant` domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HassAction {
    Toggle,
    TurnOn,
    TurnOff,
}

impl HassAction {
    pub fn service(&self) -> &'static str {
        match self {
            HassAction::Toggle => TOGGLE,
            HassAction::TurnOn => TURN_ON,
            HassAction::TurnOff => TURN_OFF,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Root,
    Config,
    Events,
    States { entity_id: Option<String> },
    Services,
    ServiceDomain { domain: String },
    CallService {
        domain: String,
        service: String,
        data: ServiceData,
    },
    HomeAssistant {
        action: HassAction,
        entity_id: Option<String>,
    },
    ShellCommand { name: String },
    Remote { entity: String, command: String },
}

/// What the dispatcher asks the HTTP client to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Get { path: String, shape: Shape },
    /// GET `services` and keep the entry for one domain.
    GetServiceDomain { domain: String },
    Post(ServiceCall),
}

impl Command {
    /// Parse the positional arguments. An empty list is the API root.
    pub fn parse(args: &[String]) -> Result<Self, AppError> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(Command::Root);
        };

        match name.as_str() {
            CONFIG => {
                expect_at_most(name, rest, 0)?;
                Ok(Command::Config)
            }
            EVENTS => {
                expect_at_most(name, rest, 0)?;
                Ok(Command::Events)
            }
            STATES | STATE => {
                expect_at_most(name, rest, 1)?;
                Ok(Command::States {
                    entity_id: rest.first().cloned(),
                })
            }
            SERVICES => match rest {
                [] => Ok(Command::Services),
                [domain] => Ok(Command::ServiceDomain {
                    domain: domain.clone(),
                }),
                [domain, service, tail @ ..] => Ok(Command::CallService {
                    domain: domain.clone(),
                    service: service.clone(),
                    data: ServiceData::from_flat(tail)?,
                }),
            },
            TOGGLE | TURN_ON | TURN_OFF => {
                expect_at_most(name, rest, 1)?;
                let action = match name.as_str() {
                    TOGGLE => HassAction::Toggle,
                    TURN_ON => HassAction::TurnOn,
                    _ => HassAction::TurnOff,
                };
                Ok(Command::HomeAssistant {
                    action,
                    entity_id: rest.first().cloned(),
                })
            }
            SHELL_COMMAND => match rest {
                [command] => Ok(Command::ShellCommand {
                    name: command.clone(),
                }),
                _ => Err(AppError::InvalidInput(
                    "Usage: shell_command <name>".into(),
                )),
            },
            REMOTE => match rest {
                [entity, command] if !entity.is_empty() && !command.is_empty() => {
                    Ok(Command::Remote {
                        entity: entity.clone(),
                        command: command.clone(),
                    })
                }
                [_, _] => Err(AppError::InvalidInput(
                    "remote needs a non-empty entity and command".into(),
                )),
                _ => Err(AppError::InvalidInput(
                    "Usage: remote <entity> <command>".into(),
                )),
            },
            other => Err(AppError::UnknownCommand(other.to_string())),
        }
    }

    /// Build the request for this command.
    ///
    /// `entity_option` is the `--entity` value; a positional entity wins over it.
    /// `data` holds the global `--data` pairs, added to every service call.
    pub fn request(&self, entity_option: Option<&str>, data: &ServiceData) -> Request {
        let pick_entity = |positional: &Option<String>| {
            positional
                .clone()
                .or_else(|| entity_option.map(str::to_string))
        };

        match self {
            Command::Root => get("", Shape::Object),
            Command::Config => get(CONFIG, Shape::Object),
            Command::Events => get(EVENTS, Shape::Array),
            Command::States { entity_id } => match pick_entity(entity_id) {
                Some(entity) if !entity.is_empty() => {
                    get(&format!("{}/{}", STATES, entity), Shape::Object)
                }
                _ => get(STATES, Shape::Array),
            },
            Command::Services => get(SERVICES, Shape::Array),
            Command::ServiceDomain { domain } => Request::GetServiceDomain {
                domain: domain.clone(),
            },
            Command::CallService {
                domain,
                service,
                data: trailing,
            } => Request::Post(
                ServiceCall::new(domain.as_str(), service.as_str())
                    .with_entity(entity_option.map(str::to_string))
                    .with_data(data)
                    .with_data(trailing),
            ),
            Command::HomeAssistant { action, entity_id } => Request::Post(
                ServiceCall::new(HOMEASSISTANT_DOMAIN, action.service())
                    .with_entity(pick_entity(entity_id))
                    .with_data(data),
            ),
            Command::ShellCommand { name } => {
                Request::Post(ServiceCall::new(SHELL_COMMAND, name.as_str()).with_data(data))
            }
            Command::Remote { entity, command } => {
                let mut body = ServiceData::new();
                body.insert(COMMAND_KEY, command.as_str());
                Request::Post(
                    ServiceCall::new(REMOTE_DOMAIN, SEND_COMMAND)
                        .with_entity(Some(qualify_entity(entity, REMOTE_DOMAIN)))
                        .with_data(&body)
                        .with_data(data),
                )
            }
        }
    }
}

fn get(path: &str, shape: Shape) -> Request {
    Request::Get {
        path: path.to_string(),
        shape,
    }
}

fn expect_at_most(name: &str, rest: &[String], max: usize) -> Result<(), AppError> {
    if rest.len() > max {
        return Err(AppError::InvalidInput(format!(
            "Too many arguments for '{}': {}",
            name,
            rest[max..].join(" ")
        )));
    }
    Ok(())
}

/// Prefix `domain.` unless `entity` is already qualified.
pub fn qualify_entity(entity: &str, domain: &str) -> String {
    if entity.contains('.') {
        entity.to_string()
    } else {
        format!("{}.{}", domain, entity)
    }
}
