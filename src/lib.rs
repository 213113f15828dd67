pub mod api;
pub mod auth;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

use api::{Connection, HaClient, ServiceData};
use cli::output::print_error;
use command::{Command, Request};
use config::RuntimeConfig;
use error::AppError;

/// Exit code when a service call is answered with anything but 200/201.
pub const EXIT_SERVICE_FAILURE: i32 = 3;

pub async fn run(cli_args: cli::Cli) -> i32 {
    logging::init(cli_args.verbose);

    let config = RuntimeConfig::from_cli(&cli_args);

    match dispatch(&cli_args, &config).await {
        Ok(true) => 0,
        Ok(false) => EXIT_SERVICE_FAILURE,
        Err(err) => {
            print_error(&err);
            err.exit_code()
        }
    }
}

/// Run one command. `Ok(false)` means a service call was refused by the server.
async fn dispatch(cli_args: &cli::Cli, config: &RuntimeConfig) -> Result<bool, AppError> {
    // Arguments are checked before the token file or the network is touched.
    let command = Command::parse(&cli_args.args)?;
    let data = ServiceData::from_flat(&cli_args.data)?;

    let token = auth::resolve_token(&cli_args.token_spec())?;
    let connection = Connection::new(&cli_args.host, cli_args.port, &token, config.verbose)?;
    let client = HaClient::new(&connection)?;

    match command.request(cli_args.entity_id.as_deref(), &data) {
        Request::Get { path, shape } => {
            cli::read::handle_get(&client, &command, &path, shape, config).await?;
            Ok(true)
        }
        Request::GetServiceDomain { domain } => {
            cli::read::handle_service_domain(&client, &domain, config).await?;
            Ok(true)
        }
        Request::Post(call) => cli::service::handle(&client, &call).await,
    }
}
