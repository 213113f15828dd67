use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = haa::cli::Cli::parse();
    let exit_code = haa::run(cli).await;
    std::process::exit(exit_code);
}
