use catalog_admin::{cli, commands, config, error};
use clap::Parser;
use cli::{Cli, Commands};
use commands::ApiOverride;
use config::Config;
use error::Result;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        // コンソールの操作エラーはアラートで表示済み
        if !e.is_reported() {
            eprintln!("✖ {}", e);
        }
        std::process::exit(1);
    }
}

/// RUST_LOG があれば優先し、なければ -v で debug に上げる
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "catalog_admin=debug,catalog_admin_common=debug"
    } else {
        "warn"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt().with_env_filter(env_filter).with_writer(std::io::stderr).init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    let endpoint = ApiOverride {
        base_url: cli.base_url,
        api_path: cli.api_path,
    };

    match cli.command {
        Commands::Config { set_base_url, set_api_path, set_timeout, show } => {
            commands::configure(&mut config, set_base_url, set_api_path, set_timeout, show)?;
        }

        Commands::Login { username } => {
            println!("🔑 catalog-admin - ログイン\n");
            let mut console = commands::build_console(&config, &endpoint)?;
            commands::login(&mut console, username).await?;
            commands::list(&console);
        }

        Commands::Logout => {
            let mut console = commands::build_console(&config, &endpoint)?;
            commands::logout(&mut console).await?;
        }

        Commands::List => {
            let mut console = commands::build_console(&config, &endpoint)?;
            commands::require_session(&mut console).await?;
            commands::list(&console);
        }

        Commands::Show { id, image } => {
            let mut console = commands::build_console(&config, &endpoint)?;
            commands::require_session(&mut console).await?;
            commands::show(&mut console, &id, image)?;
        }

        Commands::Add => {
            let mut console = commands::build_console(&config, &endpoint)?;
            commands::require_session(&mut console).await?;
            commands::add(&mut console).await?;
            commands::list(&console);
        }

        Commands::Edit { id } => {
            let mut console = commands::build_console(&config, &endpoint)?;
            commands::require_session(&mut console).await?;
            commands::edit(&mut console, &id).await?;
            commands::list(&console);
        }

        Commands::Delete { id, yes } => {
            let mut console = commands::build_console(&config, &endpoint)?;
            commands::require_session(&mut console).await?;
            commands::delete(&mut console, &id, yes).await?;
        }

        Commands::Console => {
            println!("📦 catalog-admin - 管理画面\n");
            let mut console = commands::build_console(&config, &endpoint)?;
            commands::resume_or_login(&mut console).await?;
            commands::run_dashboard(&mut console).await?;
        }
    }

    Ok(())
}
