use clap::Parser;
use deploy_modules::utils::{logger, validation::Validate};
use deploy_modules::{
    factory_module, CliConfig, DeploymentEngine, DeploymentJournal, DryRunOrchestrator,
    ExecutionPlan, ManifestConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting deploy-modules CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let module = match &config.manifest {
        Some(path) => {
            tracing::info!("📁 Loading manifest from: {}", path);
            let manifest = match ManifestConfig::from_file(path) {
                Ok(manifest) => manifest,
                Err(e) => {
                    eprintln!("❌ Failed to load manifest '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            manifest.to_module()?
        }
        None => {
            tracing::info!("No manifest given, using the built-in FactoryModule");
            factory_module()
        }
    };

    if config.dry_run {
        let plan = ExecutionPlan::for_module(&module)?;
        println!("Plan for module '{}':", module.name);
        for (position, id) in plan.steps().iter().enumerate() {
            if let Some(request) = module.request(*id) {
                println!(
                    "  {}. {} ({} constructor arg(s))",
                    position + 1,
                    request.contract,
                    request.args.len()
                );
            }
        }
        return Ok(());
    }

    let engine = DeploymentEngine::new(DryRunOrchestrator::new());
    match engine.run(&module).await {
        Ok(outcome) => {
            for (name, contract) in &outcome.exports {
                println!("📦 {} = {} ({})", name, contract.address, contract.contract);
            }

            let journal = DeploymentJournal::new(config.output_path.clone());
            let journal_path = journal.record(&outcome)?;

            tracing::info!("✅ Deployment run completed");
            println!("✅ Deployment run completed");
            println!("📁 Journal saved to: {}", journal_path);
        }
        Err(e) => {
            tracing::error!("❌ Deployment run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
