use fst_helpers::crash::{CrashConfig, CrashReporter};
use fst_helpers::json::JsonResponse;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();

    let dir = std::env::temp_dir().join("fst-helpers-demo");
    let reporter = CrashReporter::new(CrashConfig {
        directory: dir,
        ..Default::default()
    });

    let response = match std::fs::read_to_string("/does/not/exist.csv") {
        Ok(_) => JsonResponse::success("Import abgeschlossen"),
        Err(err) => match reporter.crash(&err, "import", "Kundenimport fehlgeschlagen") {
            Ok(path) => {
                println!("crash dump: {}", path.display());
                JsonResponse::fail("Import fehlgeschlagen")
            }
            Err(e) => {
                eprintln!("could not write crash dump: {e}");
                JsonResponse::fail("Import fehlgeschlagen")
            }
        },
    };

    match response.body() {
        Ok(body) => println!("HTTP {} {body}", response.status),
        Err(e) => eprintln!("could not serialize response: {e}"),
    }
}
