//! SAA screener entrypoint: offline-first, optional uplink. Renders the
//! questionnaire (interactive or `--answers 5,3,...`), classifies the response,
//! stores it locally, and reports to the tabular backend when enabled.

use saa_screener::{
    classifier::GaussianNb,
    config::ScreenerConfig,
    logging::StructuredLogger,
    model::ModelParams,
    report,
    storage::ResponseStore,
    survey::{self, Response},
    uplink::UplinkClient,
};
use tracing::{info, warn};

fn answers_arg() -> Option<String> {
    let mut args = std::env::args().skip(1);
    while let Some(a) = args.next() {
        if a == "--answers" {
            return args.next();
        }
        if let Some(v) = a.strip_prefix("--answers=") {
            return Some(v.to_string());
        }
    }
    None
}

fn collect_response() -> Result<Response, Box<dyn std::error::Error + Send + Sync>> {
    match answers_arg() {
        Some(raw) => survey::parse_answer_list(&raw).map_err(Into::into),
        None => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            Ok(survey::collect_interactive(&mut input, &mut output)?)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("SAA_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = ScreenerConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(data_dir = ?config.data_dir, "SAA screener starting");

    // Malformed parameters are fatal before any classification can run.
    let params = match &config.params_path {
        Some(p) => ModelParams::load(p)?,
        None => ModelParams::builtin(),
    };
    params.expect_dim(survey::ITEM_COUNT)?;
    let classifier = GaussianNb::new(params)?;

    let response = collect_response()?;
    let result = classifier.classify(&response.answers)?;

    report::render(&result, &mut std::io::stdout())?;
    info!(response_id = %response.id, label = %result.predicted, "response classified");

    // Persistence is best-effort from here on; the result above is final.
    std::fs::create_dir_all(&config.data_dir)?;
    let store_path = config.data_dir.join("responses.db");
    let secret = b"device-secret-placeholder"; // In production: from Secure Enclave / Keystore
    match ResponseStore::open(&store_path, secret) {
        Ok(store) => {
            let answers_json = serde_json::to_string(&response.answers)?;
            if let Err(e) = store.insert_response(
                &response.id,
                response.ts.timestamp_millis(),
                result.predicted.as_str(),
                &answers_json,
            ) {
                warn!(error = %e, "local store failed");
            }
        }
        Err(e) => warn!(error = %e, "local store unavailable"),
    }

    if config.uplink.enabled {
        match UplinkClient::new(config.uplink.clone()) {
            Some(u) => {
                let _ = u.submit(&response, &result);
            }
            None => warn!("uplink enabled but endpoint missing"),
        }
    }

    info!("screening complete");
    Ok(())
}
