use anyhow::Result;
use mwsreport_core::{Context, OsEnv};
use mwsreport_http_send_reqwest::ReqwestHttpSend;
use mwsreport_reports::{AuthOptions, Config, ReportClient, ReportListOptions};
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for debugging
    let _ = env_logger::builder().is_test(true).try_init();

    let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::new(client))
        .with_env(OsEnv);

    // AP_MWS_ACCESS_KEY, AP_MWS_SECRET_KEY, AP_MERCHANT_ID, AP_REGION and
    // AP_CURRENCY_CODE fill whatever is left unset here.
    let config = Config {
        sandbox: true,
        application_name: Some("list-reports-example".to_string()),
        application_version: Some("0.1.0".to_string()),
        ..Default::default()
    };

    let reports = match ReportClient::new(ctx, config) {
        Ok(v) => v,
        Err(err) => {
            println!("Client configuration is incomplete: {err}");
            println!("Set the AP_* environment variables to run this example.");
            return Ok(());
        }
    };
    println!("Endpoint: {}", reports.endpoint());
    println!("User-Agent: {}", reports.user_agent());

    let resp = reports
        .get_report_list(ReportListOptions {
            acknowledged: Some(false),
            ..Default::default()
        })
        .await?;
    println!("GetReportList status: {}", resp.status());

    if let Some(err) = resp.error() {
        println!("MWS error {}: {}", err.code, err.message);
        return Ok(());
    }
    println!("{}", resp.body());

    // Report ids come from the GetReportList response.
    if let Ok(report_id) = std::env::var("MWSREPORT_REPORT_ID") {
        let resp = reports
            .get_report(report_id.as_str(), AuthOptions::default())
            .await?;
        println!("GetReport status: {}", resp.status());

        let resp = reports
            .update_report_acknowledgements(report_id.as_str(), Some(true), AuthOptions::default())
            .await?;
        println!("UpdateReportAcknowledgements status: {}", resp.status());
    }

    Ok(())
}
