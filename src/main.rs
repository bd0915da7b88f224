use donaflow_rust::demo::run_demo;
use donaflow_rust::dona_core::FlowConfig;
use donaflow_rust::errors::DemoError;

#[tokio::main]
async fn main() -> Result<(), DemoError> {
    let config = FlowConfig::from_env();
    println!("return_url base: {}", config.return_url);

    let report = run_demo(config).await?;
    for line in &report.submits {
        println!("  {line}");
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
