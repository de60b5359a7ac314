use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    log_time_to_tempo::run().await
}
