use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match pokecard_lib::run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("pokecard failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
