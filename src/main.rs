mod app;
mod body;
mod config;
mod error;
mod init_config;
mod measurement;
mod physics;
mod simulation;
mod units;

fn main() {
    if let Err(err) = app::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
