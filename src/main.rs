use digital_wallet::{app, common::logging};

fn main() {
    logging::init_tracing();

    if let Err(e) = app::run(std::env::args()) {
        tracing::error!(error = %e, "wallet replay failed");
        std::process::exit(1);
    }
}
