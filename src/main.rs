use animal_store::{logging, StoreConfig};

fn main() {
    if let Err(e) = logging::init_tracing() {
        eprintln!("failed to initialise logging: {e:#}");
    }
    // Step failures are logged by the walkthrough and never change the exit status.
    let _report = animal_store::run(StoreConfig::default());
}
