fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the wiring trainer application
    wiring_trainer::run_app()
}
