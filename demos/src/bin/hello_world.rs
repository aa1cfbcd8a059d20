//! The smallest dear-hello application.
//!
//! Run with:
//!   cargo run -p dear-hello-demos --bin hello_world

#[path = "../support/logging.rs"]
mod logging;

fn main() {
    logging::init_tracing();

    let mut clicks = 0;
    let result = dear_hello::run_simple(
        move |ui| {
            ui.text("Hello, world!");
            if ui.button("Click me") {
                clicks += 1;
                tracing::info!("Clicked {clicks} times");
            }
            ui.text(format!("Clicks: {clicks}"));
        },
        [400, 200],
        "Hello World",
    );
    if let Err(e) = result {
        tracing::error!("hello_world failed: {e}");
        std::process::exit(1);
    }
}
