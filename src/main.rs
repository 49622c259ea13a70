//! rWorkday main entrypoint.

use rworkday::run;
use rworkday::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
