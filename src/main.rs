//! trackese main entrypoint.

use trackese::run;
use trackese::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
