use colored::Colorize;

fn main() {
    if let Err(e) = addon_validator::run() {
        eprintln!("{} {}", "error:".bright_red().bold(), e);
        std::process::exit(e.exit_code());
    }
}
