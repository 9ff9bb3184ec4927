mod args;
mod cli;

fn main() {
    std::process::exit(cli::run());
}
