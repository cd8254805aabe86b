fn main() {
    std::process::exit(ordqueue::app::startup::run());
}
