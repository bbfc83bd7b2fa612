fn main() {
    toolchain_config::app::cli::run();
}
