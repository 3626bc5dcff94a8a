fn main() {
    stackup::app::cli::run();
}
