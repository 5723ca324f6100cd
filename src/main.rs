fn main() {
    winsw_bundle::app::cli::run();
}
