fn main() {
    nextdeploy::app::cli::run();
}
