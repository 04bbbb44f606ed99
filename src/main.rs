fn main() {
    fops::app::cli::run();
}
