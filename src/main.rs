fn main() {
    fedstack::app::cli::run();
}
