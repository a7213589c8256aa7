use rust_dmr_calc::cmdline;

fn main() -> std::io::Result<()> {
    pretty_env_logger::init();
    cmdline::run()
}
