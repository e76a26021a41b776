use std::process;

fn main() {
    process::exit(ifjc_drv::run());
}
