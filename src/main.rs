mod gpu;

fn main() {
    std::process::exit(gpu::run());
}
