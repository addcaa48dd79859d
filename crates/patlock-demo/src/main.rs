#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = patlock_demo::run_from_env() {
        eprintln!("patlock-demo: {error}");
        std::process::exit(1);
    }
}
