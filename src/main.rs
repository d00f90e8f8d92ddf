fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let db_path = std::env::args().nth(1);
    if let Err(e) = aa_questions::run(db_path.as_deref()) {
        log::error!("{} ({})", e, e.code());
        std::process::exit(1);
    }
}
