// Terminal logger for the division and gcd traces.
// Only records from this crate are shown, tagged with their module
// (`unipoly::poly::div`, `unipoly::poly::parse`), on stderr.
pub fn init_simple_logger(l: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    use simplelog::*;

    let mut cb = simplelog::ConfigBuilder::new();
    cb.add_filter_allow_str(env!("CARGO_PKG_NAME"));
    cb.set_location_level(LevelFilter::Off);
    cb.set_target_level(LevelFilter::Error);
    cb.set_thread_level(LevelFilter::Off);
    cb.set_time_level(LevelFilter::Off);
    cb.set_level_color(Level::Debug, Some(Color::Cyan));
    cb.set_level_color(Level::Trace, Some(Color::Green));
    let config = cb.build();

    TermLogger::init(
        l,
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto
    )
}
