use chrono::Local;
use log::LevelFilter;

pub fn setup_logging(level: LevelFilter) -> Result<(), fern::InitError> {
    // Lambda forwards stderr to CloudWatch
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}: {}",
                Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}
