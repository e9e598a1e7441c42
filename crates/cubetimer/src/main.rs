use cubetimer::app;
use cubetimer::AppConfig;
use cubetimer_engine::logging::{init_logging, LoggingConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    app::run(AppConfig::default())
}
